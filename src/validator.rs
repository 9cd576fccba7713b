//! Structure validation of a documentation tree.
//!
//! [`StructureValidator`] runs the five checks of [`CheckStage::ALL`] in
//! order, printing a checklist line per item, and stops at the first item
//! that fails. Files are re-read by every stage that needs them.

use anyhow::Result;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::config::ValidatorConfig;
use crate::docs::{self, IndexFile, SectionFile};
use crate::output::Output;
use crate::ui::verdict_color;
use crate::validation::{CheckResult, CheckStage, Failure, FailureKind, ValidationReport};

/// Validates the section files and index page under a base directory.
pub struct StructureValidator {
    base_dir: PathBuf,
    config: ValidatorConfig,
    heading: Regex,
    out: Output,
}

impl StructureValidator {
    /// Build a validator for `base_dir`, printing to stdout.
    ///
    /// Fails if `config` does not pass [`ValidatorConfig::validate`].
    pub fn new(base_dir: &Path, config: ValidatorConfig) -> Result<Self> {
        config.validate()?;
        let heading = config.heading_regex()?;

        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            config,
            heading,
            out: Output::default(),
        })
    }

    /// Replace the output sink
    pub fn with_output(mut self, out: Output) -> Self {
        self.out = out;
        self
    }

    /// Run every check and return the verdict.
    pub fn validate(&self) -> bool {
        self.run().passed()
    }

    /// Run every check and return the full report.
    pub fn run(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.out.info("Testing Markdown content structure...");
        self.out.blank();

        for (i, stage) in CheckStage::ALL.into_iter().enumerate() {
            if i > 0 {
                self.out.blank();
            }
            self.out.stage(&stage.header(&self.config.index_file));
            report.stages.push(stage);

            if let Err(failure) = self.run_stage(stage, &mut report) {
                self.out.blank();
                self.out.banner(
                    &format!("✗ Structure check failed: {}", failure),
                    verdict_color(false),
                );
                report.failure = Some(failure);
                return report;
            }
        }

        self.out.blank();
        self.out.banner(
            "✓ All tests passed! Content structure is correct.",
            verdict_color(true),
        );
        report
    }

    fn run_stage(&self, stage: CheckStage, report: &mut ValidationReport) -> Result<(), Failure> {
        match stage {
            CheckStage::SectionsExist => self.check_sections_exist(report),
            CheckStage::IndexExists => self.check_index_exists(report),
            CheckStage::IndexComplete => self.check_index_complete(report),
            CheckStage::ContentLength => self.check_content_length(report),
            CheckStage::Headings => self.check_headings(report),
        }
    }

    fn sections(&self) -> impl Iterator<Item = SectionFile> + '_ {
        let dir = self.config.sections_path(&self.base_dir);
        self.config
            .required_sections
            .iter()
            .map(move |name| SectionFile::new(&dir, name.as_str()))
    }

    fn index(&self) -> IndexFile {
        IndexFile::new(&self.base_dir, self.config.index_file.as_str())
    }

    fn check_sections_exist(&self, report: &mut ValidationReport) -> Result<(), Failure> {
        let stage = CheckStage::SectionsExist;
        for section in self.sections() {
            if section.exists() {
                let message = format!("{} exists", section.name);
                self.record(report, CheckResult::pass(stage, &section.name, message));
            } else {
                let message = format!("{} is missing!", section.name);
                return self.reject(
                    report,
                    stage,
                    FailureKind::MissingSectionFile,
                    &section.name,
                    message,
                );
            }
        }
        Ok(())
    }

    fn check_index_exists(&self, report: &mut ValidationReport) -> Result<(), Failure> {
        let stage = CheckStage::IndexExists;
        let index = self.index();
        if index.exists() {
            let message = format!("{} exists", index.name);
            self.record(report, CheckResult::pass(stage, &index.name, message));
            Ok(())
        } else {
            let message = format!("{} is missing!", index.name);
            self.reject(
                report,
                stage,
                FailureKind::MissingIndexFile,
                &index.name,
                message,
            )
        }
    }

    fn check_index_complete(&self, report: &mut ValidationReport) -> Result<(), Failure> {
        let stage = CheckStage::IndexComplete;
        let index = self.index();
        let content = match index.read() {
            Ok(content) => content,
            Err(e) => {
                let message = format!("Cannot read {}: {}", index.name, e);
                return self.reject(
                    report,
                    stage,
                    FailureKind::UnreadableFile,
                    &index.name,
                    message,
                );
            }
        };

        for section in &self.config.required_sections {
            let directive = self.config.include_directive_for(section);
            if docs::includes(&content, &directive) {
                let message = format!("Includes {}", section);
                self.record(report, CheckResult::pass(stage, section, message));
            } else {
                let message = format!("Missing include for {}", section);
                return self.reject(report, stage, FailureKind::MissingInclude, section, message);
            }
        }
        Ok(())
    }

    fn check_content_length(&self, report: &mut ValidationReport) -> Result<(), Failure> {
        let stage = CheckStage::ContentLength;
        for section in self.sections() {
            let content = self.read_section(report, stage, &section)?;
            let len = docs::char_len(&content);
            if len > self.config.min_content_length {
                let message = format!("{} has content ({} characters)", section.name, len);
                self.record(report, CheckResult::pass(stage, &section.name, message));
            } else {
                let message = format!("{} appears to be empty or too short", section.name);
                return self.reject(
                    report,
                    stage,
                    FailureKind::EmptyOrShortSection,
                    &section.name,
                    message,
                );
            }
        }
        Ok(())
    }

    fn check_headings(&self, report: &mut ValidationReport) -> Result<(), Failure> {
        let stage = CheckStage::Headings;
        for section in self.sections() {
            let content = self.read_section(report, stage, &section)?;
            if docs::has_heading(&content, &self.heading) {
                let message = format!("{} has proper headers", section.name);
                self.record(report, CheckResult::pass(stage, &section.name, message));
            } else {
                let message = format!("{} missing headers", section.name);
                return self.reject(
                    report,
                    stage,
                    FailureKind::MissingHeading,
                    &section.name,
                    message,
                );
            }
        }
        Ok(())
    }

    fn read_section(
        &self,
        report: &mut ValidationReport,
        stage: CheckStage,
        section: &SectionFile,
    ) -> Result<String, Failure> {
        match section.read() {
            Ok(content) => Ok(content),
            Err(e) => {
                let message = format!("Cannot read {}: {}", section.name, e);
                self.record(report, CheckResult::fail(stage, &section.name, message));
                Err(Failure {
                    kind: FailureKind::UnreadableFile,
                    stage,
                    item: section.name.clone(),
                })
            }
        }
    }

    fn record(&self, report: &mut ValidationReport, result: CheckResult) {
        if result.passed {
            self.out.pass(&result.message);
        } else {
            self.out.fail(&result.message);
        }
        report.checks.push(result);
    }

    /// Record a failing item and produce the failure that ends the run.
    fn reject(
        &self,
        report: &mut ValidationReport,
        stage: CheckStage,
        kind: FailureKind,
        item: &str,
        message: String,
    ) -> Result<(), Failure> {
        self.record(report, CheckResult::fail(stage, item, message));
        Err(Failure {
            kind,
            stage,
            item: item.to_string(),
        })
    }
}
