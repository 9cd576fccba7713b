//! Check stages, failure taxonomy and the validation report.
//!
//! A run is a sequence of [`CheckStage`]s. Each stage records one
//! [`CheckResult`] per item it looked at, and the first failing item ends
//! the run with a [`Failure`].

use std::fmt;

/// The five checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStage {
    /// Every required section file exists
    SectionsExist,
    /// The index file exists
    IndexExists,
    /// The index includes every section
    IndexComplete,
    /// Every section has enough content
    ContentLength,
    /// Every section has a heading
    Headings,
}

impl CheckStage {
    /// All stages in execution order
    pub const ALL: [CheckStage; 5] = [
        CheckStage::SectionsExist,
        CheckStage::IndexExists,
        CheckStage::IndexComplete,
        CheckStage::ContentLength,
        CheckStage::Headings,
    ];

    /// Header printed when the stage starts.
    pub fn header(self, index_file: &str) -> String {
        match self {
            Self::SectionsExist => "Checking section files...".to_string(),
            Self::IndexExists => "Checking main index file...".to_string(),
            Self::IndexComplete => format!("Verifying {} includes all sections...", index_file),
            Self::ContentLength => "Checking section file content...".to_string(),
            Self::Headings => "Checking Markdown headers...".to_string(),
        }
    }
}

impl fmt::Display for CheckStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectionsExist => write!(f, "section existence"),
            Self::IndexExists => write!(f, "index existence"),
            Self::IndexComplete => write!(f, "index completeness"),
            Self::ContentLength => write!(f, "content sufficiency"),
            Self::Headings => write!(f, "heading presence"),
        }
    }
}

/// Why a run failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingSectionFile,
    MissingIndexFile,
    MissingInclude,
    EmptyOrShortSection,
    MissingHeading,
    /// A file exists but could not be read as UTF-8 text
    UnreadableFile,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSectionFile => write!(f, "MissingSectionFile"),
            Self::MissingIndexFile => write!(f, "MissingIndexFile"),
            Self::MissingInclude => write!(f, "MissingInclude"),
            Self::EmptyOrShortSection => write!(f, "EmptyOrShortSection"),
            Self::MissingHeading => write!(f, "MissingHeading"),
            Self::UnreadableFile => write!(f, "UnreadableFile"),
        }
    }
}

/// Outcome of checking a single item within a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub stage: CheckStage,
    /// File the check looked at, e.g. `faq.md`
    pub item: String,
    pub passed: bool,
    /// Diagnostic line as printed
    pub message: String,
}

impl CheckResult {
    pub fn pass(stage: CheckStage, item: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage,
            item: item.into(),
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(stage: CheckStage, item: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage,
            item: item.into(),
            passed: false,
            message: message.into(),
        }
    }
}

/// The failure that ended a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub stage: CheckStage,
    pub item: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.item)
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Per-item results, in the order they were printed
    pub checks: Vec<CheckResult>,
    /// Stages that were started
    pub stages: Vec<CheckStage>,
    pub failure: Option<Failure>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if every stage ran and nothing failed
    pub fn passed(&self) -> bool {
        self.failure.is_none() && self.stages.len() == CheckStage::ALL.len()
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(|f| f.kind)
    }

    /// Last stage that was started
    pub fn last_stage(&self) -> Option<CheckStage> {
        self.stages.last().copied()
    }

    /// Returns the list of failed checks. Used in tests.
    pub fn failed_checks(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    /// Results recorded for a single stage
    pub fn stage_checks(&self, stage: CheckStage) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| c.stage == stage).collect()
    }

    /// Process exit code for automation: 0 on success, 1 on failure
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}
