use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use super::fixtures::{index_content, section_content, SECTIONS};

/// DocsHarness provides an isolated documentation tree in a temporary directory.
/// A fresh harness passes every structure check; the helper methods break it
/// in targeted ways.
pub struct DocsHarness {
    pub dir: TempDir,
    pub sections_dir: PathBuf,
    pub index_path: PathBuf,
    #[allow(dead_code)]
    pub sitecheck_binary: PathBuf,
}

impl DocsHarness {
    /// Creates a harness with:
    /// - index.md including all eight default sections
    /// - _sections/ with a valid file per section
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path();

        let sections_dir = base_path.join("_sections");
        let index_path = base_path.join("index.md");

        fs::create_dir_all(&sections_dir).expect("Failed to create sections dir");
        for name in SECTIONS {
            fs::write(sections_dir.join(name), section_content(name))
                .expect("Failed to write section");
        }
        fs::write(&index_path, index_content()).expect("Failed to write index");

        DocsHarness {
            dir: temp_dir,
            sections_dir,
            index_path,
            sitecheck_binary: PathBuf::from(env!("CARGO_BIN_EXE_sitecheck")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a section file.
    #[allow(dead_code)]
    pub fn section_path(&self, name: &str) -> PathBuf {
        self.sections_dir.join(name)
    }

    /// Overwrites a section file.
    #[allow(dead_code)]
    pub fn write_section(&self, name: &str, content: &str) {
        fs::write(self.section_path(name), content).expect("Failed to write section");
    }

    /// Deletes a section file.
    #[allow(dead_code)]
    pub fn remove_section(&self, name: &str) {
        fs::remove_file(self.section_path(name)).expect("Failed to remove section");
    }

    /// Deletes the index file.
    #[allow(dead_code)]
    pub fn remove_index(&self) {
        fs::remove_file(&self.index_path).expect("Failed to remove index");
    }

    /// Removes `needle` from the index file.
    #[allow(dead_code)]
    pub fn strip_from_index(&self, needle: &str) {
        let content = fs::read_to_string(&self.index_path).expect("Failed to read index");
        assert!(content.contains(needle), "index does not contain {:?}", needle);
        fs::write(&self.index_path, content.replace(needle, "")).expect("Failed to write index");
    }

    /// Writes a file relative to the base directory.
    #[allow(dead_code)]
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Executes the sitecheck binary against this tree.
    /// Runs from an unrelated working directory so only `--base-dir` can point at the tree.
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> std::process::Output {
        let cwd = TempDir::new().expect("Failed to create cwd dir");
        Command::new(&self.sitecheck_binary)
            .arg("--base-dir")
            .arg(self.path())
            .args(args)
            .current_dir(cwd.path())
            .env_remove("SITECHECK_BASE_DIR")
            .env_remove("SITECHECK_QUIET")
            .output()
            .expect("Failed to run sitecheck")
    }
}

impl Default for DocsHarness {
    fn default() -> Self {
        Self::new()
    }
}
