//! Line-oriented output for validation progress.
//!
//! Provides a unified interface for emitting checklist lines in two modes:
//! - Human: full checklist with ✓/✗ markers, colored on a TTY
//! - Quiet: only failure lines are emitted
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::{Color, Colorize};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Full checklist output
    Human,
    /// Silent mode - only failures
    Quiet,
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    use_color: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let use_color = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            use_color,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            use_color: false, // Assume non-TTY for custom writers
        }
    }

    /// Force colors off regardless of TTY detection
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Output a stage header: "✓ {msg}" in bold
    pub fn stage(&self, msg: &str) {
        if self.mode == OutputMode::Quiet {
            return;
        }
        let line = format!("✓ {}", msg);
        if self.use_color {
            self.write_line(&line.bold().to_string());
        } else {
            self.write_line(&line);
        }
    }

    /// Output a passing item: "  ✓ {msg}" with a green marker
    pub fn pass(&self, msg: &str) {
        if self.mode == OutputMode::Quiet {
            return;
        }
        let marker = self.paint("✓", Color::Green);
        self.write_line(&format!("  {} {}", marker, msg));
    }

    /// Output a failing item: "  ✗ {msg}" with a red marker
    pub fn fail(&self, msg: &str) {
        // Failures always output, even in quiet mode
        let marker = self.paint("✗", Color::Red);
        self.write_line(&format!("  {} {}", marker, msg));
    }

    /// Output a final banner framed by rule lines
    pub fn banner(&self, msg: &str, color: Color) {
        if self.mode == OutputMode::Quiet && color != Color::Red {
            return;
        }
        let rule = "=".repeat(50);
        self.write_line(&rule);
        self.write_line(&self.paint(msg, color));
        self.write_line(&rule);
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            self.write_line(msg);
        }
    }

    /// Output an empty separator line
    pub fn blank(&self) {
        self.info("");
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Check if colored output is enabled
    pub fn use_color(&self) -> bool {
        self.use_color
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(OutputMode::Human)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Test-specific writer that wraps Arc<Mutex<Vec<u8>>>
    pub struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        pub fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.buffer.lock().unwrap().flush()
        }
    }

    pub fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }
}
