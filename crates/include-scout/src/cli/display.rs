//! Common display utilities for CLI commands.

use std::io::Write as _;

use colored::Colorize;

/// Renders traversal progress as a percentage on one stderr line.
pub struct ProgressLine {
    label: &'static str,
    enabled: bool,
}

impl ProgressLine {
    /// Create a progress line; a disabled one prints nothing.
    pub fn new(label: &'static str, enabled: bool) -> Self {
        Self { label, enabled }
    }

    /// Report a fraction in `[0, 1]`.
    pub fn update(&self, fraction: f32) {
        if !self.enabled {
            return;
        }
        // Progress output is best effort; stderr write errors are ignored.
        let mut stderr = std::io::stderr().lock();
        let _ = write!(
            stderr,
            "\r{} {:>3.0}%",
            self.label.cyan().bold(),
            fraction.clamp(0.0, 1.0) * 100.0
        );
        if fraction >= 1.0 {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    }
}
