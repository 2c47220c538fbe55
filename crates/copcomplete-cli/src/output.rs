// Output formatting and styling

use colored::Colorize;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

impl OutputStyle {
    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }
}

/// Print an error to stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}

/// Print a status line to stderr
pub fn print_success(msg: &str) {
    eprintln!("{}", OutputStyle::default().success(msg));
}

/// Print a warning to stderr
pub fn print_warning(msg: &str) {
    eprintln!("{}", OutputStyle::default().warning(msg));
}
