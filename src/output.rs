//! # Terminal Output
//!
//! Helpers for the human-facing lines the CLI prints: status markers that
//! fall back to plain text when color is unavailable, and whether a
//! progress bar should be drawn.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

/// Output configuration for the CLI.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emoji markers should be used.
    pub use_color: bool,
    /// Whether stderr is an interactive terminal (progress bars go there).
    pub interactive: bool,
}

impl OutputConfig {
    /// Create an output configuration from the environment and the value of
    /// the `--color` flag (`always`, `never` or `auto`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self {
            use_color,
            interactive: console::Term::stderr().is_term(),
        }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// A configuration without color or terminal features.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            use_color: false,
            interactive: false,
        }
    }

    /// The marker to print in front of a line of the given status.
    pub fn marker(&self, status: Status) -> &'static str {
        if self.use_color {
            status.emoji()
        } else {
            status.plain()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Kinds of status lines printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Start,
    Info,
    Success,
    Warning,
    Failure,
}

impl Status {
    fn emoji(self) -> &'static str {
        match self {
            Status::Start => "📦",
            Status::Info => "📊",
            Status::Success => "✅",
            Status::Warning => "⚠️",
            Status::Failure => "❌",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Status::Start => "[EXPORT]",
            Status::Info => "[INFO]",
            Status::Success => "[OK]",
            Status::Warning => "[WARN]",
            Status::Failure => "[ERR]",
        }
    }
}
