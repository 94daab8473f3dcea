use crate::core::{AuditStatus, Severity};
use crate::scoring::ScoreBand;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use symbols if terminal supports Unicode
    Always, // Always use symbols
    Never,  // ASCII fallbacks only
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only, no colors
    pub fn plain() -> Self {
        Self::new(ColorMode::Never, EmojiMode::Never)
    }

    /// `--plain` wins over the environment.
    pub fn for_cli(plain: bool) -> Self {
        if plain {
            Self::plain()
        } else {
            Self::from_env()
        }
    }

    /// Push the color decision into `colored`'s global switch.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }

    pub fn status_marker(&self, status: AuditStatus) -> &'static str {
        let unicode = self.emoji.should_use_emoji();
        match (status, unicode) {
            (AuditStatus::Validated, true) => "✓",
            (AuditStatus::NotValidated, true) => "✗",
            (AuditStatus::NotChecked, true) => "○",
            (AuditStatus::Validated, false) => "[OK]",
            (AuditStatus::NotValidated, false) => "[FAIL]",
            (AuditStatus::NotChecked, false) => "[ ]",
        }
    }
}

pub fn paint_band(text: &str, band: ScoreBand) -> ColoredString {
    match band {
        ScoreBand::Good => text.green(),
        ScoreBand::Fair => text.yellow(),
        ScoreBand::Poor => text.red(),
    }
}

pub fn paint_severity(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Low => text.green(),
        Severity::Medium => text.yellow(),
        Severity::High => text.red(),
        Severity::Critical => text.red().bold(),
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_flag_disables_color_and_symbols() {
        let config = FormattingConfig::for_cli(true);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.emoji, EmojiMode::Never);
        assert!(!config.color.should_use_color());
    }

    #[test]
    fn test_plain_markers_are_ascii() {
        let config = FormattingConfig::plain();
        for status in AuditStatus::ALL {
            assert!(config.status_marker(status).is_ascii());
        }
    }
}
