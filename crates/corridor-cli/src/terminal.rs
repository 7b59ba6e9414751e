//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions, color detection, and the mapping from risk
//! bands, alert severities and hub status to colors.

use corridor_lib::{AccessStatus, RiskBand, Severity};

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bold reverse green for the focused-route badge.
    pub const TAG_ACTIVE: &str = "\x1b[1;7;32m";
    /// Bold reverse gray for the alternative-route badge.
    pub const TAG_ALTERNATIVE: &str = "\x1b[1;7;90m";
    /// Bold reverse red for critical alerts.
    pub const TAG_CRITICAL: &str = "\x1b[1;7;31m";
    /// Bold reverse yellow for warnings.
    pub const TAG_WARNING: &str = "\x1b[1;7;33m";

    /// Bright bold white for hub names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for weather readings.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for low risk and accessible hubs.
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for moderate risk and degraded hubs.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for high risk, critical hubs and restricted corridors.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_active: &'static str,
    pub tag_alternative: &'static str,
    pub tag_critical: &'static str,
    pub tag_warning: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_active: colors::TAG_ACTIVE,
            tag_alternative: colors::TAG_ALTERNATIVE,
            tag_critical: colors::TAG_CRITICAL,
            tag_warning: colors::TAG_WARNING,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_active: "",
            tag_alternative: "",
            tag_critical: "",
            tag_warning: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            orange: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Palette for this run: plain when the user disabled color, otherwise
    /// whatever the terminal supports.
    #[must_use]
    pub fn resolve(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::detect()
        }
    }

    pub fn for_risk(&self, band: RiskBand) -> &'static str {
        match band {
            RiskBand::Low => self.green,
            RiskBand::Moderate => self.orange,
            RiskBand::High => self.red,
        }
    }

    pub fn for_access(&self, status: AccessStatus) -> &'static str {
        match status {
            AccessStatus::Accessible => self.green,
            AccessStatus::Degraded => self.orange,
            AccessStatus::Critical => self.red,
        }
    }

    pub fn for_severity(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => self.tag_warning,
            Severity::Critical => self.tag_critical,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a number with thousand separators (commas).
///
/// # Examples
///
/// ```
/// # use corridor_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_separators() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(765), "765");
        assert_eq!(format_with_separators(1_234_567), "1,234,567");
    }

    #[test]
    fn test_color_palette_colored() {
        let p = ColorPalette::colored();
        assert!(!p.reset.is_empty());
        assert_eq!(p.for_risk(RiskBand::High), colors::RED);
        assert_eq!(p.for_access(AccessStatus::Degraded), colors::ORANGE);
        assert_eq!(p.for_severity(Severity::Critical), colors::TAG_CRITICAL);
    }

    #[test]
    fn test_color_palette_plain() {
        let p = ColorPalette::resolve(true);
        assert!(p.reset.is_empty());
        assert!(p.for_risk(RiskBand::Low).is_empty());
        assert!(p.tag_active.is_empty());
    }

    // Environment variables are process-global, so tests modifying them are
    // serialised through this mutex.
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    mod supports_color_tests {
        use super::*;
        use std::env;

        fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
        where
            F: FnOnce() -> R,
        {
            let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

            let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();

            for (key, value) in vars {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }

            let result = f();

            for (key, value) in saved {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }

            result
        }

        #[test]
        fn test_supports_color_no_color_set() {
            with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
                assert!(!supports_color(), "NO_COLOR=1 should disable colors");
            });
        }

        #[test]
        fn test_supports_color_term_dumb() {
            with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
                assert!(!supports_color(), "TERM=dumb should disable colors");
            });
        }

        #[test]
        fn test_supports_color_default() {
            with_env_vars(
                &[("NO_COLOR", None), ("TERM", Some("xterm-256color"))],
                || {
                    assert!(supports_color(), "Normal terminal should support colors");
                },
            );
        }
    }
}
