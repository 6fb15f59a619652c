//! Session settings read by the board operations but not owned by them.

/// Smallest allowed add-N multiplier.
pub const MULTIPLIER_MIN: u32 = 1;
/// Largest allowed add-N multiplier.
pub const MULTIPLIER_MAX: u32 = 1024;

/// User-facing session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Whether the summoning-sickness indicator is shown. Display only:
    /// sickness is tracked regardless of this toggle.
    pub show_summoning_sickness: bool,
    multiplier: u32,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            show_summoning_sickness: true,
            multiplier: MULTIPLIER_MIN,
        }
    }

    /// Multiplier applied to add-N operations, always in
    /// `[MULTIPLIER_MIN, MULTIPLIER_MAX]`.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Sets the multiplier, clamping out-of-range values into the legal
    /// range rather than rejecting them.
    pub fn set_multiplier(&mut self, value: i64) {
        self.multiplier = value.clamp(MULTIPLIER_MIN as i64, MULTIPLIER_MAX as i64) as u32;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses user-typed numeric text as a count. Text that fails to parse
/// is the neutral element 0, never an error.
pub fn parse_count(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.show_summoning_sickness);
        assert_eq!(settings.multiplier(), 1);
    }

    #[test]
    fn test_multiplier_clamps_to_range() {
        let mut settings = Settings::new();
        settings.set_multiplier(0);
        assert_eq!(settings.multiplier(), MULTIPLIER_MIN);
        settings.set_multiplier(-50);
        assert_eq!(settings.multiplier(), MULTIPLIER_MIN);
        settings.set_multiplier(4096);
        assert_eq!(settings.multiplier(), MULTIPLIER_MAX);
        settings.set_multiplier(8);
        assert_eq!(settings.multiplier(), 8);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count("  -3 "), -3);
        assert_eq!(parse_count("three"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("1.5"), 0);
    }
}
