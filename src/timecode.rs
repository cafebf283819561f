use std::fmt;

use crate::error::{Result, QuoteGifError};

/// A clip endpoint kept as the literal integer components of a
/// colon-separated time string.
///
/// "00:01:30" stays `[0, 1, 30]` all the way to the encoder; the components
/// are never summed into a single seconds value, so what the user typed is
/// exactly what the clip tool receives.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSpec {
    parts: Vec<u32>,
}

impl TimeSpec {
    /// Parse a colon-separated specifier of one to three integer components
    /// (`SS`, `MM:SS`, or `HH:MM:SS`).
    pub fn parse(raw: &str) -> Result<Self> {
        let parts = raw
            .split(':')
            .map(|part| part.trim().parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| {
                QuoteGifError::Config(format!(
                    "Invalid time '{}'. Use HH:MM:SS, MM:SS, or seconds",
                    raw
                ))
            })?;

        if parts.len() > 3 {
            return Err(QuoteGifError::Config(format!(
                "Invalid time '{}'. Use HH:MM:SS, MM:SS, or seconds",
                raw
            )));
        }

        Ok(Self { parts })
    }

    /// Decompose a second offset into hour, minute, and second components.
    pub fn from_seconds(total: u32) -> Self {
        Self {
            parts: vec![total / 3600, (total % 3600) / 60, total % 60],
        }
    }

    pub fn parts(&self) -> &[u32] {
        &self.parts
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .parts
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .join(":");
        write!(f, "{}", rendered)
    }
}

/// Format a second offset for the confidence report (H:MM:SS).
pub fn format_offset(total: u32) -> String {
    format!(
        "{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_literal_components() {
        assert_eq!(TimeSpec::parse("00:01:30").unwrap().parts(), &[0, 1, 30]);
        assert_eq!(TimeSpec::parse("1:30").unwrap().parts(), &[1, 30]);
        assert_eq!(TimeSpec::parse("90").unwrap().parts(), &[90]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(TimeSpec::parse("").is_err());
        assert!(TimeSpec::parse("1:2:3:4").is_err());
        assert!(TimeSpec::parse("one:30").is_err());
        assert!(TimeSpec::parse("1::30").is_err());
    }

    #[test]
    fn test_display_joins_with_colons() {
        assert_eq!(TimeSpec::parse("00:01:30").unwrap().to_string(), "0:1:30");
        assert_eq!(TimeSpec::parse("90").unwrap().to_string(), "90");
    }

    #[test]
    fn test_from_seconds_decomposes() {
        assert_eq!(TimeSpec::from_seconds(0).parts(), &[0, 0, 0]);
        assert_eq!(TimeSpec::from_seconds(305).parts(), &[0, 5, 5]);
        assert_eq!(TimeSpec::from_seconds(3723).parts(), &[1, 2, 3]);
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0), "0:00:00");
        assert_eq!(format_offset(305), "0:05:05");
        assert_eq!(format_offset(3723), "1:02:03");
    }
}
