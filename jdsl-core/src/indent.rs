//! Indentation configuration for generated code.

use std::{fmt, str::FromStr};

/// Indentation unit appended once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the default for generated Java.
    pub const JAVA: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const WIDE: Self = Self::Spaces(4);

    /// The text of one indentation level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(width) => write!(f, "{width}"),
            Self::Tab => f.write_str("tab"),
        }
    }
}

/// Error returned when an indentation setting cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIndentError {
    #[error("indent width must be between 1 and 8 spaces, got {0}")]
    Width(u8),
    #[error("expected a space count or `tab`, got `{0}`")]
    Invalid(String),
}

impl FromStr for Indent {
    type Err = ParseIndentError;

    /// Accepts a space count (`"2"`, `"4"`) or `"tab"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tab") {
            return Ok(Self::Tab);
        }
        let width: u8 = s
            .parse()
            .map_err(|_| ParseIndentError::Invalid(s.to_string()))?;
        match width {
            1..=8 => Ok(Self::Spaces(width)),
            _ => Err(ParseIndentError::Width(width)),
        }
    }
}
