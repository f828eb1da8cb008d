use std::fmt;

use crate::error::{LimitError, ParseError, Result};

/// Maximum length in bytes of an element name or body, or an attribute name
/// or value
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 1000;
/// Node stack capacity. The root, every open element and a pending attribute
/// all take a slot.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Which quote character delimits attribute values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `name="value"`
    #[default]
    Double,
    /// `name='value'`, as emitted by some devices
    Single,
}

impl QuoteStyle {
    pub const fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }
}

/// Configuration for parser limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum token length in bytes
    pub max_token_length: usize,
    /// Capacity of the node stack
    pub max_depth: usize,
    /// Attribute value quoting
    pub quote_style: QuoteStyle,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
            quote_style: QuoteStyle::default(),
        }
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParserConfig {{ max_token_length: {}, max_depth: {}, quote: {} }}",
            self.max_token_length,
            self.max_depth,
            self.quote_style.as_char()
        )
    }
}

impl ParserConfig {
    pub fn with_max_token_length(mut self, max: usize) -> Self {
        self.max_token_length = max;
        self
    }

    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    /// Both limits must leave room for at least one byte and the root.
    pub fn validate(&self) -> Result<()> {
        if self.max_token_length == 0 {
            return Err(ParseError::limit(LimitError::InvalidConfig(
                "max_token_length must be at least 1",
            )));
        }
        if self.max_depth == 0 {
            return Err(ParseError::limit(LimitError::InvalidConfig(
                "max_depth must be at least 1",
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.max_token_length, DEFAULT_MAX_TOKEN_LENGTH);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.quote_style, QuoteStyle::Double);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limits_rejected() {
        assert!(ParserConfig::default()
            .with_max_token_length(0)
            .validate()
            .is_err());
        assert!(ParserConfig::default().with_max_depth(0).validate().is_err());
    }

    #[test]
    fn test_display() {
        let config = ParserConfig::default().with_quote_style(QuoteStyle::Single);
        assert_eq!(
            config.to_string(),
            "ParserConfig { max_token_length: 1000, max_depth: 10, quote: ' }"
        );
    }
}
