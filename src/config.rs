use std::str::FromStr;

use crate::{AlignerError, DEFAULT_GAP_CHAR, DEFAULT_MAX_SEQUENCE_LEN};

#[derive(Debug, Clone)]
pub struct AlignerConfig {
    gap_char: char,
    max_sequence_len: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            gap_char: DEFAULT_GAP_CHAR,
            max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
        }
    }
}

impl AlignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character rendered for gap columns. Must be visible.
    pub fn with_gap_char(mut self, gap_char: char) -> Result<Self, AlignerError> {
        if gap_char.is_whitespace() || gap_char.is_control() {
            return Err(AlignerError::InvalidConfig(format!(
                "gap character must be printable, got {:?}",
                gap_char
            )));
        }
        self.gap_char = gap_char;
        Ok(self)
    }

    pub fn with_max_sequence_len(mut self, max_sequence_len: usize) -> Result<Self, AlignerError> {
        if max_sequence_len == 0 {
            return Err(AlignerError::InvalidConfig(
                "maximum sequence length must be at least 1".to_string(),
            ));
        }
        self.max_sequence_len = max_sequence_len;
        Ok(self)
    }

    pub fn gap_char(&self) -> char {
        self.gap_char
    }

    pub fn max_sequence_len(&self) -> usize {
        self.max_sequence_len
    }
}

/// Parses one user-supplied scoring weight.
pub fn parse_weight<S: FromStr>(name: &'static str, text: &str) -> Result<S, AlignerError> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| AlignerError::InvalidParameter {
        name,
        value: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AlignerConfig::new();
        assert_eq!(config.gap_char(), '-');
        assert_eq!(config.max_sequence_len(), DEFAULT_MAX_SEQUENCE_LEN);
    }

    #[test]
    fn setters_validate() {
        assert!(AlignerConfig::new().with_gap_char(' ').is_err());
        assert!(AlignerConfig::new().with_gap_char('\t').is_err());
        assert!(AlignerConfig::new().with_max_sequence_len(0).is_err());

        let config = AlignerConfig::new()
            .with_gap_char('.')
            .and_then(|c| c.with_max_sequence_len(10))
            .unwrap();
        assert_eq!(config.gap_char(), '.');
        assert_eq!(config.max_sequence_len(), 10);
    }

    #[test]
    fn weights_parse_with_surrounding_whitespace() {
        assert_eq!(parse_weight::<i64>("gap", " -2\n").unwrap(), -2);
        assert_eq!(parse_weight::<f64>("gap-open", "-3.5").unwrap(), -3.5);
    }

    #[test]
    fn malformed_weight_is_reported_by_name() {
        let err = parse_weight::<i64>("match", "one").unwrap_err();
        assert!(matches!(
            &err,
            AlignerError::InvalidParameter { name: "match", value } if value == "one"
        ));
        assert!(err.to_string().contains("match"));
        assert!(parse_weight::<i64>("mismatch", "1.5").is_err());
    }
}
