//! Core error types

use thiserror::Error;

/// Failure converting between numeric (av) and encoded (BV) video identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("BV id too short: {len} characters, need 12")]
    TooShort { len: usize },

    #[error("Invalid BV character {ch:?} at position {position}")]
    InvalidChar { position: usize, ch: char },

    #[error("av{aid} cannot be encoded as a BV id")]
    OutOfRange { aid: i64 },

    #[error("Invalid video id: {0}")]
    InvalidId(String),
}

/// Failure building mention control records.
#[derive(Debug, Error)]
pub enum MentionError {
    #[error("Mention at byte {byte_offset} does not start on a character boundary")]
    Unaligned { byte_offset: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_too_short() {
        let err = CodecError::TooShort { len: 4 };
        assert_eq!(err.to_string(), "BV id too short: 4 characters, need 12");
    }

    #[test]
    fn test_error_display_invalid_char() {
        let err = CodecError::InvalidChar { position: 11, ch: '0' };
        assert_eq!(err.to_string(), "Invalid BV character '0' at position 11");
    }

    #[test]
    fn test_error_display_out_of_range() {
        let err = CodecError::OutOfRange { aid: -1 };
        assert_eq!(err.to_string(), "av-1 cannot be encoded as a BV id");
    }

    #[test]
    fn test_error_display_unaligned() {
        let err = MentionError::Unaligned { byte_offset: 3 };
        assert_eq!(
            err.to_string(),
            "Mention at byte 3 does not start on a character boundary"
        );
    }
}
