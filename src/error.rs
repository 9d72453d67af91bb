//! Match Errors
//!
//! Every failure is detected before or during a single scan and returned to
//! the caller. Nothing here is transient, so nothing is retried.

/// Errors reported by the abelian matchers and alphabet encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MatchError {
    /// The pattern has more symbols than the text, so no window exists.
    #[error("Pattern longer than text; pattern: {pattern}, text: {text}")]
    InvalidLength { pattern: usize, text: usize },

    /// The encoder in use has no weight for `symbol`.
    #[error("Symbol {symbol:#04x} has no weight in the current alphabet")]
    OutOfAlphabet { symbol: u8 },

    /// More distinct symbols than a fingerprint has bit positions.
    #[error("Alphabet has {distinct} distinct symbols; at most {max} can be weighted", max = crate::alphabet::MAX_SYMBOLS)]
    AlphabetTooLarge { distinct: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_invalid_length() {
        let err = MatchError::InvalidLength {
            pattern: 5,
            text: 3,
        };
        assert_eq!(err.to_string(), "Pattern longer than text; pattern: 5, text: 3");
    }

    #[test]
    fn test_display_out_of_alphabet() {
        let err = MatchError::OutOfAlphabet { symbol: b'A' };
        assert_eq!(
            err.to_string(),
            "Symbol 0x41 has no weight in the current alphabet"
        );
    }

    #[test]
    fn test_display_alphabet_too_large() {
        let err = MatchError::AlphabetTooLarge { distinct: 200 };
        assert_eq!(
            err.to_string(),
            "Alphabet has 200 distinct symbols; at most 128 can be weighted"
        );
    }
}
