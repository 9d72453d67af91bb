//! Baseline Matcher
//!
//! Rebuilds the Parikh vector of every window from scratch and compares it to
//! the pattern's. O(n·m). Used as the correctness oracle for the incremental
//! matchers; never on a hot path.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::MatchError;
use crate::matcher::check_input;
use crate::parikh::ParikhVector;

/// All abelian occurrences of `pattern` in `text`, ascending.
pub fn find(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
    if let Some(every) = check_input(pattern, text)? {
        return Ok(every);
    }

    let m = pattern.len();
    let target = ParikhVector::build(pattern);

    let matches = text
        .windows(m)
        .enumerate()
        .filter(|(_, window)| ParikhVector::equals(&target, &ParikhVector::build(window)))
        .map(|(i, _)| i)
        .collect();

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_simple() {
        assert_eq!(find(b"ab", b"bac"), Ok(vec![0]));
        assert_eq!(find(b"aab", b"abaaab"), Ok(vec![0, 1, 3]));
    }

    #[test]
    fn test_last_window_included() {
        // The window ending at the last symbol is a candidate too
        assert_eq!(find(b"ab", b"ccba"), Ok(vec![2]));
    }

    #[test]
    fn test_equal_lengths() {
        assert_eq!(find(b"listen", b"silent"), Ok(vec![0]));
        assert_eq!(find(b"listen", b"lister"), Ok(vec![]));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(find(b"xyz", b"abracadabra"), Ok(vec![]));
    }

    #[test]
    fn test_pattern_too_long() {
        assert_eq!(
            find(b"abcd", b"abc"),
            Err(MatchError::InvalidLength {
                pattern: 4,
                text: 3
            })
        );
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(find(b"", b"abc"), Ok(vec![0, 1, 2, 3]));
    }
}
