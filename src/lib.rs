//! # Abelian Search
//!
//! **Abelian (Parikh vector) pattern matching**
//!
//! > "An anagram is a window with the right counts. Order is irrelevant."
//!
//! Finds every position where a length-m window of the text is a
//! rearrangement of the pattern.
//!
//! ## Algorithms
//!
//! | Algorithm | Time | Space | Exact |
//! |-----------|------|-------|-------|
//! | Naive | O(N × M) | O(σ) | yes |
//! | Sliding window | **O(N)** | O(σ) | yes |
//! | Fixed fingerprint | O(N) | O(1) | no |
//! | Reduced fingerprint (map / table) | O(N) | O(σ) | no |
//! | Difference fingerprint | O(N) | O(σ) | no |
//!
//! Fingerprint algorithms compare weighted sums instead of counts. Equal
//! counts imply equal sums, but not the other way round: they can report
//! false positives (see [`fingerprint`]).
//!
//! ## Example
//!
//! ```
//! use abelian_search::{find_abelian, Algorithm};
//!
//! let text = b"cbabcacab";
//!
//! // Every window that is a permutation of "abc"
//! let positions = find_abelian(b"abc", text, Algorithm::SlidingWindow).unwrap();
//! assert_eq!(positions, vec![0, 2, 3, 6]);
//!
//! // Pattern longer than text is an error
//! assert!(find_abelian(b"abcdefghij", text, Algorithm::Naive).is_err());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alphabet;
pub mod error;
pub mod fingerprint;
pub mod matcher;
pub mod naive;
pub mod parikh;
pub mod sliding;

pub use alphabet::{AlphabetMap, Fingerprint, SymbolWeights, WeightTable};
pub use error::MatchError;
pub use matcher::{AbelianMatcher, Algorithm, UnknownAlgorithm};
pub use parikh::ParikhVector;

use alloc::vec::Vec;

/// Version
pub const VERSION: &str = "0.1.0";

/// Every abelian occurrence of `pattern` in `text` with `algorithm`,
/// ascending.
pub fn find_abelian(
    pattern: &[u8],
    text: &[u8],
    algorithm: Algorithm,
) -> Result<Vec<usize>, MatchError> {
    AbelianMatcher::new(algorithm).locate_all(pattern, text)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    const MAX_TEXT: usize = 200;

    fn symbols(max: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(proptest::sample::select(b"abcd".to_vec()), 0..=max)
    }

    fn pattern_and_text() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
        symbols(MAX_TEXT).prop_flat_map(|text| {
            let n = text.len();
            (symbols(n.min(12)), Just(text))
        })
    }

    proptest! {
        #[test]
        fn sliding_window_agrees_with_naive((pattern, text) in pattern_and_text()) {
            let oracle = naive::find(&pattern, &text).unwrap();
            let fast = sliding::find(&pattern, &text).unwrap();
            prop_assert_eq!(oracle, fast);
        }

        #[test]
        fn match_iff_parikh_vectors_equal((pattern, text) in pattern_and_text()) {
            prop_assume!(!pattern.is_empty());
            let target = ParikhVector::build(&pattern);
            let found = sliding::find(&pattern, &text).unwrap();

            for (i, window) in text.windows(pattern.len()).enumerate() {
                let is_match = ParikhVector::build(window) == target;
                prop_assert_eq!(is_match, found.binary_search(&i).is_ok());
            }
        }

        #[test]
        fn indices_strictly_ascending((pattern, text) in pattern_and_text()) {
            for algorithm in Algorithm::ALL {
                let found = find_abelian(&pattern, &text, algorithm).unwrap();
                prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
                if let Some(&last) = found.last() {
                    prop_assert!(last <= text.len() - pattern.len());
                }
            }
        }

        #[test]
        fn equal_lengths_match_at_most_once(text in symbols(32)) {
            let mut shuffled = text.clone();
            shuffled.reverse();
            for algorithm in Algorithm::ALL {
                prop_assert_eq!(find_abelian(&shuffled, &text, algorithm).unwrap(), vec![0]);
            }

            let mut other = text.clone();
            if let Some(first) = other.first_mut() {
                *first = b'z';
                if text[0] != b'z' {
                    let found = find_abelian(&other, &text, Algorithm::SlidingWindow).unwrap();
                    prop_assert!(found.is_empty());
                }
            }
        }

        #[test]
        fn repeated_calls_identical((pattern, text) in pattern_and_text()) {
            for algorithm in Algorithm::ALL {
                let first = find_abelian(&pattern, &text, algorithm);
                let second = find_abelian(&pattern, &text, algorithm);
                prop_assert_eq!(first, second);
            }
        }

        #[test]
        fn fingerprints_never_miss_a_match((pattern, text) in pattern_and_text()) {
            let exact = sliding::find(&pattern, &text).unwrap();
            for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_exact()) {
                let approx = find_abelian(&pattern, &text, algorithm).unwrap();
                for i in &exact {
                    prop_assert!(approx.binary_search(i).is_ok(), "{} missed {}", algorithm, i);
                }
            }
        }

        #[test]
        fn difference_tracks_sums((pattern, text) in pattern_and_text()) {
            prop_assert_eq!(
                fingerprint::find_table(&pattern, &text),
                fingerprint::find_difference(&pattern, &text)
            );
        }
    }
}
