//! Matcher Front-End
//!
//! [`Algorithm`] names every matcher in the crate; [`AbelianMatcher`] is the
//! single entry point that validates input and dispatches to one of them.
//!
//! Every algorithm shares the same contract:
//! - pattern longer than text: [`MatchError::InvalidLength`]
//! - empty pattern: matches at every position `0..=n`
//! - otherwise: every left index whose window is an anagram of the pattern,
//!   ascending (fingerprint algorithms may add false positives)

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::MatchError;
use crate::{fingerprint, naive, sliding};

/// Shared precondition check.
///
/// `Ok(Some(_))` is the complete answer for the degenerate empty pattern,
/// `Ok(None)` means the caller should scan.
pub(crate) fn check_input(pattern: &[u8], text: &[u8]) -> Result<Option<Vec<usize>>, MatchError> {
    if pattern.len() > text.len() {
        return Err(MatchError::InvalidLength {
            pattern: pattern.len(),
            text: text.len(),
        });
    }
    if pattern.is_empty() {
        log::debug!("empty pattern matches all {} positions", text.len() + 1);
        return Ok(Some((0..=text.len()).collect()));
    }
    Ok(None)
}

/// Selectable matching algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Rebuild the Parikh vector per window. O(n·m), exact.
    Naive,
    /// Signed difference vector, O(1) per shift. Exact.
    #[default]
    SlidingWindow,
    /// Fingerprint over the fixed `a..=z` alphabet.
    FixedFingerprint,
    /// Fingerprint over the text's alphabet, map lookup.
    ReducedFingerprint,
    /// Fingerprint over the text's alphabet, table lookup.
    TableFingerprint,
    /// Table fingerprint tracking only `window - pattern`.
    DifferenceFingerprint,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Naive,
        Algorithm::SlidingWindow,
        Algorithm::FixedFingerprint,
        Algorithm::ReducedFingerprint,
        Algorithm::TableFingerprint,
        Algorithm::DifferenceFingerprint,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::SlidingWindow => "sliding-window",
            Algorithm::FixedFingerprint => "fixed-fingerprint",
            Algorithm::ReducedFingerprint => "reduced-fingerprint",
            Algorithm::TableFingerprint => "table-fingerprint",
            Algorithm::DifferenceFingerprint => "difference-fingerprint",
        }
    }

    /// Exact algorithms never report a false positive.
    pub fn is_exact(self) -> bool {
        matches!(self, Algorithm::Naive | Algorithm::SlidingWindow)
    }

    fn run(self, pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
        match self {
            Algorithm::Naive => naive::find(pattern, text),
            Algorithm::SlidingWindow => sliding::find(pattern, text),
            Algorithm::FixedFingerprint => fingerprint::find_fixed(pattern, text),
            Algorithm::ReducedFingerprint => fingerprint::find_reduced(pattern, text),
            Algorithm::TableFingerprint => fingerprint::find_table(pattern, text),
            Algorithm::DifferenceFingerprint => fingerprint::find_difference(pattern, text),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub alloc::string::String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.into()))
    }
}

/// Abelian pattern matcher bound to one algorithm.
///
/// Holds no per-scan state: every call builds and drops its own window and
/// encoder, so one matcher can be reused and shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbelianMatcher {
    algorithm: Algorithm,
}

impl AbelianMatcher {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Every abelian occurrence of `pattern` in `text`, ascending.
    ///
    /// # Example
    /// ```
    /// use abelian_search::{AbelianMatcher, Algorithm};
    ///
    /// let matcher = AbelianMatcher::new(Algorithm::SlidingWindow);
    /// assert_eq!(matcher.locate_all(b"ab", b"bac").unwrap(), vec![0]);
    /// ```
    pub fn locate_all(&self, pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
        let found = self.algorithm.run(pattern, text)?;
        log::debug!(
            "{}: {} matches (n = {}, m = {})",
            self.algorithm,
            found.len(),
            text.len(),
            pattern.len()
        );
        Ok(found)
    }

    /// Number of abelian occurrences.
    pub fn count(&self, pattern: &[u8], text: &[u8]) -> Result<usize, MatchError> {
        match self.algorithm {
            // Counting needs no result buffer
            Algorithm::SlidingWindow if !pattern.is_empty() => {
                Ok(sliding::matches(pattern, text)?.count())
            }
            _ => Ok(self.locate_all(pattern, text)?.len()),
        }
    }

    /// Whether at least one window is an anagram of `pattern`.
    pub fn contains(&self, pattern: &[u8], text: &[u8]) -> Result<bool, MatchError> {
        match self.algorithm {
            Algorithm::SlidingWindow => Ok(sliding::matches(pattern, text)?.next().is_some()),
            _ => Ok(!self.locate_all(pattern, text)?.is_empty()),
        }
    }
}
