//! Sliding-Window Difference Matcher
//!
//! Keeps one Parikh vector holding `pattern - window` and a scalar
//! `difference` = sum of its absolute counts. A window is an abelian match
//! exactly when `difference == 0`.
//!
//! Each shift touches two entries. For each of them the update runs in three
//! separate steps: read the old count, decide whether the imbalance shrinks
//! or grows, then write the new count. The decision must see the count from
//! before the write.
//!
//! Complexity: O(m) to initialise, O(1) per shift, O(n) total.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::MatchError;
use crate::matcher::check_input;
use crate::parikh::ParikhVector;

/// Signed `pattern - window` counts plus their L1 norm.
#[derive(Clone, Debug)]
pub struct WindowBalance {
    excess: ParikhVector,
    difference: usize,
}

impl WindowBalance {
    /// Balance between `pattern` and the first window `window`.
    pub fn new(pattern: &[u8], window: &[u8]) -> Self {
        let mut excess = ParikhVector::build(pattern);
        for &c in window {
            excess.decrement(c);
        }
        let difference = excess.l1_norm();
        Self { excess, difference }
    }

    /// `symbol` leaves the window on the left.
    #[inline]
    pub fn remove(&mut self, symbol: u8) {
        // read
        let before = self.excess.get(symbol);
        // decide: the count moves towards zero only if it was negative
        if before < 0 {
            self.difference -= 1;
        } else {
            self.difference += 1;
        }
        // write
        self.excess.increment(symbol);
    }

    /// `symbol` enters the window on the right.
    #[inline]
    pub fn admit(&mut self, symbol: u8) {
        let before = self.excess.get(symbol);
        if before > 0 {
            self.difference -= 1;
        } else {
            self.difference += 1;
        }
        self.excess.decrement(symbol);
    }

    /// Sum of absolute `pattern - window` counts.
    #[inline]
    pub fn difference(&self) -> usize {
        self.difference
    }

    /// True when the window is an anagram of the pattern.
    #[inline(always)]
    pub fn is_balanced(&self) -> bool {
        self.difference == 0
    }

    pub fn excess(&self) -> &ParikhVector {
        &self.excess
    }
}

/// Lazy iterator over match positions.
///
/// Allocates only the Parikh vector; positions are produced one at a time.
pub struct SlidingMatches<'a> {
    text: &'a [u8],
    m: usize,
    left: usize,
    balance: WindowBalance,
    started: bool,
}

impl<'a> SlidingMatches<'a> {
    /// Position of the window the iterator currently looks at.
    #[inline]
    pub fn position(&self) -> usize {
        self.left
    }
}

impl<'a> Iterator for SlidingMatches<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.text.len();

        // Empty pattern: every position 0..=n is a match
        if self.m == 0 {
            if self.left > n {
                return None;
            }
            self.left += 1;
            return Some(self.left - 1);
        }

        if !self.started {
            self.started = true;
            if self.balance.is_balanced() {
                return Some(0);
            }
        }

        while self.left + self.m < n {
            let outgoing = self.text[self.left];
            let incoming = self.text[self.left + self.m];
            self.balance.remove(outgoing);
            self.balance.admit(incoming);
            self.left += 1;

            if self.balance.is_balanced() {
                return Some(self.left);
            }
        }
        None
    }
}

/// Iterator over all abelian occurrences of `pattern` in `text`.
pub fn matches<'a>(pattern: &[u8], text: &'a [u8]) -> Result<SlidingMatches<'a>, MatchError> {
    if pattern.len() > text.len() {
        return Err(MatchError::InvalidLength {
            pattern: pattern.len(),
            text: text.len(),
        });
    }
    let m = pattern.len();
    Ok(SlidingMatches {
        text,
        m,
        left: 0,
        balance: WindowBalance::new(pattern, &text[..m]),
        started: false,
    })
}

/// All abelian occurrences of `pattern` in `text`, ascending.
pub fn find(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
    if let Some(every) = check_input(pattern, text)? {
        return Ok(every);
    }
    Ok(matches(pattern, text)?.collect())
}
