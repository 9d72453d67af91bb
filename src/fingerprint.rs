//! Fingerprint Matchers
//!
//! Replace the Parikh vector with one scalar: the sum of the weights of the
//! window's symbols, where every symbol weighs a distinct power of two.
//! Per shift: `a += w(incoming) - w(outgoing)`.
//!
//! **Known imprecision**: equal fingerprints do not imply equal multisets.
//! With `a = 1, b = 2, c = 4`, the windows `"aac"` and `"bbb"` both sum to 6,
//! because repeated symbols carry into higher bit positions. These matchers
//! report such windows as matches. Use [`crate::sliding`] for exact results.
//! Sums also wrap modulo 2^128, so with more than about 120 weighted symbols
//! two windows can collide through the wrap alone: two copies of the symbol
//! weighing 2^127 add up to 0.
//!
//! | Variant | Encoder | State |
//! |---------|---------|-------|
//! | [`find_fixed`] | fixed `a..=z` map | `a`, `b` |
//! | [`find_reduced`] | text-alphabet map | `a`, `b` |
//! | [`find_table`] | text-alphabet table | `a`, `b` |
//! | [`find_difference`] | text-alphabet table | `a - b` |

extern crate alloc;
use alloc::vec::Vec;

use crate::alphabet::{AlphabetMap, Fingerprint, SymbolWeights, WeightTable};
use crate::error::MatchError;
use crate::matcher::check_input;

/// Two accumulators: window sum `a` against pattern sum `b`.
pub fn scan_sums<W: SymbolWeights>(
    pattern: &[u8],
    text: &[u8],
    weights: &W,
) -> Result<Vec<usize>, MatchError> {
    if let Some(every) = check_input(pattern, text)? {
        return Ok(every);
    }
    let m = pattern.len();
    let b = weights.fingerprint(pattern)?;
    let mut a = weights.fingerprint(&text[..m])?;

    let mut matches = Vec::new();
    if a == b {
        matches.push(0);
    }

    for (left, right) in (m..text.len()).enumerate() {
        a = a
            .wrapping_add(weights.weight(text[right])?)
            .wrapping_sub(weights.weight(text[left])?);
        if a == b {
            matches.push(left + 1);
        }
    }
    Ok(matches)
}

/// One accumulator holding `a - b`.
///
/// Same results as [`scan_sums`] with one comparison against zero per shift.
pub fn scan_difference<W: SymbolWeights>(
    pattern: &[u8],
    text: &[u8],
    weights: &W,
) -> Result<Vec<usize>, MatchError> {
    if let Some(every) = check_input(pattern, text)? {
        return Ok(every);
    }
    let m = pattern.len();
    let mut difference: Fingerprint = weights
        .fingerprint(&text[..m])?
        .wrapping_sub(weights.fingerprint(pattern)?);

    let mut matches = Vec::new();
    if difference == 0 {
        matches.push(0);
    }

    for (left, right) in (m..text.len()).enumerate() {
        difference = difference
            .wrapping_add(weights.weight(text[right])?)
            .wrapping_sub(weights.weight(text[left])?);
        if difference == 0 {
            matches.push(left + 1);
        }
    }
    Ok(matches)
}

/// A pattern symbol missing from a text-derived alphabet can never match.
fn foreign_symbol<W: SymbolWeights>(pattern: &[u8], weights: &W) -> Option<u8> {
    pattern.iter().copied().find(|&c| !weights.contains(c))
}

/// Fixed lowercase alphabet, two accumulators.
///
/// Any symbol outside `a..=z`, in pattern or text, is `OutOfAlphabet`.
pub fn find_fixed(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
    if let Some(every) = check_input(pattern, text)? {
        return Ok(every);
    }
    scan_sums(pattern, text, &AlphabetMap::fixed())
}

/// Alphabet reduced to the symbols of `text`, map lookup, two accumulators.
pub fn find_reduced(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
    if let Some(every) = check_input(pattern, text)? {
        return Ok(every);
    }
    let weights = AlphabetMap::reduced(text)?;
    if let Some(c) = foreign_symbol(pattern, &weights) {
        log::debug!("pattern symbol {:#04x} absent from text", c);
        return Ok(Vec::new());
    }
    scan_sums(pattern, text, &weights)
}

/// Alphabet reduced to the symbols of `text`, table lookup, two accumulators.
pub fn find_table(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
    if let Some(every) = check_input(pattern, text)? {
        return Ok(every);
    }
    let weights = WeightTable::reduced(text)?;
    if let Some(c) = foreign_symbol(pattern, &weights) {
        log::debug!("pattern symbol {:#04x} absent from text", c);
        return Ok(Vec::new());
    }
    scan_sums(pattern, text, &weights)
}

/// Alphabet reduced to the symbols of `text`, table lookup, one accumulator.
pub fn find_difference(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
    if let Some(every) = check_input(pattern, text)? {
        return Ok(every);
    }
    let weights = WeightTable::reduced(text)?;
    if let Some(c) = foreign_symbol(pattern, &weights) {
        log::debug!("pattern symbol {:#04x} absent from text", c);
        return Ok(Vec::new());
    }
    scan_difference(pattern, text, &weights)
}
