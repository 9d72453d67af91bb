//! Alphabet Encoders
//!
//! Assign each symbol of an alphabet a distinct power of two, in ascending
//! symbol order: the first symbol weighs 1, the next 2, then 4, ...
//!
//! Two shapes:
//! - [`AlphabetMap`]: sorted symbols + parallel weights (binary search lookup)
//! - [`WeightTable`]: direct-index array keyed by ASCII ordinal
//!
//! Both are plain values built once per scan. Nothing is cached globally.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::MatchError;

/// Scalar standing in for a whole frequency vector.
///
/// All fingerprint arithmetic wraps modulo 2^128.
pub type Fingerprint = u128;

/// One bit position per symbol.
pub const MAX_SYMBOLS: usize = Fingerprint::BITS as usize;

/// Slots in a [`WeightTable`]: the ASCII range.
pub const TABLE_SIZE: usize = 128;

/// Marks a table slot with no assigned weight (-1 in two's complement).
/// Never a power of two, so never mistaken for a weight.
pub const SENTINEL: Fingerprint = Fingerprint::MAX;

/// The fixed alphabet: lowercase latin letters.
pub const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Symbol -> weight lookup shared by every fingerprint matcher.
pub trait SymbolWeights {
    /// Weight of `symbol`, or [`MatchError::OutOfAlphabet`].
    fn weight(&self, symbol: u8) -> Result<Fingerprint, MatchError>;

    /// Whether `symbol` carries a weight.
    fn contains(&self, symbol: u8) -> bool;

    /// Number of weighted symbols.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of weights over `symbols` (wrapping).
    fn fingerprint(&self, symbols: &[u8]) -> Result<Fingerprint, MatchError> {
        symbols
            .iter()
            .try_fold(0, |acc: Fingerprint, &s| Ok(acc.wrapping_add(self.weight(s)?)))
    }
}

/// Distinct symbols of `text`, ascending.
pub fn distinct_symbols(text: &[u8]) -> Vec<u8> {
    let mut seen = [false; 256];
    for &c in text {
        seen[c as usize] = true;
    }
    // Index order is byte order, so the result is already sorted
    (0..=u8::MAX).filter(|&c| seen[c as usize]).collect()
}

/// Sorted symbols with parallel power-of-two weights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphabetMap {
    symbols: Vec<u8>,
    weights: Vec<Fingerprint>,
}

impl AlphabetMap {
    /// Weights for `symbols`, assigned in ascending symbol order.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self, MatchError> {
        let mut symbols = symbols.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        Self::from_sorted(symbols)
    }

    /// `symbols` must be ascending and free of duplicates.
    fn from_sorted(symbols: Vec<u8>) -> Result<Self, MatchError> {
        if symbols.len() > MAX_SYMBOLS {
            return Err(MatchError::AlphabetTooLarge {
                distinct: symbols.len(),
            });
        }

        let weights = (0..symbols.len()).map(|i| (1 as Fingerprint) << i).collect();
        Ok(Self { symbols, weights })
    }

    /// The whole lowercase alphabet, independent of any input.
    pub fn fixed() -> Self {
        let weights = (0..LOWERCASE.len()).map(|i| (1 as Fingerprint) << i).collect();
        Self {
            symbols: LOWERCASE.to_vec(),
            weights,
        }
    }

    /// Only the symbols that occur in `text`.
    ///
    /// # Complexity
    /// O(n + σ log σ), once per scan.
    pub fn reduced(text: &[u8]) -> Result<Self, MatchError> {
        let alphabet = Self::from_sorted(distinct_symbols(text))?;
        log::debug!("reduced alphabet: {} symbols", alphabet.symbols.len());
        Ok(alphabet)
    }

    /// Weighted symbols, ascending.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}

impl SymbolWeights for AlphabetMap {
    #[inline(always)]
    fn weight(&self, symbol: u8) -> Result<Fingerprint, MatchError> {
        self.symbols
            .binary_search(&symbol)
            .map(|i| self.weights[i])
            .map_err(|_| MatchError::OutOfAlphabet { symbol })
    }

    fn contains(&self, symbol: u8) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }

    fn len(&self) -> usize {
        self.symbols.len()
    }
}

/// Direct-index weight table over the ASCII range.
///
/// Unassigned slots hold [`SENTINEL`]. Lookups of those slots are errors,
/// never a weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightTable {
    slots: [Fingerprint; TABLE_SIZE],
    len: usize,
}

impl WeightTable {
    /// Weights for `symbols` (ascending order), every other slot sentinel.
    ///
    /// Fails with `OutOfAlphabet` on a symbol outside the ASCII range.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self, MatchError> {
        let mut sorted = symbols.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        Self::from_sorted(&sorted)
    }

    /// `sorted` must be ascending and free of duplicates.
    fn from_sorted(sorted: &[u8]) -> Result<Self, MatchError> {
        let mut slots = [SENTINEL; TABLE_SIZE];
        let mut weight: Fingerprint = 1;
        for &symbol in sorted {
            let slot = slots
                .get_mut(symbol as usize)
                .ok_or(MatchError::OutOfAlphabet { symbol })?;
            *slot = weight;
            weight <<= 1;
        }

        Ok(Self {
            slots,
            len: sorted.len(),
        })
    }

    /// Table over the symbols that occur in `text`.
    pub fn reduced(text: &[u8]) -> Result<Self, MatchError> {
        let table = Self::from_sorted(&distinct_symbols(text))?;
        log::debug!("weight table: {} of {} slots assigned", table.len, TABLE_SIZE);
        Ok(table)
    }

    /// Weight stored at `ordinal`.
    #[inline(always)]
    pub fn weight_of(&self, ordinal: usize) -> Result<Fingerprint, MatchError> {
        match self.slots.get(ordinal) {
            Some(&w) if w != SENTINEL => Ok(w),
            // Ordinals past the table are not symbols we can name beyond u8
            _ => Err(MatchError::OutOfAlphabet {
                symbol: ordinal.min(u8::MAX as usize) as u8,
            }),
        }
    }
}

impl SymbolWeights for WeightTable {
    #[inline(always)]
    fn weight(&self, symbol: u8) -> Result<Fingerprint, MatchError> {
        self.weight_of(symbol as usize)
    }

    fn contains(&self, symbol: u8) -> bool {
        self.weight_of(symbol as usize).is_ok()
    }

    fn len(&self) -> usize {
        self.len
    }
}
