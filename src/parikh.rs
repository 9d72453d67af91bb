//! Parikh Vector (symbol frequency vector)
//!
//! Sparse map from symbol to signed count. A symbol that is not stored has
//! count zero, and an entry is dropped as soon as its count returns to zero,
//! so the number of stored entries is always the number of nonzero entries.
//!
//! Counts are signed because the sliding-window matcher keeps a single
//! vector holding `pattern - window`.

extern crate alloc;
use alloc::collections::BTreeMap;

/// Symbol -> signed occurrence count.
#[derive(Clone, Debug, Default)]
pub struct ParikhVector {
    counts: BTreeMap<u8, isize>,
}

impl ParikhVector {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Count every symbol of `symbols` in one pass.
    ///
    /// # Complexity
    /// - Time: O(|symbols| log σ)
    /// - Space: O(σ), σ = distinct symbols
    pub fn build(symbols: &[u8]) -> Self {
        let mut pv = Self::new();
        for &s in symbols {
            pv.increment(s);
        }
        pv
    }

    /// Multiset equality.
    ///
    /// Vectors with a different number of nonzero entries are rejected before
    /// any count is compared.
    pub fn equals(a: &Self, b: &Self) -> bool {
        if a.distinct() != b.distinct() {
            return false;
        }
        a.counts
            .iter()
            .all(|(symbol, &count)| b.get(*symbol) == count)
    }

    /// Count of `symbol` (zero when absent).
    #[inline(always)]
    pub fn get(&self, symbol: u8) -> isize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    #[inline]
    pub fn increment(&mut self, symbol: u8) {
        self.add(symbol, 1);
    }

    #[inline]
    pub fn decrement(&mut self, symbol: u8) {
        self.add(symbol, -1);
    }

    /// Add `delta` to the count of `symbol`, dropping the entry at zero.
    pub fn add(&mut self, symbol: u8, delta: isize) {
        if delta == 0 {
            return;
        }
        let count = self.counts.entry(symbol).or_insert(0);
        *count += delta;
        if *count == 0 {
            self.counts.remove(&symbol);
        }
    }

    /// Number of symbols with a nonzero count.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of absolute counts.
    pub fn l1_norm(&self) -> usize {
        self.counts.values().map(|c| c.unsigned_abs()).sum()
    }

    /// True when every count is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.counts.is_empty()
    }

    /// Nonzero entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, isize)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}

impl PartialEq for ParikhVector {
    fn eq(&self, other: &Self) -> bool {
        Self::equals(self, other)
    }
}

impl Eq for ParikhVector {}
