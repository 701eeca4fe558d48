//! Bitboard implementation for fast occupancy queries

/// One bit per cell, row-major, packed into `u64` words.
/// Sized at construction so any board side up to `MAX_BOARD_SIZE` fits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: Box<[u64]>,
}

impl Bitboard {
    /// Create an empty bitboard holding `cells` bits
    pub fn new(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)].into_boxed_slice(),
        }
    }

    /// Set the bit at cell index `idx`
    #[inline]
    pub fn set(&mut self, idx: usize) {
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear the bit at cell index `idx`
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check the bit at cell index `idx`
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Iterate over cell indices set in either bitboard, ascending.
    /// Both boards must have been created for the same cell count.
    pub fn iter_union<'a>(&'a self, other: &'a Bitboard) -> BitIter<'a> {
        debug_assert_eq!(self.bits.len(), other.bits.len());
        BitIter::new(&self.bits, &other.bits)
    }
}

/// Iterator over the set bits of the union of two bitboards
pub struct BitIter<'a> {
    left: &'a [u64],
    right: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl<'a> BitIter<'a> {
    fn new(left: &'a [u64], right: &'a [u64]) -> Self {
        let mut iter = Self {
            left,
            right,
            word_idx: 0,
            current_word: 0,
        };
        iter.current_word = iter.word(0);
        iter
    }

    #[inline]
    fn word(&self, idx: usize) -> u64 {
        match (self.left.get(idx), self.right.get(idx)) {
            (Some(&l), Some(&r)) => l | r,
            _ => 0,
        }
    }
}

impl Iterator for BitIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.left.len() {
                return None;
            }
            self.current_word = self.word(self.word_idx);
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        // Clear the bit we just found
        self.current_word &= self.current_word - 1;
        Some(self.word_idx * 64 + bit_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new(361);
        assert_eq!(bb.count(), 0);
        bb.set(0);
        bb.set(64);
        bb.set(360);
        assert!(bb.get(0) && bb.get(64) && bb.get(360));
        assert!(!bb.get(1));
        assert_eq!(bb.count(), 3);
        bb.clear(64);
        assert!(!bb.get(64));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn test_last_cell_fits() {
        for cells in [64, 65, 361, 4096] {
            let mut bb = Bitboard::new(cells);
            bb.set(cells - 1);
            assert!(bb.get(cells - 1));
            assert_eq!(bb.count(), 1);
        }
    }

    #[test]
    fn test_iter_union_is_ascending() {
        let mut a = Bitboard::new(200);
        let mut b = Bitboard::new(200);
        a.set(130);
        a.set(3);
        b.set(70);
        b.set(3);
        let got: Vec<usize> = a.iter_union(&b).collect();
        assert_eq!(got, vec![3, 70, 130]);
        assert_eq!(b.iter_union(&b).collect::<Vec<_>>(), vec![3, 70]);
    }
}
