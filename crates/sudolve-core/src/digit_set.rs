//! A set of candidate digits for a single cell.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Digit;

/// A set of digits 1-9, stored as a bitset.
///
/// Bits 0-8 of a `u16` represent digits 1-9 respectively, so membership
/// tests and set operations are single machine instructions. The set is
/// used for candidate tracking: the digits that may still legally be
/// placed in a cell.
///
/// # Examples
///
/// ```
/// use sudolve_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
///
/// # Set operations
///
/// ```
/// use sudolve_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter(Digit::ALL[..4].iter().copied()));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

const FULL_BITS: u16 = 0b1_1111_1111;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all nine digits.
    pub const FULL: Self = Self(FULL_BITS);

    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    #[inline]
    pub fn insert(&mut self, digit: Digit) -> bool {
        let inserted = !self.contains(digit);
        self.0 |= Self::bit(digit);
        inserted
    }

    /// Removes a digit. Returns `true` if the digit was present.
    #[inline]
    pub fn remove(&mut self, digit: Digit) -> bool {
        let removed = self.contains(digit);
        self.0 &= !Self::bit(digit);
        removed
    }

    /// Returns `true` if the digit is in the set.
    #[inline]
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the single member of the set, or `None` if the set does
    /// not contain exactly one digit.
    ///
    /// This is the forced-placement test: a blank cell whose candidate
    /// set has a single member must hold that digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudolve_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_iter([Digit::D4]).as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Some(Digit::from_value(value))
        } else {
            None
        }
    }

    /// Returns the union of the two sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of the two sets.
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[inline]
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl Extend<Digit> for DigitSet {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Digit>,
    {
        for digit in iter {
            self.insert(digit);
        }
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    #[inline]
    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::from_value(self.0.trailing_zeros() as u8 + 1);
        self.0 &= self.0 - 1;
        Some(digit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use crate::Digit::*;

    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        assert!(set.insert(D1));
        assert!(!set.insert(D1));
        assert!(set.insert(D9));
        assert_eq!(set.len(), 2);
        assert!(set.remove(D1));
        assert!(!set.remove(D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        for digit in crate::Digit::ALL {
            assert_eq!(DigitSet::from_iter([digit]).as_single(), Some(digit));
        }
    }

    #[test]
    fn test_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b), DigitSet::from_iter([D1]));
        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, a.intersection(b));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);

        for digit in crate::Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_debug_format() {
        let set = DigitSet::from_iter([D2, D7]);
        assert_eq!(format!("{set:?}"), "{2, 7}");
    }
}
