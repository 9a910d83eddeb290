//! Unsigned bit-vectors.
use std::iter::FromIterator;
use std::{fmt, ops};

use crate::bit::Bit;
use crate::context::Context;

/// An unsigned binary number made of [`Bit`]s.
///
/// Index 0 holds the least significant bit, so the numeric value is `Σ bits[i] · 2^i`. There is
/// no sign bit. A `Bits` value can only grow by appending; operators producing new numbers never
/// modify their operands.
///
/// Dereferences to a slice of its bits, so `Bits` can be passed to the aggregate gates directly,
/// e.g. `ctx.all(&bits)`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    bits: Vec<Bit>,
}

impl Bits {
    /// An empty bit-vector.
    pub fn new() -> Bits {
        Bits::default()
    }

    /// Constant bits holding the binary little-endian encoding of `value`.
    ///
    /// Bits of `value` at positions `width` and above are dropped.
    pub fn constant(width: usize, value: u64) -> Bits {
        (0..width)
            .map(|index| Bit::Constant(index < 64 && (value >> index) & 1 != 0))
            .collect()
    }

    /// Append a single bit as new most significant bit.
    pub fn push(&mut self, bit: Bit) {
        self.bits.push(bit);
    }

    /// Bitwise negation.
    pub fn negate(&self) -> Bits {
        self.bits.iter().map(|&bit| !bit).collect()
    }

    /// A copy padded with constant `false` bits up to `width`.
    ///
    /// The numeric value is unchanged. Bit-vectors that are already wider are copied as is.
    pub fn zero_extended(&self, width: usize) -> Bits {
        let mut extended = self.clone();
        while extended.len() < width {
            extended.push(Bit::FALSE);
        }
        extended
    }

    /// Zero-extended copies of `a` and `b` with equal length.
    pub(crate) fn equalize(a: &Bits, b: &Bits) -> (Bits, Bits) {
        let width = a.len().max(b.len());
        (a.zero_extended(width), b.zero_extended(width))
    }

    /// The bits as a slice.
    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }
}

impl ops::Deref for Bits {
    type Target = [Bit];

    fn deref(&self) -> &[Bit] {
        &self.bits
    }
}

impl AsRef<[Bit]> for Bits {
    fn as_ref(&self) -> &[Bit] {
        &self.bits
    }
}

impl ops::Not for &Bits {
    type Output = Bits;

    fn not(self) -> Bits {
        self.negate()
    }
}

impl From<Vec<Bit>> for Bits {
    fn from(bits: Vec<Bit>) -> Bits {
        Bits { bits }
    }
}

impl From<Vec<bool>> for Bits {
    fn from(values: Vec<bool>) -> Bits {
        values.into_iter().map(Bit::from).collect()
    }
}

impl FromIterator<Bit> for Bits {
    fn from_iter<T: IntoIterator<Item = Bit>>(iter: T) -> Bits {
        Bits {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<Bit> for Bits {
    fn extend<T: IntoIterator<Item = Bit>>(&mut self, iter: T) {
        self.bits.extend(iter)
    }
}

impl<'a> Extend<&'a Bit> for Bits {
    fn extend<T: IntoIterator<Item = &'a Bit>>(&mut self, iter: T) {
        self.bits.extend(iter)
    }
}

impl<'a> IntoIterator for &'a Bits {
    type Item = &'a Bit;
    type IntoIter = std::slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl IntoIterator for Bits {
    type Item = Bit;
    type IntoIter = std::vec::IntoIter<Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.bits.iter()).finish()
    }
}

impl Context {
    /// A bit-vector of `width` fresh, unconstrained bits.
    pub fn new_bits(&mut self, width: usize) -> Bits {
        (0..width).map(|_| self.new_bit()).collect()
    }

    /// Whether every bit of `bits` has a known value.
    pub fn bits_have_value(&self, bits: &[Bit]) -> bool {
        bits.iter().all(|&bit| self.has_value(bit))
    }

    /// The values of all `bits`, least significant first.
    ///
    /// Panics if a bit has no value.
    pub fn bits_value(&self, bits: &[Bit]) -> Vec<bool> {
        bits.iter().map(|&bit| self.value(bit)).collect()
    }

    /// The natural number represented by `bits`.
    ///
    /// Panics if a bit has no value or if the number does not fit into an `u64`. Bits computed by
    /// gates built after the last solve have no value until the next solve.
    pub fn value_nat(&self, bits: &[Bit]) -> u64 {
        let mut value = 0;
        for (index, &bit) in bits.iter().enumerate() {
            if self.value(bit) {
                assert!(index < 64, "value of {:?} exceeds u64", bits);
                value |= 1 << index;
            }
        }
        value
    }

    /// Display adapter for a bit-vector.
    ///
    /// Renders as `[b0, b1, ...]` using the rendering of [`show`](Context::show) for each bit.
    pub fn show_bits<'a>(&'a self, bits: &'a [Bit]) -> ShowBits<'a> {
        ShowBits { ctx: self, bits }
    }
}

/// Display adapter returned by [`Context::show_bits`].
pub struct ShowBits<'a> {
    ctx: &'a Context,
    bits: &'a [Bit],
}

impl<'a> fmt::Display for ShowBits<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (index, &bit) in self.bits.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.ctx.show(bit))?;
        }
        write!(f, "]")
    }
}
