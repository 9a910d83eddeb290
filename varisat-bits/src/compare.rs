//! Comparison of bit-vectors.
use crate::bit::Bit;
use crate::bits::Bits;
use crate::context::Context;

impl Context {
    /// Ordering of the unsigned values of `a` and `b` as a `(less_than, equal)` pair.
    ///
    /// Positions are processed from the most significant bit down. Operands of different width
    /// are zero-extended.
    fn compare(&mut self, a: &Bits, b: &Bits) -> (Bit, Bit) {
        let (a, b) = Bits::equalize(a, b);

        let mut less = Bit::FALSE;
        let mut equal = Bit::TRUE;

        for (&a_bit, &b_bit) in a.iter().zip(b.iter()).rev() {
            let less_here = self.all(&[equal, !a_bit, b_bit]);
            less = self.or(less, less_here);
            let same = self.equals(a_bit, b_bit);
            equal = self.and(equal, same);
        }

        (less, equal)
    }

    /// `a == b`
    pub fn bits_equal(&mut self, a: &Bits, b: &Bits) -> Bit {
        let (less, equal) = self.compare(a, b);
        self.and(!less, equal)
    }

    /// `a != b`
    pub fn bits_not_equal(&mut self, a: &Bits, b: &Bits) -> Bit {
        !self.bits_equal(a, b)
    }

    /// `a < b`
    pub fn less_than(&mut self, a: &Bits, b: &Bits) -> Bit {
        let (less, equal) = self.compare(a, b);
        self.and(less, !equal)
    }

    /// `a <= b`
    pub fn less_equal(&mut self, a: &Bits, b: &Bits) -> Bit {
        let (less, equal) = self.compare(a, b);
        self.or(less, equal)
    }

    /// `a >= b`
    pub fn greater_equal(&mut self, a: &Bits, b: &Bits) -> Bit {
        self.less_equal(b, a)
    }

    /// `a > b`
    pub fn greater_than(&mut self, a: &Bits, b: &Bits) -> Bit {
        self.less_than(b, a)
    }

    /// Conjunction over all bits of both `a` and `b`.
    ///
    /// This is not a bitwise operation, the result is a single bit.
    pub fn bits_all(&mut self, a: &Bits, b: &Bits) -> Bit {
        let mut both = a.clone();
        both.extend(b);
        self.all(&both)
    }

    /// Disjunction over all bits of both `a` and `b`.
    pub fn bits_any(&mut self, a: &Bits, b: &Bits) -> Bit {
        let mut both = a.clone();
        both.extend(b);
        self.any(&both)
    }
}
