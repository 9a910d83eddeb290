//! Boolean gates.
//!
//! Every gate folds known constants first and only introduces a new variable for the part of the
//! formula that is still unknown. The returned bit is constrained to be equivalent to the gate's
//! boolean function of its inputs.
use crate::bit::Bit;
use crate::context::Context;

impl Context {
    /// Conjunction of all `bits`, `true` for an empty slice.
    pub fn all(&mut self, bits: &[Bit]) -> Bit {
        if bits.iter().any(|bit| bit.is_constant_eq(false)) {
            return Bit::FALSE;
        }

        // Only `true` constants are left, they don't affect the result.
        let mut inputs: Vec<Bit> = bits
            .iter()
            .copied()
            .filter(|bit| !bit.is_constant())
            .collect();

        match inputs.len() {
            0 => Bit::TRUE,
            1 => inputs[0],
            _ => {
                let result = self.new_bit();
                for &bit in inputs.iter() {
                    self.assert_any(&[!result, bit]);
                }
                for bit in inputs.iter_mut() {
                    *bit = !*bit;
                }
                inputs.push(result);
                self.assert_any(&inputs);
                result
            }
        }
    }

    /// Disjunction of all `bits`, `false` for an empty slice.
    pub fn any(&mut self, bits: &[Bit]) -> Bit {
        let negated: Vec<Bit> = bits.iter().map(|&bit| !bit).collect();
        !self.all(&negated)
    }

    /// True iff none of the `bits` is true.
    pub fn none(&mut self, bits: &[Bit]) -> Bit {
        !self.any(bits)
    }

    pub fn and(&mut self, a: Bit, b: Bit) -> Bit {
        self.all(&[a, b])
    }

    pub fn or(&mut self, a: Bit, b: Bit) -> Bit {
        self.any(&[a, b])
    }

    /// Exclusive or, same as [`equals_not`](Context::equals_not).
    pub fn xor(&mut self, a: Bit, b: Bit) -> Bit {
        self.equals_not(a, b)
    }

    /// True iff `a` and `b` differ.
    pub fn equals_not(&mut self, a: Bit, b: Bit) -> Bit {
        match (a, b) {
            (Bit::Constant(value), other) | (other, Bit::Constant(value)) => {
                if value {
                    !other
                } else {
                    other
                }
            }
            _ => {
                let result = self.new_bit();
                self.assert_any(&[!a, b, result]);
                self.assert_any(&[a, !b, result]);
                self.assert_any(&[a, b, !result]);
                self.assert_any(&[!a, !b, !result]);
                result
            }
        }
    }

    /// True iff `a` and `b` are equal.
    pub fn equals(&mut self, a: Bit, b: Bit) -> Bit {
        !self.equals_not(a, b)
    }

    pub fn implies(&mut self, a: Bit, b: Bit) -> Bit {
        self.or(!a, b)
    }

    /// Multiplexer selecting `then_bit` when `cond` is true and `else_bit` otherwise.
    pub fn if_then_else(&mut self, cond: Bit, then_bit: Bit, else_bit: Bit) -> Bit {
        if let Bit::Constant(value) = cond {
            return if value { then_bit } else { else_bit };
        }
        if then_bit == else_bit {
            return then_bit;
        }
        match (then_bit, else_bit) {
            (Bit::Constant(true), Bit::Constant(false)) => cond,
            (Bit::Constant(false), Bit::Constant(true)) => !cond,
            _ => {
                let result = self.new_bit();
                self.assert_any(&[!cond, !then_bit, result]);
                self.assert_any(&[!cond, then_bit, !result]);
                self.assert_any(&[cond, !else_bit, result]);
                self.assert_any(&[cond, else_bit, !result]);
                result
            }
        }
    }
}
