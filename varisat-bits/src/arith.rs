//! Adder and multiplier circuits.
//!
//! Both operations are defined on the unsigned value of their operands. A result that does not
//! fit into the operand width is not truncated: the circuits assert that the overflowing bits are
//! false, so assignments that would overflow are infeasible.
use crate::bit::Bit;
use crate::bits::Bits;
use crate::context::Context;

impl Context {
    /// Sum and carry of two bits.
    pub fn half_adder(&mut self, a: Bit, b: Bit) -> (Bit, Bit) {
        (self.equals_not(a, b), self.and(a, b))
    }

    /// Sum and carry of three bits.
    pub fn full_adder(&mut self, a: Bit, b: Bit, c: Bit) -> (Bit, Bit) {
        let (partial_sum, carry_ab) = self.half_adder(a, b);
        let (sum, carry_c) = self.half_adder(partial_sum, c);
        (sum, self.or(carry_ab, carry_c))
    }

    /// Ripple-carry addition of equal width inputs, returning sum and carry out.
    fn ripple_add(&mut self, columns: &[(Bit, Bit)], mut carry: Bit) -> (Bits, Bit) {
        let mut sum = Bits::new();
        for &(a, b) in columns {
            let (sum_bit, carry_out) = self.full_adder(a, b, carry);
            sum.push(sum_bit);
            carry = carry_out;
        }
        (sum, carry)
    }

    /// Sum of `a` and `b`.
    ///
    /// The shorter operand is zero-extended. The result has the width of the longer operand and
    /// the final carry is asserted to be false.
    pub fn add(&mut self, a: &Bits, b: &Bits) -> Bits {
        let (a, b) = Bits::equalize(a, b);
        let columns: Vec<(Bit, Bit)> = a.iter().copied().zip(b.iter().copied()).collect();

        let (sum, carry) = self.ripple_add(&columns, Bit::FALSE);
        self.assert_any(&[!carry]);
        sum
    }

    /// Product of `a` and `b`.
    ///
    /// The shorter operand is zero-extended. Partial products are grouped by weight and reduced
    /// using full and half adders until each weight holds at most two bits, which are then summed
    /// by a final ripple-carry adder. The result has the width of the longer operand, all higher
    /// product bits are asserted to be false.
    pub fn multiply(&mut self, a: &Bits, b: &Bits) -> Bits {
        let (a, b) = Bits::equalize(a, b);
        let width = a.len();

        if width == 0 {
            return Bits::new();
        }

        let mut weights: Vec<Vec<Bit>> = vec![vec![]; width * 2 - 1];

        for (i, &a_bit) in a.iter().enumerate() {
            for (j, &b_bit) in b.iter().enumerate() {
                let product = self.and(a_bit, b_bit);
                weights[i + j].push(product);
            }
        }

        while weights.iter().any(|bucket| bucket.len() > 2) {
            self.reduce_weights(&mut weights);
        }

        let columns: Vec<(Bit, Bit)> = weights
            .iter()
            .map(|bucket| match bucket[..] {
                [] => (Bit::FALSE, Bit::FALSE),
                [x] => (x, Bit::FALSE),
                [x, y] => (x, y),
                _ => unreachable!("weight not reduced"),
            })
            .collect();

        let (full_product, carry) = self.ripple_add(&columns, Bit::FALSE);
        self.assert_any(&[!carry]);

        let mut product = Bits::new();
        for (index, &bit) in full_product.iter().enumerate() {
            if index < width {
                product.push(bit);
            } else {
                self.assert_any(&[!bit]);
            }
        }
        product
    }

    /// One reduction pass over all weights, from the most significant down.
    ///
    /// Each weight with two bits is replaced by their half adder sum, each weight with three or
    /// more bits has its last three replaced by their full adder sum. Carries move to the next
    /// weight.
    fn reduce_weights(&mut self, weights: &mut Vec<Vec<Bit>>) {
        for index in (0..weights.len()).rev() {
            let bucket_len = weights[index].len();
            let carry = match bucket_len {
                0 | 1 => continue,
                2 => {
                    let (sum, carry) = self.half_adder(weights[index][0], weights[index][1]);
                    weights[index].clear();
                    weights[index].push(sum);
                    carry
                }
                _ => {
                    let last = weights[index].split_off(bucket_len - 3);
                    let (sum, carry) = self.full_adder(last[2], last[1], last[0]);
                    weights[index].push(sum);
                    carry
                }
            };
            if index + 1 == weights.len() {
                weights.push(vec![]);
            }
            weights[index + 1].push(carry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::test::{fitting_factors, fitting_operands};

    #[test]
    fn full_adder_carry_scenario() {
        let mut ctx = Context::new();
        let a = ctx.new_bit();
        let b = ctx.new_bit();
        let c = ctx.new_bit();

        let (_, carry) = ctx.full_adder(a, b, c);
        let carry_set = ctx.equals(carry, Bit::TRUE);

        assert!(ctx.solve_with(carry_set).unwrap());

        let set_inputs = [a, b, c].iter().filter(|&&bit| ctx.value(bit)).count();
        assert!(set_inputs >= 2);
    }

    #[test]
    fn constant_addition_folds() {
        let mut ctx = Context::new();
        let sum = ctx.add(&Bits::constant(4, 5), &Bits::constant(3, 6));

        assert_eq!(sum, Bits::constant(4, 11));
        assert_eq!(ctx.stats().vars, 0);
        assert_eq!(ctx.stats().clauses, 0);
    }

    #[test]
    fn constant_overflow_is_unsat() {
        let mut ctx = Context::new();
        ctx.add(&Bits::constant(4, 9), &Bits::constant(4, 8));
        assert!(!ctx.solve().unwrap());

        let mut ctx = Context::new();
        ctx.multiply(&Bits::constant(4, 5), &Bits::constant(4, 4));
        assert!(!ctx.solve().unwrap());
    }

    #[test]
    fn empty_operands() {
        let mut ctx = Context::new();
        assert!(ctx.add(&Bits::new(), &Bits::new()).is_empty());
        assert!(ctx.multiply(&Bits::new(), &Bits::new()).is_empty());
    }

    #[test]
    fn sum_built_after_solve_has_no_value() {
        let mut ctx = Context::new();
        let a = ctx.new_bits(4);
        let b = ctx.new_bits(4);
        let a_fixed = ctx.bits_equal(&a, &Bits::constant(4, 3));
        let b_fixed = ctx.bits_equal(&b, &Bits::constant(4, 5));
        ctx.assert_all(&[a_fixed, b_fixed]);
        assert!(ctx.solve().unwrap());

        let sum = ctx.add(&a, &b);
        assert!(ctx.bits_have_value(&a));
        assert!(!ctx.bits_have_value(&sum));

        assert!(ctx.solve().unwrap());
        assert_eq!(ctx.value_nat(&sum), 8);
    }

    #[test]
    fn prime_has_no_factors() {
        let mut ctx = Context::new();
        let b1 = ctx.new_bits(6);
        let b2 = ctx.new_bits(6);

        let product = ctx.multiply(&b1, &b2);
        let product_ok = ctx.bits_equal(&product, &Bits::constant(6, 61));
        let b1_ok = ctx.greater_than(&b1, &Bits::constant(6, 1));
        let b2_ok = ctx.greater_than(&b2, &Bits::constant(6, 1));
        ctx.assert_all(&[product_ok, b1_ok, b2_ok]);

        assert!(!ctx.solve().unwrap());
    }

    proptest! {
        #[test]
        fn addition((width, m, n) in fitting_operands(1..9usize)) {
            let mut ctx = Context::new();
            let a = ctx.new_bits(width);
            let b = ctx.new_bits(width);
            let sum = ctx.add(&a, &b);

            let a_fixed = ctx.bits_equal(&a, &Bits::constant(width, m));
            let b_fixed = ctx.bits_equal(&b, &Bits::constant(width, n));
            ctx.assert_all(&[a_fixed, b_fixed]);

            prop_assert!(ctx.solve().unwrap());
            prop_assert_eq!(sum.len(), width);
            prop_assert_eq!(ctx.value_nat(&sum), m + n);
        }

        #[test]
        fn addition_overflow(
            width in 1..7usize,
            m in 0..64u64,
            n in 0..64u64
        ) {
            let m = m % (1 << width);
            let n = n % (1 << width);

            let mut ctx = Context::new();
            let a = ctx.new_bits(width);
            let b = ctx.new_bits(width);
            ctx.add(&a, &b);

            let a_fixed = ctx.bits_equal(&a, &Bits::constant(width, m));
            let b_fixed = ctx.bits_equal(&b, &Bits::constant(width, n));
            ctx.assert_all(&[a_fixed, b_fixed]);

            prop_assert_eq!(ctx.solve().unwrap(), m + n < 1 << width);
        }

        #[test]
        fn multiplication_overflow(
            width in 1..6usize,
            m in 0..64u64,
            n in 0..64u64
        ) {
            let m = m % (1 << width);
            let n = n % (1 << width);

            let mut ctx = Context::new();
            let a = ctx.new_bits(width);
            let b = ctx.new_bits(width);
            ctx.multiply(&a, &b);

            let a_fixed = ctx.bits_equal(&a, &Bits::constant(width, m));
            let b_fixed = ctx.bits_equal(&b, &Bits::constant(width, n));
            ctx.assert_all(&[a_fixed, b_fixed]);

            prop_assert_eq!(ctx.solve().unwrap(), m * n < 1 << width);
        }

        #[test]
        fn multiplication((width, m, n) in fitting_factors(1..9usize)) {
            let mut ctx = Context::new();
            let a = ctx.new_bits(width);
            let b = ctx.new_bits(width);
            let product = ctx.multiply(&a, &b);

            let a_fixed = ctx.bits_equal(&a, &Bits::constant(width, m));
            let b_fixed = ctx.bits_equal(&b, &Bits::constant(width, n));
            ctx.assert_all(&[a_fixed, b_fixed]);

            prop_assert!(ctx.solve().unwrap());
            prop_assert_eq!(product.len(), width);
            prop_assert_eq!(ctx.value_nat(&product), m * n);
        }

        #[test]
        fn mixed_width_constants(m in 0..256u64, n in 0..16u64) {
            let mut ctx = Context::new();
            let sum = ctx.add(&Bits::constant(9, m), &Bits::constant(4, n));
            let product = ctx.multiply(&Bits::constant(12, m), &Bits::constant(4, n));

            prop_assert!(ctx.solve().unwrap());
            prop_assert_eq!(ctx.value_nat(&sum), m + n);
            prop_assert_eq!(ctx.value_nat(&product), m * n);
        }
    }
}
