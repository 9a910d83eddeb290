//! Cardinality constraints.
//!
//! Both constraints split on the first bit: either it is false and the bound applies to the
//! remaining bits, or it is true and the bound decreases by one. Results for a given bound and
//! suffix of the input are shared within one call, which keeps the number of gates at
//! `O(n · k)`.
use rustc_hash::FxHashMap;

use crate::bit::Bit;
use crate::context::Context;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Bound {
    AtMost,
    Exactly,
}

/// Per call cache of sub-results keyed by `(k, start)`.
type Memo = FxHashMap<(usize, usize), Bit>;

impl Context {
    /// True iff at most `k` of the `bits` are true.
    pub fn at_most(&mut self, k: usize, bits: &[Bit]) -> Bit {
        let mut memo = Memo::default();
        self.cardinality(Bound::AtMost, k, bits, 0, &mut memo)
    }

    /// True iff exactly `k` of the `bits` are true.
    pub fn exactly(&mut self, k: usize, bits: &[Bit]) -> Bit {
        let mut memo = Memo::default();
        self.cardinality(Bound::Exactly, k, bits, 0, &mut memo)
    }

    fn cardinality(
        &mut self,
        bound: Bound,
        k: usize,
        bits: &[Bit],
        start: usize,
        memo: &mut Memo,
    ) -> Bit {
        if let Some(&result) = memo.get(&(k, start)) {
            return result;
        }

        let rest = &bits[start..];

        let result = if k == 0 {
            self.none(rest)
        } else if k > rest.len() {
            match bound {
                Bound::AtMost => Bit::TRUE,
                Bound::Exactly => Bit::FALSE,
            }
        } else if bound == Bound::AtMost && k == rest.len() {
            Bit::TRUE
        } else {
            let first = rest[0];
            let without_first = self.cardinality(bound, k, bits, start + 1, memo);
            let with_first = self.cardinality(bound, k - 1, bits, start + 1, memo);
            let first_false = self.and(!first, without_first);
            let first_true = self.and(first, with_first);
            self.or(first_false, first_true)
        };

        memo.insert((k, start), result);
        result
    }
}
