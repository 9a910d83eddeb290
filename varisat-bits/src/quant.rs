//! Quantifiers and aggregate constraints over sequences.
use crate::bit::Bit;
use crate::bits::Bits;
use crate::context::Context;

impl Context {
    /// True iff `predicate` holds for every item.
    ///
    /// The predicate receives the context so it can build gates itself.
    pub fn forall<I, F>(&mut self, items: I, mut predicate: F) -> Bit
    where
        I: IntoIterator,
        F: FnMut(&mut Context, I::Item) -> Bit,
    {
        let bits: Vec<Bit> = items
            .into_iter()
            .map(|item| predicate(self, item))
            .collect();
        self.all(&bits)
    }

    /// True iff `predicate` holds for at least one item.
    pub fn exists<I, F>(&mut self, items: I, mut predicate: F) -> Bit
    where
        I: IntoIterator,
        F: FnMut(&mut Context, I::Item) -> Bit,
    {
        let bits: Vec<Bit> = items
            .into_iter()
            .map(|item| predicate(self, item))
            .collect();
        self.any(&bits)
    }

    /// True iff all numbers are equal.
    ///
    /// Panics on an empty slice.
    pub fn all_equal(&mut self, numbers: &[Bits]) -> Bit {
        let first = match numbers.first() {
            Some(first) => first,
            None => panic!("all_equal requires at least one number"),
        };
        self.forall(numbers, |ctx, number| ctx.bits_equal(number, first))
    }

    /// True iff all numbers are pairwise distinct.
    ///
    /// Uses one disequality per unordered pair.
    pub fn all_different(&mut self, numbers: &[Bits]) -> Bit {
        let mut distinct = vec![];
        for (index, a) in numbers.iter().enumerate() {
            for b in numbers[index + 1..].iter() {
                distinct.push(self.bits_not_equal(a, b));
            }
        }
        self.all(&distinct)
    }
}
