//! Single propositional values.
use std::{fmt, ops};

use varisat::Lit;

/// A single propositional value.
///
/// A bit is either a known constant or refers to a literal of the solver owned by a
/// [`Context`](crate::Context). Bits are cheap `Copy` handles; all gates producing new bits are
/// methods of the context.
///
/// Two bits are distinct values even if the clauses force them to be equal. Logical equality is
/// the [`equals`](crate::Context::equals) gate, not `==` on this type.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bit {
    /// A fixed truth value, never sent to the solver.
    Constant(bool),
    /// A solver literal, i.e. a variable or its negation.
    Literal(Lit),
}

impl Bit {
    /// The constant `true` bit.
    pub const TRUE: Bit = Bit::Constant(true);
    /// The constant `false` bit.
    pub const FALSE: Bit = Bit::Constant(false);

    /// Creates a constant bit.
    #[inline]
    pub fn constant(value: bool) -> Bit {
        Bit::Constant(value)
    }

    /// Whether this bit has a fixed value independent of any model.
    #[inline]
    pub fn is_constant(self) -> bool {
        match self {
            Bit::Constant(_) => true,
            Bit::Literal(_) => false,
        }
    }

    /// The fixed value of a constant bit.
    #[inline]
    pub fn constant_value(self) -> Option<bool> {
        match self {
            Bit::Constant(value) => Some(value),
            Bit::Literal(_) => None,
        }
    }

    /// Whether this is the constant `value`.
    #[inline]
    pub fn is_constant_eq(self, value: bool) -> bool {
        self.constant_value() == Some(value)
    }

    /// The solver literal of a non-constant bit.
    ///
    /// Panics when called on a constant.
    #[inline]
    pub fn literal(self) -> Lit {
        match self {
            Bit::Literal(lit) => lit,
            Bit::Constant(value) => panic!("literal of constant bit {} requested", value as u8),
        }
    }

    /// The negation of this bit.
    ///
    /// Constants are flipped, literals change polarity. This never allocates a variable.
    #[inline]
    pub fn negate(self) -> Bit {
        match self {
            Bit::Constant(value) => Bit::Constant(!value),
            Bit::Literal(lit) => Bit::Literal(!lit),
        }
    }
}

impl ops::Not for Bit {
    type Output = Bit;

    #[inline]
    fn not(self) -> Bit {
        self.negate()
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(value: bool) -> Bit {
        Bit::Constant(value)
    }
}

impl From<Lit> for Bit {
    #[inline]
    fn from(lit: Lit) -> Bit {
        Bit::Literal(lit)
    }
}

/// Constants as `0`/`1`, literals in the 1-based DIMACS CNF encoding.
impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bit::Constant(value) => write!(f, "{}", *value as u8),
            Bit::Literal(lit) => write!(f, "{}", lit),
        }
    }
}
