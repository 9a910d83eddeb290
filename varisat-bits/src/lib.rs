//! Varisat-bits compiles boolean and fixed-width unsigned integer constraints into
//! [conjunctive normal form][cnf] for the [Varisat] SAT solver.
//!
//! Constraints are built from [`Bit`] and [`Bits`] values using the gates of a [`Context`]. Every
//! gate folds known constants and otherwise uses a [Tseitin encoding][tseitin], introducing one
//! fresh variable constrained to be equivalent to the gate's output.
//!
//! ```
//! use varisat_bits::{Bits, Context};
//!
//! let mut ctx = Context::new();
//! let a = ctx.new_bits(4);
//! let b = ctx.new_bits(4);
//!
//! let sum = ctx.add(&a, &b);
//! let sum_ok = ctx.bits_equal(&sum, &Bits::constant(4, 11));
//! let ordered = ctx.less_than(&a, &b);
//! ctx.assert_all(&[sum_ok, ordered]);
//!
//! assert!(ctx.solve().unwrap());
//! assert_eq!(ctx.value_nat(&a) + ctx.value_nat(&b), 11);
//! assert!(ctx.value_nat(&a) < ctx.value_nat(&b));
//! ```
//!
//! [cnf]: https://en.wikipedia.org/wiki/Conjunctive_normal_form
//! [Varisat]: https://jix.one/project/varisat/
//! [tseitin]: https://en.wikipedia.org/wiki/Tseytin_transformation

pub mod bit;
pub mod bits;
pub mod context;
pub mod puzzle;

mod arith;
mod card;
mod compare;
mod gate;
mod quant;


pub use bit::Bit;
pub use bits::{Bits, ShowBits};
pub use context::{Context, Error, ShowBit, Stats};

pub use varisat::{Lit, Var};
