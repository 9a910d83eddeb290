//! Solver context owning all variables and clauses.
use std::{fmt, io};

use log::debug;
use thiserror::Error;

use varisat::config::SolverConfigUpdate;
use varisat::dimacs::write_dimacs;
use varisat::solver::SolverError;
use varisat::{CnfFormula, ExtendFormula, Lit, Solver, Var};

use crate::bit::Bit;

/// Possible errors reported by a [`Context`].
///
/// An unsatisfiable formula is not an error, it is reported as `Ok(false)` by
/// [`solve`](Context::solve).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Solver failed: {0}")]
    Solver(#[from] SolverError),
    #[error("Invalid solver configuration: {0}")]
    Config(String),
    #[error("Clause recording was not enabled for this context")]
    FormulaNotRecorded,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Size of the formula emitted so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of allocated variables.
    pub vars: usize,
    /// Number of clauses forwarded to the solver.
    pub clauses: usize,
    /// Total number of literals in forwarded clauses.
    pub literals: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "#variables: {}, #clauses: {}, #literals: {}",
            self.vars, self.clauses, self.literals
        )
    }
}

/// Owner of the solver and of every variable and clause created through it.
///
/// Clauses are only ever added. Each [`Bit`] that is not a constant refers to a variable of the
/// context that created it; mixing bits of different contexts is a logic error.
pub struct Context {
    solver: Solver<'static>,
    stats: Stats,
    /// Assignment of all variables allocated before the last successful solve.
    model: Option<Vec<bool>>,
    /// Copy of all emitted clauses, if recording is enabled.
    formula: Option<CnfFormula>,
    clause: Vec<Lit>,
}

impl Default for Context {
    fn default() -> Context {
        Context {
            solver: Solver::new(),
            stats: Stats::default(),
            model: None,
            formula: None,
            clause: vec![],
        }
    }
}

impl Context {
    /// Create a new context with an empty formula.
    pub fn new() -> Context {
        Context::default()
    }

    /// Update the configuration of the underlying solver.
    pub fn configure(&mut self, config_update: &SolverConfigUpdate) -> Result<(), Error> {
        self.solver
            .config(config_update)
            .map_err(|err| Error::Config(err.to_string()))
    }

    /// Keep a copy of every clause emitted from now on.
    ///
    /// Required for [`formula`](Context::formula) and [`write_dimacs`](Context::write_dimacs).
    /// Disabling discards the recorded clauses.
    pub fn record_formula(&mut self, enable: bool) {
        if !enable {
            self.formula = None;
        } else if self.formula.is_none() {
            let mut formula = CnfFormula::new();
            formula.set_var_count(self.stats.vars);
            self.formula = Some(formula);
        }
    }

    /// The recorded clauses, if recording is enabled.
    pub fn formula(&self) -> Option<&CnfFormula> {
        self.formula.as_ref()
    }

    /// Write the recorded clauses in DIMACS CNF format.
    pub fn write_dimacs(&self, target: &mut impl io::Write) -> Result<(), Error> {
        let formula = self.formula.as_ref().ok_or(Error::FormulaNotRecorded)?;
        write_dimacs(target, formula)?;
        Ok(())
    }

    /// Statistics of the emitted formula.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Allocate a fresh variable.
    pub fn new_var(&mut self) -> Var {
        let var = self.solver.new_var();
        self.stats.vars += 1;
        if let Some(formula) = &mut self.formula {
            formula.set_var_count(self.stats.vars);
        }
        var
    }

    /// Allocate a fresh variable and return its positive literal.
    pub fn new_lit(&mut self) -> Lit {
        self.new_var().positive()
    }

    /// A bit backed by a fresh, unconstrained variable.
    pub fn new_bit(&mut self) -> Bit {
        Bit::Literal(self.new_lit())
    }

    /// Assert that at least one of the given bits is true.
    ///
    /// Nothing is emitted when a bit is the constant `true`. Constant `false` bits are dropped
    /// from the clause, so a disjunction of only `false` constants makes the formula
    /// unsatisfiable.
    pub fn assert_any(&mut self, bits: &[Bit]) {
        if bits.iter().any(|bit| bit.is_constant_eq(true)) {
            return;
        }

        self.clause.clear();
        self.clause.extend(bits.iter().filter_map(|&bit| match bit {
            Bit::Literal(lit) => Some(lit),
            Bit::Constant(_) => None,
        }));

        self.stats.clauses += 1;
        self.stats.literals += self.clause.len();

        self.solver.add_clause(&self.clause);
        if let Some(formula) = &mut self.formula {
            formula.add_clause(&self.clause);
        }
    }

    /// Assert that every given bit is true, one unit clause per bit.
    pub fn assert_all(&mut self, bits: &[Bit]) {
        for &bit in bits {
            self.assert_any(&[bit]);
        }
    }

    /// Check the satisfiability of all asserted constraints.
    ///
    /// On success the model can be queried using [`value`](Context::value) and friends. It stays
    /// valid until the next call to `solve` or [`reset`](Context::reset).
    pub fn solve(&mut self) -> Result<bool, Error> {
        self.model = None;

        debug!("Solving formula with {}", self.stats);

        let sat = self.solver.solve()?;

        if sat {
            // Variables missing from the model are unconstrained, any value will do.
            let mut assignment = vec![false; self.stats.vars];
            if let Some(model) = self.solver.model() {
                for lit in model {
                    if let Some(value) = assignment.get_mut(lit.index()) {
                        *value = lit.is_positive();
                    }
                }
            }
            self.model = Some(assignment);
        }

        debug!(
            "Formula is {}",
            if sat { "satisfiable" } else { "unsatisfiable" }
        );

        Ok(sat)
    }

    /// Assert `bit` and check satisfiability.
    pub fn solve_with(&mut self, bit: Bit) -> Result<bool, Error> {
        self.assert_any(&[bit]);
        self.solve()
    }

    /// Forget the last model.
    ///
    /// Asserted clauses are kept.
    pub fn reset(&mut self) {
        self.model = None;
    }

    /// The value of `bit` if it is a constant or assigned by the current model.
    ///
    /// Gates built after a solve are not folded against the model, so their outputs have no value
    /// until the next solve.
    pub fn try_value(&self, bit: Bit) -> Option<bool> {
        match bit {
            Bit::Constant(value) => Some(value),
            Bit::Literal(lit) => self
                .model
                .as_ref()
                .and_then(|model| model.get(lit.index()))
                .map(|&value| value == lit.is_positive()),
        }
    }

    /// Whether `bit` has a known value.
    pub fn has_value(&self, bit: Bit) -> bool {
        self.try_value(bit).is_some()
    }

    /// Whether `bit` has the known value `value`.
    pub fn has_value_eq(&self, bit: Bit, value: bool) -> bool {
        self.try_value(bit) == Some(value)
    }

    /// The value of `bit`.
    ///
    /// Panics if `bit` is neither constant nor covered by the current model. This includes outputs
    /// of gates built after the last solve.
    pub fn value(&self, bit: Bit) -> bool {
        match self.try_value(bit) {
            Some(value) => value,
            None => panic!("bit {:?} has no value", bit),
        }
    }

    /// Display adapter for a bit.
    ///
    /// Renders `0` or `1` for bits with a known value and the DIMACS literal otherwise.
    pub fn show(&self, bit: Bit) -> ShowBit<'_> {
        ShowBit { ctx: self, bit }
    }
}

/// Display adapter returned by [`Context::show`].
pub struct ShowBit<'a> {
    ctx: &'a Context,
    bit: Bit,
}

impl<'a> fmt::Display for ShowBit<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.ctx.try_value(self.bit) {
            Some(value) => write!(f, "{}", value as u8),
            None => write!(f, "{}", self.bit.literal()),
        }
    }
}
