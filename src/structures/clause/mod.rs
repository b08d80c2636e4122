//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use minnow_sat::structures::literal::CLiteral;
//! # use minnow_sat::structures::literal::Literal;
//! # use minnow_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(23, true),
//!                   CLiteral::new(41, false),
//!                   CLiteral::new(3,  false),
//!                   CLiteral::new(15, true),
//!                   CLiteral::new(4,  false)];
//!
//! assert_eq!(clause.size(), 5);
//!
//! let mut some_valuation: Vec<Option<bool>> = vec![None; 42];
//!
//! assert!(!clause.satisfied_on(&some_valuation));
//!
//! some_valuation[3] = Some(false);
//! assert!(clause.satisfied_on(&some_valuation));
//! ```
//!
//! - The empty clause is always false (never true), and so witnesses a conflict.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

mod literal;
mod v_clause;

use crate::structures::{atom::Atom, literal::CLiteral, valuation::Valuation};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    /// The representation does not need to use the external representation of atoms within the clause.
    fn as_string(&self) -> String;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Returns true when some literal of the clause has the polarity of the literal as the value of its atom on the given valuation.
    ///
    /// An atom without a value never satisfies a literal, and so an empty clause is never satisfied.
    /// The valuation must hold an index for every atom of the clause.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;
