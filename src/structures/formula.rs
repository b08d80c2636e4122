/*!
A formula 𝐅 is a collection of [clauses](crate::structures::clause), interpreted as the conjunction of those clauses.

The formula holding the original clauses of a [context](crate::context) is fixed, and a solve works through a sequence of derived formulas, each obtained from the last by [assign](Formula::assign).
Two observations tie the sequence to satisfiability:
- A formula without clauses is satisfied, as every clause of the formula is satisfied.
- A formula containing an empty clause is conflicting, as no assignment satisfies the empty clause.

[assign](Formula::assign) is the single way a formula is revised, whether the assignment came from a unit clause, a pure literal, or a free decision, and each revision is weakly smaller than its source.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

use std::collections::BTreeSet;

use super::atom::Atom;

/// A conjunction of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The clauses of the formula, in the order added.
    clauses: Vec<CClause>,
}

impl From<Vec<CClause>> for Formula {
    fn from(clauses: Vec<CClause>) -> Self {
        Formula { clauses }
    }
}

impl Formula {
    /// Appends a clause to the formula.
    pub fn add_clause(&mut self, clause: CClause) {
        self.clauses.push(clause);
    }

    /// A count of the clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the clauses of the formula.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// True when the formula has no clauses, and so is satisfied.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// True when some clause of the formula is empty, and so the formula is conflicting.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// An iterator over the literals of unit clauses, in clause order.
    pub fn unit_clauses(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.clauses
            .iter()
            .filter(|clause| clause.len() == 1)
            .map(|clause| clause[0])
    }

    /// The distinct atoms of the formula, in ascending order.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.atoms())
            .collect()
    }

    /// True when every clause of the formula is satisfied on the given valuation.
    ///
    /// The valuation must hold an index for every atom of the formula.
    pub fn satisfied_on(&self, valuation: &impl crate::structures::valuation::Valuation) -> bool {
        self.clauses.iter().all(|clause| clause.satisfied_on(valuation))
    }

    /// The formula which results from assigning `value` to `atom`.
    ///
    /// - Clauses satisfied by the assignment are dropped.
    /// - Literals falsified by the assignment are dropped from their clause.
    /// - Every other clause carries over untouched.
    ///
    /// So, the returned formula has weakly fewer clauses than the source, and each clause is weakly shorter than its source.
    /// In particular, a clause whose sole literal is falsified carries over as an empty clause, to be caught as a conflict.
    ///
    /// ```rust
    /// # use minnow_sat::structures::formula::Formula;
    /// # use minnow_sat::structures::literal::{CLiteral, Literal};
    /// let p = CLiteral::new(0, true);
    /// let not_q = CLiteral::new(1, false);
    ///
    /// let formula = Formula::from(vec![vec![p], vec![p.negate(), not_q]]);
    ///
    /// let simplified = formula.assign(0, true);
    /// assert_eq!(simplified.clause_count(), 1);
    /// assert_eq!(simplified.unit_clauses().next(), Some(not_q));
    /// ```
    pub fn assign(&self, atom: Atom, value: bool) -> Self {
        let mut clauses = Vec::with_capacity(self.clauses.len());

        'clause_loop: for clause in &self.clauses {
            let mut reduced = Vec::with_capacity(clause.len());

            for literal in clause {
                if literal.atom() == atom {
                    if literal.polarity() == value {
                        log::trace!(target: targets::SIMPLIFICATION, "Clause satisfied: {}", clause.as_string());
                        continue 'clause_loop;
                    }
                    // A falsified literal, dropped from the clause.
                } else {
                    reduced.push(*literal);
                }
            }

            clauses.push(reduced);
        }

        Self { clauses }
    }
}
