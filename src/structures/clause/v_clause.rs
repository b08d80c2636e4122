//! Implementation of the clause trait for a vector of literals.

use crate::structures::{
    atom::Atom,
    clause::Clause,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

use std::ops::Deref;

use super::VClause;

impl Clause for VClause {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self.deref() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> super::CClause {
        self
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().any(|literal| {
            (unsafe { valuation.value_of_unchecked(literal.atom()) }) == Some(literal.polarity())
        })
    }
}
