//! Implementation of the clause trait for a (single) literal.

use crate::structures::{
    clause::Clause,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

impl Clause for CLiteral {
    fn as_string(&self) -> String {
        format!("{self}")
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = crate::structures::atom::Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> super::CClause {
        vec![self]
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        (unsafe { valuation.value_of_unchecked(self.atom()) }) == Some(self.polarity())
    }
}
