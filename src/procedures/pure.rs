/*!
Pure literal elimination.

An atom which occurs with only one polarity in a formula is pure, as is the literal it occurs in.
A pure literal may be assigned outright.
For, every clause containing the literal is satisfied by the assignment, and as the complement of the literal occurs in no clause, no clause shrinks.
(It follows that elimination never creates an empty clause.)

Pure atoms, and the values to give them, are fixed by a single scan of the formula.
The fix is safe across the batch: simplifying under one elimination only removes whole clauses, so any other atom of the batch either keeps its polarity or leaves the formula, and assigning an absent atom is harmless.
Atoms which occur only negatively are assigned first, then atoms which occur only positively, each batch in ascending atom order.

```rust
# use minnow_sat::context::Context;
# use minnow_sat::config::Config;
let mut the_context = Context::from_config(Config::default());

for clause in ["p, ~q", "~q, r", "r, p"] {
    let the_clause = the_context.clause_from_string(clause).unwrap();
    the_context.add_clause(the_clause).unwrap();
}

let formula = the_context.formula.clone();
let mut valuation = vec![None; the_context.atom_db.count()];

let result = the_context.eliminate_pure(formula, &mut valuation);
assert!(result.is_ok_and(|formula| formula.is_empty()));
assert_eq!(valuation, vec![Some(true), Some(false), Some(true)]);
```
*/

use std::collections::BTreeSet;

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::Clause,
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    trace::{emit_trace, Trace},
    types::err::EliminationError,
};

/// The pure atoms of the given clauses, as a pair of those occurring only negatively and those occurring only positively.
///
/// Each side of the pair is in ascending atom order.
pub fn pure_literals<'l>(
    clauses: impl Iterator<Item = impl Iterator<Item = &'l CLiteral>>,
) -> (Vec<Atom>, Vec<Atom>) {
    let mut occur_true: BTreeSet<Atom> = BTreeSet::new();
    let mut occur_false: BTreeSet<Atom> = BTreeSet::new();

    for clause in clauses {
        for literal in clause {
            match literal.polarity() {
                true => occur_true.insert(literal.atom()),
                false => occur_false.insert(literal.atom()),
            };
        }
    }

    let pure_false: Vec<_> = occur_false.difference(&occur_true).copied().collect();
    let pure_true: Vec<_> = occur_true.difference(&occur_false).copied().collect();

    (pure_false, pure_true)
}

impl Context {
    /// Assigns each pure literal of the given formula and simplifies the formula under the assignments.
    ///
    /// Assignments are recorded on the given valuation.
    /// Atoms already valued are left as they are, with a conflicting value returned as an error.
    ///
    /// # Soundness
    /// The given valuation must hold an index for every atom of the formula.
    pub fn eliminate_pure(
        &mut self,
        mut formula: Formula,
        valuation: &mut CValuation,
    ) -> Result<Formula, EliminationError> {
        let (pure_false, pure_true) =
            pure_literals(formula.clauses().map(|clause| clause.literals()));

        for (atoms, value) in [(pure_false, false), (pure_true, true)] {
            for atom in atoms {
                match unsafe { valuation.value_of_unchecked(atom) } {
                    Some(present) if present != value => {
                        log::trace!(target: targets::ELIMINATION,
                            "Conflict on {}: the valuation has {present}",
                            self.atom_db.external_representation(atom)
                        );
                        return Err(EliminationError::Conflict(CLiteral::new(atom, value)));
                    }

                    Some(_) => {}

                    None => {
                        valuation[atom as usize] = Some(value);
                        self.counters.total_eliminations += 1;
                    }
                }

                log::trace!(target: targets::ELIMINATION,
                    "Pure literal found: {} = {value}",
                    self.atom_db.external_representation(atom)
                );
                emit_trace!(
                    self,
                    Trace::Pure {
                        atom: self.atom_db.external_representation(atom).to_string(),
                        value,
                    }
                );

                formula = formula.assign(atom, value);
            }
        }

        Ok(formula)
    }
}
