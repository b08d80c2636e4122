/*!
Unit propagation, to a fixed point.

A unit clause contains a single literal, and any valuation satisfying the formula values that literal.
So, each unit clause is taken in turn, the literal of the clause is assigned, and the formula is simplified under the assignment.

Simplification may shrink further clauses to unit clauses, so propagation works in passes.
Each pass collects the unit clauses of the formula as it stands and processes the collection, until some pass finds none.
The collection of a pass is fixed when made, and every literal collected is processed, even if simplification during the pass has already removed the clause the literal was taken from.
(Processing such a literal repeats an assignment and simplifies against an atom the formula no longer mentions, both of which are no-ops.)

A conflict is found whenever a unit clause requires the opposite of a value already on the valuation, the assignment being made during the same pass or earlier.
Propagation stops at the first conflict found.

```rust
# use minnow_sat::context::Context;
# use minnow_sat::config::Config;
let mut the_context = Context::from_config(Config::default());

for clause in ["p", "~p, q"] {
    let the_clause = the_context.clause_from_string(clause).unwrap();
    the_context.add_clause(the_clause).unwrap();
}

let formula = the_context.formula.clone();
let mut valuation = vec![None; the_context.atom_db.count()];

let result = the_context.propagate_units(formula, &mut valuation);
assert!(result.is_ok_and(|formula| formula.is_empty()));
assert_eq!(valuation, vec![Some(true), Some(true)]);
```
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    trace::{emit_trace, Trace},
    types::err::PropagationError,
};

impl Context {
    /// Propagates the unit clauses of the given formula, to a fixed point.
    ///
    /// Assignments are recorded on the given valuation, and the simplified formula is returned.
    /// If a unit clause conflicts with the valuation the conflicting literal is returned as an error, and the valuation is left as it stood when the conflict was found.
    ///
    /// # Soundness
    /// The given valuation must hold an index for every atom of the formula.
    pub fn propagate_units(
        &mut self,
        mut formula: Formula,
        valuation: &mut CValuation,
    ) -> Result<Formula, PropagationError> {
        loop {
            let units: Vec<CLiteral> = formula.unit_clauses().collect();
            if units.is_empty() {
                break;
            }

            for literal in units {
                let (atom, value) = (literal.atom(), literal.polarity());

                match unsafe { valuation.value_of_unchecked(atom) } {
                    Some(present) if present != value => {
                        log::trace!(target: targets::PROPAGATION,
                            "Conflict on {}: the valuation has {present}",
                            self.atom_db.external_representation(atom)
                        );
                        return Err(PropagationError::Conflict(literal));
                    }

                    Some(_) => {}

                    None => {
                        valuation[atom as usize] = Some(value);
                        self.counters.total_propagations += 1;
                    }
                }

                log::trace!(target: targets::PROPAGATION,
                    "Unit clause found: {} = {value}",
                    self.atom_db.external_representation(atom)
                );
                emit_trace!(
                    self,
                    Trace::Unit {
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
