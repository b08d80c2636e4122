/*!
Determining the satisfiability of the formula in a context, via the DPLL procedure.

The procedure is a depth-first search over partial valuations.
At each node of the search:

- The formula is simplified by [unit propagation](crate::procedures::propagation) and [pure literal elimination](crate::procedures::pure), so long as the relevant switch is up.
- If no clause remains, the valuation built is a model of the formula, and the formula is satisfiable.
- If some empty clause remains, the valuation falsifies a clause of the formula, and the node is closed.
- Otherwise, some atom is chosen and valued, the formula is simplified under the assignment, and the search recurs.

Atoms are chosen by taking the first atom without a value in the name order of the atom database, and true is tried before false.
So, while the search is exhaustive, the model found for a satisfiable formula (and, for that matter, every detail of the search) is fixed by the clauses given.

Each branch of the search takes a copy of the valuation and of the simplified formula, and a closed branch is abandoned rather than unwound.

```rust
# use minnow_sat::context::Context;
# use minnow_sat::config::Config;
# use minnow_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

for clause in ["p, q", "~p, q", "p, ~q"] {
    let the_clause = the_context.clause_from_string(clause).unwrap();
    the_context.add_clause(the_clause).unwrap();
}

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.atom_db.valuation_string(), "p=T q=T");
```
*/

use crate::{
    context::{Context, ContextState},
    misc::log::targets,
    reports::Report,
    structures::{
        atom::Atom,
        formula::Formula,
        literal::Literal,
        valuation::{CValuation, Valuation},
    },
    trace::{emit_trace, Trace},
    types::err::{self, EliminationError, PropagationError},
};

/// Ok results of a search.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchOk {
    /// A valuation on which every clause of the formula is satisfied.
    Model(CValuation),

    /// Every branch of the search closed with some clause falsified.
    Conflict,
}

impl Context {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// On a satisfiable formula the model found is stored in the atom database, and on an unsatisfiable formula any stored model is cleared.
    /// The context takes [ContextState::Input] to be an invitation to solve, and any other state is an error.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::ErrorKind::InvalidState);
        }

        let this_total_time = std::time::Instant::now();
        self.state = ContextState::Solving;

        let order = self.atom_db.atoms_by_name();
        let formula = self.formula.clone();
        let valuation = vec![None; self.atom_db.count()];

        let result = self.search(formula, valuation, &order);

        self.counters.time = this_total_time.elapsed();

        match result {
            SearchOk::Model(valuation) => {
                self.atom_db.store_valuation(valuation);
                self.state = ContextState::Satisfiable;
            }

            SearchOk::Conflict => {
                self.atom_db.clear_valuation();
                self.state = ContextState::Unsatisfiable;
            }
        }

        Ok(self.report())
    }

    /// Searches for a model of the given formula extending the given valuation.
    ///
    /// The valuation and formula are those of the node, with the formula simplified under every assignment of the valuation.
    /// Branching follows `order`, which is fixed for the length of the search.
    ///
    /// # Soundness
    /// The given valuation must hold an index for every atom of the formula and of `order`.
    pub fn search(
        &mut self,
        formula: Formula,
        valuation: CValuation,
        order: &[Atom],
    ) -> SearchOk {
        log::trace!(target: targets::SEARCH, "Assignment {{{}}} with clauses {}",
            self.atom_db.assignment_string(&valuation),
            self.atom_db.formula_string(&formula)
        );
        emit_trace!(
            self,
            Trace::Node {
                assignment: self.atom_db.assignment_string(&valuation),
                clauses: self.atom_db.formula_string(&formula),
            }
        );

        let mut formula = formula;
        let mut valuation = valuation;

        if self.config.switches.unit_propagation {
            match self.propagate_units(formula, &mut valuation) {
                Ok(simplified) => formula = simplified,

                Err(PropagationError::Conflict(literal)) => {
                    self.counters.total_conflicts += 1;
                    emit_trace!(
                        self,
                        Trace::PropagationConflict {
                            atom: self
                                .atom_db
                                .external_representation(literal.atom())
                                .to_string(),
                            value: literal.polarity(),
                        }
                    );
                    return SearchOk::Conflict;
                }
            }
        }

        if self.config.switches.pure_literals {
            match self.eliminate_pure(formula, &mut valuation) {
                Ok(simplified) => formula = simplified,

                Err(EliminationError::Conflict(_)) => {
                    self.counters.total_conflicts += 1;
                    return SearchOk::Conflict;
                }
            }
        }

        if formula.is_empty() {
            return SearchOk::Model(valuation);
        }

        if formula.has_empty_clause() {
            self.counters.total_conflicts += 1;
            log::trace!(target: targets::SEARCH, "Conflict: empty clause found");
            emit_trace!(self, Trace::EmptyClause);
            return SearchOk::Conflict;
        }

        let choice = order
            .iter()
            .find(|atom| unsafe { valuation.value_of_unchecked(**atom) }.is_none());
        let Some(&atom) = choice else {
            // Every clause of a node mentions only unvalued atoms, so no clause survives here.
            return SearchOk::Model(valuation);
        };

        for value in [true, false] {
            self.counters.total_decisions += 1;
            log::trace!(target: targets::SEARCH, "Trying {} = {value}",
                self.atom_db.external_representation(atom)
            );
            emit_trace!(
                self,
                Trace::Branch {
                    atom: self.atom_db.external_representation(atom).to_string(),
                    value,
                }
            );

            let mut branch_valuation = valuation.clone();
            branch_valuation[atom as usize] = Some(value);
            let branch_formula = formula.assign(atom, value);

            if let SearchOk::Model(model) = self.search(branch_formula, branch_valuation, order) {
                return SearchOk::Model(model);
            }
        }

        SearchOk::Conflict
    }
}
