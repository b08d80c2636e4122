/*!
A context holds a formula together with everything relevant to deciding its satisfiability.

The context is the intended interface to a solve.
Clauses are added to a context, the satisfiability of the conjunction of those clauses is determined by calling [solve](Context::solve), and the result is inspected through reports and the atom database.

```rust
# use minnow_sat::context::Context;
# use minnow_sat::config::Config;
# use minnow_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let a_clause = the_context.clause_from_string("p, ~q").unwrap();
assert!(the_context.add_clause(a_clause).is_ok());

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);
```

Details of a solve are stored in [counters](Counters), and a solve may be observed as it happens by setting a [trace callback](Context::set_callback_trace).
*/

mod callbacks;
pub mod counters;

pub use callbacks::CallbackTrace;
pub use counters::Counters;

use crate::{
    config::Config,
    db::atom::AtomDB,
    reports::Report,
    structures::{atom::Atom, formula::Formula},
};

/// A struct to pass around the things relevant to a solve.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The formula whose satisfiability the context determines, as a conjunction of added clauses.
    pub formula: Formula,

    /// The state of the context.
    pub state: ContextState,

    /// A callback to be called with each trace event of a solve.
    pub(crate) callback_trace: Option<Box<CallbackTrace>>,
}

/// The state of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// The context is accepting clauses.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

impl Context {
    /// A fresh context, using the given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            formula: Formula::default(),
            state: ContextState::Input,
            callback_trace: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// Some value of an atom on the valuation stored by the most recent solve, or otherwise nothing.
    ///
    /// In particular, after an unsatisfiable solve every atom is without a value, as the solve clears the stored valuation.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }
}
