/*!
Trace events sent from a solve.

Events mirror the steps of the search a human would care to follow: entry to a node of the search tree, each forced assignment, each conflict, and each free decision.
Events are sent to the [trace callback](crate::context::CallbackTrace) of a context, if one is set, and have no influence on a solve.

Payloads are owned, with atoms in their external representation, so an event may be stored or printed without touching the context it came from.

# Example

```rust
# use minnow_sat::config::Config;
# use minnow_sat::context::Context;
let mut the_context = Context::from_config(Config::default());

let clause = the_context.clause_from_string("p").unwrap();
the_context.add_clause(clause).unwrap();

the_context.set_callback_trace(Box::new(|event| println!("c {event}")));
assert!(the_context.solve().is_ok());
```

Emission is through the [emit_trace] macro, which builds an event only after checking a callback is present.
*/

/// An event of interest during a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trace {
    /// Entry to a node of the search tree, with the assignment made so far and the clauses remaining.
    Node {
        /// The assignment, as valued atoms in name order.
        assignment: String,

        /// The remaining clauses.
        clauses: String,
    },

    /// A unit clause, with the forced value of its atom.
    Unit {
        /// The external representation of the atom.
        atom: String,

        /// The value forced by the unit clause.
        value: bool,
    },

    /// A pure literal, with the value satisfying every occurrence of its atom.
    Pure {
        /// The external representation of the atom.
        atom: String,

        /// The value agreeing with every occurrence.
        value: bool,
    },

    /// A unit clause whose forced value opposes the assignment.
    PropagationConflict {
        /// The external representation of the atom.
        atom: String,

        /// The value forced by the unit clause.
        value: bool,
    },

    /// An empty clause, closing the current branch.
    EmptyClause,

    /// A free decision to try a value for an atom.
    Branch {
        /// The external representation of the atom.
        atom: String,

        /// The value to try.
        value: bool,
    },
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tf = |value: &bool| match value {
            true => "T",
            false => "F",
        };
        match self {
            Self::Node {
                assignment,
                clauses,
            } => write!(f, "Assignment {{{assignment}}} with clauses {clauses}"),
            Self::Unit { atom, value } => write!(f, "Unit clause found: {atom}={}", tf(value)),
            Self::Pure { atom, value } => write!(f, "Pure literal found: {atom}={}", tf(value)),
            Self::PropagationConflict { atom, value } => {
                write!(f, "Conflict during unit propagation: {atom}={}", tf(value))
            }
            Self::EmptyClause => write!(f, "Conflict: empty clause found"),
            Self::Branch { atom, value } => write!(f, "Trying {atom} = {}", tf(value)),
        }
    }
}

/// Sends a trace event from a context, so long as a trace callback is set.
///
/// The event expression is only evaluated after the check, so an absent callback costs the check alone.
/// Two steps are taken as building the event may borrow the context, while calling the callback requires a mutable borrow.
macro_rules! emit_trace {
    ($ctx:expr, $event:expr) => {
        if $ctx.callback_trace.is_some() {
            let event = $event;
            if let Some(callback) = &mut $ctx.callback_trace {
                callback(event)
            }
        }
    };
}
pub(crate) use emit_trace;
