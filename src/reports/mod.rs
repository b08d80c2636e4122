/*!
Reports for the context.
*/

use serde::Serialize;

use crate::context::ContextState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

/// Display in lowercase, as written on the report line of the CLI.
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "satisfiable"),
            Self::Unsatisfiable => write!(f, "unsatisfiable"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
