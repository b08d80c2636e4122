//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some of these are internally expected --- e.g. propagation errors are used to control the flow of a solve, with a conflict read as the current branch of the search being closed.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::literal::CLiteral;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Elimination(EliminationError),
    Parse(ParseError),
    Propagation(PropagationError),

    InvalidState,
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clear instance of an unsatisfiable clause.
    EmptyClause,

    /// Every available atom is in use.
    AtomsExhausted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors during pure literal elimination.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EliminationError {
    /// A pure literal whose atom already has the opposing value.
    ///
    /// As every assignment is followed by simplification of the formula, an assigned atom does not occur in the formula, and so is never pure.
    /// Still, the case is caught rather than assumed away.
    Conflict(CLiteral),
}

impl From<EliminationError> for ErrorKind {
    fn from(e: EliminationError) -> Self {
        ErrorKind::Elimination(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// A string which does not represent an atom, e.g. a string containing whitespace.
    Atom,

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during unit clause propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagationError {
    /// A unit clause whose atom already has the opposing value.
    /// This is expected from time to time, and closes the current branch of the search.
    Conflict(CLiteral),
}

impl From<PropagationError> for ErrorKind {
    fn from(e: PropagationError) -> Self {
        ErrorKind::Propagation(e)
    }
}
