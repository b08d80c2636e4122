//! Procedures to determine the satisfiability of a formula, and the procedures these rest on.

pub mod propagation;
pub mod pure;
pub mod solve;
