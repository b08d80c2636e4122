//! Databases for structures relevant to a solve.

pub mod atom;
