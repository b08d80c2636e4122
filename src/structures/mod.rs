//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//! Use of a trait or its canonical implementation within the library is situational.
//!
//! The exception is [formulas](formula), which have a single representation as the formula of a context is reworked clause by clause during a solve, and so is always owned.
//!
//! # (Boolean) values
//!
//! A (boolean) value is one of two things.
//! Typically the first of the pair is identified as [true] and the second as [false]. \
//! Polarities of [literals](literal) and values under a [valuation](valuation) range over the same pair.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
