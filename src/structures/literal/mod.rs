//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical implementation of the literal trait is the [CLiteral] structure, made of an atom and a boolean.
//!
//! An example:
//!
//! ```rust
//! # use minnow_sat::structures::literal::CLiteral;
//! # use minnow_sat::structures::literal::Literal;
//! let atom = 79;
//! let polarity = true;
//! let literal = CLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert!(literal.atom().cmp(&79).is_eq());
//! assert!(literal.negate().polarity().cmp(&false).is_eq());
//!
//! assert!(literal.cmp(&CLiteral::new(79, !false)).is_eq());
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals should be ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow for straightforward use of literals as indices of maps, etc.
//!
//! In other solvers an integer is often used, with the sign of the integer indicating the value of the literal.
//! Here, the polarity is kept distinct from the atom so a literal may be read without decoding.

#[doc(hidden)]
mod c_literal;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its canonical form of an atom paired with a boolean.
    fn canonical(&self) -> CLiteral;
}

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}
