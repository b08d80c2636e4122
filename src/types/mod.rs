//! Assorted types used throughout the library.

pub mod err;
