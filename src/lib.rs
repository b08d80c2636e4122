//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! minnow_sat is a library for determining the satisfiability of boolean formulas written in conjunctive normal form, using the DPLL procedure together with unit clause propagation and pure literal elimination.
//!
//! minnow_sat is developed to make the procedure easy to inspect, whether out of curiosity or to check an understanding of the way a solve goes.
//! Every part of a solve is deterministic, and a solve may be watched as it happens, either through [trace] events or through logs.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), and hold a formula together with the databases relevant to deciding its satisfiability.
//! Clauses may be added by [parsing strings](crate::builder) or programatically, the satisfiability of the conjunction of those clauses is determined by calling [solve](crate::context::Context::solve), and the valuation found by a satisfiable solve is kept in the [atom database](crate::db::atom).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [structures] to familiarise yourself with the elements of a solve and their representation (formulas, clauses, etc.)
//! - The [configuration](crate::config) to see which parts of the procedure may be switched off.
//!
//! # Examples
//!
//! + Build a formula from strings, solve, and read the model found.
//!
//! ```rust
//! # use minnow_sat::config::Config;
//! # use minnow_sat::context::Context;
//! # use minnow_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for clause in ["p", "~p, q"] {
//!     let the_clause = the_context.clause_from_string(clause).unwrap();
//!     assert!(the_context.add_clause(the_clause).is_ok());
//! }
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//!
//! let p = the_context.atom_db.atom_representation("p").unwrap();
//! assert_eq!(the_context.value_of(p), Some(true));
//! ```
//!
//! + Parse and solve a formula, one clause to a line.
//!
//! ```rust
//! # use minnow_sat::config::Config;
//! # use minnow_sat::context::Context;
//! # use minnow_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let cnf = "
//! p, q
//! ~p, q
//! p, ~q
//! ~p, ~q
//! ";
//!
//! assert!(the_context.read_cnf(cnf.as_bytes()).is_ok());
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Unsatisfiable);
//! ```
//!
//! + Solve, rule out part of the model found, and solve again.
//!
//! ```rust
//! # use minnow_sat::config::Config;
//! # use minnow_sat::context::Context;
//! # use minnow_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let a_clause = the_context.clause_from_string("p, q").unwrap();
//! the_context.add_clause(a_clause).unwrap();
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//!
//! // The model found sets p, so rule p out and ask again.
//! let a_clause = the_context.clause_from_string("~p").unwrap();
//! the_context.add_clause(a_clause).unwrap();
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.atom_db.valuation_string(), "p=F q=T");
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [propagation](crate::procedures::propagation) can be filtered with `RUST_LOG=propagation …` or,
//! - Logs of the choices made during a search with `RUST_LOG=search …`

#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
pub mod trace;
