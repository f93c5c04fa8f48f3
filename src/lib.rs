//! A library for deducing joint probabilities of boolean events from known probability statements.
//!
//! marten_prob answers questions of the form: given P(A) = 0.6, P(B) = 0.5, and P(A ∧ B) = 0.3,
//! what is P(A ∧ ¬B)?
//! It does so without any symbolic algebra, by closing a table of known values under two rules:
//!
//! - The *complement* rule: P(¬A) = 1 − P(A), for single-literal statements.
//! - The *partition* rule: the probability of a statement equals the sum of the probabilities of
//!   any family of refinements which tile it --- the 2^k polarity combinations of k added
//!   variables.
//!
//! Rules are applied across the *universe* of every internally consistent statement over the
//! variables of the context, until a full pass derives nothing new.
//! As the table only ever grows and the universe is finite, the loop always terminates.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built with a configuration, and problems are added either through the
//! [textual representation](crate::builder) of a problem or programatically.
//! Internally, a solve is viewed in terms of a handful of databases:
//! - The variables of the problem are stored in a [variable database](crate::db::variable).
//! - Every consistent conjunction of literals over those variables is stored, once, in a
//!   [universe database](crate::db::universe), along with the refinement relation and the
//!   partition groups the relation induces.
//! - Values, supplied or derived, are stored in a [known-value database](crate::db::known),
//!   addressed by universe index.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the elements of a problem (literals,
//!   statements, etc.)
//!
//! # Example
//!
//! ```rust
//! # use marten_prob::config::Config;
//! # use marten_prob::context::Context;
//! # use marten_prob::reports::Report;
//! let mut ctx = Context::from_config(Config::default());
//!
//! ctx.fresh_variable("A").unwrap();
//! ctx.fresh_variable("B").unwrap();
//!
//! let p_a = ctx.statement_from_string("A").unwrap();
//! let p_b = ctx.statement_from_string("B").unwrap();
//! let p_ab = ctx.statement_from_string("A & B").unwrap();
//! let query = ctx.statement_from_string("A & !B").unwrap();
//!
//! ctx.add_known(p_a, 0.6).unwrap();
//! ctx.add_known(p_b, 0.5).unwrap();
//! ctx.add_known(p_ab, 0.3).unwrap();
//! ctx.set_query(query).unwrap();
//!
//! let report = ctx.solve().unwrap();
//! match report {
//!     Report::Value(v) => assert!((v - 0.3).abs() < 1e-12),
//!     Report::Unknown => panic!("derivable"),
//! }
//! ```
//!
//! # Scale
//!
//! The universe over n variables holds exactly 3^n − 1 statements, and the refinement relation
//! is built by comparing every pair.
//! This is the sole scalability constraint of the library: memory is O(3^n) statements and
//! O(3^n · n) edges, and n beyond ~12–15 is impractical by design.
//! The ceiling is enforced through [Config::variable_ceiling](crate::config::Config).
//!
//! # Logs
//!
//! To help diagnose issues, calls to [log!](log) are made with a variety of targets defined to
//! help narrow output to relevant parts of the library.
//! No log implementation is provided --- the targets are listed in [misc::log].

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
