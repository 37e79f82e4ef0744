// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! # cas
//!
//! A thin, consumer-facing front end over [`cas_core`]: the expression
//! tree, exact-rational arithmetic, operator overloads, infix printing,
//! and automatic simplification all live in `cas-core` itself; this
//! crate just re-exports that public surface alongside a small set of
//! free-function builders ([`builder::number`], [`builder::int`],
//! [`builder::symbol`], [`builder::function`], [`builder::diff`]) that
//! round out construction.
//!
//! ## Example
//!
//! ```rust
//! use cas::{diff, int, symbol};
//!
//! let x = symbol("x");
//! let expr = x.clone() * x.clone() * x;
//! assert_eq!(format!("{}", diff(expr, "x")), "3*x^2");
//! let _ = int(1);
//! ```

pub mod builder;

pub use builder::{diff, function, int, number, symbol};
pub use cas_core::{cmp, BigInt, Expr, MathError, MathResult, Rational, Symbol};

/// Structural differentiation of an already-built [`Expr`], re-exported
/// under its own name so callers that already hold a [`Symbol`] (rather
/// than a `&str`) aren't forced through [`builder::diff`]'s string-based
/// convenience signature.
pub use cas_core::diff as diff_expr;

/// The bottom-up rewrite to canonical form, re-exported for callers who
/// build raw (unsimplified) trees directly through `cas_core::Expr`'s
/// `raw_*` constructors instead of through this crate's builders.
pub use cas_core::simplify;
