// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! # cas-core
//!
//! The expression data model, total order, and automatic simplification
//! algorithm for a small computer algebra system.
//!
//! This crate provides:
//! - [`Expr`] - the expression tree (`Number`, `Product`, `Power`, `Sum`,
//!   `Function`, `Symbol`, `Undefined`)
//! - [`Symbol`] - variable and function names
//! - [`Rational`] - exact rational arithmetic over arbitrary-precision
//!   integers ([`BigInt`])
//! - [`order::cmp`] - the strong total order canonical form is sorted by
//! - [`canon::simplify`] - the bottom-up rewrite to canonical form
//! - [`canon::diff`] - structural (Leibniz-rule) differentiation
//! - [`ops`] - `+ - * / -` and `.pow(..)` operator overloads, each
//!   simplifying immediately
//! - [`print`] - the infix `Display` impl
//!
//! ## Example
//!
//! ```rust
//! use cas_core::{canon, Expr};
//!
//! // 2*x + 3*x canonicalizes to 5*x
//! let x = Expr::symbol("x");
//! let expr = Expr::raw_sum(vec![
//!     Expr::raw_product(vec![Expr::int(2), x.clone()]),
//!     Expr::raw_product(vec![Expr::int(3), x]),
//! ]);
//! let canonical = canon::simplify(expr);
//! ```

pub mod bigint;
pub mod canon;
pub mod error;
pub mod expr;
pub mod ops;
pub mod order;
pub mod print;
pub mod rational;
pub mod symbol;

#[cfg(test)]
pub(crate) mod test_support;

pub use bigint::BigInt;
pub use canon::{diff, simplify};
pub use error::{MathError, MathResult};
pub use expr::Expr;
pub use order::cmp;
pub use rational::Rational;
pub use symbol::Symbol;
