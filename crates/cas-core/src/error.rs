// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! Error types for the exact-rational core.

use thiserror::Error;

/// Errors that can occur in rational arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Raised by [`crate::Rational::pow`] when asked to raise a rational
    /// to a non-integer rational exponent; the core never extracts
    /// radicals.
    #[error("domain error: {0}")]
    DomainError(String),
}

/// Result type for core math operations.
pub type MathResult<T> = Result<T, MathError>;
