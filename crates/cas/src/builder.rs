// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! The construction surface consumers are meant to reach for: `number`,
//! `int`, and `symbol` are trivially canonical the moment they're built,
//! so they pass straight through to `cas-core`'s constructors, while
//! `function` and `diff` run the result through `simplify` so a value
//! handed back to the caller is always canonical.
//!
//! `Add`/`Sub`/`Mul`/`Div`/`Neg`/`Pow` on `Expr` live in `cas-core`
//! itself (`cas_core::ops`): they are trait impls on `Expr`, and `Expr`
//! is defined in `cas-core`, so Rust's orphan rule does not let this
//! crate provide them. This module supplies the remaining pieces of the
//! builder surface that `cas-core` leaves raw.

use cas_core::{simplify, Expr, Rational};

/// A rational (or integer) constant.
pub fn number(r: Rational) -> Expr {
    Expr::number(r)
}

/// A machine-integer constant.
pub fn int(n: i64) -> Expr {
    Expr::int(n)
}

/// A variable.
pub fn symbol(name: &str) -> Expr {
    Expr::symbol(name)
}

/// A named function application, simplified immediately — `diff` calls
/// dispatch to differentiation, anything else just has its arguments
/// simplified.
pub fn function(name: &str, args: Vec<Expr>) -> Expr {
    simplify(Expr::function(name, args))
}

/// The derivative of `expr` with respect to `var`, simplified
/// immediately.
pub fn diff(expr: Expr, var: &str) -> Expr {
    simplify(Expr::function("diff", vec![expr, Expr::symbol(var)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_simplifies_its_arguments() {
        let e = function("f", vec![int(1) + int(2)]);
        assert_eq!(e, function("f", vec![int(3)]));
    }

    #[test]
    fn diff_dispatches_the_power_rule() {
        // x*x*x auto-collapses to x^3 through the `Mul` overload, so
        // this exercises the constant-exponent power rule: 3x^2.
        let x = symbol("x");
        let e = diff(x.clone() * x.clone() * x.clone(), "x");
        assert_eq!(e, int(3) * (x.clone() * x));
    }
}
