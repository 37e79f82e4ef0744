// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! Operator overloads that make `Expr` ergonomic to build.
//!
//! Each overload constructs the raw (unsimplified) node and immediately
//! canonicalizes it, so a value of type `Expr` obtained through these
//! operators is always canonical by construction, the same contract the
//! builder gives. `Sub`/`Div`/`Neg` are expressed in terms of
//! `Add`/`Mul`/`Pow` rather than as independent node shapes: subtraction
//! is addition of a negation, division is multiplication by an inverse
//! power.

use crate::canon::simplify;
use crate::expr::Expr;
use num_traits::Pow;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add for Expr {
    type Output = Expr;
    fn add(self, rhs: Expr) -> Expr {
        simplify(Expr::raw_sum(vec![self, rhs]))
    }
}

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        simplify(Expr::raw_product(vec![Expr::int(-1), self]))
    }
}

impl Sub for Expr {
    type Output = Expr;
    fn sub(self, rhs: Expr) -> Expr {
        self + (-rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;
    fn mul(self, rhs: Expr) -> Expr {
        simplify(Expr::raw_product(vec![self, rhs]))
    }
}

impl Div for Expr {
    type Output = Expr;
    fn div(self, rhs: Expr) -> Expr {
        self * rhs.pow(Expr::int(-1))
    }
}

impl Pow<Expr> for Expr {
    type Output = Expr;
    fn pow(self, rhs: Expr) -> Expr {
        simplify(Expr::raw_power(self, rhs))
    }
}

macro_rules! impl_mixed_i64 {
    ($trait:ident, $method:ident) => {
        impl $trait<i64> for Expr {
            type Output = Expr;
            fn $method(self, rhs: i64) -> Expr {
                $trait::$method(self, Expr::int(rhs))
            }
        }

        impl $trait<Expr> for i64 {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr {
                $trait::$method(Expr::int(self), rhs)
            }
        }
    };
}

impl_mixed_i64!(Add, add);
impl_mixed_i64!(Sub, sub);
impl_mixed_i64!(Mul, mul);
impl_mixed_i64!(Div, div);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::Rational;

    #[test]
    fn add_simplifies_like_terms() {
        let x = Expr::symbol("x");
        assert_eq!(x.clone() + x.clone(), simplify(Expr::raw_product(vec![Expr::int(2), x])));
    }

    #[test]
    fn sub_of_self_is_zero() {
        let x = Expr::symbol("x");
        assert_eq!(x.clone() - x, Expr::int(0));
    }

    #[test]
    fn neg_folds_a_constant() {
        assert_eq!(-Expr::int(5), Expr::Number(Rational::from_i64(-5)));
    }

    #[test]
    fn div_builds_a_negative_power() {
        let x = Expr::symbol("x");
        let e = x.clone() / x;
        assert_eq!(e, Expr::int(1));
    }

    #[test]
    fn pow_dispatches_to_simplify_power() {
        let x = Expr::symbol("x");
        assert_eq!(x.pow(Expr::int(0)), Expr::int(1));
    }

    #[test]
    fn mixed_i64_convenience() {
        let x = Expr::symbol("x");
        let a = x.clone() + 1;
        let b = 1 + x;
        assert_eq!(a, b);
    }
}
