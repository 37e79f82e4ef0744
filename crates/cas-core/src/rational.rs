// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! Exact rational number arithmetic over [`BigInt`](crate::BigInt).
//!
//! We use rational numbers instead of floating-point to avoid rounding
//! errors. `1/3 * 3 = 1` exactly, no floating-point surprises. A rational
//! is always stored normalized: `gcd(|num|, den) = 1` and `den > 0`.

use crate::bigint::BigInt;
use crate::error::{MathError, MathResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An exact rational number, always kept in lowest terms with a
/// non-negative denominator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /// Construct from a numerator and denominator, reducing to lowest
    /// terms and moving any sign into the numerator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        assert!(!den.is_zero(), "denominator cannot be zero");
        Self::normalize(num, den)
    }

    fn normalize(mut num: BigInt, mut den: BigInt) -> Self {
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let g = num.gcd(&den);
        if !g.is_zero() && !g.is_one() {
            let (n, _) = num.div_rem(&g);
            let (d, _) = den.div_rem(&g);
            num = n;
            den = d;
        }
        Rational { num, den }
    }

    /// Construct an integer-valued rational.
    pub fn from_integer(n: BigInt) -> Self {
        Rational {
            num: n,
            den: BigInt::one(),
        }
    }

    /// Construct from a machine integer.
    pub fn from_i64(n: i64) -> Self {
        Rational::from_integer(BigInt::from_i64(n))
    }

    pub fn zero() -> Self {
        Rational::from_i64(0)
    }

    pub fn one() -> Self {
        Rational::from_i64(1)
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        !self.num.is_zero() && !self.num.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    pub fn abs(&self) -> Self {
        Rational {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// The reciprocal `1/x`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot invert zero");
        Rational::normalize(self.den.clone(), self.num.clone())
    }

    /// Raise to an integer power: negative exponents invert first, then
    /// fast exponentiation by squaring.
    pub fn pow_int(&self, exp: &BigInt) -> Self {
        if exp.is_negative() {
            self.recip().pow_int(&(-exp.clone()))
        } else {
            Rational::normalize(self.num.pow(exp), self.den.pow(exp))
        }
    }

    /// Raise to a rational power. Permitted only when the exponent is
    /// integer-valued (denominator 1); no radicals are ever extracted.
    pub fn pow(&self, exp: &Rational) -> MathResult<Self> {
        if !exp.is_integer() {
            return Err(MathError::DomainError(format!(
                "cannot raise {self} to the non-integer power {exp}"
            )));
        }
        Ok(self.pow_int(exp.numer()))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // a/b ? c/d  <=>  a*d ? c*b, since b, d > 0.
        let lhs = &self.num * &other.den;
        let rhs = &other.num * &self.den;
        lhs.cmp(&rhs)
    }
}

impl Add for &Rational {
    type Output = Rational;
    fn add(self, rhs: Self) -> Rational {
        let num = &(&self.num * &rhs.den) + &(&rhs.num * &self.den);
        let den = &self.den * &rhs.den;
        Rational::normalize(num, den)
    }
}

impl Sub for &Rational {
    type Output = Rational;
    fn sub(self, rhs: Self) -> Rational {
        let num = &(&self.num * &rhs.den) - &(&rhs.num * &self.den);
        let den = &self.den * &rhs.den;
        Rational::normalize(num, den)
    }
}

impl Mul for &Rational {
    type Output = Rational;
    fn mul(self, rhs: Self) -> Rational {
        Rational::normalize(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Div for &Rational {
    type Output = Rational;
    fn div(self, rhs: Self) -> Rational {
        self * &rhs.recip()
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational {
            num: -self.num.clone(),
            den: self.den.clone(),
        }
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Self) -> Rational {
        &self + &rhs
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Self) -> Rational {
        &self - &rhs
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Self) -> Rational {
        &self * &rhs
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Self) -> Rational {
        &self / &rhs
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        -&self
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_i64(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Rational::from_i64(n as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(BigInt::from_i64(n), BigInt::from_i64(d))
    }

    #[test]
    fn reduces_to_lowest_terms() {
        let a = r(2, 4);
        assert_eq!(a, r(1, 2));
    }

    #[test]
    fn denominator_sign_moves_to_numerator() {
        let a = r(1, -2);
        assert_eq!(a, r(-1, 2));
        assert!(a.denom().sign() >= 0);
    }

    #[test]
    fn basic_arithmetic() {
        let a = r(1, 2);
        let b = r(1, 3);
        assert_eq!(a.clone() + b.clone(), r(5, 6));
        assert_eq!(a * b, r(1, 6));
        // 1/3 * 3 = 1 exactly
        assert_eq!(r(1, 3) * Rational::from_i64(3), Rational::one());
    }

    #[test]
    fn display_form() {
        assert_eq!(format!("{}", Rational::from_i64(5)), "5");
        assert_eq!(format!("{}", r(1, 2)), "1/2");
    }

    #[test]
    fn integer_pow_negative_exponent_inverts() {
        let half = r(1, 2);
        assert_eq!(half.pow_int(&BigInt::from_i64(2)), r(1, 4));
        assert_eq!(half.pow_int(&BigInt::from_i64(-1)), Rational::from_i64(2));
    }

    #[test]
    fn rational_exponent_requires_integer_valued_power() {
        let two = Rational::from_i64(2);
        assert!(two.pow(&r(1, 2)).is_err());
        assert_eq!(two.pow(&Rational::from_i64(3)).unwrap(), Rational::from_i64(8));
    }

    #[test]
    fn ordering_via_cross_multiplication() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < Rational::zero());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::arb_rational;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn always_normalized(x in arb_rational()) {
            prop_assert!(!x.denom().is_negative());
            prop_assert_eq!(x.numer().abs().gcd(x.denom()), BigInt::one());
        }

        #[test]
        fn addition_then_subtraction_is_identity(x in arb_rational(), y in arb_rational()) {
            prop_assert_eq!((x.clone() + y.clone()) - y, x);
        }
    }
}
