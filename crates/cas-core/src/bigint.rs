// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! Arbitrary-precision signed integers.
//!
//! This is a thin wrapper around [`num_bigint::BigInt`]: the rest of the
//! crate only ever sees the contract described here (truncated division,
//! a `sign` in `{-1, 0, 1}`, a non-negative `gcd`, and a `pow` that returns
//! zero rather than panicking on a negative exponent), not `num_bigint`'s
//! own API surface.

use num_bigint::{BigInt as Inner, ParseBigIntError};
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// An arbitrary-precision signed integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt(Inner);

impl BigInt {
    /// The integer zero.
    pub fn zero() -> Self {
        BigInt(Inner::zero())
    }

    /// The integer one.
    pub fn one() -> Self {
        BigInt(Inner::from(1))
    }

    /// Construct from any machine integer.
    pub fn from_i64(n: i64) -> Self {
        BigInt(Inner::from(n))
    }

    /// Parse a base-10 textual representation (optionally signed).
    pub fn from_decimal_str(s: &str) -> Result<Self, ParseBigIntError> {
        Inner::from_str(s).map(BigInt)
    }

    /// `-1`, `0`, or `1` according to the sign of this integer.
    pub fn sign(&self) -> i32 {
        if self.0.is_zero() {
            0
        } else if self.0.is_negative() {
            -1
        } else {
            1
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_one(&self) -> bool {
        self.0 == Inner::from(1)
    }

    pub fn abs(&self) -> Self {
        BigInt(self.0.clone().abs())
    }

    /// Non-negative greatest common divisor. `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.0.clone().abs();
        let mut b = other.0.clone().abs();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        BigInt(a)
    }

    /// Classical square-and-multiply exponentiation.
    ///
    /// For a negative exponent the result is not representable as an
    /// integer, so the contract is to return zero; callers that need
    /// negative powers (rational exponentiation) must invert first.
    pub fn pow(&self, exp: &BigInt) -> Self {
        if exp.is_negative() {
            return BigInt::zero();
        }
        let mut result = Inner::from(1);
        let mut base = self.0.clone();
        let mut e = exp.0.clone();
        let two = Inner::from(2);
        while !e.is_zero() {
            if &e % &two != Inner::zero() {
                result = &result * &base;
            }
            base = &base * &base;
            e = &e / &two;
        }
        BigInt(result)
    }

    /// Truncated (round-toward-zero) quotient and remainder, remainder
    /// carrying the sign of the dividend — matching Rust's native integer
    /// division semantics.
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        let q = &self.0 / &other.0;
        let r = &self.0 % &other.0;
        (BigInt(q), BigInt(r))
    }

    pub fn to_decimal_string(&self) -> String {
        self.0.to_string()
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        BigInt::from_i64(n)
    }
}

impl From<i32> for BigInt {
    fn from(n: i32) -> Self {
        BigInt::from_i64(n as i64)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        self.0 == Inner::from(*other)
    }
}

impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.0.partial_cmp(&Inner::from(*other))
    }
}

impl Neg for BigInt {
    type Output = Self;
    fn neg(self) -> Self::Output {
        BigInt(-self.0)
    }
}

impl Add for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: Self) -> BigInt {
        BigInt(&self.0 + &rhs.0)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: Self) -> BigInt {
        BigInt(&self.0 - &rhs.0)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: Self) -> BigInt {
        BigInt(&self.0 * &rhs.0)
    }
}

impl Div for &BigInt {
    type Output = BigInt;
    fn div(self, rhs: Self) -> BigInt {
        BigInt(&self.0 / &rhs.0)
    }
}

impl Rem for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: Self) -> BigInt {
        BigInt(&self.0 % &rhs.0)
    }
}
