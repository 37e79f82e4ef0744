// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! The expression tree: a tagged variant over the seven node shapes of
//! the algebra (`Number`, `Product`, `Power`, `Sum`, `Function`, `Symbol`,
//! `Undefined`), plus the accessors the simplifier and the total order
//! use to identify like terms and like bases.

use crate::rational::Rational;
use crate::symbol::Symbol;

/// A symbolic mathematical expression.
///
/// The discriminant order below (`Number` < `Product` < `Power` < `Sum`
/// < `Function` < `Symbol` < `Undefined`) is load-bearing: it is the
/// first thing the total order (`crate::order`) consults, and the
/// derive order of this enum is kept in lockstep with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// An exact rational constant, e.g. `3`, `1/2`, `-7`.
    Number(Rational),

    /// A product of factors, flattened and sorted once canonical.
    Product(Vec<Expr>),

    /// `base ^ exponent`.
    Power(Box<Expr>, Box<Expr>),

    /// A sum of terms, flattened and sorted once canonical.
    Sum(Vec<Expr>),

    /// A named function application, e.g. `f(x)` or `diff(e, x)`.
    Function(Symbol, Vec<Expr>),

    /// A variable.
    Symbol(Symbol),

    /// The result of an algebraically undefined operation.
    Undefined,
}

impl Expr {
    /// The discriminant the total order sorts by: `Number`=0,
    /// `Product`=1, `Power`=2, `Sum`=3, `Function`=4, `Symbol`=5,
    /// `Undefined`=6.
    pub fn tag(&self) -> u8 {
        match self {
            Expr::Number(_) => 0,
            Expr::Product(_) => 1,
            Expr::Power(_, _) => 2,
            Expr::Sum(_) => 3,
            Expr::Function(_, _) => 4,
            Expr::Symbol(_) => 5,
            Expr::Undefined => 6,
        }
    }

    // ===== Construction =====

    pub fn number(r: Rational) -> Self {
        Expr::Number(r)
    }

    pub fn int(n: i64) -> Self {
        Expr::Number(Rational::from_i64(n))
    }

    pub fn symbol(name: &str) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    pub fn function(name: &str, args: Vec<Expr>) -> Self {
        Expr::Function(Symbol::new(name), args)
    }

    /// Build a raw (not-yet-simplified) sum node.
    pub fn raw_sum(children: Vec<Expr>) -> Self {
        Expr::Sum(children)
    }

    /// Build a raw (not-yet-simplified) product node.
    pub fn raw_product(children: Vec<Expr>) -> Self {
        Expr::Product(children)
    }

    /// Build a raw (not-yet-simplified) power node.
    pub fn raw_power(base: Expr, exponent: Expr) -> Self {
        Expr::Power(Box::new(base), Box::new(exponent))
    }

    // ===== Predicates =====

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Number(r) if r.is_zero())
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Number(r) if r.is_one())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Expr::Number(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Expr::Undefined)
    }

    /// An integer-valued `Number`.
    pub fn is_integer(&self) -> bool {
        matches!(self, Expr::Number(r) if r.is_integer())
    }

    // ===== Accessors =====

    /// `base(x)`: the first child of a `Power`, else `x` itself.
    pub fn base(&self) -> Expr {
        match self {
            Expr::Power(b, _) => b.as_ref().clone(),
            _ => self.clone(),
        }
    }

    /// `exponent(x)`: the second child of a `Power`, else `Number(1)`.
    pub fn exponent(&self) -> Expr {
        match self {
            Expr::Power(_, e) => e.as_ref().clone(),
            _ => Expr::Number(Rational::one()),
        }
    }

    /// `constant(x)`: the leading numeric factor of a `Product` whose
    /// first child is a `Number`, else `Number(1)`.
    pub fn constant(&self) -> Rational {
        match self {
            Expr::Product(children) => match children.first() {
                Some(Expr::Number(r)) => r.clone(),
                _ => Rational::one(),
            },
            _ => Rational::one(),
        }
    }

    /// `term(x)`: `x` with its leading numeric factor removed, else `x`
    /// itself.
    pub fn term(&self) -> Expr {
        self.clone().split_term().1
    }

    /// Decompose `x` into `(c, t)` with `c` numeric, `t` possibly
    /// compound, and `c * t` structurally equal to `x`.
    ///
    /// Consumes `x`; the caller must not read `x` afterwards. The
    /// remainder `t` is returned exactly as found — a one-element
    /// `Product` is left un-collapsed, since it has not been
    /// re-simplified.
    pub fn split_term(self) -> (Rational, Expr) {
        match self {
            Expr::Product(mut children) if matches!(children.first(), Some(Expr::Number(_))) => {
                let Expr::Number(c) = children.remove(0) else {
                    unreachable!()
                };
                (c, Expr::Product(children))
            }
            other => (Rational::one(), other),
        }
    }

    /// Decompose `x` into `(b, e)` with `b^e` structurally equal to `x`.
    ///
    /// Consumes `x`; the caller must not read `x` afterwards.
    pub fn split_power(self) -> (Expr, Expr) {
        match self {
            Expr::Power(b, e) => (*b, *e),
            other => (other, Expr::Number(Rational::one())),
        }
    }

    /// A structural debug representation, for diagnostics only.
    pub fn repr(&self) -> String {
        format!("{self:?}")
    }
}
