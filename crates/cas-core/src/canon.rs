// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! Automatic simplification: the bottom-up rewrite to canonical form, and
//! the structural differentiation built on top of it.
//!
//! The sum/product merge passes both lean on one fact about
//! [`crate::order::cmp`]: it compares children from the tail, so two
//! terms with the same non-numeric part always sort adjacent to each
//! other. That turns what would otherwise be an all-pairs reduction into
//! a single left-to-right scan that only ever looks at the last emitted
//! node and the next input node.

use crate::expr::Expr;
use crate::order;
use crate::rational::Rational;
use crate::symbol::Symbol;
use std::cmp::Ordering;

/// Rewrite `x` to canonical form.
///
/// Children are simplified first, then the node itself: a `Number`,
/// `Symbol`, or `Undefined` is returned unchanged, and each compound
/// shape is handed to its own merge pass below.
pub fn simplify(x: Expr) -> Expr {
    match x {
        Expr::Number(_) | Expr::Symbol(_) | Expr::Undefined => x,
        Expr::Sum(children) => {
            let children = children.into_iter().map(simplify).collect();
            simplify_sum(children)
        }
        Expr::Product(children) => {
            let children = children.into_iter().map(simplify).collect();
            simplify_product(children)
        }
        Expr::Power(base, exponent) => {
            let base = simplify(*base);
            let exponent = simplify(*exponent);
            simplify_power(base, exponent)
        }
        Expr::Function(name, args) => {
            let args = args.into_iter().map(simplify).collect();
            simplify_function(name, args)
        }
    }
}

/// `diff(e, v)` is the one function application the core knows how to
/// evaluate; everything else is simplified only in its arguments.
fn simplify_function(name: Symbol, args: Vec<Expr>) -> Expr {
    if name.as_str() != "diff" {
        return Expr::Function(name, args);
    }
    if args.len() != 2 {
        return Expr::Undefined;
    }
    let mut args = args.into_iter();
    let body = args.next().unwrap();
    let with_respect_to = args.next().unwrap();
    match with_respect_to {
        Expr::Symbol(v) => diff(body, &v),
        _ => Expr::Undefined,
    }
}

fn flatten_sum(children: Vec<Expr>) -> Vec<Expr> {
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Expr::Sum(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }
    flat
}

/// Combine two already-simplified, sort-adjacent sum terms, or report
/// that they don't merge.
///
/// Returns zero, one, or two terms: zero if both cancel, one if they
/// merge (and that merge isn't itself zero), two (unchanged, in order)
/// if they are genuinely distinct terms.
fn merge_sum_pair(lhs: Expr, rhs: Expr) -> Vec<Expr> {
    if let (Expr::Number(a), Expr::Number(b)) = (&lhs, &rhs) {
        let sum = a + b;
        return if sum.is_zero() { vec![] } else { vec![Expr::Number(sum)] };
    }
    if lhs.is_zero() {
        return vec![rhs];
    }
    if rhs.is_zero() {
        return vec![lhs];
    }

    let lhs_term = lhs.term();
    let rhs_term = rhs.term();
    if order::cmp(&lhs_term, &rhs_term) == Ordering::Equal {
        let coefficient = simplify_sum(vec![Expr::Number(lhs.constant()), Expr::Number(rhs.constant())]);
        let merged = simplify_product(vec![coefficient, lhs_term]);
        if merged.is_zero() { vec![] } else { vec![merged] }
    } else {
        vec![lhs, rhs]
    }
}

/// `simplify_sum`: flatten, sort, merge adjacent like terms, collapse.
pub fn simplify_sum(children: Vec<Expr>) -> Expr {
    let mut flat = flatten_sum(children);
    flat.sort_by(order::cmp);

    let mut out: Vec<Expr> = Vec::with_capacity(flat.len());
    for item in flat {
        match out.pop() {
            Some(last) => out.extend(merge_sum_pair(last, item)),
            None => out.push(item),
        }
    }

    match out.len() {
        0 => Expr::Number(Rational::zero()),
        1 => out.into_iter().next().unwrap(),
        _ => Expr::Sum(out),
    }
}

fn flatten_product(children: Vec<Expr>) -> Vec<Expr> {
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Expr::Product(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }
    flat
}

fn merge_product_pair(lhs: Expr, rhs: Expr) -> Vec<Expr> {
    if let (Expr::Number(a), Expr::Number(b)) = (&lhs, &rhs) {
        let product = a * b;
        return if product.is_one() { vec![] } else { vec![Expr::Number(product)] };
    }
    if lhs.is_one() {
        return vec![rhs];
    }
    if rhs.is_one() {
        return vec![lhs];
    }

    let lhs_base = lhs.base();
    let rhs_base = rhs.base();
    if order::cmp(&lhs_base, &rhs_base) == Ordering::Equal {
        let exponent = simplify_sum(vec![lhs.exponent(), rhs.exponent()]);
        let merged = simplify_power(lhs_base, exponent);
        if merged.is_one() { vec![] } else { vec![merged] }
    } else {
        vec![lhs, rhs]
    }
}

/// `simplify_product`: flatten, short-circuit on a zero factor, sort,
/// merge adjacent like bases, collapse.
pub fn simplify_product(children: Vec<Expr>) -> Expr {
    let flat = flatten_product(children);
    if flat.iter().any(Expr::is_zero) {
        return Expr::Number(Rational::zero());
    }

    let mut flat = flat;
    flat.sort_by(order::cmp);

    let mut out: Vec<Expr> = Vec::with_capacity(flat.len());
    for item in flat {
        match out.pop() {
            Some(last) => out.extend(merge_product_pair(last, item)),
            None => out.push(item),
        }
    }

    match out.len() {
        0 => Expr::Number(Rational::one()),
        1 => out.into_iter().next().unwrap(),
        _ => Expr::Product(out),
    }
}

/// `simplify_power`: handle the zero/one-base and one-exponent
/// shortcuts, then hand integer exponents to [`simplify_integer_power`].
pub fn simplify_power(base: Expr, exponent: Expr) -> Expr {
    if base.is_zero() {
        return match &exponent {
            Expr::Number(r) if r.is_positive() => Expr::Number(Rational::zero()),
            Expr::Number(r) if r.is_zero() => Expr::Number(Rational::one()),
            Expr::Number(_) => Expr::Undefined,
            _ => Expr::Power(Box::new(base), Box::new(exponent)),
        };
    }
    if base.is_one() {
        return Expr::Number(Rational::one());
    }
    if exponent.is_integer() {
        return simplify_integer_power(base, exponent);
    }
    Expr::Power(Box::new(base), Box::new(exponent))
}

/// Collapse an integer power: numeric exponentiation, power-of-power
/// exponent multiplication, and distribution over a product's factors.
fn simplify_integer_power(base: Expr, exponent: Expr) -> Expr {
    let n = match &exponent {
        Expr::Number(r) => r.clone(),
        _ => unreachable!("simplify_integer_power called with a non-integer exponent"),
    };
    if n.is_zero() {
        return Expr::Number(Rational::one());
    }
    if n.is_one() {
        return base;
    }

    match base {
        Expr::Number(r) => Expr::Number(r.pow_int(n.numer())),
        Expr::Power(inner_base, inner_exponent) => {
            let combined = simplify_product(vec![*inner_exponent, exponent]);
            simplify_power(*inner_base, combined)
        }
        Expr::Product(factors) => {
            let powered = factors.into_iter().map(|f| simplify_power(f, exponent.clone())).collect();
            simplify_product(powered)
        }
        other => Expr::Power(Box::new(other), Box::new(exponent)),
    }
}

/// Whether `e` contains no occurrence of `v`: a `Number` always is, a
/// `Symbol` is unless it names `v`, and a compound node is iff all of
/// its children are.
fn is_constant_in(e: &Expr, v: &Symbol) -> bool {
    match e {
        Expr::Number(_) | Expr::Undefined => true,
        Expr::Symbol(s) => s != v,
        Expr::Sum(children) | Expr::Product(children) => children.iter().all(|c| is_constant_in(c, v)),
        Expr::Power(base, exponent) => is_constant_in(base, v) && is_constant_in(exponent, v),
        Expr::Function(_, args) => args.iter().all(|a| is_constant_in(a, v)),
    }
}

/// Structural differentiation with respect to `v`.
///
/// `e` is assumed already simplified; every recursive call below feeds
/// its result through `simplify_sum`/`simplify_product`/`simplify_power`
/// rather than the top-level `simplify`, since those are exactly the
/// combinators the merge passes already know how to re-canonicalize.
pub fn diff(e: Expr, v: &Symbol) -> Expr {
    match e {
        Expr::Number(_) => Expr::Number(Rational::zero()),
        Expr::Symbol(s) => {
            if &s == v {
                Expr::Number(Rational::one())
            } else {
                Expr::Number(Rational::zero())
            }
        }
        Expr::Undefined => Expr::Undefined,
        Expr::Sum(terms) => {
            let diffed = terms.into_iter().map(|t| diff(t, v)).collect();
            simplify_sum(diffed)
        }
        Expr::Product(factors) => {
            // Leibniz rule: sum over i of (factors with factor i replaced
            // by its derivative).
            let n = factors.len();
            let mut terms = Vec::with_capacity(n);
            for i in 0..n {
                let mut term_factors = Vec::with_capacity(n);
                for (j, factor) in factors.iter().enumerate() {
                    term_factors.push(if i == j { diff(factor.clone(), v) } else { factor.clone() });
                }
                terms.push(simplify_product(term_factors));
            }
            simplify_sum(terms)
        }
        Expr::Power(base, exponent) => {
            let base = *base;
            let exponent = *exponent;
            if is_constant_in(&exponent, v) {
                // d/dv(b^p) = p * b^(p-1) * d/dv(b)
                let base_derivative = diff(base.clone(), v);
                let reduced_exponent = simplify_sum(vec![exponent.clone(), Expr::Number(Rational::from_i64(-1))]);
                let reduced_power = simplify_power(base, reduced_exponent);
                simplify_product(vec![exponent, reduced_power, base_derivative])
            } else {
                Expr::function("diff", vec![Expr::raw_power(base, exponent), Expr::Symbol(v.clone())])
            }
        }
        Expr::Function(name, args) => Expr::function("diff", vec![Expr::Function(name, args), Expr::Symbol(v.clone())]),
    }
}
