// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! The total order over expressions that the canonicalizer sorts
//! children by.
//!
//! This is a free function rather than a method so call sites read as
//! `cmp(L, R)`: tag-normalized, then dispatched same-tag or cross-tag.
//! `Expr`'s `Ord` impl just forwards to it.

use crate::expr::Expr;
use crate::rational::Rational;
use std::cmp::Ordering;

/// The strong total order over expressions.
pub fn cmp(l: &Expr, r: &Expr) -> Ordering {
    if l.tag() > r.tag() {
        return cmp(r, l).reverse();
    }

    if l.tag() == r.tag() {
        return cmp_same_tag(l, r);
    }

    cmp_cross_tag(l, r)
}

fn cmp_same_tag(l: &Expr, r: &Expr) -> Ordering {
    match (l, r) {
        (Expr::Number(a), Expr::Number(b)) => a.cmp(b),
        (Expr::Symbol(a), Expr::Symbol(b)) => a.cmp(b),
        (Expr::Function(fa, a), Expr::Function(fb, b)) => fa.cmp(fb).then_with(|| cmp_list(a, b)),
        (Expr::Sum(a), Expr::Sum(b)) | (Expr::Product(a), Expr::Product(b)) => cmp_list(a, b),
        (Expr::Power(ba, ea), Expr::Power(bb, eb)) => {
            cmp(ba.as_ref(), bb.as_ref()).then_with(|| cmp(ea.as_ref(), eb.as_ref()))
        }
        (Expr::Undefined, Expr::Undefined) => Ordering::Equal,
        _ => unreachable!("cmp_same_tag called with differing tags"),
    }
}

/// `tag(l) < tag(r)` on entry.
fn cmp_cross_tag(l: &Expr, r: &Expr) -> Ordering {
    match l {
        // A Number is smaller than everything of a higher tag.
        Expr::Number(_) => Ordering::Less,

        // A Sum/Product compares its own children against the
        // singleton list `[r]`.
        Expr::Sum(children) | Expr::Product(children) => cmp_list(children, std::slice::from_ref(r)),

        // A Power compares its base against `r`, breaking ties on
        // whether its exponent is 1.
        Expr::Power(base, exponent) => {
            cmp(base.as_ref(), r).then_with(|| cmp(exponent.as_ref(), &Expr::Number(Rational::one())))
        }

        // A Function compares its arguments against the singleton list
        // `[r]` (r is known not to be a Function here).
        Expr::Function(_, args) => cmp_list(args, std::slice::from_ref(r)),

        // The only tag above Symbol is Undefined, and Undefined sorts
        // last, so a Symbol is always less than anything of strictly
        // higher tag.
        Expr::Symbol(_) => Ordering::Less,

        // Undefined has the maximum tag, so it is never `l` when
        // `tag(l) < tag(r)`.
        Expr::Undefined => unreachable!("Undefined has the maximum tag"),
    }
}

/// Compare two children lists from the tail: walk backward for
/// `min(|a|, |b|)` steps, first non-equal pairwise order decides;
/// otherwise the shorter list is smaller.
pub fn cmp_list(a: &[Expr], b: &[Expr]) -> Ordering {
    let mut ia = a.len();
    let mut ib = b.len();
    while ia > 0 && ib > 0 {
        ia -= 1;
        ib -= 1;
        let ordering = cmp(&a[ia], &b[ib]);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp(self, other)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::arb_expr;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn totality_and_antisymmetry(a in arb_expr(), b in arb_expr()) {
            let ab = cmp(&a, &b);
            let ba = cmp(&b, &a);
            prop_assert_eq!(ab, ba.reverse());
        }

        #[test]
        fn reflexivity(a in arb_expr()) {
            prop_assert_eq!(cmp(&a, &a), Ordering::Equal);
        }
    }
}
