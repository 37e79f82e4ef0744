// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! Small `proptest` strategies for generating raw (unsimplified)
//! expression trees and rational numbers, shared by the property tests
//! in [`crate::canon`], [`crate::order`], and [`crate::rational`]. Kept
//! shallow and narrow (a handful of symbol names, small integers) so
//! most generated trees actually exercise merging and collapsing rather
//! than bottoming out as one-off atoms.

use crate::expr::Expr;
use crate::rational::Rational;
use proptest::prelude::*;

pub fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (-5..=5i64).prop_map(Expr::int),
        "[xyz]".prop_map(|s| Expr::symbol(&s)),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(Expr::raw_sum),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Expr::raw_product),
            (inner.clone(), -3..=3i64).prop_map(|(b, e)| Expr::raw_power(b, Expr::int(e))),
        ]
    })
}

pub fn arb_rational() -> impl Strategy<Value = Rational> {
    ((-20..=20i64), (1..=20i64)).prop_map(|(n, d)| Rational::new(n.into(), d.into()))
}
