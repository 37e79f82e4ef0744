// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Author: Pushp Kharat

//! Infix rendering of canonical expressions: a precedence-driven
//! child-parenthesization idiom — look at whether a child's grouping
//! priority is lower than the parent's before wrapping it in
//! parentheses.

use crate::expr::Expr;
use crate::rational::Rational;
use std::fmt;

const SUM_PRECEDENCE: u8 = 1;
const PRODUCT_PRECEDENCE: u8 = 2;
const POWER_PRECEDENCE: u8 = 3;
const ATOM_PRECEDENCE: u8 = 4;

fn precedence(e: &Expr) -> u8 {
    match e {
        Expr::Sum(_) => SUM_PRECEDENCE,
        Expr::Product(_) => PRODUCT_PRECEDENCE,
        Expr::Power(_, _) => POWER_PRECEDENCE,
        Expr::Number(_) | Expr::Symbol(_) | Expr::Function(_, _) | Expr::Undefined => ATOM_PRECEDENCE,
    }
}

/// Render `child` under a parent of precedence `parent_precedence`,
/// parenthesizing iff the child's own precedence is strictly lower.
fn write_child(parent_precedence: u8, child: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if precedence(child) < parent_precedence {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

fn write_sum(children: &[Expr], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        let rendered = format!("{}", ChildFmt(SUM_PRECEDENCE, child));
        if i == 0 {
            write!(f, "{rendered}")?;
        } else if let Some(rest) = rendered.strip_prefix('-') {
            write!(f, "-{rest}")?;
        } else {
            write!(f, "+{rendered}")?;
        }
    }
    Ok(())
}

fn write_product(children: &[Expr], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let [Expr::Number(r), rest @ ..] = children {
        if *r == Rational::from_i64(-1) {
            write!(f, "-")?;
            return write_product_factors(rest, f);
        }
    }
    write_product_factors(children, f)
}

fn write_product_factors(children: &[Expr], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, "*")?;
        }
        write_child(PRODUCT_PRECEDENCE, child, f)?;
    }
    Ok(())
}

/// Renders `child` exactly as it would appear under a parent of
/// `parent_precedence`, as a `Display` value so `write_sum` can inspect
/// the rendered text (for the leading-`-` check) before emitting it.
struct ChildFmt<'a>(u8, &'a Expr);

impl fmt::Display for ChildFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_child(self.0, self.1, f)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(r) => write!(f, "{r}"),
            Expr::Symbol(s) => write!(f, "{s}"),
            Expr::Undefined => write!(f, "<Undefined>"),
            Expr::Sum(children) => write_sum(children, f),
            Expr::Product(children) => write_product(children, f),
            Expr::Power(base, exponent) => {
                write_child(POWER_PRECEDENCE, base, f)?;
                write!(f, "^")?;
                write_child(POWER_PRECEDENCE, exponent, f)
            }
            Expr::Function(name, args) => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::canon::simplify;
    use crate::expr::Expr;

    #[test]
    fn sum_joins_with_plus() {
        let e = simplify(Expr::raw_sum(vec![Expr::symbol("x"), Expr::symbol("y")]));
        assert_eq!(format!("{e}"), "x+y");
    }

    #[test]
    fn sum_folds_a_negative_term_without_a_leading_plus() {
        // `Product` (tag 1) sorts before `Symbol` (tag 5), so the
        // negated term leads: `-y+x`, not `x-y`.
        let x = Expr::symbol("x");
        let e = simplify(Expr::raw_sum(vec![x, Expr::raw_product(vec![Expr::int(-1), Expr::symbol("y")])]));
        assert_eq!(format!("{e}"), "-y+x");
    }

    #[test]
    fn product_of_negative_one_prints_a_leading_minus() {
        let e = simplify(Expr::raw_product(vec![Expr::int(-1), Expr::symbol("x")]));
        assert_eq!(format!("{e}"), "-x");
    }

    #[test]
    fn product_joins_with_star() {
        let e = simplify(Expr::raw_product(vec![Expr::int(2), Expr::symbol("x")]));
        assert_eq!(format!("{e}"), "2*x");
    }

    #[test]
    fn power_prints_with_caret() {
        let e = simplify(Expr::raw_power(Expr::symbol("x"), Expr::int(2)));
        assert_eq!(format!("{e}"), "x^2");
    }

    #[test]
    fn sum_inside_power_base_is_parenthesized() {
        let e = simplify(Expr::raw_power(
            Expr::raw_sum(vec![Expr::symbol("x"), Expr::symbol("y")]),
            Expr::int(2),
        ));
        assert_eq!(format!("{e}"), "(x+y)^2");
    }

    #[test]
    fn sum_inside_product_is_parenthesized() {
        let e = simplify(Expr::raw_product(vec![
            Expr::raw_sum(vec![Expr::symbol("x"), Expr::symbol("y")]),
            Expr::symbol("z"),
        ]));
        assert_eq!(format!("{e}"), "(x+y)*z");
    }

    #[test]
    fn function_prints_comma_separated_args() {
        let e = Expr::function("f", vec![Expr::symbol("x"), Expr::symbol("y")]);
        assert_eq!(format!("{e}"), "f(x, y)");
    }

    #[test]
    fn undefined_prints_as_a_sentinel() {
        let e = simplify(Expr::raw_power(Expr::int(0), Expr::int(-1)));
        assert_eq!(format!("{e}"), "<Undefined>");
    }
}
