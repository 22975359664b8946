//! Symbolic differentiation.
//!
//! [`differentiate`] walks the expression tree and applies the sum, product, quotient, power, and
//! chain rules to build the derivative. Every intermediate derivative is simplified with
//! [`evaluate`](crate::eval::evaluate) under an empty environment before it is embedded into its
//! parent, so the returned tree is already reduced.
//!
//! ```
//! use symalg::{derivative::differentiate, expr::Expr};
//!
//! let x = Expr::variable("x");
//! let f = Expr::pow(x.clone(), Expr::constant(2.0));
//! assert_eq!(differentiate(&f, "x").unwrap(), Expr::constant(2.0) * x);
//! ```
//!
//! # Limitations
//!
//! The power rule assumes the exponent does not depend on the variable being differentiated with
//! respect to. `d/dx a^x` is **not** `a^x ln(a)` here; the `ln` term is never produced.

use crate::{
    env::Environment,
    error::DivisionByZero,
    eval::{evaluate_with, step::Step},
    expr::{BinOpKind, Expr, UnaryOpKind},
    step_collector::StepCollector,
};

/// Builds the unsimplified derivative of `f` with respect to `with`. The operands of `f` are used
/// as they are; only the derivatives of the operands are simplified (by [`inner_differentiate`]).
fn derivative_rule(
    f: &Expr,
    with: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, DivisionByZero> {
    let mut d = |e: &Expr| inner_differentiate(e, with, step_collector);

    Ok(match f {
        Expr::Constant(_) => Expr::Constant(0.0),
        Expr::Variable(name) => {
            if name == with {
                Expr::Constant(1.0)
            } else {
                Expr::Constant(0.0)
            }
        },
        Expr::Binary(op, x, y) => {
            let (x, y) = (&**x, &**y);
            match op {
                // (f + g)' = f' + g'
                BinOpKind::Add => Expr::add(d(x)?, d(y)?),

                // (f - g)' = f' - g'
                BinOpKind::Sub => Expr::sub(d(x)?, d(y)?),

                // (f * g)' = f * g' + g * f'
                BinOpKind::Mul => {
                    let (dx, dy) = (d(x)?, d(y)?);
                    Expr::add(
                        Expr::mul(x.clone(), dy),
                        Expr::mul(y.clone(), dx),
                    )
                },

                // (f / g)' = (f' * g - g' * f) / g^2
                BinOpKind::Div => {
                    let (dx, dy) = (d(x)?, d(y)?);
                    Expr::div(
                        Expr::sub(
                            Expr::mul(dx, y.clone()),
                            Expr::mul(dy, x.clone()),
                        ),
                        Expr::pow(y.clone(), Expr::Constant(2.0)),
                    )
                },

                // (f^n)' = n * f^(n - 1) * f'
                BinOpKind::Exp => {
                    let dx = d(x)?;
                    Expr::mul(
                        Expr::mul(
                            y.clone(),
                            Expr::pow(x.clone(), Expr::sub(y.clone(), Expr::Constant(1.0))),
                        ),
                        dx,
                    )
                },
            }
        },
        Expr::Unary(op, x) => {
            let dx = d(x)?;
            match op {
                // sin(f)' = cos(f) * f'
                UnaryOpKind::Sin => Expr::mul(Expr::cos((**x).clone()), dx),

                // cos(f)' = 0 - sin(f) * f'
                UnaryOpKind::Cos => Expr::sub(
                    Expr::Constant(0.0),
                    Expr::mul(Expr::sin((**x).clone()), dx),
                ),
            }
        },
    })
}

/// Base implementation of the differentiation algorithm.
fn inner_differentiate(
    f: &Expr,
    with: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, DivisionByZero> {
    let raw = derivative_rule(f, with, step_collector)?;
    evaluate_with(&raw, &Environment::new(), step_collector)
}

/// Computes the derivative of the given expression with respect to the variable named `with`,
/// simplified.
///
/// Returns [`Err`] if simplifying the derivative divides by the constant `0`.
pub fn differentiate(f: &Expr, with: &str) -> Result<Expr, DivisionByZero> {
    inner_differentiate(f, with, &mut ())
}

/// Computes the derivative of the given expression with respect to the variable named `with`,
/// simplified. The simplification steps taken across every intermediate derivative are collected
/// and returned, in the order they were applied.
pub fn differentiate_with_steps(f: &Expr, with: &str) -> Result<(Expr, Vec<Step>), DivisionByZero> {
    let mut steps = Vec::new();
    let expr = inner_differentiate(f, with, &mut steps)?;
    Ok((expr, steps))
}
