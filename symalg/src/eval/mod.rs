//! Evaluation and simplification of expressions.
//!
//! [`evaluate`] reduces an expression under an [`Environment`]. Children are evaluated first
//! (post-order), then the node's operator is reduced using the rules in [`rules`]: constants are
//! folded, and operations that provably do nothing (such as adding `0` or multiplying by `1`) are
//! removed.
//!
//! Variables bound in the environment are replaced by their values. Unbound variables are left as
//! they are, so evaluation doubles as simplification when the environment is empty (see
//! [`simplify`]).
//!
//! ```
//! use symalg::{env::Environment, eval::evaluate, expr::Expr};
//!
//! let x = Expr::variable("x");
//! let y = Expr::variable("y");
//! let expr = (x.clone() + Expr::constant(0.0)) * (y.clone() * Expr::constant(1.0));
//!
//! // nothing is bound: only the identities are removed
//! assert_eq!(evaluate(&expr, &Environment::new()).unwrap(), x.clone() * y.clone());
//!
//! // `x` is bound: partially evaluated
//! let env = Environment::from([("x", 2.0)]);
//! assert_eq!(evaluate(&expr, &env).unwrap(), Expr::constant(2.0) * y);
//! ```
//!
//! The only way evaluation can fail is by dividing by the constant `0` (see [`DivisionByZero`]).

pub mod rules;
pub mod step;

use crate::{env::Environment, error::DivisionByZero, expr::Expr, step_collector::StepCollector};
use step::Step;

/// Base implementation of the evaluation algorithm.
pub(crate) fn evaluate_with(
    expr: &Expr,
    env: &Environment,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, DivisionByZero> {
    match expr {
        Expr::Constant(_) => Ok(expr.clone()),
        Expr::Variable(name) => match env.get_var(name) {
            Some(value) => {
                step_collector.push(Step::Substitute);
                Ok(Expr::Constant(value))
            },
            None => Ok(expr.clone()),
        },
        Expr::Binary(op, lhs, rhs) => {
            let lhs = evaluate_with(lhs, env, step_collector)?;
            let rhs = evaluate_with(rhs, env, step_collector)?;
            rules::reduce_binary(*op, lhs, rhs, step_collector)
        },
        Expr::Unary(op, operand) => {
            let operand = evaluate_with(operand, env, step_collector)?;
            Ok(rules::reduce_unary(*op, operand, step_collector))
        },
    }
}

/// Evaluates the expression under the given environment, simplifying it as far as possible.
///
/// If every variable in the expression is bound, the result is a single [`Expr::Constant`].
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<Expr, DivisionByZero> {
    evaluate_with(expr, env, &mut ())
}

/// Evaluates the expression under the given environment. The steps taken by the evaluator will
/// also be collected and returned, in the order they were applied. This is useful for debugging,
/// and also for displaying the steps taken to the user.
pub fn evaluate_with_steps(expr: &Expr, env: &Environment) -> Result<(Expr, Vec<Step>), DivisionByZero> {
    let mut steps = Vec::new();
    let expr = evaluate_with(expr, env, &mut steps)?;
    Ok((expr, steps))
}

/// Simplifies the expression by evaluating it under an empty environment.
pub fn simplify(expr: &Expr) -> Result<Expr, DivisionByZero> {
    evaluate(expr, &Environment::new())
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn y() -> Expr {
        Expr::variable("y")
    }

    fn c(value: f64) -> Expr {
        Expr::constant(value)
    }

    fn empty() -> Environment {
        Environment::new()
    }

    /// Expressions used for properties that must hold for every expression.
    fn samples() -> Vec<Expr> {
        vec![
            x(),
            c(2.5),
            x() + y(),
            (x() + c(0.0)) * (y() - c(0.0)),
            Expr::pow(x(), c(2.0)) + c(3.0) * x() - c(4.0),
            Expr::sin(x() * c(1.0)) / Expr::cos(y()),
            Expr::pow(c(2.0), Expr::pow(x(), c(1.0))),
            (c(1.0) + c(2.0)) * Expr::sin(c(0.5)) - y() / c(1.0),
            Expr::cos(Expr::pow(x(), c(0.0)) + y()),
            c(0.0) / (x() + c(1.0)),
            c(0.0) - Expr::sin(x()),
        ]
    }

    #[test]
    fn substitute_variables() {
        let env = Environment::from([("x", 3.0)]);
        assert_eq!(evaluate(&x(), &env).unwrap(), c(3.0));
        assert_eq!(evaluate(&y(), &env).unwrap(), y());
    }

    #[test]
    fn partial_evaluation() {
        let env = Environment::from([("x", 3.0)]);
        let expr = x() * c(2.0) + y();
        assert_eq!(evaluate(&expr, &env).unwrap(), c(6.0) + y());
    }

    #[test]
    fn environment_is_not_mutated() {
        let env = Environment::from([("x", 3.0)]);
        let before = env.clone();
        evaluate(&(x() + y()), &env).unwrap();
        assert_eq!(env, before);
    }

    #[test]
    fn add_rules() {
        assert_eq!(simplify(&(c(0.0) + x())).unwrap(), x());
        assert_eq!(simplify(&(x() + c(0.0))).unwrap(), x());
        assert_eq!(simplify(&(c(2.0) + c(3.0))).unwrap(), c(5.0));
        assert_eq!(simplify(&(x() + c(1.0))).unwrap(), x() + c(1.0));

        // the zero identity wins over folding
        let (expr, steps) = evaluate_with_steps(&(c(0.0) + c(5.0)), &empty()).unwrap();
        assert_eq!(expr, c(5.0));
        assert_eq!(steps, vec![Step::AddZero]);
    }

    #[test]
    fn subtract_rules() {
        assert_eq!(simplify(&(c(5.0) - c(3.0))).unwrap(), c(2.0));
        assert_eq!(simplify(&(x() - c(0.0))).unwrap(), x());

        // there is no rule for zero on the left
        assert_eq!(simplify(&(c(0.0) - x())).unwrap(), c(0.0) - x());

        // folding wins over the zero identity
        let (expr, steps) = evaluate_with_steps(&(c(3.0) - c(0.0)), &empty()).unwrap();
        assert_eq!(expr, c(3.0));
        assert_eq!(steps, vec![Step::FoldConstant]);
    }

    #[test]
    fn multiply_rules() {
        assert_eq!(simplify(&(c(0.0) * x())).unwrap(), c(0.0));
        assert_eq!(simplify(&(x() * c(0.0))).unwrap(), c(0.0));
        assert_eq!(simplify(&(c(1.0) * x())).unwrap(), x());
        assert_eq!(simplify(&(x() * c(1.0))).unwrap(), x());
        assert_eq!(simplify(&(c(2.0) * c(3.0))).unwrap(), c(6.0));
        assert_eq!(simplify(&(x() * y())).unwrap(), x() * y());
    }

    #[test]
    fn multiply_zero_short_circuits() {
        let (expr, steps) = evaluate_with_steps(&(c(f64::NAN) * c(0.0)), &empty()).unwrap();
        assert_eq!(expr, c(0.0));
        assert_eq!(steps, vec![Step::MultiplyZero]);

        let expr = simplify(&(c(0.0) * c(0.0))).unwrap();
        assert_eq!(expr, c(0.0));

        let expr = simplify(&(c(-5.0) * c(0.0))).unwrap();
        assert!(expr.as_constant().unwrap().is_sign_positive());
    }

    #[test]
    fn divide_rules() {
        assert_eq!(simplify(&(c(6.0) / c(3.0))).unwrap(), c(2.0));
        assert_eq!(simplify(&(c(0.0) / x())).unwrap(), c(0.0));
        assert_eq!(simplify(&(x() / c(1.0))).unwrap(), x());
        assert_eq!(simplify(&(x() / y())).unwrap(), x() / y());
    }

    #[test]
    fn divide_by_zero() {
        let err = simplify(&(c(5.0) / c(0.0))).unwrap_err();
        assert_eq!(err, DivisionByZero { dividend: c(5.0) });

        let err = simplify(&(x() / c(0.0))).unwrap_err();
        assert_eq!(err, DivisionByZero { dividend: x() });
    }

    #[test]
    fn zero_over_zero_is_nan() {
        let expr = simplify(&(c(0.0) / c(0.0))).unwrap();
        assert!(expr.as_constant().unwrap().is_nan());
    }

    #[test]
    fn divide_by_evaluated_zero() {
        // `y - y` is not simplified symbolically, so this only fails once `y` is bound
        let expr = x() / (y() - y());
        assert_eq!(simplify(&expr).unwrap(), expr);

        let env = Environment::from([("y", 2.0)]);
        let err = evaluate(&expr, &env).unwrap_err();
        assert_eq!(err.dividend, x());
    }

    #[test]
    fn division_by_zero_propagates() {
        let expr = Expr::sin(c(1.0) + x() / c(0.0)) * c(0.0);
        assert!(simplify(&expr).is_err());
    }

    #[test]
    fn power_rules() {
        assert_eq!(simplify(&Expr::pow(c(1.0), x())).unwrap(), c(1.0));
        assert_eq!(simplify(&Expr::pow(x(), c(0.0))).unwrap(), c(1.0));
        assert_eq!(simplify(&Expr::pow(x(), c(1.0))).unwrap(), x());
        assert_eq!(simplify(&Expr::pow(c(2.0), c(3.0))).unwrap(), c(8.0));
        assert_eq!(simplify(&Expr::pow(x(), y())).unwrap(), Expr::pow(x(), y()));
    }

    #[test]
    fn power_zero_left_wins() {
        let (expr, steps) = evaluate_with_steps(&Expr::pow(c(0.0), c(0.0)), &empty()).unwrap();
        assert_eq!(expr, c(0.0));
        assert_eq!(steps, vec![Step::PowerZeroLeft]);

        // the base is returned as-is
        let expr = simplify(&Expr::pow(c(-0.0), x())).unwrap();
        assert!(expr.as_constant().unwrap().is_sign_negative());
    }

    #[test]
    fn trigonometry_rules() {
        assert_eq!(simplify(&Expr::sin(c(0.0))).unwrap(), c(0.0));
        assert_eq!(simplify(&Expr::cos(c(0.0))).unwrap(), c(1.0));
        assert_eq!(simplify(&Expr::sin(x())).unwrap(), Expr::sin(x()));
        assert_eq!(simplify(&Expr::cos(x() * c(1.0))).unwrap(), Expr::cos(x()));

        let value = simplify(&Expr::sin(c(std::f64::consts::FRAC_PI_2))).unwrap();
        assert_float_absolute_eq!(value.as_constant().unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn constant_folding() {
        for (a, b) in [(1.5, 2.0), (-3.0, 3.0), (10.0, 0.5)] {
            assert_eq!(simplify(&(c(a) + c(b))).unwrap(), c(a + b));
            assert_eq!(simplify(&(c(a) - c(b))).unwrap(), c(a - b));
            assert_eq!(simplify(&(c(a) * c(b))).unwrap(), c(a * b));
            assert_eq!(simplify(&Expr::pow(c(a), c(b))).unwrap(), c(a.powf(b)));
            assert_eq!(simplify(&Expr::sin(c(a))).unwrap(), c(a.sin()));
            assert_eq!(simplify(&Expr::cos(c(a))).unwrap(), c(a.cos()));
        }
    }

    #[test]
    fn constant_folding_to_nan() {
        // a negative base with a fractional exponent has no real value
        let expr = simplify(&Expr::pow(c(-3.0), c(7.25))).unwrap();
        assert!(expr.as_constant().unwrap().is_nan());
    }

    #[test]
    fn non_finite_over_zero() {
        let err = simplify(&(c(f64::NAN) / c(0.0))).unwrap_err();
        assert!(err.dividend.as_constant().unwrap().is_nan());

        let err = simplify(&(c(f64::INFINITY) / c(0.0))).unwrap_err();
        assert_eq!(err.dividend, c(f64::INFINITY));
    }

    #[test]
    fn steps_are_post_order() {
        let expr = (c(0.0) + x()) * Expr::sin(c(0.0) * y());
        let env = Environment::from([("y", 4.0)]);
        let (expr, steps) = evaluate_with_steps(&expr, &env).unwrap();
        assert_eq!(expr, c(0.0));
        assert_eq!(steps, vec![
            Step::AddZero,
            Step::Substitute,
            Step::MultiplyZero,
            Step::Sin,
            Step::MultiplyZero,
        ]);
    }

    #[test]
    fn idempotence() {
        let envs = [empty(), Environment::from([("x", 0.7)]), Environment::from([("x", 0.7), ("y", 1.3)])];
        for expr in samples() {
            for env in &envs {
                let once = evaluate(&expr, env).unwrap();
                let twice = evaluate(&once, env).unwrap();
                assert_eq!(twice, once, "evaluating `{expr}` is not idempotent");
            }
        }
    }

    #[test]
    fn identity_folding() {
        for expr in samples() {
            let simplified = simplify(&expr).unwrap();
            assert_eq!(simplify(&(c(0.0) + expr.clone())).unwrap(), simplified);
            assert_eq!(simplify(&(expr.clone() * c(1.0))).unwrap(), simplified);
            assert_eq!(simplify(&(expr.clone() / c(1.0))).unwrap(), simplified);
            assert_eq!(simplify(&Expr::pow(expr.clone(), c(1.0))).unwrap(), simplified);

            // `0^0` and `1^0` are handled by the rules on the base
            if !simplified.is_constant_value(0.0) && !simplified.is_constant_value(1.0) {
                assert_eq!(simplify(&Expr::pow(expr.clone(), c(0.0))).unwrap(), c(1.0));
            }
        }
    }

    #[test]
    fn complete_environment_yields_constant() {
        let env = Environment::from([("x", 0.7), ("y", 1.3)]);
        for expr in samples() {
            assert!(expr.variables().iter().all(|name| env.get_var(name).is_some()));
            let result = evaluate(&expr, &env).unwrap();
            assert!(result.as_constant().is_some(), "`{expr}` evaluated to `{result}`");
        }
    }

    #[test]
    fn unbound_variables_stay_symbolic() {
        let env = Environment::from([("x", 0.7)]);
        for expr in samples() {
            let result = evaluate(&expr, &env).unwrap();
            assert!(!result.variables().contains("x"), "`{result}` still contains `x`");
            for name in result.variables() {
                assert!(expr.variables().contains(name));
            }
        }
    }
}
