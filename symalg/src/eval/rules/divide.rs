//! Reduction rules for division, the only operator whose reduction can fail.
//!
//! The rules are tried in this order:
//!
//! 1. Both operands are constants: fold with float division. `0/0` is `NaN`; a nonzero constant
//!    divided by `0` is a [`DivisionByZero`]. `NaN` and infinities are nonzero, so `NaN/0` and
//!    `inf/0` fail too.
//! 2. `0/a = 0`
//! 3. `a/0` is a [`DivisionByZero`].
//! 4. `a/1 = a`

use crate::{
    error::DivisionByZero,
    eval::{rules::fold_constant, step::Step},
    expr::{BinOpKind, Expr},
    step_collector::StepCollector,
};

/// Fails if the divisor is the constant `0`, unless both operands are `0`, which folds to `NaN`
/// instead.
pub fn check_divisor(lhs: &Expr, rhs: &Expr) -> Result<(), DivisionByZero> {
    if rhs.is_constant_value(0.0) && !lhs.is_constant_value(0.0) {
        Err(DivisionByZero { dividend: lhs.clone() })
    } else {
        Ok(())
    }
}

/// `a/b = c` if `a` and `b` are both constants.
pub fn divide_constants(
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, DivisionByZero> {
    if lhs.as_constant().is_none() || rhs.as_constant().is_none() {
        return Ok(None);
    }

    check_divisor(lhs, rhs)?;
    Ok(fold_constant(BinOpKind::Div, lhs, rhs, step_collector))
}

/// `0/a = 0`
///
/// `0/0` is handled by [`divide_constants`].
pub fn divide_zero_left(lhs: &Expr, _: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_constant_value(0.0) {
        return None;
    }

    step_collector.push(Step::DivideZeroLeft);
    Some(Expr::Constant(0.0))
}

/// `a/1 = a`
pub fn divide_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_constant_value(1.0) {
        return None;
    }

    step_collector.push(Step::DivideOne);
    Some(lhs.clone())
}

/// Applies all division rules, in order.
pub fn all(
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, DivisionByZero> {
    if let Some(expr) = divide_constants(lhs, rhs, step_collector)? {
        return Ok(Some(expr));
    }

    if let Some(expr) = divide_zero_left(lhs, rhs, step_collector) {
        return Ok(Some(expr));
    }

    check_divisor(lhs, rhs)?;
    Ok(divide_one(lhs, rhs, step_collector))
}
