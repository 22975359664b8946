//! Reduction rules for multiplication.

use crate::{
    eval::{rules::fold_constant, step::Step},
    expr::{BinOpKind, Expr},
    step_collector::StepCollector,
};

/// `0*a = 0`
/// `a*0 = 0`
///
/// This is checked before constants are folded, so the result is exactly `0` even when the other
/// operand is `NaN` or infinite.
pub fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_constant_value(0.0) && !rhs.is_constant_value(0.0) {
        return None;
    }

    step_collector.push(Step::MultiplyZero);
    Some(Expr::Constant(0.0))
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_constant_value(1.0) {
        rhs.clone()
    } else if rhs.is_constant_value(1.0) {
        lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Applies all multiplication rules, in order.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(lhs, rhs, step_collector)
        .or_else(|| multiply_one(lhs, rhs, step_collector))
        .or_else(|| fold_constant(BinOpKind::Mul, lhs, rhs, step_collector))
}
