//! Reduction rules for power expressions.

use crate::{
    eval::{rules::fold_constant, step::Step},
    expr::{BinOpKind, Expr},
    step_collector::StepCollector,
};

/// `0^a = 0`
///
/// This is checked before [`power_zero`], so `0^0` is `0`. The base itself is returned, so a base
/// of `-0` stays `-0`.
pub fn power_zero_left(lhs: &Expr, _: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_constant_value(0.0) {
        return None;
    }

    step_collector.push(Step::PowerZeroLeft);
    Some(lhs.clone())
}

/// `1^a = 1`
pub fn power_one_left(lhs: &Expr, _: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_constant_value(1.0) {
        return None;
    }

    step_collector.push(Step::PowerOneLeft);
    Some(lhs.clone())
}

/// `a^0 = 1`
pub fn power_zero(_: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_constant_value(0.0) {
        return None;
    }

    step_collector.push(Step::PowerZero);
    Some(Expr::Constant(1.0))
}

/// `a^1 = a`
pub fn power_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_constant_value(1.0) {
        return None;
    }

    step_collector.push(Step::PowerOne);
    Some(lhs.clone())
}

/// Applies all power rules, in order.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero_left(lhs, rhs, step_collector)
        .or_else(|| power_one_left(lhs, rhs, step_collector))
        .or_else(|| power_zero(lhs, rhs, step_collector))
        .or_else(|| power_one(lhs, rhs, step_collector))
        .or_else(|| fold_constant(BinOpKind::Exp, lhs, rhs, step_collector))
}
