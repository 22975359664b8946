//! Reduction rules for addition.

use crate::{
    eval::{rules::fold_constant, step::Step},
    expr::{BinOpKind, Expr},
    step_collector::StepCollector,
};

/// `0+a = a`
/// `a+0 = a`
///
/// The left operand is checked first, so `0+0` keeps the right operand.
pub fn add_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_constant_value(0.0) {
        rhs.clone()
    } else if rhs.is_constant_value(0.0) {
        lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules, in order.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(lhs, rhs, step_collector)
        .or_else(|| fold_constant(BinOpKind::Add, lhs, rhs, step_collector))
}
