//! Reduction rules for subtraction.
//!
//! Unlike addition, constants are folded **before** the zero identity is checked, and there is no
//! rule for a zero on the left: `0-a` stays as it is.

use crate::{
    eval::{rules::fold_constant, step::Step},
    expr::{BinOpKind, Expr},
    step_collector::StepCollector,
};

/// `a-0 = a`
pub fn subtract_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_constant_value(0.0) {
        return None;
    }

    step_collector.push(Step::SubtractZero);
    Some(lhs.clone())
}

/// Applies all subtraction rules, in order.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constant(BinOpKind::Sub, lhs, rhs, step_collector)
        .or_else(|| subtract_zero(lhs, rhs, step_collector))
}
