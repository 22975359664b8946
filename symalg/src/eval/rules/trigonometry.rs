//! Reduction rules for trigonometric functions. Only constant operands are reduced; no
//! trigonometric identities are applied.

use crate::{
    eval::step::Step,
    expr::{Expr, UnaryOpKind},
    step_collector::StepCollector,
};

/// `sin(c)` for a constant `c`, in radians.
pub fn sin_constant(operand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let value = operand.as_constant()?;
    step_collector.push(Step::Sin);
    Some(Expr::Constant(UnaryOpKind::Sin.apply(value)))
}

/// `cos(c)` for a constant `c`, in radians.
pub fn cos_constant(operand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let value = operand.as_constant()?;
    step_collector.push(Step::Cos);
    Some(Expr::Constant(UnaryOpKind::Cos.apply(value)))
}
