//! Implementation of the reduction rules applied to each operator.
//!
//! Each rule in this module is a function that takes the already-evaluated operands as arguments,
//! and returns `Some(expr)` with the reduced expression if the rule applies, or `None` if the rule
//! does not apply. The rules for one operator are tried in a fixed order, and the first one that
//! applies wins. The order matters: `0*NaN` is `0` and not `NaN`, and `0^0` is `0` and not `1`.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;
pub mod subtract;
pub mod trigonometry;

use crate::{
    error::DivisionByZero,
    expr::{BinOpKind, Expr, UnaryOpKind},
    step_collector::StepCollector,
};
use super::step::Step;

/// `a op b = c` if `a` and `b` are both constants.
pub fn fold_constant(
    op: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let value = op.apply(lhs.as_constant()?, rhs.as_constant()?);
    step_collector.push(Step::FoldConstant);
    Some(Expr::Constant(value))
}

/// Reduces a binary operator applied to already-evaluated operands. If no rule applies, the
/// operator is rebuilt around the operands unchanged.
pub fn reduce_binary(
    op: BinOpKind,
    lhs: Expr,
    rhs: Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, DivisionByZero> {
    let reduced = match op {
        BinOpKind::Add => add::all(&lhs, &rhs, step_collector),
        BinOpKind::Sub => subtract::all(&lhs, &rhs, step_collector),
        BinOpKind::Mul => multiply::all(&lhs, &rhs, step_collector),
        BinOpKind::Div => divide::all(&lhs, &rhs, step_collector)?,
        BinOpKind::Exp => power::all(&lhs, &rhs, step_collector),
    };

    Ok(reduced.unwrap_or_else(|| Expr::binary(op, lhs, rhs)))
}

/// Reduces a unary operator applied to an already-evaluated operand. If no rule applies, the
/// operator is rebuilt around the operand unchanged.
pub fn reduce_unary(
    op: UnaryOpKind,
    operand: Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    let reduced = match op {
        UnaryOpKind::Sin => trigonometry::sin_constant(&operand, step_collector),
        UnaryOpKind::Cos => trigonometry::cos_constant(&operand, step_collector),
    };

    reduced.unwrap_or_else(|| Expr::unary(op, operand))
}
