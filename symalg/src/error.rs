//! The error produced when evaluation divides by the constant zero.

use crate::expr::{needs_parens, BinOpKind, Expr};
use ariadne::Fmt;
use std::{fmt, ops::Range};
use symalg_attrs::ErrorKind;
use symalg_error::{Error, EXPR};

/// An expression was divided by the constant `0`.
///
/// This is raised when the divisor evaluates to exactly `0`, unless the dividend is the constant
/// `0`, in which case `0 / 0` folds to `NaN`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "attempted to divide by zero",
    labels = ["this expression", "", "this divisor is zero"],
    help = format!("division by {} is undefined", "0".fg(EXPR)),
)]
pub struct DivisionByZero {
    /// The already-evaluated dividend of the failing division.
    pub dividend: Expr,
}

impl DivisionByZero {
    /// Renders the failing division, such as `(x + 1) / 0`.
    ///
    /// The spans returned by [`DivisionByZero::spans`] point into this string.
    pub fn render(&self) -> String {
        if needs_parens(BinOpKind::Div, &self.dividend, false) {
            format!("({}) / 0", self.dividend)
        } else {
            format!("{} / 0", self.dividend)
        }
    }

    /// Returns the spans of the dividend, the operator, and the divisor in
    /// [`DivisionByZero::render`], in that order.
    pub fn spans(&self) -> Vec<Range<usize>> {
        let source = self.render();
        let divisor_start = source.len() - 1;
        let operator_start = divisor_start - 2;
        vec![
            0..operator_start - 1,
            operator_start..operator_start + 1,
            divisor_start..source.len(),
        ]
    }

    /// Converts this into an [`Error`] that can be reported against [`DivisionByZero::render`].
    pub fn into_error(self) -> Error {
        Error::new(self.spans(), self)
    }
}

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attempted to divide `{}` by zero", self.dividend)
    }
}

impl std::error::Error for DivisionByZero {}
