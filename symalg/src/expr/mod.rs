//! The expression tree manipulated by every other module in this crate.
//!
//! An [`Expr`] is a closed set of node variants: numeric [`Expr::Constant`]s, named
//! [`Expr::Variable`]s, and [`Expr::Binary`] / [`Expr::Unary`] operator nodes. Every node owns its
//! children exclusively through a [`Box`], so a tree can never contain a cycle or share a subtree
//! with another tree. Nodes are never mutated in place; every transformation in this crate builds
//! and returns a new tree.
//!
//! # Structural equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural**. Two expressions are equal if:
//!
//! - They are the same variant.
//! - If both are [`Expr::Constant`], their values compare equal as [`f64`]s (so `NaN` is never
//! equal to anything, and `0.0` equals `-0.0`).
//! - If both are [`Expr::Variable`], their names are equal.
//! - If both are operator nodes, the operators are the same and the operands are recursively
//! equal, **in order**.
//!
//! Structural equality is not semantic equality. `x + y` and `y + x` are different trees, and so
//! are `2 * x` and `x * 2`.
//!
//! ```
//! use symalg::expr::Expr;
//!
//! let a = Expr::add(Expr::variable("x"), Expr::constant(1.0));
//! let b = Expr::variable("x") + Expr::constant(1.0);
//! assert_eq!(a, b);
//! assert_ne!(a, Expr::constant(1.0) + Expr::variable("x"));
//! assert_eq!(a.to_string(), "x + 1");
//! ```

mod iter;

use iter::ExprIter;
use std::{collections::BTreeSet, fmt, ops::{Add, Div, Mul, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence of an expression, used to decide where parentheses are needed when printing.
///
/// Variants are ordered from lowest to highest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Addition and subtraction.
    Term,

    /// Multiplication and division.
    Factor,

    /// A negative numeric literal, such as `-2`.
    Neg,

    /// Exponentiation.
    Exp,

    /// Literals, variables, and function-style operators such as `sin(x)`.
    Atom,
}

/// The associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,

    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Exp => Precedence::Exp,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
            Self::Exp => Associativity::Right,
        }
    }

    /// Returns the symbol used to print the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }

    /// Applies the operator to two numbers, using IEEE 754 semantics.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Exp => lhs.powf(rhs),
        }
    }
}

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Sin,
    Cos,
}

impl UnaryOpKind {
    /// Returns the name used to print the operator in call form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }

    /// Applies the operator to a number, in radians.
    pub fn apply(&self, operand: f64) -> f64 {
        match self {
            Self::Sin => operand.sin(),
            Self::Cos => operand.cos(),
        }
    }
}

/// A node in an expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric literal, such as `2` or `3.14`.
    Constant(f64),

    /// A named variable, such as `x` or `y`.
    Variable(String),

    /// A binary operator applied to a left and right operand.
    Binary(BinOpKind, Box<Expr>, Box<Expr>),

    /// A unary operator applied to a single operand.
    Unary(UnaryOpKind, Box<Expr>),
}

impl Expr {
    /// Creates a [`Expr::Constant`].
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a [`Expr::Variable`] with the given name.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a [`Expr::Binary`] node from already-built operands.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Creates a [`Expr::Unary`] node from an already-built operand.
    pub fn unary(op: UnaryOpKind, operand: Expr) -> Self {
        Self::Unary(op, Box::new(operand))
    }

    /// `lhs + rhs`
    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Add, lhs, rhs)
    }

    /// `lhs - rhs`
    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Sub, lhs, rhs)
    }

    /// `lhs * rhs`
    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Mul, lhs, rhs)
    }

    /// `lhs / rhs`
    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Div, lhs, rhs)
    }

    /// `base ^ exponent`
    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Self::binary(BinOpKind::Exp, base, exponent)
    }

    /// `sin(operand)`
    pub fn sin(operand: Expr) -> Self {
        Self::unary(UnaryOpKind::Sin, operand)
    }

    /// `cos(operand)`
    pub fn cos(operand: Expr) -> Self {
        Self::unary(UnaryOpKind::Cos, operand)
    }

    /// If the expression is a [`Expr::Constant`], returns the contained number.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Constant`] equal to the given value.
    ///
    /// The comparison uses [`f64`] equality, so `-0.0` matches `0.0`.
    pub fn is_constant_value(&self, value: f64) -> bool {
        matches!(self, Self::Constant(n) if *n == value)
    }

    /// If the expression is a [`Expr::Variable`], returns a reference to its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression contains no [`Expr::Variable`]s.
    pub fn is_constant(&self) -> bool {
        self.post_order_iter()
            .all(|expr| !matches!(expr, Self::Variable(_)))
    }

    /// Returns the names of all variables in the expression, sorted and without duplicates.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(Self::as_variable)
            .collect()
    }

    /// Returns the number of nodes in the expression tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the precedence of the expression.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Constant(value) if value.is_sign_negative() => Precedence::Neg,
            Self::Constant(_) | Self::Variable(_) | Self::Unary(..) => Precedence::Atom,
            Self::Binary(op, ..) => op.precedence(),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

/// Returns true if `operand` must be wrapped in parentheses when printed as the given side of a
/// binary operator.
pub(crate) fn needs_parens(op: BinOpKind, operand: &Expr, is_rhs: bool) -> bool {
    let operand_precedence = operand.precedence();
    let op_precedence = op.precedence();
    if operand_precedence != op_precedence {
        return operand_precedence < op_precedence;
    }

    // equal precedence: only the side the operator groups towards may omit them
    match op.associativity() {
        Associativity::Left => is_rhs,
        Associativity::Right => !is_rhs,
    }
}

/// Writes the operand of a binary operator, wrapping it in parentheses if needed.
fn fmt_operand(f: &mut fmt::Formatter<'_>, op: BinOpKind, operand: &Expr, is_rhs: bool) -> fmt::Result {
    if needs_parens(op, operand, is_rhs) {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Binary(op, lhs, rhs) => {
                fmt_operand(f, *op, lhs, false)?;
                if *op == BinOpKind::Exp {
                    write!(f, "^")?;
                } else {
                    write!(f, " {} ", op.symbol())?;
                }
                fmt_operand(f, *op, rhs, true)
            },
            Self::Unary(op, operand) => write!(f, "{}({})", op.name(), operand),
        }
    }
}

/// Builds an unreduced [`BinOpKind::Add`] node. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::binary(BinOpKind::Add, self, rhs)
    }
}

/// Builds an unreduced [`BinOpKind::Sub`] node. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::binary(BinOpKind::Sub, self, rhs)
    }
}

/// Builds an unreduced [`BinOpKind::Mul`] node. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::binary(BinOpKind::Mul, self, rhs)
    }
}

/// Builds an unreduced [`BinOpKind::Div`] node. No simplification is done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::binary(BinOpKind::Div, self, rhs)
    }
}

#[cfg(test)]
mod tests {
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

    #[test]
    fn constructors_match_variants() {
        assert_eq!(
            Expr::pow(x(), c(2.0)),
            Expr::Binary(BinOpKind::Exp, Box::new(Expr::Variable("x".to_string())), Box::new(Expr::Constant(2.0))),
        );
        assert_eq!(
            Expr::cos(x()),
            Expr::Unary(UnaryOpKind::Cos, Box::new(Expr::Variable("x".to_string()))),
        );
        assert_eq!(x() - y(), Expr::sub(x(), y()));
        assert_eq!(x() / y(), Expr::div(x(), y()));
    }

    #[test]
    fn structural_equality() {
        assert_eq!(x() * c(2.0), x() * c(2.0));
        assert_ne!(x() * c(2.0), c(2.0) * x());
        assert_ne!(Expr::add(x(), y()), Expr::sub(x(), y()));
        assert_ne!(Expr::sin(x()), Expr::cos(x()));
        assert_ne!(x(), y());

        // value equality, not tolerance-based
        assert_ne!(c(0.1 + 0.2), c(0.3));
        assert_eq!(c(0.0), c(-0.0));
        assert_ne!(c(f64::NAN), c(f64::NAN));
    }

    #[test]
    fn inspectors() {
        assert_eq!(c(3.0).as_constant(), Some(3.0));
        assert_eq!(x().as_constant(), None);
        assert_eq!(x().as_variable(), Some("x"));
        assert!(c(-0.0).is_constant_value(0.0));
        assert!(!c(1.0).is_constant_value(0.0));

        let expr = Expr::sin(x() * y()) + Expr::pow(x(), c(2.0));
        assert!(!expr.is_constant());
        assert!(Expr::cos(c(1.0) / c(3.0)).is_constant());
        assert_eq!(expr.variables().into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(expr.node_count(), 8);
    }

    #[test]
    fn post_order() {
        let expr = Expr::sin(x()) * (y() + c(1.0));
        let visited = expr.post_order_iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<_>>();
        assert_eq!(visited, vec!["x", "sin(x)", "y", "1", "y + 1", "sin(x) * (y + 1)"]);
    }

    #[test]
    fn fmt_expr() {
        let expr = (x() + c(1.0)) * Expr::pow(x(), c(2.0)) - Expr::cos(x() / c(2.0));
        assert_eq!(expr.to_string(), "(x + 1) * x^2 - cos(x / 2)");
    }

    #[test]
    fn fmt_associativity() {
        assert_eq!((x() - y() - c(1.0)).to_string(), "x - y - 1");
        assert_eq!((x() - (y() - c(1.0))).to_string(), "x - (y - 1)");
        assert_eq!(Expr::pow(x(), Expr::pow(y(), c(2.0))).to_string(), "x^y^2");
        assert_eq!(Expr::pow(Expr::pow(x(), y()), c(2.0)).to_string(), "(x^y)^2");
        assert_eq!((x() / (y() * c(2.0))).to_string(), "x / (y * 2)");
    }

    #[test]
    fn fmt_negative_constants() {
        assert_eq!(Expr::pow(c(-2.0), x()).to_string(), "(-2)^x");
        assert_eq!((c(-2.0) * x()).to_string(), "-2 * x");
        assert_eq!(Expr::pow(x(), c(-1.0)).to_string(), "x^(-1)");
        assert_eq!(c(0.5).to_string(), "0.5");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let expr = Expr::sin(Expr::pow(x(), c(2.0)) / (y() - c(0.5)));
        let serialized = serde_json::to_string(&expr).expect("serialize expression");
        let decoded: Expr = serde_json::from_str(&serialized).expect("deserialize expression");
        assert_eq!(decoded, expr);
    }
}
