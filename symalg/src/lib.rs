//! A symbolic algebra micro-engine.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes: numeric constants, named variables,
//! the binary operators `+`, `-`, `*`, `/`, `^`, and the unary operators `sin` and `cos`. Trees
//! are built directly in code; there is no parser.
//!
//! ```
//! use symalg::Expr;
//!
//! // x^2 + 3x
//! let x = Expr::variable("x");
//! let expr = Expr::pow(x.clone(), Expr::constant(2.0)) + Expr::constant(3.0) * x;
//! assert_eq!(expr.to_string(), "x^2 + 3 * x");
//! ```
//!
//! # Evaluation
//!
//! [`evaluate()`] reduces an expression under an [`Environment`] of variable bindings. Constants
//! are folded and no-op operations are removed; variables without a binding are left symbolic.
//! With an empty environment, evaluation is simplification ([`simplify()`]).
//!
//! ```
//! use symalg::{evaluate, Environment, Expr};
//!
//! let x = Expr::variable("x");
//! let y = Expr::variable("y");
//! let expr = x.clone() * y.clone() + Expr::constant(0.0);
//!
//! let env = Environment::from([("x", 4.0)]);
//! assert_eq!(evaluate(&expr, &env).unwrap(), Expr::constant(4.0) * y);
//! ```
//!
//! Every rewrite rule that fires can be observed with [`evaluate_with_steps`]. For more
//! information, see the [`mod@eval`] module.
//!
//! # Differentiation
//!
//! [`differentiate()`] computes the symbolic derivative of an expression with respect to a
//! variable, and returns it already simplified.
//!
//! ```
//! use symalg::{differentiate, Expr};
//!
//! let x = Expr::variable("x");
//! let expr = Expr::sin(x.clone());
//! assert_eq!(differentiate(&expr, "x").unwrap(), Expr::cos(x));
//! ```
//!
//! # Errors
//!
//! Dividing by the constant `0` is the only failure, reported as [`DivisionByZero`]. It can be
//! rendered as a diagnostic through [`DivisionByZero::into_error`]:
//!
//! ```
//! use symalg::{simplify, Expr};
//!
//! let expr = Expr::variable("x") / Expr::constant(0.0);
//! let err = simplify(&expr).unwrap_err();
//! let source = err.render();
//! assert_eq!(source, "x / 0");
//!
//! let mut report = Vec::new();
//! err.into_error().write_report("expr", &source, &mut report).unwrap();
//! ```

pub mod derivative;
pub mod env;
pub mod error;
pub mod eval;
pub mod expr;
pub mod step_collector;

pub use derivative::{differentiate, differentiate_with_steps};
pub use env::Environment;
pub use error::DivisionByZero;
pub use eval::{evaluate, evaluate_with_steps, simplify, step::Step};
pub use expr::{BinOpKind, Expr, UnaryOpKind};
pub use step_collector::StepCollector;
