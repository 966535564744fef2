//! A small, sandboxed arithmetic language over a single variable `x`.
//!
//! The function scope demo lets the user type the curve definition at
//! runtime, so the text is compiled once into an [`Expr`] tree and then
//! evaluated per sample point. Nothing in here can touch the host: the
//! language knows numbers, `x`, the operators `+ - * / ^` (with `**` as an
//! alias for `^`), parentheses, a fixed table of math functions and the
//! constants `pi` and `e`.
//!
//! Compilation and evaluation fail independently:
//! * [`compile`] returns a [`ParseError`] for malformed text. The caller
//!   decides what a broken expression means for the curve.
//! * [`Expr::eval`] returns an [`EvalError`] for points where the math
//!   degenerates (division by zero, non-finite intermediates).

mod ast;
mod parser;

pub use ast::{lookup_constant, lookup_function, Expr, MathFn};

use thiserror::Error;

/// Why an expression string could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("unknown name '{0}'")]
    UnknownName(String),
    #[error("'{name}' takes {expected} argument(s), got {got}")]
    WrongArity {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("malformed number '{0}'")]
    BadNumber(String),
    #[error("expression is too long")]
    TooLong,
    #[error("expression nests too deeply")]
    TooDeep,
}

/// Why a compiled expression could not be evaluated at one sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NotFinite,
}

/// Compile an expression string into an evaluable tree.
pub fn compile(src: &str) -> Result<Expr, ParseError> {
    parser::parse(src)
}
