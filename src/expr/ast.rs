//! Expression tree and pointwise evaluation.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::EvalError;

/// Builtin math functions callable from an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Exp,
    /// Natural logarithm.
    Log,
    Atan2,
}

impl MathFn {
    pub const ALL: [MathFn; 7] = [
        MathFn::Sin,
        MathFn::Cos,
        MathFn::Tan,
        MathFn::Sqrt,
        MathFn::Exp,
        MathFn::Log,
        MathFn::Atan2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Tan => "tan",
            MathFn::Sqrt => "sqrt",
            MathFn::Exp => "exp",
            MathFn::Log => "log",
            MathFn::Atan2 => "atan2",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            MathFn::Atan2 => 2,
            _ => 1,
        }
    }

    // Arity is enforced at parse time, so indexing into `args` is safe here.
    fn apply(&self, args: &[f64]) -> f64 {
        match self {
            MathFn::Sin => args[0].sin(),
            MathFn::Cos => args[0].cos(),
            MathFn::Tan => args[0].tan(),
            MathFn::Sqrt => args[0].sqrt(),
            MathFn::Exp => args[0].exp(),
            MathFn::Log => args[0].ln(),
            MathFn::Atan2 => args[0].atan2(args[1]),
        }
    }
}

static FUNCTIONS: Lazy<HashMap<&'static str, MathFn>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for f in MathFn::ALL {
        m.insert(f.name(), f);
    }
    m
});

static CONSTANTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([("pi", std::f64::consts::PI), ("e", std::f64::consts::E)])
});

pub fn lookup_function(name: &str) -> Option<MathFn> {
    FUNCTIONS.get(name).copied()
}

pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}

/// A compiled expression over the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(MathFn, Vec<Expr>),
}

impl Expr {
    /// Evaluate the tree at one sample point.
    ///
    /// Every node must come out finite. `sqrt(-1)`, `log(0)`, overflowing
    /// powers and the like all surface as [`EvalError::NotFinite`] rather
    /// than leaking NaN or infinities into a published series.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let v = match self {
            Expr::Const(c) => *c,
            Expr::Var => x,
            Expr::Neg(e) => -e.eval(x)?,
            Expr::Add(a, b) => a.eval(x)? + b.eval(x)?,
            Expr::Sub(a, b) => a.eval(x)? - b.eval(x)?,
            Expr::Mul(a, b) => a.eval(x)? * b.eval(x)?,
            Expr::Div(a, b) => {
                let rhs = b.eval(x)?;
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a.eval(x)? / rhs
            }
            Expr::Pow(a, b) => a.eval(x)?.powf(b.eval(x)?),
            Expr::Call(f, args) => {
                let mut vals = Vec::with_capacity(args.len());
                for arg in args {
                    vals.push(arg.eval(x)?);
                }
                f.apply(&vals)
            }
        };
        if v.is_finite() {
            Ok(v)
        } else {
            Err(EvalError::NotFinite)
        }
    }
}
