//! A three-token calculator dispatching through a table of function values.

use std::collections::HashMap;
use std::num::ParseIntError;

use thiserror::Error;

use crate::arith::{add, divs, mul, sub};
use crate::render;

pub type BinaryOp = fn(i64, i64) -> i64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
    #[error("invalid operand {text:?}: {source}")]
    InvalidOperand {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Unsupported Operator: {0}")]
    UnsupportedOperator(String),
    #[error("cannot divide by 0")]
    DivideByZero,
}

/// Fixed operator symbol table; `/` always dispatches to [`divs`].
#[derive(Clone)]
pub struct Calculator {
    ops: HashMap<&'static str, BinaryOp>,
}

impl Calculator {
    /// Table holding `+`, `-`, `*` and `/`.
    pub fn new() -> Self {
        let mut ops: HashMap<&'static str, BinaryOp> = HashMap::new();
        ops.insert("+", add);
        ops.insert("-", sub);
        ops.insert("*", mul);
        ops.insert("/", divs);
        Self { ops }
    }

    /// Evaluate `[lhs, op, rhs]`. The left operand is parsed before the
    /// operator is looked up, and the operator before the right operand.
    pub fn eval<S: AsRef<str>>(&self, expr: &[S]) -> Result<i64, CalcError> {
        let [lhs, op, rhs] = expr else {
            let tokens: Vec<&str> = expr.iter().map(AsRef::as_ref).collect();
            return Err(CalcError::InvalidExpression(render::list(&tokens)));
        };
        let p1 = parse_operand(lhs.as_ref())?;
        let symbol = op.as_ref();
        let op_fn = self
            .ops
            .get(symbol)
            .ok_or_else(|| CalcError::UnsupportedOperator(symbol.to_string()))?;
        let p2 = parse_operand(rhs.as_ref())?;
        if symbol == "/" && p2 == 0 {
            return Err(CalcError::DivideByZero);
        }
        Ok(op_fn(p1, p2))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_operand(text: &str) -> Result<i64, CalcError> {
    text.parse::<i64>()
        .map_err(|source| CalcError::InvalidOperand {
            text: text.to_string(),
            source,
        })
}
