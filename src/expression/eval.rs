use crate::expression::ast::{Expression, Operator};

/// Value produced by a division that has no exact integer result.
///
/// It cannot be told apart from an expression that genuinely evaluates to zero,
/// so a search for target 0 also accepts trees containing an invalid division.
pub const INVALID_DIVISION: i64 = 0;

#[inline]
fn divide_exact(left: i64, right: i64) -> i64 {
    if right == 0 || left % right != 0 {
        INVALID_DIVISION
    } else {
        left / right
    }
}

impl Operator {
    /// Apply this operator to two already evaluated operands
    #[inline]
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Operator::Multiply => left * right,
            Operator::Divide => divide_exact(left, right),
            Operator::Add => left + right,
            Operator::Subtract => left - right,
        }
    }
}

impl Expression {
    /// Evaluate the tree with integer-only arithmetic.
    ///
    /// Subtraction may go negative. Division by zero and inexact division
    /// both yield [`INVALID_DIVISION`] instead of failing.
    pub fn evaluate(&self) -> i64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Operation { op, left, right } => op.apply(left.evaluate(), right.evaluate()),
        }
    }
}
