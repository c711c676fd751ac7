use crate::expression::ast::Expression;

/// Score of a single number leaf
pub const LEAF_SCORE: u32 = 10;

impl Expression {
    /// Heuristic cost of following the expression by hand; lower is easier
    pub fn intuition_score(&self) -> u32 {
        match self {
            Expression::Number(_) => LEAF_SCORE,
            Expression::Operation { op, left, right } => {
                op.intuition_weight() + left.intuition_score() + right.intuition_score()
            }
        }
    }
}
