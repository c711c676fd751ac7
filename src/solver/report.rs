use crate::expression::Expression;
use crate::solver::mode::SolveMode;

/// An accepted solution together with its intuition score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub expression: Expression,
    pub intuition_score: u32,
}

impl Solution {
    pub fn new(expression: Expression) -> Self {
        let intuition_score = expression.intuition_score();
        Self {
            expression,
            intuition_score,
        }
    }
}

/// Outcome of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub mode: SolveMode,
    pub target: i64,
    /// Attempts evaluated; in first mode, the attempts before the match
    pub attempts: u64,
    /// Accepted solutions in discovery order
    pub solutions: Vec<Solution>,
}

impl SearchReport {
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// The earliest solution found
    pub fn first(&self) -> Option<&Solution> {
        self.solutions.first()
    }

    /// Solutions sorted by intuition score, ties kept in discovery order
    pub fn ranked(&self) -> Vec<&Solution> {
        let mut ranked: Vec<&Solution> = self.solutions.iter().collect();
        ranked.sort_by_key(|solution| solution.intuition_score);
        ranked
    }

    pub fn most_intuitive(&self) -> Option<&Solution> {
        self.ranked().into_iter().next()
    }
}
