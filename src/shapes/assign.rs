use std::slice;

use crate::expression::{Expression, Operator};
use crate::shapes::enumerate::Shape;
use crate::shapes::errors::AssignError;

/// Leaf value held by a slot that has not been filled yet
pub const UNASSIGNED_NUMBER: i64 = 0;
/// Operator held by a branch that has not been filled yet
pub const UNASSIGNED_OPERATOR: Operator = Operator::Multiply;

fn unassigned(shape: &Shape) -> Expression {
    match shape {
        Shape::Slot => Expression::Number(UNASSIGNED_NUMBER),
        Shape::Branch(left, right) => {
            Expression::operation(UNASSIGNED_OPERATOR, unassigned(left), unassigned(right))
        }
    }
}

fn reset_node(shape: &Shape, node: &mut Expression) {
    match (shape, node) {
        (Shape::Slot, node) => *node = Expression::Number(UNASSIGNED_NUMBER),
        (Shape::Branch(shape_left, shape_right), Expression::Operation { op, left, right }) => {
            *op = UNASSIGNED_OPERATOR;
            reset_node(shape_left, left);
            reset_node(shape_right, right);
        }
        (branch, node) => *node = unassigned(branch),
    }
}

fn fill_leaves(node: &mut Expression, numbers: &mut slice::Iter<'_, i64>) {
    match node {
        Expression::Number(value) => {
            if let Some(next) = numbers.next() {
                *value = *next;
            }
        }
        Expression::Operation { left, right, .. } => {
            fill_leaves(left, numbers);
            fill_leaves(right, numbers);
        }
    }
}

fn fill_branches(node: &mut Expression, operators: &mut slice::Iter<'_, Operator>) {
    if let Expression::Operation { op, left, right } = node {
        if let Some(next) = operators.next() {
            *op = *next;
        }
        fill_branches(left, operators);
        fill_branches(right, operators);
    }
}

/// Working tree for one shape, filled and reset once per attempt
#[derive(Debug, Clone)]
pub struct Assigner {
    shape: Shape,
    tree: Expression,
    leaf_count: usize,
    internal_count: usize,
}

impl Assigner {
    /// Clone `shape` into a fresh, unassigned working tree
    pub fn new(shape: &Shape) -> Self {
        Self {
            shape: shape.clone(),
            tree: unassigned(shape),
            leaf_count: shape.leaf_count(),
            internal_count: shape.internal_count(),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn tree(&self) -> &Expression {
        &self.tree
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn internal_count(&self) -> usize {
        self.internal_count
    }

    /// Place the leading numbers into the slots, left to right.
    ///
    /// Exactly `leaf_count` numbers are consumed; the rest are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::NotEnoughNumbers`] if fewer numbers than slots are supplied.
    pub fn fill_numbers(&mut self, numbers: &[i64]) -> Result<(), AssignError> {
        if numbers.len() < self.leaf_count {
            return Err(AssignError::NotEnoughNumbers {
                needed: self.leaf_count,
                available: numbers.len(),
            });
        }

        fill_leaves(&mut self.tree, &mut numbers.iter());
        Ok(())
    }

    /// Place the leading operators into the branches, root first (pre-order).
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::NotEnoughOperators`] if fewer operators than branches are supplied.
    pub fn fill_operators(&mut self, operators: &[Operator]) -> Result<(), AssignError> {
        if operators.len() < self.internal_count {
            return Err(AssignError::NotEnoughOperators {
                needed: self.internal_count,
                available: operators.len(),
            });
        }

        fill_branches(&mut self.tree, &mut operators.iter());
        Ok(())
    }

    /// Fill both numbers and operators and hand back the resulting tree
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Assigner::fill_numbers`] and [`Assigner::fill_operators`].
    pub fn assign(
        &mut self,
        numbers: &[i64],
        operators: &[Operator],
    ) -> Result<&Expression, AssignError> {
        self.fill_numbers(numbers)?;
        self.fill_operators(operators)?;
        Ok(&self.tree)
    }

    /// Restore the working tree to the unassigned template.
    ///
    /// Any slot that no longer holds a leaf gets a new placeholder leaf.
    pub fn reset(&mut self) {
        reset_node(&self.shape, &mut self.tree);
    }

    /// Whether the working tree is identical to a freshly created one
    pub fn is_unassigned(&self) -> bool {
        self.tree == unassigned(&self.shape)
    }
}
