use crate::expression::ast::{Expression, Operator};

/// Algebraic role of a single leaf, accumulated on the path from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeafRole {
    pub value: i64,
    pub is_subtrahend: bool,
    pub is_divisor: bool,
}

impl Expression {
    /// Same tree up to swapping the operands of `+` and `×`
    pub fn structurally_equivalent(&self, other: &Expression) -> bool {
        match (self, other) {
            (Expression::Number(a), Expression::Number(b)) => a == b,
            (
                Expression::Operation {
                    op: op_a,
                    left: left_a,
                    right: right_a,
                },
                Expression::Operation {
                    op: op_b,
                    left: left_b,
                    right: right_b,
                },
            ) => {
                if op_a != op_b {
                    return false;
                }

                let in_order = left_a.structurally_equivalent(left_b)
                    && right_a.structurally_equivalent(right_b);

                in_order
                    || (op_a.is_commutative()
                        && left_a.structurally_equivalent(right_b)
                        && right_a.structurally_equivalent(left_b))
            }
            _ => false,
        }
    }

    /// Every leaf with its subtrahend and divisor flags, left to right.
    ///
    /// Descending into the right operand of `-` toggles the subtrahend flag,
    /// into the right operand of `÷` the divisor flag; all other edges keep both.
    pub fn leaf_roles(&self) -> Vec<LeafRole> {
        let mut roles = Vec::with_capacity(self.leaf_count());
        self.collect_leaf_roles(false, false, &mut roles);
        roles
    }

    fn collect_leaf_roles(&self, is_subtrahend: bool, is_divisor: bool, roles: &mut Vec<LeafRole>) {
        match self {
            Expression::Number(value) => roles.push(LeafRole {
                value: *value,
                is_subtrahend,
                is_divisor,
            }),
            Expression::Operation { op, left, right } => {
                left.collect_leaf_roles(is_subtrahend, is_divisor, roles);
                match op {
                    Operator::Subtract => right.collect_leaf_roles(!is_subtrahend, is_divisor, roles),
                    Operator::Divide => right.collect_leaf_roles(is_subtrahend, !is_divisor, roles),
                    Operator::Multiply | Operator::Add => {
                        right.collect_leaf_roles(is_subtrahend, is_divisor, roles)
                    }
                }
            }
        }
    }

    /// Both trees carry the same multiset of leaf roles.
    ///
    /// Operators other than the sign and reciprocal placement are not compared,
    /// so this is a heuristic rather than a full algebraic identity test.
    pub fn algebraically_equivalent(&self, other: &Expression) -> bool {
        let mut own = self.leaf_roles();
        let mut theirs = other.leaf_roles();
        if own.len() != theirs.len() {
            return false;
        }

        own.sort_unstable();
        theirs.sort_unstable();
        own == theirs
    }

    /// Whether two solutions should be treated as the same answer
    pub fn is_equivalent_to(&self, other: &Expression) -> bool {
        self.structurally_equivalent(other) || self.algebraically_equivalent(other)
    }
}
