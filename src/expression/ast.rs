use std::fmt;

/// The four arithmetic operators of the numbers round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl Operator {
    /// Every operator, in enumeration order
    pub const ALL: [Operator; 4] = [
        Operator::Multiply,
        Operator::Divide,
        Operator::Add,
        Operator::Subtract,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }

    /// Cost this operator adds to an expression's intuition score
    pub fn intuition_weight(self) -> u32 {
        match self {
            Operator::Multiply => 30,
            Operator::Divide => 50,
            Operator::Add => 20,
            Operator::Subtract => 30,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Add)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A binary expression tree: either a number leaf or an operator with two owned operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Operation {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn number(value: i64) -> Self {
        Expression::Number(value)
    }

    pub fn operation(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Operation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Number(_))
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Operation { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn operator_count(&self) -> usize {
        match self {
            Expression::Number(_) => 0,
            Expression::Operation { left, right, .. } => {
                1 + left.operator_count() + right.operator_count()
            }
        }
    }
}
