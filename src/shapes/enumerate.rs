use log::debug;
use std::fmt;

/// Unlabelled full binary tree topology: slots for numbers, branches for operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Slot,
    Branch(Box<Shape>, Box<Shape>),
}

impl Shape {
    pub fn branch(left: Shape, right: Shape) -> Self {
        Shape::Branch(Box::new(left), Box::new(right))
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Shape::Slot => 1,
            Shape::Branch(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn internal_count(&self) -> usize {
        match self {
            Shape::Slot => 0,
            Shape::Branch(left, right) => 1 + left.internal_count() + right.internal_count(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Slot => write!(f, "_"),
            Shape::Branch(left, right) => write!(f, "({} {})", left, right),
        }
    }
}

/// Every distinct shape with `internal` operator nodes.
///
/// Shapes are ordered by the size of the left subtree, then by the left
/// shape, then by the right shape. The count is the Catalan number of `internal`.
pub fn enumerate_shapes(internal: usize) -> Vec<Shape> {
    // by_size[n] holds every shape with n internal nodes
    let mut by_size: Vec<Vec<Shape>> = Vec::with_capacity(internal + 1);
    by_size.push(vec![Shape::Slot]);

    for size in 1..=internal {
        let mut shapes = Vec::new();
        for left_size in 0..size {
            let right_size = size - 1 - left_size;
            let (Some(lefts), Some(rights)) = (by_size.get(left_size), by_size.get(right_size))
            else {
                continue;
            };
            for left in lefts {
                for right in rights {
                    shapes.push(Shape::branch(left.clone(), right.clone()));
                }
            }
        }
        by_size.push(shapes);
    }

    let shapes = by_size.pop().unwrap_or_default();
    debug!(
        "Enumerated {} shapes with {} internal nodes",
        shapes.len(),
        internal
    );
    shapes
}
