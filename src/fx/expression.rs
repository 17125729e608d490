// SPDX-License-Identifier: MIT

//! Expression contract and the binary node shape shared by all operators

use super::operator::Operator;
use super::value::Value;
use std::fmt;

/// Anything that can be evaluated to a [`Value`].
///
/// Evaluation never mutates the expression, so a tree can be evaluated
/// from several threads at once.
pub trait Expression: fmt::Debug + Send + Sync {
    fn evaluate(&self) -> Value;
}

/// A literal is its own evaluation.
impl Expression for Value {
    fn evaluate(&self) -> Value {
        self.clone()
    }
}

impl<E: Expression + ?Sized> Expression for Box<E> {
    fn evaluate(&self) -> Value {
        (**self).evaluate()
    }
}

/// An operator tag with two exclusively-owned operands.
#[derive(Debug)]
pub struct BinaryExpression {
    op: Operator,
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl BinaryExpression {
    pub fn new(op: Operator, left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
        Self { op, left, right }
    }

    pub fn operator(&self) -> &Operator {
        &self.op
    }

    pub fn left(&self) -> &dyn Expression {
        self.left.as_ref()
    }

    pub fn right(&self) -> &dyn Expression {
        self.right.as_ref()
    }

    /// Evaluate both operands once, left first.
    pub fn evaluate_operands(&self) -> (Value, Value) {
        (self.left.evaluate(), self.right.evaluate())
    }
}

/// Declare an operator node: a struct wrapping a [`BinaryExpression`] tagged
/// with the given operator, with `new`, `boxed` and `binary`. The
/// [`Expression`] impl is written by hand for each node.
macro_rules! binary_node {
    ($(#[$meta:meta])* $name:ident => $op:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            binary: $crate::fx::expression::BinaryExpression,
        }

        impl $name {
            pub fn new(
                left: Box<dyn $crate::fx::expression::Expression>,
                right: Box<dyn $crate::fx::expression::Expression>,
            ) -> Self {
                Self {
                    binary: $crate::fx::expression::BinaryExpression::new($op, left, right),
                }
            }

            /// Factory shape accepted by the registry.
            pub fn boxed(
                left: Box<dyn $crate::fx::expression::Expression>,
                right: Box<dyn $crate::fx::expression::Expression>,
            ) -> Box<dyn $crate::fx::expression::Expression> {
                Box::new(Self::new(left, right))
            }

            pub fn binary(&self) -> &$crate::fx::expression::BinaryExpression {
                &self.binary
            }
        }
    };
}

pub(crate) use binary_node;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_evaluates_to_itself() {
        let value = Value::text("abc");
        assert_eq!(value.evaluate(), value);
        assert_eq!(Value::absent().evaluate(), Value::Absent);
    }

    #[test]
    fn test_boxed_expression() {
        let boxed: Box<dyn Expression> = Box::new(Value::number(4.0));
        assert_eq!(boxed.evaluate(), Value::Number(4.0));
    }

    #[test]
    fn test_binary_accessors() {
        let node = BinaryExpression::new(
            Operator::Less,
            Box::new(Value::number(1.0)),
            Box::new(Value::text("b")),
        );
        assert_eq!(node.operator(), &Operator::Less);
        assert_eq!(node.left().evaluate(), Value::Number(1.0));
        assert_eq!(node.right().evaluate(), Value::text("b"));
        assert_eq!(
            node.evaluate_operands(),
            (Value::Number(1.0), Value::text("b"))
        );
    }
}
