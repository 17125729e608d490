// SPDX-License-Identifier: MIT

//! Relational operator family: `<`, `>`, `==`, `<=`, `>=`, `!=`
//!
//! Every node is built from two primitives, [`Value::less_than`] and
//! [`Value::equals`]. Compound nodes evaluate each operand once and combine
//! the results with the boolean combinators, so a comparison fault reaching
//! a combinator surfaces as a "not bool" fault.

use super::expression::{binary_node, Expression};
use super::operator::Operator;
use super::registry::OperatorRegistry;
use super::value::Value;

/// Register the relational family.
pub fn register(registry: &mut OperatorRegistry) {
    registry.register(Operator::Less, LessExpression::boxed);
    registry.register(Operator::Greater, GreaterExpression::boxed);
    registry.register(Operator::Equal, EqualExpression::boxed);
    registry.register(Operator::LessOrEqual, LessOrEqualExpression::boxed);
    registry.register(Operator::GreaterOrEqual, GreaterOrEqualExpression::boxed);
    registry.register(Operator::NotEqual, NotEqualExpression::boxed);
}

binary_node! {
    /// `left < right`
    LessExpression => Operator::Less
}

impl Expression for LessExpression {
    fn evaluate(&self) -> Value {
        let (lv, rv) = self.binary.evaluate_operands();
        lv.less_than(&rv)
    }
}

binary_node! {
    /// `left > right`, evaluated as `right < left`
    GreaterExpression => Operator::Greater
}

impl Expression for GreaterExpression {
    fn evaluate(&self) -> Value {
        let (lv, rv) = self.binary.evaluate_operands();
        rv.less_than(&lv)
    }
}

binary_node! {
    /// `left == right`
    EqualExpression => Operator::Equal
}

impl Expression for EqualExpression {
    fn evaluate(&self) -> Value {
        let (lv, rv) = self.binary.evaluate_operands();
        lv.equals(&rv)
    }
}

binary_node! {
    /// `left <= right`
    LessOrEqualExpression => Operator::LessOrEqual
}

impl Expression for LessOrEqualExpression {
    fn evaluate(&self) -> Value {
        let (lv, rv) = self.binary.evaluate_operands();
        lv.less_than(&rv).logical_or(&lv.equals(&rv))
    }
}

binary_node! {
    /// `left >= right`
    GreaterOrEqualExpression => Operator::GreaterOrEqual
}

impl Expression for GreaterOrEqualExpression {
    fn evaluate(&self) -> Value {
        let (lv, rv) = self.binary.evaluate_operands();
        rv.less_than(&lv).logical_or(&lv.equals(&rv))
    }
}

binary_node! {
    /// `left != right`
    NotEqualExpression => Operator::NotEqual
}

impl Expression for NotEqualExpression {
    fn evaluate(&self) -> Value {
        let (lv, rv) = self.binary.evaluate_operands();
        lv.equals(&rv).logical_not()
    }
}
