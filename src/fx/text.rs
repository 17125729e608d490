// SPDX-License-Identifier: MIT

//! Text operator family: `~=` (substring containment)

use super::expression::{binary_node, Expression};
use super::fault::Fault;
use super::operator::Operator;
use super::registry::OperatorRegistry;
use super::value::Value;

/// Register the text family.
pub fn register(registry: &mut OperatorRegistry) {
    registry.register(Operator::Include, IncludeExpression::boxed);
}

binary_node! {
    /// `left ~= right`: true when the left text contains the right text.
    /// Matching is case-sensitive.
    IncludeExpression => Operator::Include
}

impl Expression for IncludeExpression {
    fn evaluate(&self) -> Value {
        let (lv, rv) = self.binary.evaluate_operands();

        if let Some(fault) = lv.fault() {
            return Value::failed(fault.with("LH Error"));
        }
        if let Some(fault) = rv.fault() {
            return Value::failed(fault.with("RH Error"));
        }
        if lv.is_numeric() {
            return Value::failed(Fault::new("IncludeOperands", "LV is numeric"));
        }
        if rv.is_numeric() {
            return Value::failed(Fault::new("IncludeOperands", "RV is numeric"));
        }

        match (&lv, &rv) {
            (Value::Text(haystack), Value::Text(needle)) => {
                Value::boolean(haystack.contains(needle.as_str()))
            }
            (Value::Text(_), _) => {
                Value::failed(Fault::new("IncludeOperands", "RV text is absent"))
            }
            _ => Value::failed(Fault::new("IncludeOperands", "LV text is absent")),
        }
    }
}
