// SPDX-License-Identifier: MIT

//! Condition evaluation
//!
//! A caller builds [`Value`] leaves, looks up a node factory for an
//! [`Operator`] in an [`OperatorRegistry`], and evaluates the resulting tree:
//! - `Value::dual("5")` and `Value::text("a")` are literals
//! - `registry.create(&Operator::Less, left, right)?` builds `left < right`
//! - `node.evaluate()` walks the tree bottom-up and returns a `Value`
//!
//! Failures travel through the same channel as data: a comparison that
//! cannot be made yields `Value::Failed`, which callers inspect with
//! [`Value::has_error`].

pub mod expression;
pub mod fault;
pub mod operator;
pub mod registry;
pub mod relation;
pub mod text;
pub mod value;

pub use expression::{BinaryExpression, Expression};
pub use fault::Fault;
pub use operator::Operator;
pub use registry::{standard_registry, Factory, OperatorRegistry};
pub use relation::{
    EqualExpression, GreaterExpression, GreaterOrEqualExpression, LessExpression,
    LessOrEqualExpression, NotEqualExpression,
};
pub use text::IncludeExpression;
pub use value::{Kind, Value};
