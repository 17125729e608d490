// SPDX-License-Identifier: MIT

//! Operator registry
//!
//! Maps an [`Operator`] to a factory that builds a binary node from two
//! operands. Operator families add themselves through [`OperatorRegistry::register`],
//! so new families never touch the lookup code.

use super::expression::Expression;
use super::operator::Operator;
use super::{relation, text};
use crate::error::{FxError, FxResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Builds a binary node from its left and right operands
pub type Factory =
    Arc<dyn Fn(Box<dyn Expression>, Box<dyn Expression>) -> Box<dyn Expression> + Send + Sync>;

/// Lookup from operator to node factory.
///
/// Registration takes `&mut self`, lookups take `&self`: once a registry is
/// shared it is read-only.
#[derive(Clone, Default)]
pub struct OperatorRegistry {
    factories: HashMap<Operator, Factory>,
}

impl OperatorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry populated with the relational and text families.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        relation::register(&mut registry);
        text::register(&mut registry);
        registry
    }

    /// Register a factory. A later registration for the same operator
    /// replaces the earlier one.
    pub fn register<F>(&mut self, op: Operator, factory: F)
    where
        F: Fn(Box<dyn Expression>, Box<dyn Expression>) -> Box<dyn Expression>
            + Send
            + Sync
            + 'static,
    {
        log::debug!("Registered factory for operator '{}'", op);
        self.factories.insert(op, Arc::new(factory));
    }

    /// Build the node for `op` from two operands.
    pub fn create(
        &self,
        op: &Operator,
        left: Box<dyn Expression>,
        right: Box<dyn Expression>,
    ) -> FxResult<Box<dyn Expression>> {
        match self.factories.get(op) {
            Some(factory) => Ok(factory(left, right)),
            None => {
                log::warn!("No factory registered for operator '{}'", op);
                Err(FxError::no_factory(op.clone()))
            }
        }
    }

    pub fn contains(&self, op: &Operator) -> bool {
        self.factories.contains_key(op)
    }

    /// Registered operators, sorted by token.
    pub fn operators(&self) -> Vec<Operator> {
        let mut ops: Vec<Operator> = self.factories.keys().cloned().collect();
        ops.sort_by(|a, b| a.token().cmp(b.token()));
        ops
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("operators", &self.operators())
            .finish()
    }
}

static STANDARD: Lazy<OperatorRegistry> = Lazy::new(OperatorRegistry::standard);

/// Process-wide standard registry, populated on first use.
pub fn standard_registry() -> &'static OperatorRegistry {
    &STANDARD
}
