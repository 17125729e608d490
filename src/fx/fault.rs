// SPDX-License-Identifier: MIT

//! Structured fault carried by failed values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Code used for every failure produced by the evaluator.
pub const FAILURE_CODE: i32 = -1;

/// A fault with a context label, a human-readable message and an optional
/// inner fault that it wraps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fault {
    pub code: i32,
    pub context: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner: Option<Box<Fault>>,
}

impl Fault {
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: FAILURE_CODE,
            context: context.into(),
            message: message.into(),
            inner: None,
        }
    }

    /// Wrap this fault under a new context label.
    pub fn with(&self, context: impl Into<String>) -> Self {
        Self {
            code: FAILURE_CODE,
            context: context.into(),
            message: "Error".to_string(),
            inner: Some(Box::new(self.clone())),
        }
    }

    /// The innermost fault of the chain.
    pub fn root_cause(&self) -> &Fault {
        let mut current = self;
        while let Some(inner) = current.inner.as_deref() {
            current = inner;
        }
        current
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.context, self.code, self.message)?;
        if let Some(inner) = &self.inner {
            write!(f, " -> [{}]", inner)?;
        }
        Ok(())
    }
}

impl std::error::Error for Fault {}
