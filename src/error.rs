// SPDX-License-Identifier: MIT

//! Typed error handling for fx-eval

use crate::fx::{Fault, Operator};
use thiserror::Error;

/// Errors returned by operations that do not flow through the value channel
#[derive(Debug, Error)]
pub enum FxError {
    /// Operator token is not one of the known tokens
    #[error("Unknown operator: '{token}'")]
    UnknownOperator { token: String },

    /// No factory has been registered for the operator
    #[error("No factory for operator: '{operator}'")]
    NoFactory { operator: Operator },

    /// Report serialization failed
    #[error("Failed to render report: {0}")]
    Render(String),
}

impl FxError {
    pub fn unknown_operator(token: impl Into<String>) -> Self {
        Self::UnknownOperator {
            token: token.into(),
        }
    }

    pub fn no_factory(operator: Operator) -> Self {
        Self::NoFactory { operator }
    }

    fn context(&self) -> &'static str {
        match self {
            FxError::UnknownOperator { .. } => "ParseOperator",
            FxError::NoFactory { .. } => "LookupFactory",
            FxError::Render(_) => "RenderReport",
        }
    }
}

impl From<&FxError> for Fault {
    fn from(err: &FxError) -> Self {
        Fault::new(err.context(), err.to_string())
    }
}

impl From<FxError> for Fault {
    fn from(err: FxError) -> Self {
        Fault::from(&err)
    }
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(err.to_string())
    }
}

impl From<serde_yaml::Error> for FxError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result type for fx-eval operations
pub type FxResult<T> = Result<T, FxError>;
