// SPDX-License-Identifier: MIT

//! Evaluation reports and their output formats

use crate::error::FxResult;
use crate::fx::{Expression, Operator, OperatorRegistry, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(format!("Unsupported output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Outcome of evaluating `left op right`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub left: Value,
    pub operator: Operator,
    pub right: Value,
    pub result: Value,
    /// Set when the result is a boolean
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truth: Option<bool>,
}

impl Report {
    /// Build `left op right` through the registry and evaluate it.
    pub fn evaluate(
        registry: &OperatorRegistry,
        left: Value,
        op: Operator,
        right: Value,
    ) -> FxResult<Self> {
        let node = registry.create(&op, Box::new(left.clone()), Box::new(right.clone()))?;
        let result = node.evaluate();
        let truth = result.is_boolean().then(|| result.is_true());
        Ok(Self {
            left,
            operator: op,
            right,
            result,
            truth,
        })
    }

    pub fn render(&self, format: OutputFormat) -> FxResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} => ", self.left, self.operator, self.right)?;
        match (self.truth, &self.result) {
            (Some(b), _) => write!(f, "{}", b),
            (None, result) => write!(f, "{}", result),
        }
    }
}
