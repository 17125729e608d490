// SPDX-License-Identifier: MIT

//! Operator tokens

use crate::error::{FxError, FxResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary operator tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Operator {
    /// Sentinel for tokens that failed to parse
    Unknown,
    /// <
    Less,
    /// >
    Greater,
    /// ==
    Equal,
    /// <=
    LessOrEqual,
    /// >=
    GreaterOrEqual,
    /// !=
    NotEqual,
    /// ~= (text contains)
    Include,
    /// Token introduced by an extension family
    Custom(String),
}

impl Operator {
    /// The built-in operators, in declaration order.
    pub const BUILTIN: [Operator; 7] = [
        Operator::Less,
        Operator::Greater,
        Operator::Equal,
        Operator::LessOrEqual,
        Operator::GreaterOrEqual,
        Operator::NotEqual,
        Operator::Include,
    ];

    /// Parse a built-in operator token. Matching is byte-exact: no trimming,
    /// no case folding.
    pub fn parse(token: &str) -> FxResult<Operator> {
        match token {
            "<" => Ok(Operator::Less),
            ">" => Ok(Operator::Greater),
            "==" => Ok(Operator::Equal),
            "<=" => Ok(Operator::LessOrEqual),
            ">=" => Ok(Operator::GreaterOrEqual),
            "!=" => Ok(Operator::NotEqual),
            "~=" => Ok(Operator::Include),
            _ => Err(FxError::unknown_operator(token)),
        }
    }

    /// Name an operator token for registry extension. Built-in tokens map to
    /// their built-in variant and the empty token to `Unknown`.
    pub fn custom(token: impl Into<String>) -> Operator {
        let token = token.into();
        if token.is_empty() {
            return Operator::Unknown;
        }
        Operator::parse(&token).unwrap_or(Operator::Custom(token))
    }

    pub fn token(&self) -> &str {
        match self {
            Operator::Unknown => "",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::Equal => "==",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
            Operator::NotEqual => "!=",
            Operator::Include => "~=",
            Operator::Custom(token) => token,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operator {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::parse(s)
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.token().to_string()
    }
}

impl From<String> for Operator {
    fn from(token: String) -> Self {
        Operator::custom(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(Operator::parse("<").unwrap(), Operator::Less);
        assert_eq!(Operator::parse(">").unwrap(), Operator::Greater);
        assert_eq!(Operator::parse("==").unwrap(), Operator::Equal);
        assert_eq!(Operator::parse("<=").unwrap(), Operator::LessOrEqual);
        assert_eq!(Operator::parse(">=").unwrap(), Operator::GreaterOrEqual);
        assert_eq!(Operator::parse("!=").unwrap(), Operator::NotEqual);
        assert_eq!(Operator::parse("~=").unwrap(), Operator::Include);
    }

    #[test]
    fn test_parse_is_exact() {
        assert!(Operator::parse("").is_err());
        assert!(Operator::parse("&&").is_err());
        assert!(Operator::parse(" <").is_err());
        assert!(Operator::parse("< ").is_err());
        assert!(Operator::parse("=").is_err());
        assert!(Operator::parse("=<").is_err());
    }

    #[test]
    fn test_parse_error_carries_token() {
        match Operator::parse("&&") {
            Err(FxError::UnknownOperator { token }) => assert_eq!(token, "&&"),
            other => panic!("Expected UnknownOperator, got {:?}", other),
        }
    }

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", Operator::Unknown), "");
        assert_eq!(format!("{}", Operator::Less), "<");
        assert_eq!(format!("{}", Operator::GreaterOrEqual), ">=");
        assert_eq!(format!("{}", Operator::Include), "~=");
        assert_eq!(format!("{}", Operator::custom("CUSTOM")), "CUSTOM");
    }

    #[test]
    fn test_builtin_tokens_parse_back() {
        for op in Operator::BUILTIN {
            assert_eq!(op.token().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_custom_normalises_builtin() {
        assert_eq!(Operator::custom("=="), Operator::Equal);
        assert_eq!(Operator::custom(""), Operator::Unknown);
        assert_eq!(
            Operator::custom("starts"),
            Operator::Custom("starts".to_string())
        );
    }

    #[test]
    fn test_serde_as_token() {
        let json = serde_json::to_string(&Operator::NotEqual).unwrap();
        assert_eq!(json, "\"!=\"");
        let op: Operator = serde_json::from_str("\"~=\"").unwrap();
        assert_eq!(op, Operator::Include);
    }
}
