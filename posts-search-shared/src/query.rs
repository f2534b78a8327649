//! Parsing of the `field:value` query argument.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rejection of a malformed `field:value` argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid query format {input:?}. Expected key:value")]
pub struct QueryParseError {
    /// The argument as given.
    pub input: String,
}

/// A single-field match query.
///
/// Parsed from an argument that splits into exactly two parts on `:`.
/// `"title"` and `"a:b:c"` are both rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatchQuery {
    /// Field to match against.
    pub field: String,
    /// Text matched using the field's analyzer.
    pub value: String,
}

impl FieldMatchQuery {
    /// Create a query for `field` matching `value`.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Parse a `field:value` argument.
    pub fn parse(input: &str) -> Result<Self, QueryParseError> {
        let parts: Vec<&str> = input.split(':').collect();
        match parts.as_slice() {
            [field, value] => Ok(Self::new(*field, *value)),
            _ => Err(QueryParseError {
                input: input.to_string(),
            }),
        }
    }
}

impl FromStr for FieldMatchQuery {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldMatchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.value)
    }
}
