//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Maximum length of an instrument identifier.
pub const MAX_TEST_TYPE_LENGTH: usize = 64;

/// Identifier of an instrument ("test type"), e.g. `rses` or `phq9`.
///
/// Lowercase ASCII letters, digits, `-` and `_` only, so the value can be
/// embedded in storage keys and file names unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TestType(String);

impl TestType {
    /// Creates a new TestType, returning error if empty or malformed.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("test_type"));
        }
        if id.len() > MAX_TEST_TYPE_LENGTH {
            return Err(ValidationError::invalid_format(
                "test_type",
                format!("longer than {} characters", MAX_TEST_TYPE_LENGTH),
            ));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(ValidationError::invalid_format(
                "test_type",
                format!("'{}' may only contain a-z, 0-9, '-' and '_'", id),
            ));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TestType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TestType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TestType> for String {
    fn from(value: TestType) -> Self {
        value.0
    }
}
