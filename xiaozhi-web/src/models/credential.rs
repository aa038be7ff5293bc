use serde_json::Value;
use thiserror::Error;

/// Failures reading the persisted credential record.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("stored credential record is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The doctor's persisted session, as written by the login flow.
///
/// Only `token` is interpreted. Any other fields the login flow stores are
/// kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialRecord(Value);

impl CredentialRecord {
    pub fn parse(raw: &str) -> Result<Self, CredentialError> {
        Ok(Self(serde_json::from_str(raw)?))
    }

    pub fn token(&self) -> Option<&Value> {
        self.0.get("token")
    }

    /// Whether the record carries a usable token. JavaScript truthiness
    /// applies, since the login flow stores whatever its API returned.
    pub fn has_token(&self) -> bool {
        !self.0.is_null() && self.token().is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|float| float != 0.0 && !float.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
