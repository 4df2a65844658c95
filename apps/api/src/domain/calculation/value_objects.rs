use serde::{Deserialize, Serialize};
use validator::Validate;

/// A non-empty expression string as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Expression {
    #[validate(length(min = 1, max = 10000))]
    pub value: String,
}

impl Expression {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let expression = Self { value };
        expression.validate()?;
        Ok(expression)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
