use crate::domain::{entities::GenerationPlan, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Model names and namespaces become PHP identifiers and path segments.
    pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidIdentifier {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = value.chars();
        match chars.next() {
            None => return Err(invalid("cannot be empty")),
            Some(c) if c.is_ascii_digit() => return Err(invalid("cannot start with a digit")),
            Some(_) => {}
        }

        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        Ok(())
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
