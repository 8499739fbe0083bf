use crate::utils::error::{FleetError, Result};

pub fn validate_non_blank(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FleetError::Validation {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
) -> Result<()> {
    if value < min {
        return Err(FleetError::Validation {
            field: field_name.to_string(),
            reason: format!("Value {} must be at least {}", value, min),
        });
    }
    Ok(())
}
