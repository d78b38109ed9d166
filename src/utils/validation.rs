use crate::utils::error::{AdapterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| AdapterError::InvalidServerParameters {
            message: format!("Missing required field: {}", field_name),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdapterError::InvalidServerParameters {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}
