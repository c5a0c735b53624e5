//! # Validation Utilities
//!
//! Input validation helpers for the transfer form.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate an account address: `0x` followed by 40 hex digits, any case.
pub fn validate_eth_address(address: &str) -> Result<(), String> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| format!("Address {} must start with 0x", address))?;

    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Address {} must be 40 hex digits after 0x", address));
    }
    Ok(())
}
