//! # Amount Conversion
//!
//! The transfer form holds a human-readable decimal string ("1.5"). The provider and the
//! contract take integer base units (wei, 18 decimals) as hex quantities, and the
//! transfer record stores the decimal value.

use alloy_primitives::utils::parse_ether;
use alloy_primitives::U256;

use crate::error::{AppError, Result};

/// Decimals of the native value unit.
pub const NATIVE_DECIMALS: usize = 18;

/// Convert a decimal amount string into base units.
///
/// Rejects blank, negative, and non-numeric input, and input with more fractional
/// digits than the unit has.
///
/// ```rust
/// use lib_core::amount::parse_amount;
///
/// let wei = parse_amount("1.5").unwrap();
/// assert_eq!(wei.to_string(), "1500000000000000000");
/// assert!(parse_amount("-1").is_err());
/// ```
pub fn parse_amount(amount: &str) -> Result<U256> {
    let amount = checked_decimal(amount)?;
    parse_ether(amount).map_err(|e| AppError::InvalidAmount(format!("'{amount}' is not a valid amount: {e}")))
}

/// Decimal value of an amount string, as stored on the transfer record.
pub fn amount_value(amount: &str) -> Result<f64> {
    let amount = checked_decimal(amount)?;
    amount
        .parse::<f64>()
        .map_err(|_| AppError::InvalidAmount(format!("'{amount}' is not a decimal number")))
}

/// Render base units as an EIP-1193 hex quantity (`0x0`, `0x14d1120d7b160000`).
pub fn to_quantity(value: U256) -> String {
    format!("0x{value:x}")
}

fn checked_decimal(amount: &str) -> Result<&str> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(AppError::InvalidAmount("Amount is required".to_string()));
    }
    if amount.starts_with('-') {
        return Err(AppError::InvalidAmount("Amount must not be negative".to_string()));
    }

    let mut dots = 0;
    let mut digits = 0;
    for c in amount.chars() {
        match c {
            '.' => dots += 1,
            '0'..='9' => digits += 1,
            _ => {
                return Err(AppError::InvalidAmount(format!("'{amount}' is not a decimal number")));
            }
        }
    }
    if dots > 1 || digits == 0 {
        return Err(AppError::InvalidAmount(format!("'{amount}' is not a decimal number")));
    }

    if let Some((_, fraction)) = amount.split_once('.') {
        if fraction.len() > NATIVE_DECIMALS {
            return Err(AppError::InvalidAmount(format!(
                "'{amount}' has more than {NATIVE_DECIMALS} decimal places"
            )));
        }
    }

    Ok(amount)
}
