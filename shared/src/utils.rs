//! # Shared Utility Functions
//!
//! Common utility functions used by lib-core and wallet-web.
//!
//! ## Address Formatting
//!
//! Functions for shortening account addresses for display:
//! - [`format_address`] - Keep the `0x` prefix, the first N and last M hex digits
//! - [`truncate_address`] - [`format_address`] with 4/4 digits
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5c3a1F0b0B6e8a6C8a3b2C7d1E4f5a6b7c8d9f21";
//! assert_eq!(format_address(address, 4, 4), "0x5c3a...9f21");
//! ```

/// Shorten an address to its first `prefix_len` and last `suffix_len` digits.
///
/// A leading `0x` is kept and not counted. Addresses that would not get shorter
/// are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5c3a1F0b0B6e8a6C8a3b2C7d1E4f5a6b7c8d9f21";
/// assert_eq!(format_address(addr, 6, 4), "0x5c3a1F...9f21");
/// assert_eq!(format_address("0xABC", 4, 4), "0xABC");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (prefix, digits) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    // Addresses are ASCII hex, byte slicing is safe once the length is checked
    if !digits.is_ascii() || digits.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    format!(
        "{}{}...{}",
        prefix,
        &digits[..prefix_len],
        &digits[digits.len() - suffix_len..]
    )
}

/// [`format_address`] with a 4-digit head and tail.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
