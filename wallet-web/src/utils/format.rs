//! # Formatting Utilities for Wallet Web
//!
//! Display helpers for the transfer status line.
//! For address formatting, use [`shared::utils::format_address`] or [`shared::utils::truncate_address`].

use lib_core::TransferPhase;

/// Status line for a transfer phase: CSS class and text. `None` when there is nothing to show.
///
/// ```rust
/// use lib_core::TransferPhase;
/// use wallet_web::utils::format::phase_status;
///
/// assert_eq!(phase_status(&TransferPhase::Idle), None);
/// assert_eq!(
///     phase_status(&TransferPhase::Confirming),
///     Some(("info", "Waiting for confirmation...".to_string()))
/// );
/// ```
pub fn phase_status(phase: &TransferPhase) -> Option<(&'static str, String)> {
    match phase {
        TransferPhase::Idle => None,
        TransferPhase::Broadcasting => Some(("info", "Confirm the transfer in your wallet".to_string())),
        TransferPhase::Confirming => Some(("info", "Waiting for confirmation...".to_string())),
        TransferPhase::Persisting => Some(("info", "Saving transfer...".to_string())),
        TransferPhase::Failed(reason) => Some(("error", reason.clone())),
        TransferPhase::Done { tx_hash } => Some(("success", format!("Transfer confirmed: {}", short_hash(tx_hash)))),
    }
}

/// Shorten a transaction hash for display (`0x1234...cdef`).
pub fn short_hash(hash: &str) -> String {
    match (hash.get(..6), hash.get(hash.len().saturating_sub(4)..)) {
        (Some(head), Some(tail)) if hash.len() > 14 => format!("{head}...{tail}"),
        _ => hash.to_string(),
    }
}

/// Inline hint for the destination field, `None` while the input looks fine or is empty.
pub fn address_hint(address: &str) -> Option<String> {
    let address = address.trim();
    if address.is_empty() {
        return None;
    }
    lib_utils::validate_eth_address(address).err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash("0x123"), "0x123");
        assert_eq!(
            short_hash("0x5c3a1f0b0b6e8a6c8a3b2c7d1e4f5a6b7c8d9f21aa"),
            "0x5c3a...21aa"
        );
    }

    #[test]
    fn test_failed_status_shows_reason() {
        let status = phase_status(&TransferPhase::Failed("Amount is required".to_string()));
        assert_eq!(status, Some(("error", "Amount is required".to_string())));
    }

    #[test]
    fn test_done_status() {
        let status = phase_status(&TransferPhase::Done { tx_hash: "0x123".to_string() });
        assert_eq!(status, Some(("success", "Transfer confirmed: 0x123".to_string())));
    }

    #[test]
    fn test_address_hint() {
        assert!(address_hint("").is_none());
        assert!(address_hint("0x5c3a1F0b0B6e8a6C8a3b2C7d1E4f5a6b7c8d9f21").is_none());
        assert!(address_hint("0xDEF").is_some());
    }
}
