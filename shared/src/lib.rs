//! # Shared Record Library
//!
//! This library defines the documents the wallet widget writes to the content store and
//! the small display helpers every crate in the workspace uses.
//!
//! ## Structure
//!
//! - **[`dto`]**: Content-store documents
//!   - **[`dto::records`]**: Profile and transfer documents, document references
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Shorten an account address for display
//!   - **[`utils::truncate_address`]**: Shorten with the default widths
//!
//! ## Wire Format
//!
//! Documents serialize to the content store's JSON shape:
//! - System fields keep their leading underscore (`_id`, `_type`, `_ref`, `_key`)
//! - Domain fields use **camelCase** (`userName`, `fromAddress`, `txHash`)
//! - Empty reference lists are omitted so a create never clobbers a list the store already holds
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::records::{ProfileDocument, TransferDocument};
//! use shared::utils::truncate_address;
//!
//! let profile = ProfileDocument::new("0xAbC0000000000000000000000000000000001234", "Unnamed");
//! assert_eq!(profile.id, profile.address);
//!
//! let transfer = TransferDocument::new(
//!     "0x123",
//!     "0xAbC0000000000000000000000000000000001234",
//!     "0xDeF0000000000000000000000000000000005678",
//!     1.5,
//!     "2024-01-01T00:00:00.000Z",
//! );
//! assert_eq!(transfer.tx_hash, "0x123");
//! assert_eq!(truncate_address(&profile.address), "0xAbC0...1234");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
