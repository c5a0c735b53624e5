//! # Content-Store Documents
//!
//! Data structures the widget creates and patches in the remote content store.
//!
//! ## Module Organization
//!
//! - [`records`] - Profile documents, transfer documents and the references linking them
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "_id": "0x5c3a...9f21",
//!   "_type": "users",
//!   "userName": "Unnamed",
//!   "address": "0x5c3a...9f21",
//!   "transactions": [
//!     { "_key": "0x9e1f...", "_ref": "0x9e1f...", "_type": "reference" }
//!   ]
//! }
//! ```

pub mod records;

pub use records::*;
