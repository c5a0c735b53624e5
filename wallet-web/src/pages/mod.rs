//! Page modules

pub mod transfer;

pub use transfer::TransferPage;
