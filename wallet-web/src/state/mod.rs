//! Reactive state

pub mod session;
