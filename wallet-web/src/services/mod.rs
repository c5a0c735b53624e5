//! Browser implementations of the controller's collaborators

pub mod browser;
pub mod ethereum;
pub mod sanity;

pub use browser::{AlertNotifier, TimeoutSleeper};
pub use ethereum::InjectedProvider;
pub use sanity::BrowserStore;
