//! Navigation policy for the embedded view

mod external;
mod policy;

pub use external::open_in_system_browser;
pub use policy::{AllowedHostSet, NavigationDecision, NavigationPolicy, NavigationTrigger};
