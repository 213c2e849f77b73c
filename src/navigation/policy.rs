//! Decides whether a navigation stays in the embedded view
//!
//! Only explicit link clicks are subject to the host allow-list. Redirects,
//! reloads and script-driven navigations always stay in the view, otherwise
//! the site's own internal hops would be thrown out to the browser.

use std::collections::HashSet;
use url::Url;

/// Schemes that never leave the view
const INTERNAL_SCHEMES: &[&str] = &["about", "blob", "data"];

/// What caused a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTrigger {
    /// The user clicked a link
    LinkActivated,
    /// Redirect, reload, form submission, `window.open`, history...
    Other,
}

/// Outcome of a navigation check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the embedded view load it
    AllowInView,
    /// Cancel in the view and open in the default browser
    RedirectToSystemBrowser,
}

impl NavigationDecision {
    /// Whether the in-app navigation must be cancelled
    pub fn cancels_in_app(self) -> bool {
        matches!(self, NavigationDecision::RedirectToSystemBrowser)
    }
}

/// Hosts allowed to load in the embedded view, fixed at startup
#[derive(Debug, Clone, Default)]
pub struct AllowedHostSet {
    hosts: HashSet<String>,
}

impl AllowedHostSet {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|host| host.as_ref().trim().to_ascii_lowercase())
                .filter(|host| !host.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.contains(&host.to_ascii_lowercase())
    }
}

/// Navigation policy evaluated before every navigation
#[derive(Debug, Clone)]
pub struct NavigationPolicy {
    allowed: AllowedHostSet,
}

impl NavigationPolicy {
    pub fn new(allowed: AllowedHostSet) -> Self {
        Self { allowed }
    }

    /// Decide where `target` should load
    pub fn decide(&self, target: &str, trigger: NavigationTrigger) -> NavigationDecision {
        let url = Url::parse(target).ok();

        if let Some(url) = &url {
            if INTERNAL_SCHEMES.contains(&url.scheme()) {
                return NavigationDecision::AllowInView;
            }
        }

        if trigger != NavigationTrigger::LinkActivated {
            return NavigationDecision::AllowInView;
        }

        let Some(host) = url.as_ref().and_then(|url| url.host_str()) else {
            return NavigationDecision::AllowInView;
        };

        if self.allowed.contains(host) {
            NavigationDecision::AllowInView
        } else {
            NavigationDecision::RedirectToSystemBrowser
        }
    }
}
