//! Navigation policy against the default configuration

use messenger_bar::{AllowedHostSet, Config, NavigationDecision, NavigationPolicy, NavigationTrigger};

fn default_policy() -> NavigationPolicy {
    let config = Config::default();
    NavigationPolicy::new(AllowedHostSet::new(&config.web.allowed_hosts))
}

#[test]
fn test_messenger_link_stays_in_view() {
    assert_eq!(
        default_policy().decide("https://www.messenger.com/somepath", NavigationTrigger::LinkActivated),
        NavigationDecision::AllowInView
    );
}

#[test]
fn test_foreign_link_goes_to_browser() {
    let decision = default_policy().decide("https://evil.example.com", NavigationTrigger::LinkActivated);
    assert_eq!(decision, NavigationDecision::RedirectToSystemBrowser);
    assert!(decision.cancels_in_app());
}

#[test]
fn test_foreign_redirect_stays_in_view() {
    assert_eq!(
        default_policy().decide("https://evil.example.com", NavigationTrigger::Other),
        NavigationDecision::AllowInView
    );
}

#[test]
fn test_cdn_hosts_allowed() {
    let policy = default_policy();
    for url in [
        "https://static.xx.fbcdn.net/rsrc.php/v3/x.js",
        "https://scontent.xx.fbcdn.net/v/t1.png",
        "https://facebook.com/login",
    ] {
        assert_eq!(
            policy.decide(url, NavigationTrigger::LinkActivated),
            NavigationDecision::AllowInView,
            "{}",
            url
        );
    }
}
