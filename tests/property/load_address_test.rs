//! Property-based tests for loading address strings.
//!
//! Every well-formed URL produces exactly one navigation request for that URL;
//! every malformed address produces none and raises nothing.

use druckerforum_webview::managers::browser_container::{BrowserContainer, ContainerOptions};
use druckerforum_webview::managers::rendering_surface::HeadlessSurface;
use druckerforum_webview::managers::scheduler::Scheduler;
use druckerforum_webview::types::navigation::ContainerId;
use proptest::prelude::*;
use url::Url;

fn container() -> BrowserContainer<HeadlessSurface> {
    BrowserContainer::new(
        ContainerId::new(),
        None,
        HeadlessSurface::new(),
        ContainerOptions::default(),
        Scheduler::new(),
    )
}

/// Strategy for well-formed http(s) URLs.
fn arb_valid_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("http"), Just("https")],
        "[a-z][a-z0-9]{0,10}",
        prop_oneof![Just("org"), Just("com"), Just("de")],
        "(/[a-z0-9_-]{1,8}){0,3}",
    )
        .prop_map(|(scheme, host, tld, path)| format!("{}://{}.{}{}", scheme, host, tld, path))
}

/// Strategy for addresses that are not absolute URLs: no scheme separator.
fn arb_invalid_address() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 ./_-]{0,30}",
        Just(String::new()),
        "[a-z]{1,8}\\.(org|com)",
    ]
    .prop_filter("must not contain a scheme", |s| !s.contains(':'))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn valid_address_yields_one_request(address in arb_valid_url()) {
        let mut c = container();
        c.load_address(&address);

        let expected = Url::parse(&address).unwrap();
        let requests = c.surface().load_requests();
        prop_assert_eq!(requests.len(), 1);
        prop_assert_eq!(requests[0], &expected);
    }

    #[test]
    fn invalid_address_yields_no_request(address in arb_invalid_address()) {
        let mut c = container();
        c.load_address(&address);
        prop_assert!(c.surface().commands().is_empty());
    }
}
