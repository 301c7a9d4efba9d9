//! Bootstrap integration tests.
//!
//! Exercise the whole path from resolved configuration values to a usable
//! client handle, without touching the process environment.

use std::collections::HashMap;
use std::sync::Arc;

use supabase_bootstrap::config::{
    RuntimeConfig, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL, ENV_SUPABASE_URL_FALLBACK,
};
use supabase_bootstrap::services::{ServiceContainer, Services};
use supabase_bootstrap::supabase::SupabaseClient;
use supabase_bootstrap::AppError;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_config_to_handle_end_to_end() {
    let lookup = lookup_from(&[
        (ENV_SUPABASE_URL, "https://example.supabase.co"),
        (ENV_SUPABASE_ANON_KEY, "anon-abc123"),
    ]);

    let (config, _sources) = RuntimeConfig::load(lookup).unwrap();
    let services = Services::from_config(&config).unwrap();

    let client = services.supabase();
    assert_eq!(client.supabase_url(), "https://example.supabase.co");
    assert_eq!(client.base_url().as_str(), "https://example.supabase.co/");
    assert_eq!(client.anon_key(), "anon-abc123");
}

#[test]
fn test_fallback_variables_reach_the_handle() {
    let lookup = lookup_from(&[
        (ENV_SUPABASE_URL_FALLBACK, "https://fallback.supabase.co"),
        (ENV_SUPABASE_ANON_KEY, "anon-abc123"),
    ]);

    let (config, sources) = RuntimeConfig::load(lookup).unwrap();
    assert_eq!(sources.supabase_url, ENV_SUPABASE_URL_FALLBACK);

    let services = Services::from_config(&config).unwrap();
    assert_eq!(
        services.supabase().supabase_url(),
        "https://fallback.supabase.co"
    );
}

#[test]
fn test_missing_configuration_stops_bootstrap() {
    let lookup = lookup_from(&[]);

    let err = RuntimeConfig::load(lookup).unwrap_err();
    match err {
        AppError::MissingConfig(name) => assert_eq!(name, ENV_SUPABASE_URL),
        other => panic!("expected MissingConfig, got {other:?}"),
    }
}

#[test]
fn test_repeated_access_returns_the_identical_handle() {
    let lookup = lookup_from(&[
        (ENV_SUPABASE_URL, "https://example.supabase.co"),
        (ENV_SUPABASE_ANON_KEY, "anon-abc123"),
    ]);

    let (config, _) = RuntimeConfig::load(lookup).unwrap();
    let services = Services::from_config(&config).unwrap();

    let first = services.supabase();
    let second = services.supabase();
    assert!(Arc::ptr_eq(&first, &second));
}

/// Hand-rolled container for consumers that want to inject their own handle.
struct StubContainer {
    supabase: Arc<SupabaseClient>,
}

impl ServiceContainer for StubContainer {
    fn supabase(&self) -> Arc<SupabaseClient> {
        self.supabase.clone()
    }
}

#[test]
fn test_manually_injected_handle_flows_through_the_container() {
    let lookup = lookup_from(&[
        (ENV_SUPABASE_URL, "https://injected.supabase.co"),
        (ENV_SUPABASE_ANON_KEY, "anon-injected"),
    ]);
    let (config, _) = RuntimeConfig::load(lookup).unwrap();

    let client = Arc::new(SupabaseClient::new(&config.public).unwrap());
    let container = StubContainer {
        supabase: client.clone(),
    };

    assert!(Arc::ptr_eq(&container.supabase(), &client));
    assert_eq!(
        container.supabase().rest_url().as_str(),
        "https://injected.supabase.co/rest/v1/"
    );
}
