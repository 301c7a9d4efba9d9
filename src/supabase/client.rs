//! Supabase client handle.
//!
//! Wraps a reqwest client bound to one project URL and anonymous key.
//! Construction is cheap and synchronous; no connection is opened until a
//! request is actually issued through the handle.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Url;

use crate::config::{
    PublicConfig, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL, HEADER_API_KEY, SUPABASE_AUTH_PATH,
    SUPABASE_REST_PATH, SUPABASE_STORAGE_PATH,
};
use crate::errors::{AppError, AppResult};

/// Handle to one Supabase project.
///
/// The inner HTTP client carries the `apikey` and bearer authorization
/// headers on every request, so callers only supply endpoint paths.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    supabase_url: String,
    base_url: Url,
    rest_url: Url,
    auth_url: Url,
    storage_url: Url,
    anon_key: String,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("supabase_url", &self.supabase_url)
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

impl SupabaseClient {
    /// Build a client handle from the public configuration.
    ///
    /// Validates the project URL and key up front so a bad value fails here,
    /// with the offending variable named, instead of on the first request.
    pub fn new(public: &PublicConfig) -> AppResult<Self> {
        let base_url = parse_base_url(&public.supabase_url)?;
        let rest_url = endpoint(&base_url, SUPABASE_REST_PATH)?;
        let auth_url = endpoint(&base_url, SUPABASE_AUTH_PATH)?;
        let storage_url = endpoint(&base_url, SUPABASE_STORAGE_PATH)?;
        let headers = auth_headers(&public.supabase_anon_key)?;

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        tracing::info!(url = %base_url, "Supabase client configured");

        Ok(Self {
            http,
            supabase_url: public.supabase_url.clone(),
            base_url,
            rest_url,
            auth_url,
            storage_url,
            anon_key: public.supabase_anon_key.clone(),
        })
    }

    /// The configured project URL, exactly as resolved from the environment.
    pub fn supabase_url(&self) -> &str {
        &self.supabase_url
    }

    /// The parsed project URL (normalized with a trailing slash).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The anonymous API key this handle is bound to.
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// The underlying HTTP client, preloaded with auth headers.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Root of the PostgREST data API.
    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    /// Root of the GoTrue auth API.
    pub fn auth_url(&self) -> &Url {
        &self.auth_url
    }

    /// Root of the storage API.
    pub fn storage_url(&self) -> &Url {
        &self.storage_url
    }
}

/// Join a fixed endpoint path onto the project URL.
fn endpoint(base: &Url, path: &str) -> AppResult<Url> {
    base.join(path)
        .map_err(|e| AppError::invalid_config(ENV_SUPABASE_URL, e.to_string()))
}

/// Parse and normalize the project URL.
///
/// The URL must be absolute and usable as a base for endpoint paths; the
/// path is normalized to end with a slash so joins append instead of
/// replacing the last segment.
fn parse_base_url(raw: &str) -> AppResult<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| AppError::invalid_config(ENV_SUPABASE_URL, e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(AppError::invalid_config(
            ENV_SUPABASE_URL,
            "URL cannot serve as a base for endpoint paths",
        ));
    }

    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }

    Ok(url)
}

/// Default headers carrying the anonymous key.
fn auth_headers(anon_key: &str) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let key_value = HeaderValue::from_str(anon_key).map_err(|_| {
        AppError::invalid_config(ENV_SUPABASE_ANON_KEY, "key is not a valid header value")
    })?;
    headers.insert(HEADER_API_KEY, key_value);

    let bearer = HeaderValue::from_str(&format!("Bearer {anon_key}")).map_err(|_| {
        AppError::invalid_config(ENV_SUPABASE_ANON_KEY, "key is not a valid header value")
    })?;
    headers.insert(AUTHORIZATION, bearer);

    Ok(headers)
}
