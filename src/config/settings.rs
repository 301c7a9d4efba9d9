//! Application settings loaded from environment variables.

use std::env;

use serde::Serialize;

use super::constants::{
    ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_ANON_KEY_FALLBACK, ENV_SUPABASE_URL,
    ENV_SUPABASE_URL_FALLBACK,
};
use crate::errors::{AppError, AppResult};

/// Runtime configuration for the application.
///
/// Mirrors the runtime-config namespace of the front-end: everything under
/// `public` is safe to expose to client-side code.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub public: PublicConfig,
}

/// Public configuration values.
///
/// The anon key is a low-privilege credential scoped for client-side use;
/// it is still kept out of logs and `Debug` output.
#[derive(Clone)]
pub struct PublicConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl std::fmt::Debug for PublicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicConfig")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_anon_key", &"[REDACTED]")
            .finish()
    }
}

/// Which environment variable supplied each resolved value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigSources {
    pub supabase_url: &'static str,
    pub supabase_anon_key: &'static str,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if present, then resolves each value with the
    /// framework-namespaced variable taking precedence over the bare fallback.
    /// Fails fast with the name of the missing variable so startup errors
    /// point at the root cause instead of surfacing later inside the client.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::load(|key| env::var(key).ok())?.0)
    }

    /// Like [`from_env`](Self::from_env), but also reports which variable
    /// supplied each value.
    pub fn from_env_with_sources() -> AppResult<(Self, ConfigSources)> {
        dotenvy::dotenv().ok();
        Self::load(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary lookup function.
    ///
    /// The lookup abstracts over the process environment so resolution order
    /// can be tested without mutating global state.
    pub fn load<F>(lookup: F) -> AppResult<(Self, ConfigSources)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (supabase_url, url_source) =
            resolve(&lookup, ENV_SUPABASE_URL, ENV_SUPABASE_URL_FALLBACK)?;
        let (supabase_anon_key, key_source) =
            resolve(&lookup, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_ANON_KEY_FALLBACK)?;

        let config = Self {
            public: PublicConfig {
                supabase_url,
                supabase_anon_key,
            },
        };
        let sources = ConfigSources {
            supabase_url: url_source,
            supabase_anon_key: key_source,
        };

        Ok((config, sources))
    }
}

/// Resolve one value: primary variable first, bare fallback second.
/// Empty values count as missing. The error names the primary variable,
/// which is the one deployments are expected to set.
fn resolve<F>(lookup: &F, primary: &'static str, fallback: &'static str) -> AppResult<(String, &'static str)>
where
    F: Fn(&str) -> Option<String>,
{
    for name in [primary, fallback] {
        match lookup(name) {
            Some(value) if !value.trim().is_empty() => return Ok((value, name)),
            _ => continue,
        }
    }
    Err(AppError::missing_config(primary))
}
