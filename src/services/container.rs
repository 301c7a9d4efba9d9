//! Service container - centralized access to shared service handles.
//!
//! Replaces hidden module-level singletons with an explicit lifecycle: the
//! container is built once at bootstrap and passed by reference to whatever
//! needs a handle. Construct-once, reuse-everywhere is preserved without
//! process-wide mutable state.

use std::sync::Arc;

use crate::config::RuntimeConfig;
use crate::errors::AppResult;
use crate::supabase::SupabaseClient;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get the shared Supabase client handle
    fn supabase(&self) -> Arc<SupabaseClient>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    supabase: Arc<SupabaseClient>,
}

impl Services {
    /// Build the container from runtime configuration.
    ///
    /// The Supabase client is constructed exactly once here; every
    /// [`supabase`](ServiceContainer::supabase) call hands out the same
    /// handle.
    pub fn from_config(config: &RuntimeConfig) -> AppResult<Self> {
        let supabase = Arc::new(SupabaseClient::new(&config.public)?);
        Ok(Self { supabase })
    }

    /// Create a container around an already-built client.
    pub fn new(supabase: Arc<SupabaseClient>) -> Self {
        Self { supabase }
    }
}

impl ServiceContainer for Services {
    fn supabase(&self) -> Arc<SupabaseClient> {
        self.supabase.clone()
    }
}
