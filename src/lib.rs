//! Supabase Bootstrap - environment-driven setup for a Supabase-backed app
//!
//! This crate wires environment configuration into a shared Supabase client
//! handle with an explicit lifecycle: resolve configuration once at startup,
//! fail fast on anything missing, build the client once, pass it by
//! reference.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Runtime configuration and constants
//! - **supabase**: The client handle for the hosted platform
//! - **services**: Dependency-injected service container
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```no_run
//! use supabase_bootstrap::{RuntimeConfig, Services, ServiceContainer};
//!
//! # fn main() -> supabase_bootstrap::AppResult<()> {
//! let config = RuntimeConfig::from_env()?;
//! let services = Services::from_config(&config)?;
//! let supabase = services.supabase();
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod services;
pub mod supabase;

// Re-export commonly used types at crate root
pub use config::{PublicConfig, RuntimeConfig};
pub use errors::{AppError, AppResult};
pub use services::{ServiceContainer, Services};
pub use supabase::SupabaseClient;
