//! Application-wide constants
//!
//! Centralized location for environment variable names and Supabase
//! endpoint paths.

// =============================================================================
// Environment Variables
// =============================================================================

/// Primary (framework-namespaced) variable for the Supabase project URL
pub const ENV_SUPABASE_URL: &str = "NUXT_PUBLIC_SUPABASE_URL";

/// Bare fallback variable for the Supabase project URL
pub const ENV_SUPABASE_URL_FALLBACK: &str = "SUPABASE_URL";

/// Primary (framework-namespaced) variable for the anonymous API key
pub const ENV_SUPABASE_ANON_KEY: &str = "NUXT_PUBLIC_SUPABASE_ANON_KEY";

/// Bare fallback variable for the anonymous API key
pub const ENV_SUPABASE_ANON_KEY_FALLBACK: &str = "SUPABASE_ANON_KEY";

// =============================================================================
// Supabase Endpoints
// =============================================================================

/// PostgREST data API root, relative to the project URL
pub const SUPABASE_REST_PATH: &str = "rest/v1/";

/// GoTrue auth API root, relative to the project URL
pub const SUPABASE_AUTH_PATH: &str = "auth/v1/";

/// Storage API root, relative to the project URL
pub const SUPABASE_STORAGE_PATH: &str = "storage/v1/";

// =============================================================================
// Headers
// =============================================================================

/// Header carrying the anonymous API key on every request
pub const HEADER_API_KEY: &str = "apikey";
