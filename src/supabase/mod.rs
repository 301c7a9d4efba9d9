//! Supabase integration.
//!
//! The platform itself (auth, database, storage) is an external dependency;
//! this module only builds the handle the rest of the application talks
//! through.

mod client;

pub use client::SupabaseClient;
