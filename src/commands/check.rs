//! Check command - validates configuration and constructs the client.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::config::{ConfigSources, RuntimeConfig};
use crate::errors::{AppError, AppResult};
use crate::services::{ServiceContainer, Services};

/// Machine-readable check report.
///
/// Deliberately excludes the anon key: diagnostic output never carries
/// credential values, public-scoped or not.
#[derive(Debug, Serialize)]
struct CheckReport {
    supabase_url: String,
    rest_url: String,
    auth_url: String,
    storage_url: String,
    resolved_from: ConfigSources,
}

/// Execute the check command
pub async fn execute(args: CheckArgs, config: RuntimeConfig, sources: ConfigSources) -> AppResult<()> {
    tracing::info!(url = %config.public.supabase_url, "Supabase URL resolved");

    let services = Services::from_config(&config)?;
    let client = services.supabase();

    if args.json {
        let report = CheckReport {
            supabase_url: client.supabase_url().to_string(),
            rest_url: client.rest_url().to_string(),
            auth_url: client.auth_url().to_string(),
            storage_url: client.storage_url().to_string(),
            resolved_from: sources,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::internal(format!("Failed to render report: {e}")))?;
        println!("{rendered}");
    } else {
        tracing::info!("Configuration valid, Supabase client ready");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PublicConfig, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL};

    #[tokio::test]
    async fn test_check_succeeds_with_valid_config() {
        let config = RuntimeConfig {
            public: PublicConfig {
                supabase_url: "https://example.supabase.co".to_string(),
                supabase_anon_key: "anon-abc123".to_string(),
            },
        };
        let sources = ConfigSources {
            supabase_url: ENV_SUPABASE_URL,
            supabase_anon_key: ENV_SUPABASE_ANON_KEY,
        };

        let result = execute(CheckArgs { json: false }, config, sources).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_report_never_contains_the_key() {
        let report = CheckReport {
            supabase_url: "https://example.supabase.co".to_string(),
            rest_url: "https://example.supabase.co/rest/v1/".to_string(),
            auth_url: "https://example.supabase.co/auth/v1/".to_string(),
            storage_url: "https://example.supabase.co/storage/v1/".to_string(),
            resolved_from: ConfigSources {
                supabase_url: ENV_SUPABASE_URL,
                supabase_anon_key: ENV_SUPABASE_ANON_KEY,
            },
        };

        let rendered = serde_json::to_string(&report).unwrap();
        assert!(!rendered.contains("anon-abc123"));
        assert!(rendered.contains("https://example.supabase.co"));
    }
}
