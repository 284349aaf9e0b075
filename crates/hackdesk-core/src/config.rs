//! Configuration module
//!
//! This module provides the configuration structures for the API server and the
//! persistence backend. Configuration is read once at startup and passed by
//! reference to the components that need it.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::backend_mode::BackendMode;
use crate::constants::DEFAULT_MAX_UPLOAD_SIZE_MB;

// Common constants
const SERVER_PORT: u16 = 3000;
const DEMO_LATENCY_MS: u64 = 1000;
const BACKEND_TIMEOUT_SECS: u64 = 30;
const SUBMISSIONS_TABLE: &str = "hackathon_submissions";
const STORAGE_BUCKET: &str = "hackathon-assets";

/// Which required-field set the submit operation enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionSchema {
    /// teamName, teamLeadName, email, contact
    Minimal,
    /// teamName, teamLeadName, teamLeadEmail, teamLeadContact, projectTitle, projectDescription
    Extended,
}

impl FromStr for SubmissionSchema {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(SubmissionSchema::Minimal),
            "extended" => Ok(SubmissionSchema::Extended),
            _ => Err(anyhow::anyhow!("Invalid submission schema: {}", s)),
        }
    }
}

/// HTTP server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// "compact" (default) or "json"
    pub log_format: String,
}

/// Hosted database and object storage settings
#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub submissions_table: String,
    pub storage_bucket: String,
    pub request_timeout: Duration,
    pub demo_latency: Duration,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub schema: SubmissionSchema,
    pub max_upload_bytes: usize,
    mode: BackendMode,
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present)
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Does not validate; call [`Config::validate`] before serving traffic.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match var("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let schema = match var("SUBMISSION_SCHEMA") {
            Some(s) => s.parse()?,
            None => SubmissionSchema::Extended,
        };

        let max_upload_mb = var("MAX_UPLOAD_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB);

        let supabase_url = var("SUPABASE_URL").or_else(|| var("NEXT_PUBLIC_SUPABASE_URL"));
        let supabase_anon_key =
            var("SUPABASE_ANON_KEY").or_else(|| var("NEXT_PUBLIC_SUPABASE_ANON_KEY"));
        let mode = BackendMode::detect(supabase_url.as_deref(), supabase_anon_key.as_deref());

        let backend = BackendConfig {
            supabase_url,
            supabase_anon_key,
            submissions_table: var("SUBMISSIONS_TABLE")
                .unwrap_or_else(|| SUBMISSIONS_TABLE.to_string()),
            storage_bucket: var("STORAGE_BUCKET").unwrap_or_else(|| STORAGE_BUCKET.to_string()),
            request_timeout: Duration::from_secs(
                var("BACKEND_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(BACKEND_TIMEOUT_SECS),
            ),
            demo_latency: Duration::from_millis(
                var("DEMO_LATENCY_MS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEMO_LATENCY_MS),
            ),
        };

        Ok(Config {
            server: ServerConfig {
                server_port,
                cors_origins,
                environment,
                log_format: var("LOG_FORMAT")
                    .map(|f| f.to_lowercase())
                    .unwrap_or_else(|| "compact".to_string()),
            },
            backend,
            schema,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            mode,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.server.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.max_upload_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than zero"));
        }

        if !self.mode.is_demo() {
            let url = self.supabase_url().unwrap_or_default();
            let parsed = reqwest::Url::parse(url)
                .map_err(|e| anyhow::anyhow!("SUPABASE_URL is not a valid URL: {}", e))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(anyhow::anyhow!("SUPABASE_URL must use http or https"));
            }
        }

        Ok(())
    }

    /// Check if the application is running in a production environment
    pub fn is_production(&self) -> bool {
        let env = self.server.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Backend mode resolved at construction time
    pub fn mode(&self) -> BackendMode {
        self.mode
    }

    pub fn server_port(&self) -> u16 {
        self.server.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.server.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.server.environment
    }

    pub fn log_format(&self) -> &str {
        &self.server.log_format
    }

    pub fn supabase_url(&self) -> Option<&str> {
        self.backend.supabase_url.as_deref()
    }

    pub fn supabase_anon_key(&self) -> Option<&str> {
        self.backend.supabase_anon_key.as_deref()
    }

    pub fn submissions_table(&self) -> &str {
        &self.backend.submissions_table
    }

    pub fn storage_bucket(&self) -> &str {
        &self.backend.storage_bucket
    }

    pub fn request_timeout(&self) -> Duration {
        self.backend.request_timeout
    }

    pub fn demo_latency(&self) -> Duration {
        self.backend.demo_latency
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned()).expect("config")
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.server_port(), 3000);
        assert_eq!(config.mode(), BackendMode::Demo);
        assert_eq!(config.schema, SubmissionSchema::Extended);
        assert_eq!(config.max_upload_bytes(), 5 * 1024 * 1024);
        assert_eq!(config.submissions_table(), "hackathon_submissions");
        assert_eq!(config.cors_origins(), ["*".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_demo_placeholder_url() {
        let config = config_from(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_ANON_KEY", "real-key"),
        ]);
        assert_eq!(config.mode(), BackendMode::Demo);
    }

    #[test]
    fn test_production_mode_with_public_fallback_names() {
        let config = config_from(&[
            ("NEXT_PUBLIC_SUPABASE_URL", "https://xyzcompany.supabase.co"),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon-key"),
        ]);
        assert_eq!(config.mode(), BackendMode::Production);
        assert_eq!(config.supabase_url(), Some("https://xyzcompany.supabase.co"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_lookup(|key| (key == "PORT").then(|| "abc".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_parsing() {
        let config = config_from(&[("SUBMISSION_SCHEMA", "Minimal")]);
        assert_eq!(config.schema, SubmissionSchema::Minimal);
        assert!("full".parse::<SubmissionSchema>().is_err());
    }

    #[test]
    fn test_wildcard_cors_rejected_in_production_environment() {
        let config = config_from(&[("ENVIRONMENT", "production")]);
        assert!(config.validate().is_err());

        let config = config_from(&[
            ("ENVIRONMENT", "production"),
            ("CORS_ORIGINS", "https://hack.example.com"),
        ]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_mode_requires_http_url() {
        let config = config_from(&[
            ("SUPABASE_URL", "ftp://files.example.com"),
            ("SUPABASE_ANON_KEY", "anon-key"),
        ]);
        assert_eq!(config.mode(), BackendMode::Production);
        assert!(config.validate().is_err());
    }
}
