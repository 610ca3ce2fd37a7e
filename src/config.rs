//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::gateway::DEFAULT_TABLE;

/// Default per-request timeout for the persistence service
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the project URL
pub const ENV_URL: &str = "SUPABASE_URL";
/// Environment variable overriding the API key
pub const ENV_ANON_KEY: &str = "SUPABASE_ANON_KEY";
/// Environment variable overriding the target table
pub const ENV_TABLE: &str = "CONTENT_ENTRY_TABLE";

/// Errors raised while resolving settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Supabase URL is not configured (set SUPABASE_URL or `supabase_url` in {0})")]
    MissingUrl(String),
    #[error("Supabase key is not configured (set SUPABASE_ANON_KEY or `supabase_anon_key` in {0})")]
    MissingKey(String),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Supabase project URL
    pub supabase_url: Option<String>,
    /// Supabase anon key
    pub supabase_anon_key: Option<String>,
    /// Table submissions are inserted into
    pub table: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

/// Fully resolved connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub url: String,
    pub anon_key: String,
    pub table: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "content-entry", "content-entry-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("content-entry-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve settings using the process environment for overrides
    pub fn resolve(&self) -> Result<ServiceSettings, ConfigError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve settings, taking overrides from `env`
    pub fn resolve_with<F>(&self, env: F) -> Result<ServiceSettings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |var: &str, file: &Option<String>| {
            env(var)
                .or_else(|| file.clone())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let location = Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "config.json".to_string());

        let url = pick(ENV_URL, &self.supabase_url)
            .ok_or_else(|| ConfigError::MissingUrl(location.clone()))?;
        let anon_key = pick(ENV_ANON_KEY, &self.supabase_anon_key)
            .ok_or(ConfigError::MissingKey(location))?;
        let table = pick(ENV_TABLE, &self.table).unwrap_or_else(|| DEFAULT_TABLE.to_string());

        Ok(ServiceSettings {
            url,
            anon_key,
            table,
            request_timeout_secs: self
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}
