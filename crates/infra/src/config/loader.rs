//! Configuration loader
//!
//! Loads [`ClientConfig`] from configuration files and environment variables.
//! Credentials are never read here; they are passed per call.
//!
//! ## Loading Strategy
//! 1. Probe the standard locations for a config file; use defaults if none
//!    exists
//! 2. Apply environment variable overrides on top
//! 3. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `NFSN_API_BASE_URL`: API origin
//! - `NFSN_API_ACCEPT_INVALID_CERTS`: Skip TLS verification (true/false)
//! - `NFSN_API_TIMEOUT_SECS`: Whole-request timeout in seconds
//! - `NFSN_API_USER_AGENT`: User agent override
//! - `NFSN_API_USE_SYSTEM_PROXY`: Honor `HTTPS_PROXY` and friends (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./nfsnapi.json` or `./nfsnapi.toml` (current working directory)
//! 2. `../nfsnapi.json` or `../nfsnapi.toml` (parent directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use nfsnapi_domain::{ApiError, ClientConfig, Result};

const ENV_BASE_URL: &str = "NFSN_API_BASE_URL";
const ENV_ACCEPT_INVALID_CERTS: &str = "NFSN_API_ACCEPT_INVALID_CERTS";
const ENV_TIMEOUT_SECS: &str = "NFSN_API_TIMEOUT_SECS";
const ENV_USER_AGENT: &str = "NFSN_API_USER_AGENT";
const ENV_USE_SYSTEM_PROXY: &str = "NFSN_API_USE_SYSTEM_PROXY";

/// Load configuration from the first config file found, then apply
/// environment overrides.
///
/// # Errors
/// Returns a configuration [`ApiError`] if a found file cannot be parsed or an
/// environment variable holds an invalid value.
pub fn load() -> Result<ClientConfig> {
    let base = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            ClientConfig::default()
        }
    };

    apply_env(base)
}

/// Load configuration from defaults plus environment variables.
///
/// Unset variables keep their default values.
///
/// # Errors
/// Returns a configuration [`ApiError`] if a variable is set to an invalid
/// value.
pub fn load_from_env() -> Result<ClientConfig> {
    apply_env(ClientConfig::default())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns a configuration [`ApiError`] if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ApiError::config(format!("config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ApiError::config("no config file found in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ApiError::config(format!("failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ApiError::config(format!("invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ApiError::config(format!("invalid JSON format: {e}"))),
        _ => Err(ApiError::config(format!("unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend([
            cwd.join("nfsnapi.json"),
            cwd.join("nfsnapi.toml"),
            cwd.join("../nfsnapi.json"),
            cwd.join("../nfsnapi.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend([exe_dir.join("nfsnapi.json"), exe_dir.join("nfsnapi.toml")]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn apply_env(mut config: ClientConfig) -> Result<ClientConfig> {
    if let Some(base_url) = env_opt(ENV_BASE_URL) {
        config.base_url = base_url;
    }

    if let Some(value) = env_opt(ENV_ACCEPT_INVALID_CERTS) {
        config.accept_invalid_certs = parse_bool(&value).ok_or_else(|| {
            ApiError::config(format!("invalid boolean for {ENV_ACCEPT_INVALID_CERTS}: {value}"))
        })?;
    }

    if let Some(value) = env_opt(ENV_TIMEOUT_SECS) {
        let secs = value
            .parse::<u64>()
            .map_err(|e| ApiError::config(format!("invalid timeout: {e}")))?;
        config.timeout_secs = Some(secs);
    }

    if let Some(agent) = env_opt(ENV_USER_AGENT) {
        config.user_agent = Some(agent);
    }

    if let Some(value) = env_opt(ENV_USE_SYSTEM_PROXY) {
        config.use_system_proxy = parse_bool(&value).ok_or_else(|| {
            ApiError::config(format!("invalid boolean for {ENV_USE_SYSTEM_PROXY}: {value}"))
        })?;
    }

    Ok(config)
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
