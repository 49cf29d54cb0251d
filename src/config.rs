//! Configuration management for racerx.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every setting has a default so the CLI
//! runs against a local backend without any configuration.
//!
//! The lookup order is:
//! 1. Command-line flags (handled by the caller)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf};

/// Relative API prefix used when no override is configured.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Origin that relative API URLs are resolved against.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5555";

/// Bind address of the local development backend.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5555";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `racerx` data directory if it does not exist yet. A missing
/// `.env` file is not an error since every setting has a default; a file that
/// exists but cannot be parsed is.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/racerx/.env`
/// - macOS: `~/Library/Application Support/racerx/.env`
/// - Windows: `%LOCALAPPDATA%/racerx/.env`
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Platform-specific data directory for racerx (`<data_local_dir>/racerx`).
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("racerx");
    path
}

/// Returns the configured API base URL, fully resolved.
///
/// Reads `RACERX_API_URL` and falls back to [`DEFAULT_API_PREFIX`]. Relative
/// values are joined onto [`origin`].
///
/// # Example
///
/// ```
/// // RACERX_API_URL unset, RACERX_ORIGIN unset
/// assert_eq!(api_url(), "http://localhost:5555/api");
/// ```
pub fn api_url() -> String {
    resolve_api_url(env::var("RACERX_API_URL").ok().as_deref(), &origin())
}

/// Returns the backend origin used to resolve relative API URLs.
///
/// Reads `RACERX_ORIGIN`, defaulting to [`DEFAULT_ORIGIN`].
pub fn origin() -> String {
    env::var("RACERX_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string())
}

/// Returns the address the development backend binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to [`DEFAULT_SERVER_ADDRESS`].
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Resolves an optional base URL override against an origin.
///
/// Absolute overrides (anything with a scheme) are used as-is. Relative ones
/// and the default prefix are appended to `origin`. Trailing slashes are
/// dropped so paths can be appended with a leading `/`.
pub fn resolve_api_url(override_url: Option<&str>, origin: &str) -> String {
    let base = match override_url.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_PREFIX,
    };

    let resolved = if base.contains("://") {
        base.to_string()
    } else {
        let origin = origin.trim_end_matches('/');
        if base.starts_with('/') {
            format!("{origin}{base}")
        } else {
            format!("{origin}/{base}")
        }
    };

    resolved.trim_end_matches('/').to_string()
}
