//! Session storage for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use pawhub_core::types::{AccessToken, ApiUrl};
use pawhub_http::Session;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    api: String,
    token: String,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "pawhub").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save a session to disk.
pub fn save_session(session: &Session) -> Result<()> {
    let token = session
        .token()
        .context("Cannot persist an anonymous session")?;

    let stored = StoredSession {
        api: session.base().to_string(),
        token: token.as_str().to_string(),
    };

    let path = session_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load a session from disk.
pub fn load_session() -> Result<Option<Session>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    let api = ApiUrl::new(&stored.api).context("Invalid API URL in session")?;
    let token = AccessToken::new(stored.token);

    Ok(Some(Session::with_token(api, token)))
}

/// Clear the stored session.
pub fn clear_session() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}

/// The stored session, required.
pub fn load_required() -> Result<Session> {
    load_session()?.context("No active session. Run 'pawhub login' first.")
}

/// The stored session, or an anonymous one against `api` (flag value, or
/// the PAWHUB_API environment variable) for public endpoints.
pub fn load_or_anonymous(api: Option<&str>) -> Result<Session> {
    if let Some(flag) = api {
        let base = ApiUrl::new(flag).context("Invalid API URL")?;
        return Ok(Session::anonymous(base));
    }

    if let Some(session) = load_session()? {
        return Ok(session);
    }

    let api = resolve_api(None)?;
    let base = ApiUrl::new(&api).context("Invalid API URL")?;
    Ok(Session::anonymous(base))
}

/// Resolve the API base URL from a flag or the PAWHUB_API environment
/// variable.
pub fn resolve_api(flag: Option<&str>) -> Result<String> {
    flag.map(str::to_string)
        .or_else(|| std::env::var("PAWHUB_API").ok())
        .context("No API URL. Pass --api or set PAWHUB_API.")
}
