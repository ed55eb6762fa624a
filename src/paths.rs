//! Path resolution for the two config files.
//!
//! Uses env vars when set, otherwise home-directory defaults.

use std::path::{Path, PathBuf};

/// Resolved locations of the all-servers registry and the active config
/// consumed by the host application.
#[derive(Debug, Clone)]
pub struct Paths {
    pub all_config: PathBuf,
    pub active_config: PathBuf,
}

impl Paths {
    /// Resolve paths from environment, falling back to home-dir defaults.
    pub fn resolve() -> Self {
        let all_config = resolve_path(
            "MCP_SWITCHER_ALL_CONFIG",
            dirs::home_dir().map(|p| p.join(".mcp_switcher/all_mcp_config.json")),
            "~/.mcp_switcher/all_mcp_config.json",
        );
        let active_config = resolve_path(
            "MCP_SWITCHER_ACTIVE_CONFIG",
            dirs::home_dir().map(|p| p.join(".codeium/windsurf/mcp_config.json")),
            "~/.codeium/windsurf/mcp_config.json",
        );

        Self {
            all_config,
            active_config,
        }
    }

    /// Explicit paths, for tests and non-default layouts.
    pub fn new(all_config: PathBuf, active_config: PathBuf) -> Self {
        Self {
            all_config,
            active_config,
        }
    }

    /// Full registry file (every server, active or not).
    pub fn all_config_path(&self) -> &Path {
        &self.all_config
    }

    /// Active-subset file read by the host application.
    pub fn active_config_path(&self) -> &Path {
        &self.active_config
    }
}

fn resolve_path(env_var: &str, default: Option<PathBuf>, fallback: &str) -> PathBuf {
    if let Ok(val) = std::env::var(env_var) {
        let trimmed = val.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    default.unwrap_or_else(|| expand_tilde(fallback))
}

fn expand_tilde(path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}
