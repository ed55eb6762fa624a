//! The config store: loads, merges, and persists the two registries.
//!
//! The all-registry file holds every known server; the active-config file
//! holds the subset the host application should launch. Load merges the two
//! into display rows, save splits the rows back and rewrites both files.

use std::path::{Path, PathBuf};

use crate::models::{ConfigFile, DisplayRow, Registry};
use crate::paths::Paths;

/// Owns the two file paths and all merge/split logic.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    paths: Paths,
}

impl ConfigStore {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }

    /// Load both registries and merge them into display rows.
    ///
    /// An absent or malformed file degrades to an empty registry; load never
    /// fails and never creates files. A row is active iff its name appears
    /// in the active-config file, checked before the overlay so the flag is
    /// independent of merge precedence.
    pub fn load(&self, debug: bool) -> Vec<DisplayRow> {
        let all = read_registry(self.paths.all_config_path(), debug);
        let active = read_registry(self.paths.active_config_path(), debug);

        let merged = merge_registries(&all, &active);
        merged
            .into_iter()
            .map(|(name, entry)| DisplayRow {
                active: active.contains_key(&name),
                name,
                entry,
            })
            .collect()
    }

    /// Split rows back into the two registries and write both files as
    /// pretty-printed JSON, creating parent directories as needed.
    ///
    /// The two writes are not atomic as a pair: if the second fails, the
    /// first stays on disk. Duplicate row names are a caller error; the last
    /// row with a given name wins.
    pub fn save(&self, rows: &[DisplayRow]) -> Result<(), SaveError> {
        let mut all = Registry::new();
        let mut active = Registry::new();

        for row in rows {
            all.insert(row.name.clone(), row.entry.clone());
            if row.active {
                active.insert(row.name.clone(), row.entry.clone());
            }
        }

        write_registry(self.paths.all_config_path(), all)?;
        write_registry(self.paths.active_config_path(), active)?;

        Ok(())
    }
}

/// Copy the all-registry, then overlay the active-registry so its content
/// wins for identically named entries. Names only present in the
/// active-registry are appended after the all-registry's order.
pub fn merge_registries(all: &Registry, active: &Registry) -> Registry {
    let mut merged = all.clone();
    for (name, entry) in active {
        merged.insert(name.clone(), entry.clone());
    }
    merged
}

/// Read one config file. Absence and parse failures both come back as an
/// empty registry.
fn read_registry(path: &Path, debug: bool) -> Registry {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            if debug {
                eprintln!("[debug] Config read error for {}: {}", path.display(), e);
            }
            return Registry::new();
        }
    };

    match serde_json::from_str::<ConfigFile>(&content) {
        Ok(config) => config.mcp_servers,
        Err(e) => {
            if debug {
                eprintln!("[debug] Config parse error for {}: {}", path.display(), e);
            }
            Registry::new()
        }
    }
}

fn write_registry(path: &Path, registry: Registry) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(SaveError::CreateDir)?;
    }

    let config = ConfigFile {
        mcp_servers: registry,
    };
    let output = serde_json::to_string_pretty(&config).map_err(SaveError::SerializeFailed)?;
    std::fs::write(path, output).map_err(|e| SaveError::WriteFailed(e, path.to_path_buf()))?;

    Ok(())
}

#[derive(Debug)]
pub enum SaveError {
    CreateDir(std::io::Error),
    SerializeFailed(serde_json::Error),
    WriteFailed(std::io::Error, PathBuf),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::CreateDir(e) => write!(f, "Failed to create config directory: {}", e),
            SaveError::SerializeFailed(e) => write!(f, "Failed to serialize config: {}", e),
            SaveError::WriteFailed(e, path) => {
                write!(f, "Failed to write {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for SaveError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServerEntry;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(Paths::new(
            dir.path().join("all/all_mcp_config.json"),
            dir.path().join("host/mcp_config.json"),
        ))
    }

    fn entry(command: &str) -> ServerEntry {
        ServerEntry {
            command: command.to_string(),
            args: vec!["-y".to_string()],
            env: indexmap::IndexMap::new(),
        }
    }

    fn write_config(path: &Path, json: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, json).unwrap();
    }

    #[test]
    fn load_with_no_files_is_empty_and_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load(false).is_empty());
        assert!(!dir.path().join("all").exists());
        assert!(!dir.path().join("host").exists());
    }

    #[test]
    fn load_treats_malformed_file_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        write_config(&dir.path().join("all/all_mcp_config.json"), "{not json");
        write_config(
            &dir.path().join("host/mcp_config.json"),
            r#"{"mcpServers":{"fetch":{"command":"npx"}}}"#,
        );

        let rows = store.load(false);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "fetch");
        assert!(rows[0].active);
    }

    #[test]
    fn merge_overlay_prefers_active_content() {
        let mut all = Registry::new();
        all.insert("a".to_string(), entry("commandX"));
        let mut active = Registry::new();
        active.insert("a".to_string(), entry("commandY"));

        let merged = merge_registries(&all, &active);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["a"].command, "commandY");
    }

    #[test]
    fn load_marks_overlaid_row_active() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        write_config(
            &dir.path().join("all/all_mcp_config.json"),
            r#"{"mcpServers":{"a":{"command":"commandX"}}}"#,
        );
        write_config(
            &dir.path().join("host/mcp_config.json"),
            r#"{"mcpServers":{"a":{"command":"commandY"}}}"#,
        );

        let rows = store.load(false);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].entry.command, "commandY");
        assert!(rows[0].active);
    }

    #[test]
    fn load_orders_all_registry_first_then_active_only() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        write_config(
            &dir.path().join("all/all_mcp_config.json"),
            r#"{"mcpServers":{"one":{"command":"a"},"two":{"command":"b"}}}"#,
        );
        write_config(
            &dir.path().join("host/mcp_config.json"),
            r#"{"mcpServers":{"extra":{"command":"c"},"one":{"command":"a"}}}"#,
        );

        let rows = store.load(false);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["one", "two", "extra"]);
        let active: Vec<_> = rows.iter().map(|r| r.active).collect();
        assert_eq!(active, [true, false, true]);
    }

    #[test]
    fn save_splits_rows_into_both_files() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let rows = vec![
            DisplayRow {
                active: true,
                name: "on".to_string(),
                entry: entry("a"),
            },
            DisplayRow {
                active: false,
                name: "off".to_string(),
                entry: entry("b"),
            },
        ];

        store.save(&rows).unwrap();

        let all = read_registry(&dir.path().join("all/all_mcp_config.json"), false);
        assert_eq!(all.len(), 2);
        let active = read_registry(&dir.path().join("host/mcp_config.json"), false);
        assert_eq!(active.len(), 1);
        assert!(active.contains_key("on"));
        assert!(!active.contains_key("off"));
        assert_eq!(active["on"], all["on"]);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(Paths::new(
            dir.path().join("deep/nested/all.json"),
            dir.path().join("other/deep/active.json"),
        ));

        store.save(&[]).unwrap();
        assert!(dir.path().join("deep/nested/all.json").exists());
        assert!(dir.path().join("other/deep/active.json").exists());
    }

    #[test]
    fn save_last_duplicate_name_wins() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let rows = vec![
            DisplayRow {
                active: true,
                name: "dup".to_string(),
                entry: entry("first"),
            },
            DisplayRow {
                active: true,
                name: "dup".to_string(),
                entry: entry("second"),
            },
        ];

        store.save(&rows).unwrap();
        let all = read_registry(&dir.path().join("all/all_mcp_config.json"), false);
        assert_eq!(all.len(), 1);
        assert_eq!(all["dup"].command, "second");
    }

    #[test]
    fn save_then_load_round_trips_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        write_config(
            &dir.path().join("all/all_mcp_config.json"),
            r#"{"mcpServers":{"alpha":{"command":"a","args":["x"],"env":{"K":"V"}},"beta":{"command":"b"}}}"#,
        );
        write_config(
            &dir.path().join("host/mcp_config.json"),
            r#"{"mcpServers":{"alpha":{"command":"a","args":["x"],"env":{"K":"V"}}}}"#,
        );

        let rows = store.load(false);
        store.save(&rows).unwrap();
        let rows_after = store.load(false);

        assert_eq!(rows, rows_after);
    }

    #[test]
    fn save_writes_pretty_printed_json() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let rows = vec![DisplayRow {
            active: true,
            name: "fetch".to_string(),
            entry: entry("npx"),
        }];

        store.save(&rows).unwrap();
        let content = std::fs::read_to_string(dir.path().join("host/mcp_config.json")).unwrap();
        assert!(content.contains("\n  \"mcpServers\""));
    }
}
