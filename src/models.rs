//! Data structures for the two config files.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One server's launch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: IndexMap<String, String>,
}

/// Name -> entry mapping, insertion-ordered. Names are unique; inserting an
/// existing name replaces the entry in place.
pub type Registry = IndexMap<String, ServerEntry>;

/// On-disk document shape shared by both config files: an object root with a
/// single `mcpServers` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(rename = "mcpServers", default)]
    pub mcp_servers: Registry,
}

/// Merged, editor-facing view of one server. Reconstructed from the two
/// registries on load and split back into them on save; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub active: bool,
    pub name: String,
    #[serde(flatten)]
    pub entry: ServerEntry,
}
