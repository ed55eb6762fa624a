//! mcp-switcher
//!
//! Edits a registry of MCP server launch configs and writes the active
//! subset to the config file the host application reads.

pub mod fields;
pub mod models;
pub mod paths;
pub mod rows;
pub mod store;

pub use fields::{format_args, format_env, parse_args, parse_env};
pub use models::{ConfigFile, DisplayRow, Registry, ServerEntry};
pub use paths::Paths;
pub use rows::{add_row, delete_row, edit_row, set_active, RowsError};
pub use store::{merge_registries, ConfigStore, SaveError};
