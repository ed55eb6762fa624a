//! In-memory row operations invoked by the host UI layer.
//!
//! The store never touches disk here; each handler mutates the row list or
//! reports a non-fatal condition the UI shows as a warning.

use crate::models::{DisplayRow, ServerEntry};

/// Append a new row. New servers start active.
pub fn add_row(rows: &mut Vec<DisplayRow>, name: String, entry: ServerEntry) {
    rows.push(DisplayRow {
        active: true,
        name,
        entry,
    });
}

/// Replace the selected row's name and entry.
pub fn edit_row(
    rows: &mut [DisplayRow],
    selection: Option<usize>,
    name: String,
    entry: ServerEntry,
) -> Result<(), RowsError> {
    let index = selected_index(rows, selection)?;
    rows[index].name = name;
    rows[index].entry = entry;
    Ok(())
}

/// Remove the selected row. `confirmed` comes from an explicit yes/no
/// prompt; declining is a user cancel, not an error, and leaves the rows
/// unchanged. Returns whether a row was removed.
pub fn delete_row(
    rows: &mut Vec<DisplayRow>,
    selection: Option<usize>,
    confirmed: bool,
) -> Result<bool, RowsError> {
    let index = selected_index(rows, selection)?;
    if !confirmed {
        return Ok(false);
    }
    rows.remove(index);
    Ok(true)
}

/// Set the selected row's active flag.
pub fn set_active(
    rows: &mut [DisplayRow],
    selection: Option<usize>,
    active: bool,
) -> Result<(), RowsError> {
    let index = selected_index(rows, selection)?;
    rows[index].active = active;
    Ok(())
}

fn selected_index(rows: &[DisplayRow], selection: Option<usize>) -> Result<usize, RowsError> {
    selection
        .filter(|i| *i < rows.len())
        .ok_or(RowsError::NoSelection)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowsError {
    NoSelection,
}

impl std::fmt::Display for RowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowsError::NoSelection => write!(f, "No server selected"),
        }
    }
}

impl std::error::Error for RowsError {}
