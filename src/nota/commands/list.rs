use crate::commands::create::validate_root;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// List the identifiers of existing notes under `<root>/<option>`, sorted.
pub fn run(root: &Path, option: &str) -> Result<CmdResult> {
    validate_root(root)?;

    let option_dir = root.join(option);
    let mut notes = Vec::new();
    if option_dir.is_dir() {
        for entry in fs::read_dir(&option_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                notes.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }
    notes.sort();

    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} notes in {}",
            option,
            root.display()
        )));
    }
    Ok(result.with_listed_notes(notes))
}
