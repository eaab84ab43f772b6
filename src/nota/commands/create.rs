use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotaError, Result};
use crate::inject::inject;
use crate::model::NoteContext;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Materialize a resolved note: validate, create the directory tree, write the note.
///
/// All checks (and the template read) happen before anything is created, so a failed
/// run leaves the filesystem untouched.
pub fn run(ctx: &NoteContext) -> Result<CmdResult> {
    validate_template(&ctx.template)?;
    validate_root(&ctx.root)?;

    let contents = fs::read_to_string(&ctx.template)?;
    let rendered = inject(&ctx.name, &ctx.identifier, &ctx.option, &contents);

    let mut created = create_dirs(&ctx.note_dir(), &ctx.directories)?;

    let note_path = ctx.note_path();
    let existed = note_path.exists();
    fs::write(&note_path, rendered)?;
    debug!(path = %note_path.display(), overwritten = existed, "wrote note");

    let mut result = CmdResult::default();
    if existed {
        result.add_message(CmdMessage::warning(format!(
            "Overwrote existing note: {}",
            note_path.display()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        note_path.display()
    )));
    created.push(note_path);
    Ok(result.with_created_paths(created))
}

pub fn validate_template(template: &Path) -> Result<()> {
    if !template.exists() {
        return Err(NotaError::TemplateNotFound(template.to_path_buf()));
    }
    if !template.is_file() {
        return Err(NotaError::TemplateNotAFile(template.to_path_buf()));
    }
    Ok(())
}

pub fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(NotaError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(NotaError::RootNotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Create `note_dir` and each entry below it, ancestors included.
/// Existing directories are left alone.
pub fn create_dirs(note_dir: &Path, directories: &[String]) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(directories.len() + 1);

    fs::create_dir_all(note_dir)?;
    created.push(note_dir.to_path_buf());

    for dir in directories {
        let path = note_dir.join(dir);
        fs::create_dir_all(&path)?;
        debug!(path = %path.display(), "ensured directory");
        created.push(path);
    }

    Ok(created)
}
