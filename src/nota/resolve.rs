//! # Cascading Resolution
//!
//! Every note field is resolved through the same chain, first hit wins:
//!
//! 1. explicit override (absent when `None` or empty)
//! 2. the option's own config section
//! 3. the `default` config section
//! 4. a built-in fallback
//!
//! `root` is global: override, then the top-level `root` key, then the working
//! directory. The identifier is override-only and falls back to the note name.
//!
//! None of these functions can fail. Values are returned raw; placeholder injection
//! happens once everything is resolved (see [`resolve_context`]).

use crate::config::{DirEntry, NotaConfig, OptionSection};
use crate::flatten::flatten;
use crate::inject::{expand, inject};
use crate::model::{NoteContext, NoteRequest};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_FILENAME: &str = "$option_$id";

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Look a field up in the option section, then in the `default` section.
fn cascade<'a, T, F>(config: &'a NotaConfig, option: &str, field: F) -> Option<&'a T>
where
    F: Fn(&'a OptionSection) -> Option<&'a T>,
{
    config
        .section(option)
        .and_then(&field)
        .or_else(|| config.default_section().and_then(&field))
}

pub fn resolve_template(
    config: &NotaConfig,
    option: &str,
    template: Option<&str>,
    config_home: &Path,
) -> String {
    if let Some(template) = present(template) {
        return template.to_string();
    }
    cascade(config, option, |s| s.template.as_ref())
        .cloned()
        .unwrap_or_else(|| {
            config_home
                .join(format!("{option}.md"))
                .to_string_lossy()
                .into_owned()
        })
}

pub fn resolve_directories(
    config: &NotaConfig,
    option: &str,
    directories: Option<&DirEntry>,
) -> DirEntry {
    if let Some(directories) = directories.filter(|d| !d.is_empty()) {
        return directories.clone();
    }
    cascade(config, option, |s| s.directories.as_ref())
        .cloned()
        .unwrap_or_else(DirEntry::empty)
}

/// The built-in filename is `$option_$id` plus the template's extension, if it has one.
pub fn resolve_filename(
    config: &NotaConfig,
    option: &str,
    filename: Option<&str>,
    template: &str,
) -> String {
    if let Some(filename) = present(filename) {
        return filename.to_string();
    }
    cascade(config, option, |s| s.filename.as_ref())
        .cloned()
        .unwrap_or_else(|| match Path::new(template).extension() {
            Some(ext) => format!("{}.{}", DEFAULT_FILENAME, ext.to_string_lossy()),
            None => DEFAULT_FILENAME.to_string(),
        })
}

pub fn resolve_root(config: &NotaConfig, root: Option<&str>, cwd: &Path) -> String {
    present(root)
        .or_else(|| present(config.root.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| cwd.to_string_lossy().into_owned())
}

pub fn resolve_identifier(identifier: Option<&str>, name: &str) -> String {
    present(identifier).unwrap_or(name).to_string()
}

/// Resolve every field of `request` and inject placeholders into the results.
///
/// Template, filename and each directory get full injection. The root only gets
/// home/environment expansion since it sits above the option and identifier segments.
pub fn resolve_context(
    config: &NotaConfig,
    config_home: &Path,
    cwd: &Path,
    request: &NoteRequest,
) -> NoteContext {
    let name = request.name.as_str();
    let option = request.kind.option();
    let identifier = resolve_identifier(request.identifier.as_deref(), name);

    let template = resolve_template(config, &option, request.template.as_deref(), config_home);
    let directories = flatten(&resolve_directories(
        config,
        &option,
        request.directories.as_ref(),
    ));
    let filename = resolve_filename(config, &option, request.filename.as_deref(), &template);
    let root = resolve_root(config, request.root.as_deref(), cwd);

    debug!(%option, %identifier, %template, %filename, %root, ?directories, "resolved note fields");

    NoteContext {
        template: PathBuf::from(inject(name, &identifier, &option, &template)),
        filename: inject(name, &identifier, &option, &filename),
        directories: directories
            .iter()
            .map(|dir| inject(name, &identifier, &option, dir))
            .collect(),
        root: PathBuf::from(expand(&root)),
        name: name.to_string(),
        option,
        identifier,
    }
}
