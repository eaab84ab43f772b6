use crate::config::DirEntry;
use std::fmt;
use std::path::PathBuf;

/// Built-in note categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteType {
    Defect,
    Bug,
    Story,
    Feature,
}

impl NoteType {
    /// Lowercase label, used as the configuration key and directory segment.
    pub fn label(&self) -> &'static str {
        match self {
            NoteType::Defect => "defect",
            NoteType::Bug => "bug",
            NoteType::Story => "story",
            NoteType::Feature => "feature",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Either a built-in note type or a user supplied option name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteKind {
    Type(NoteType),
    Custom(String),
}

impl NoteKind {
    /// The option key this kind resolves under.
    pub fn option(&self) -> String {
        match self {
            NoteKind::Type(note_type) => note_type.label().to_string(),
            NoteKind::Custom(option) => option.clone(),
        }
    }
}

impl From<NoteType> for NoteKind {
    fn from(note_type: NoteType) -> Self {
        NoteKind::Type(note_type)
    }
}

/// What the caller asked for: the note name, its kind and any explicit overrides.
///
/// Empty override strings are treated the same as absent ones.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteRequest {
    pub name: String,
    pub kind: NoteKind,
    pub identifier: Option<String>,
    pub template: Option<String>,
    pub filename: Option<String>,
    pub root: Option<String>,
    pub directories: Option<DirEntry>,
}

impl NoteRequest {
    pub fn new(name: impl Into<String>, kind: impl Into<NoteKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            identifier: None,
            template: None,
            filename: None,
            root: None,
            directories: None,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_directories(mut self, directories: impl Into<DirEntry>) -> Self {
        self.directories = Some(directories.into());
        self
    }
}

/// A fully resolved and injected invocation, ready to be materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteContext {
    pub name: String,
    pub option: String,
    pub identifier: String,
    pub template: PathBuf,
    pub filename: String,
    pub directories: Vec<String>,
    pub root: PathBuf,
}

impl NoteContext {
    /// `<root>/<option>/<identifier>`
    pub fn note_dir(&self) -> PathBuf {
        self.root.join(&self.option).join(&self.identifier)
    }

    pub fn note_path(&self) -> PathBuf {
        self.note_dir().join(&self.filename)
    }
}
