use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Args, Parser};
use nota::config::DirEntry;
use nota::model::{NoteKind, NoteRequest, NoteType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nota", bin_name = "nota", version)]
#[command(about = "A scaffolding program for developer notes", long_about = None)]
pub struct Cli {
    /// Name of the new note
    #[arg(
        value_name = "NAME",
        required_unless_present = "list",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub name: Option<String>,

    #[command(flatten)]
    pub kind: KindArgs,

    /// Configuration file location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Custom template file location
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<String>,

    /// Custom note identifier
    #[arg(short, long, value_name = "ID")]
    pub identifier: Option<String>,

    /// Additional directories to create (repeatable)
    #[arg(long, value_name = "DIR", num_args = 1.., action = ArgAction::Append)]
    pub directories: Vec<String>,

    /// Custom note filename
    #[arg(long, value_name = "PATTERN")]
    pub filename: Option<String>,

    /// Root directory for all notes
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<String>,

    /// List existing notes of the selected kind
    #[arg(short, long)]
    pub list: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct KindArgs {
    /// Create a defect note
    #[arg(short, long)]
    pub defect: bool,

    /// Create a bug note
    #[arg(short, long)]
    pub bug: bool,

    /// Create a story note
    #[arg(short, long)]
    pub story: bool,

    /// Create a feature note
    #[arg(short, long)]
    pub feature: bool,

    /// Create a custom note
    #[arg(short, long, value_name = "NAME", value_parser = NonEmptyStringValueParser::new())]
    pub option: Option<String>,
}

impl KindArgs {
    /// The selected kind. clap guarantees exactly one flag is set.
    pub fn note_kind(&self) -> NoteKind {
        let selected = [
            (self.defect, NoteType::Defect),
            (self.bug, NoteType::Bug),
            (self.story, NoteType::Story),
            (self.feature, NoteType::Feature),
        ]
        .into_iter()
        .find_map(|(set, note_type)| set.then_some(note_type));

        match selected {
            Some(note_type) => NoteKind::Type(note_type),
            None => NoteKind::Custom(self.option.clone().unwrap_or_default()),
        }
    }
}

impl Cli {
    /// Build the create request, or `None` in list mode without a name.
    pub fn note_request(&self) -> Option<NoteRequest> {
        let name = self.name.clone()?;
        let directories = if self.directories.is_empty() {
            None
        } else {
            Some(DirEntry::from(self.directories.clone()))
        };

        Some(NoteRequest {
            name,
            kind: self.kind.note_kind(),
            identifier: self.identifier.clone(),
            template: self.template.clone(),
            filename: self.filename.clone(),
            root: self.root.clone(),
            directories,
        })
    }
}
