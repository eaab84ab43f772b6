//! # API Facade
//!
//! `NotaApi` is the single entry point for UI clients. It owns everything a run needs
//! (the loaded configuration, the config home and the working directory) so that
//! callers only describe *what* they want via a [`NoteRequest`].
//!
//! The facade resolves requests and dispatches to `commands/*.rs`. It does no printing
//! and returns structured `CmdResult` values.

use crate::commands;
use crate::config::NotaConfig;
use crate::error::Result;
use crate::inject::expand;
use crate::model::{NoteContext, NoteKind, NoteRequest};
use crate::resolve::{resolve_context, resolve_root};
use std::path::PathBuf;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct NotaApi {
    config: NotaConfig,
    config_home: PathBuf,
    cwd: PathBuf,
}

impl NotaApi {
    pub fn new(config: NotaConfig, config_home: PathBuf, cwd: PathBuf) -> Self {
        Self {
            config,
            config_home,
            cwd,
        }
    }

    /// Resolve a request without touching the filesystem.
    pub fn resolve(&self, request: &NoteRequest) -> NoteContext {
        resolve_context(&self.config, &self.config_home, &self.cwd, request)
    }

    pub fn create_note(&self, request: &NoteRequest) -> Result<CmdResult> {
        let ctx = self.resolve(request);
        commands::create::run(&ctx)
    }

    pub fn list_notes(&self, kind: &NoteKind, root: Option<&str>) -> Result<CmdResult> {
        let root = resolve_root(&self.config, root, &self.cwd);
        let root = PathBuf::from(expand(&root));
        commands::list::run(&root, &kind.option())
    }
}
