//! # Nota Architecture
//!
//! Nota scaffolds developer notes: given a note kind (defect, bug, story, feature or a
//! custom option) and a name, it resolves a template, a filename, a directory list and a
//! root directory from a JSON configuration, substitutes placeholders and writes the
//! rendered note into `<root>/<option>/<identifier>/`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints messages, owns exit codes       │
//! │  - Locates or bootstraps the configuration file             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds the loaded config, config home and working dir     │
//! │  - Resolves a `NoteRequest` into a `NoteContext`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Resolution (resolve.rs, flatten.rs, inject.rs)             │
//! │  - override > option section > default section > built-in   │
//! │  - Pure functions, never fail                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates paths, then creates directories and the note   │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process. The config
//! home is passed explicitly so that resolution stays testable against temporary
//! directories.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Note creation and listing
//! - [`resolve`]: Cascading resolution of every note field
//! - [`flatten`]: Nested directory list flattening
//! - [`inject`]: Placeholder substitution and home/environment expansion
//! - [`config`]: Configuration file model
//! - [`init`]: Config home discovery and first-run bootstrap
//! - [`model`]: Note kinds, requests and resolved contexts
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod flatten;
pub mod init;
pub mod inject;
pub mod model;
pub mod resolve;
