use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotaError {
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Template must be a file: {}", .0.display())]
    TemplateNotAFile(PathBuf),

    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Root must be a directory: {}", .0.display())]
    RootNotADirectory(PathBuf),

    #[error("Could not determine the user configuration directory")]
    ConfigHome,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotaError>;
