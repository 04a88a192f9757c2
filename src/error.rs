// src/error.rs
use docpage_markdown::ConvertError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering a page into markup.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Markdown conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("Package identifier '{0}' is not of the form 'scope/name'")]
    InvalidPackageId(String),
}

/// Errors raised while loading page data.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read page data from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid page data: {0}")]
    Json(#[from] serde_json::Error),
}

/// A comprehensive error type for the command-line front end.
#[derive(Error, Debug)]
pub enum DocpageError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Loading failed: {0}")]
    Load(#[from] LoadError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
