//! Reads page data files produced by the site build.

use crate::error::LoadError;
use docpage_types::Page;
use log::debug;
use std::fs;
use std::path::Path;

pub fn page_from_str(json: &str) -> Result<Page, LoadError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_page<P: AsRef<Path>>(path: P) -> Result<Page, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let page = page_from_str(&json)?;
    debug!("Loaded page '{}' from {}", page.title, path.display());
    Ok(page)
}
