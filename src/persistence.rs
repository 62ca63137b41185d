//! Saving and restoring the list of typed expressions as JSON.
use crate::commands::dialogs::FileDialog;
use crate::errors::{MalformedDocumentError, PersistenceError};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "json";

/// `{"list_of_function": [...]}`; unknown fields are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDocument {
    pub list_of_function: Vec<String>,
}

impl PersistedDocument {
    pub fn new(functions: &[String]) -> Self {
        Self {
            list_of_function: functions.to_vec(),
        }
    }
}

pub fn encode(functions: &[String]) -> Result<Vec<u8>, PersistenceError> {
    Ok(serde_json::to_vec_pretty(&PersistedDocument::new(functions))?)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<String>, MalformedDocumentError> {
    let document: PersistedDocument = serde_json::from_slice(bytes)?;
    Ok(document.list_of_function)
}

/// Adds `.json` when the path has no extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

pub fn save_to_path(functions: &[String], path: &Path) -> Result<(), PersistenceError> {
    let bytes = encode(functions)?;
    fs::write(path, bytes).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("saved {} function(s) to {}", functions.len(), path.display());
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Vec<String>, PersistenceError> {
    let bytes = fs::read(path).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let functions = decode(&bytes)?;
    info!("loaded {} function(s) from {}", functions.len(), path.display());
    Ok(functions)
}

/// `Ok(None)` when the user cancels the destination.
pub fn save(
    functions: &[String],
    dialog: &mut dyn FileDialog,
) -> Result<Option<PathBuf>, PersistenceError> {
    let Some(target) = dialog.save_target(DEFAULT_EXTENSION) else {
        return Ok(None);
    };
    let target = with_default_extension(target);
    save_to_path(functions, &target)?;
    Ok(Some(target))
}

/// `Ok(None)` when the user cancels the selection.
pub fn load(dialog: &mut dyn FileDialog) -> Result<Option<Vec<String>>, PersistenceError> {
    match dialog.open_source() {
        Some(source) => load_from_path(&source).map(Some),
        None => Ok(None),
    }
}
