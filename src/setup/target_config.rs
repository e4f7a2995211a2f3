//! Writing the storage path into the persisted config.
//!
//! The file is parsed as TOML and `source.path` is set by key, so comments
//! and unrelated keys written by `init` survive the edit.

use std::fs;
use std::path::Path;

use toml_edit::{table, value, DocumentMut, Item, Value};

use crate::error::{BootstrapError, Result};

const SOURCE_TABLE: &str = "source";
const PATH_KEY: &str = "path";

/// Path as stored in the config: forward slashes only.
pub fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Return `contents` with `source.path` set to `storage`.
///
/// A missing `[source]` table is created.
pub fn set_storage_path(contents: &str, storage: &Path) -> Result<String> {
    let mut doc = contents
        .parse::<DocumentMut>()
        .map_err(|e| BootstrapError::ConfigInitFailed {
            message: format!("generated config is not valid TOML: {}", e),
        })?;

    if !doc.contains_key(SOURCE_TABLE) {
        doc[SOURCE_TABLE] = table();
    }
    let source = doc[SOURCE_TABLE]
        .as_table_like_mut()
        .ok_or_else(|| BootstrapError::ConfigInitFailed {
            message: format!("`{}` is not a table", SOURCE_TABLE),
        })?;
    let path = normalize_separators(storage);
    match source.get_mut(PATH_KEY).and_then(Item::as_value_mut) {
        Some(existing) => {
            // Keep the spacing and trailing comment `init` put on the line.
            let decor = existing.decor().clone();
            *existing = Value::from(path);
            *existing.decor_mut() = decor;
        }
        None => {
            source.insert(PATH_KEY, value(path));
        }
    }

    Ok(doc.to_string())
}

/// Rewrite the config file in place.
pub fn rewrite_config_file(config_file: &Path, storage: &Path) -> Result<()> {
    let contents = fs::read_to_string(config_file)?;
    let updated = set_storage_path(&contents, storage)?;
    fs::write(config_file, updated)?;
    tracing::info!(
        config = %config_file.display(),
        storage = %storage.display(),
        "storage path written"
    );
    Ok(())
}
