//! Resource loading - property files from disk into a template store

use std::path::{Path, PathBuf};

use crate::application::errors::ConfigError;
use crate::application::messaging::TemplateStore;
use crate::domain::entities::LocaleCode;

const EXTENSION: &str = "properties";

/// Load every `<contentType>_<languageCode>.properties` file in `dir`
///
/// With `content_type` set, only files starting with `<content_type>_` are
/// read. Files are loaded in name order.
pub fn load_directory(dir: impl AsRef<Path>, content_type: Option<&str>) -> Result<TemplateStore, ConfigError> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
            continue;
        }
        if let Some(prefix) = content_type {
            let matches = file_name(&path).map_or(false, |name| {
                name.strip_prefix(prefix).map_or(false, |rest| rest.starts_with('_'))
            });
            if !matches {
                tracing::debug!("Skipping {}", path.display());
                continue;
            }
        }
        files.push(path);
    }

    files.sort();
    tracing::info!("Loading {} property files from {}", files.len(), dir.display());
    load_files(&files)
}

/// Load the given property files; the locale comes from each file name
pub fn load_files(files: &[PathBuf]) -> Result<TemplateStore, ConfigError> {
    let mut store = TemplateStore::new();
    for path in files {
        load_file(&mut store, path)?;
    }
    Ok(store)
}

pub fn load_file(store: &mut TemplateStore, path: &Path) -> Result<(), ConfigError> {
    let name = file_name(path).unwrap_or_default();
    let locale = LocaleCode::from_resource_name(name)
        .ok_or_else(|| ConfigError::BadResourceName(name.to_string()))?;
    let source = std::fs::read_to_string(path)?;
    store.load(locale, &source)
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}
