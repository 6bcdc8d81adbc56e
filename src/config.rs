use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Programs keyed by file extension (no leading dot).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionMap {
    programs: HashMap<String, PathBuf>,
}

impl ExtensionMap {
    pub fn load(path: &Path) -> AppResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| AppError::ConfigOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|error| AppError::ConfigEncoding {
            path: path.to_path_buf(),
            offset: error.utf8_error().valid_up_to(),
        })?;
        let map = parse_extensions(&content).map_err(|line| AppError::ConfigLine {
            path: path.to_path_buf(),
            line,
        })?;
        log::info!(
            "loaded {} extension mapping(s) from {}",
            map.len(),
            path.display()
        );
        Ok(map)
    }

    pub fn program_for(&self, extension: &str) -> Option<&Path> {
        self.programs.get(extension).map(PathBuf::as_path)
    }

    pub fn insert(&mut self, extension: impl Into<String>, program: impl Into<PathBuf>) {
        self.programs.insert(extension.into(), program.into());
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }
}

// Err carries the 1-based number of the first malformed line.
fn parse_extensions(content: &str) -> Result<ExtensionMap, usize> {
    let mut map = ExtensionMap::default();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let Some((extension, program)) = line.split_once('\t') else {
            return Err(index + 1);
        };
        map.insert(extension, program);
    }
    Ok(map)
}
