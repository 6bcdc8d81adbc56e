use std::borrow::Cow;
use std::ffi::OsString;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub is_dir: bool,
}

impl Entry {
    /// Printable form of the name; bytes that are not UTF-8 are replaced.
    pub fn label(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Visible regular files and directories directly under `path`, sorted by name.
///
/// Unreadable directories produce an empty listing; callers decide whether
/// that is fatal.
pub fn list_entries(path: &Path) -> Vec<Entry> {
    let Ok(read_dir) = std::fs::read_dir(path) else {
        log::debug!("cannot read {}", path.display());
        return Vec::new();
    };
    let mut entries = Vec::new();
    for entry in read_dir {
        let Ok(entry) = entry else {
            continue;
        };
        let name = entry.file_name();
        if name.as_encoded_bytes().starts_with(b".") {
            continue;
        }
        let Ok(file_type) = entry.file_type() else {
            log::debug!("skipping {}: file type unavailable", name.to_string_lossy());
            continue;
        };
        if !(file_type.is_file() || file_type.is_dir()) {
            continue;
        }
        entries.push(Entry {
            name,
            is_dir: file_type.is_dir(),
        });
    }
    entries.sort_by(|left, right| {
        (&left.name, left.is_dir).cmp(&(&right.name, right.is_dir))
    });
    entries
}
