use std::path::Path;

/// Text before the last `.` of `path`, or an empty string when there is none.
///
/// The whole string is searched, so a dot inside a directory component
/// counts too. Entry names never contain a separator, which is the only
/// way this is called.
pub fn basename(path: &str) -> &str {
    match path.rfind('.') {
        Some(index) => &path[..index],
        None => "",
    }
}

/// Text after the last `.` of `path`, or an empty string when there is none.
pub fn extname(path: &str) -> &str {
    match path.rfind('.') {
        Some(index) => &path[index + 1..],
        None => "",
    }
}

/// Directory containing `path`. `None` means there is nothing above it.
pub fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}
