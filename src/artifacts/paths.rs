use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path
///
/// Removes `.` segments and folds `name/..` pairs without touching the
/// filesystem. Leading `..` segments of a relative path are kept, `..` right
/// after the root is dropped. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    cleaned.push(Component::ParentDir.as_os_str())
                }
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(Component::CurDir.as_os_str());
    }

    cleaned
}
