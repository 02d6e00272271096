use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regular files under `root` whose extension equals `extension`
/// (case-insensitive), sorted by path.
pub fn list_files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|value| value.to_str())
                .map(|value| value.eq_ignore_ascii_case(extension))
                .unwrap_or(false)
        })
        .collect::<Vec<_>>();
    files.sort();
    files
}
