use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Every `.kes` file under `root`, in a stable order. Directories whose name
/// starts with `_` hold shared inputs rather than cases and are skipped.
pub fn collect_fixtures(root: &Path, filter: Option<&str>) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_helper_dir(entry.path()))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_fixture(entry.path()))
        .map(|entry| entry.into_path())
        .filter(|path| filter.is_none_or(|needle| path.to_string_lossy().contains(needle)))
        .collect();
    files.sort();
    files
}

fn is_fixture(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "kes")
}

fn is_helper_dir(path: &Path) -> bool {
    path.is_dir()
        && path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('_'))
}
