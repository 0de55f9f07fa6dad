#![allow(dead_code)]

pub mod fixtures {
    use std::path::Path;
    use tempfile::TempDir;

    /// Create a temporary route directory populated with empty files.
    ///
    /// Paths use `/` separators relative to the fixture root; parent
    /// directories are created as needed.
    pub fn route_dir(files: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().expect("create fixture dir");
        write_files(dir.path(), files);
        dir
    }

    /// Add empty files beneath an existing fixture root.
    pub fn write_files(root: &Path, files: &[&str]) {
        for file in files {
            let path = root.join(file.trim_start_matches('/'));
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create fixture parents");
            }
            std::fs::write(&path, b"export default {}\n").expect("write fixture file");
        }
    }
}
