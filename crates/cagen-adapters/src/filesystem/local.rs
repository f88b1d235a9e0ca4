//! Local filesystem adapter using std::fs.
//!
//! Directories are created owner/group-only (`0750`) and files owner-only
//! (`0600`) on unix. Other platforms fall back to the process defaults.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use cagen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CagenError, CagenResult},
};

pub const DIR_MODE: u32 = 0o750;
pub const FILE_MODE: u32 = 0o600;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> CagenResult<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CagenResult<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        let mut file = options
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CagenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories_and_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("db/entity");
        let file = dir.join("User.go");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, "package entity\n").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "package entity\n");
    }

    #[test]
    fn overwrite_truncates_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("a.go");

        fs.write_file(&file, "package a\n\n// a much longer first version\n")
            .unwrap();
        fs.write_file(&file, "package a\n").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "package a\n");
    }

    #[test]
    fn file_in_directory_chain_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("out");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = LocalFilesystem::new()
            .create_dir_all(&blocker.join("entity"))
            .unwrap_err();
        assert!(matches!(
            err,
            CagenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn applies_restrictive_modes() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("repo");
        let file = dir.join("UserRepo.go");
        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, "package repo\n").unwrap();

        let dir_mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        let file_mode = std::fs::metadata(&file).unwrap().permissions().mode() & 0o777;
        // umask can only clear bits
        assert_eq!(dir_mode & !DIR_MODE, 0);
        assert_eq!(file_mode & !FILE_MODE, 0);
        assert_ne!(file_mode & 0o600, 0);
    }
}
