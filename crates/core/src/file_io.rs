use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a file of curl commands into memory as UTF-8.
/// The handle is closed before returning; callers that need the text twice read it twice.
pub fn read_command_file<P: AsRef<Path>>(path: P) -> Result<String, FileError> {
    let path_ref = path.as_ref();

    match fs::metadata(path_ref) {
        Ok(meta) if !meta.is_file() => return Err(FileError::NotAFile(path_ref.to_path_buf())),
        Ok(_) => {}
        Err(e) => return Err(map_io_error(e, path_ref)),
    }

    fs::read_to_string(path_ref).map_err(|e| map_io_error(e, path_ref))
}

fn map_io_error(e: std::io::Error, path: &Path) -> FileError {
    match e.kind() {
        ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
        _ => FileError::Io(e),
    }
}
