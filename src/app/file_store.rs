//! Whole-file reads and writes for the document.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::error::{AppError, Result};

/// Largest file `open` accepts.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

const CHUNK_SIZE: usize = 4096;

/// Where document bytes come from and go to.
pub trait FileStore {
    /// Read the whole file. Fails with `FileTooLarge` past `MAX_FILE_SIZE`.
    fn read(&mut self, path: &Path) -> Result<Vec<u8>>;

    /// Create or truncate `path` and write `contents` in full.
    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()>;
}

/// `FileStore` backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileStore;

impl FileStore for DiskFileStore {
    fn read(&mut self, path: &Path) -> Result<Vec<u8>> {
        let open_err = |source| AppError::FileOpen { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(open_err)?;
        let size_hint = file.metadata().map(|m| m.len()).unwrap_or(0);
        if size_hint > MAX_FILE_SIZE {
            return Err(AppError::FileTooLarge { path: path.to_path_buf(), limit: MAX_FILE_SIZE });
        }

        let mut contents = Vec::new();
        let wanted = size_hint as usize;
        contents
            .try_reserve_exact(wanted)
            .map_err(|_| AppError::Allocation { bytes: wanted })?;

        // Metadata can lie (growing files, special files), so the bound is
        // enforced on the bytes actually read too.
        let mut reader = BufReader::with_capacity(CHUNK_SIZE, file.take(MAX_FILE_SIZE + 1));
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let n = reader.read(&mut chunk).map_err(open_err)?;
            if n == 0 {
                break;
            }
            contents
                .try_reserve(n)
                .map_err(|_| AppError::Allocation { bytes: contents.len() + n })?;
            contents.extend_from_slice(&chunk[..n]);
        }

        if contents.len() as u64 > MAX_FILE_SIZE {
            return Err(AppError::FileTooLarge { path: path.to_path_buf(), limit: MAX_FILE_SIZE });
        }

        tracing::debug!(path = %path.display(), bytes = contents.len(), "File read");
        Ok(contents)
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        let write_err = |source| AppError::FileWrite { path: path.to_path_buf(), source };

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);
        writer.write_all(contents).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "File written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let mut store = DiskFileStore;

        store.write(&path, b"first line\nsecond line\n").unwrap();
        assert_eq!(store.read(&path).unwrap(), b"first line\nsecond line\n");
    }

    #[test]
    fn test_write_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "a much longer previous content").unwrap();

        DiskFileStore.write(&path, b"short").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn test_empty_document_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        DiskFileStore.write(&path, b"").unwrap();
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_read_spanning_several_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunks.txt");
        let data: Vec<u8> = (0..(CHUNK_SIZE * 3 + 17)).map(|i| b'a' + (i % 26) as u8).collect();
        fs::write(&path, &data).unwrap();

        assert_eq!(DiskFileStore.read(&path).unwrap(), data);
    }

    #[test]
    fn test_read_at_limit_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("limit.txt");
        fs::write(&path, vec![b'x'; MAX_FILE_SIZE as usize]).unwrap();

        assert_eq!(DiskFileStore.read(&path).unwrap().len() as u64, MAX_FILE_SIZE);
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        fs::write(&path, vec![b'x'; MAX_FILE_SIZE as usize + 1]).unwrap();

        let err = DiskFileStore.read(&path).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { limit: MAX_FILE_SIZE, .. }));
    }

    #[test]
    fn test_missing_file_is_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = DiskFileStore.read(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, AppError::FileOpen { .. }));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("note.txt");
        let err = DiskFileStore.write(&path, b"x").unwrap_err();
        assert!(matches!(err, AppError::FileWrite { .. }));
    }
}
