//! File I/O for messages and results
//!
//! Results are written atomically (temp file, then rename) so an interrupted
//! run never leaves a half-written output file behind.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::CipherError;

/// Read a message file
///
/// A single trailing line terminator is removed so that a file saved by a
/// text editor holds the same message as the text typed into it.
pub fn read_message<P: AsRef<Path>>(path: P) -> Result<String, CipherError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .map_err(|e| CipherError::Io(format!("Cannot read file {}: {}", path.display(), e)))?;

    debug!("read {} bytes from {}", contents.len(), path.display());
    Ok(trim_line_ending(contents))
}

/// Read a message from any reader (stdin in practice)
pub fn read_message_from<R: Read>(mut reader: R) -> Result<String, CipherError> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| CipherError::Io(format!("Cannot read message: {}", e)))?;
    Ok(trim_line_ending(contents))
}

/// Write text to a file atomically (write to temp, then rename)
pub fn write_text_atomic<P: AsRef<Path>>(path: P, text: &str) -> Result<(), CipherError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CipherError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;

    let file = File::create(&temp_path)
        .map_err(|e| CipherError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| CipherError::Io(format!("Failed to write output: {}", e)))?;

    writer
        .flush()
        .map_err(|e| CipherError::Io(format!("Failed to flush output: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CipherError::Io(format!("Failed to sync output: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CipherError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    info!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Sibling temp file used while writing `path`
fn temp_path_for(path: &Path) -> Result<PathBuf, CipherError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CipherError::Io(format!("{} is not a file path", path.display())))?;

    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

fn trim_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_message_trims_one_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("message.txt");
        fs::write(&path, "hello\n\n").unwrap();

        assert_eq!(read_message(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_read_message_trims_crlf() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("message.txt");
        fs::write(&path, "hello\r\n").unwrap();

        assert_eq!(read_message(&path).unwrap(), "hello");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_message(temp_dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CipherError::Io(_)));
    }

    #[test]
    fn test_read_message_from_reader() {
        let input: &[u8] = b"attack at dawn\n";
        assert_eq!(read_message_from(input).unwrap(), "attack at dawn");
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_text_atomic(&path, "khoor").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "khoor");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_text_atomic(&path, "khoor").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("out.txt.tmp").exists());
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_text_atomic(&path, "first").unwrap();
        write_text_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("out.txt");

        write_text_atomic(&path, "zyx").unwrap();
        assert!(path.exists());
    }
}
