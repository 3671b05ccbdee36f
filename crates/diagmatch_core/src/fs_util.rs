use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Writes `content` to `path` atomically by writing to a temporary file
/// first, syncing to disk, then renaming into place.
///
/// Readers of a generated descriptor never observe a half-written file.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    // Windows refuses to rename an open file.
    drop(file);

    fs::rename(&temp_path, path)
}

/// Returns `true` if the file at `path` exists and its contents equal
/// `expected` byte for byte.
pub fn is_up_to_date(path: &Path, expected: &str) -> io::Result<bool> {
    match fs::read(path) {
        Ok(existing) => Ok(existing == expected.as_bytes()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
