// Crash-safe file replacement: write a sibling temp file, fsync, rename over

use crate::error::PersistenceError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Replace `path` with whatever `write` produces
///
/// The temp file lives in the destination directory so the final rename
/// stays on one filesystem. If `write` fails, or the process dies before
/// the rename, the previous file is untouched.
pub(crate) fn write_atomically<F>(path: &Path, write: F) -> Result<(), PersistenceError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), PersistenceError>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    debug!(file = ?path, tmp = ?tmp.path(), "Renaming temp file into place");
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
