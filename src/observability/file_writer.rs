//! Size-rotated, append-only trace file.
//!
//! Before each write the current file size is checked. Once it passes the
//! limit the file is renamed to `<name>.<UTC timestamp>` and a fresh file is
//! started. Only the newest backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file grows past 10 MB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated backups kept next to the live file.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Timestamp suffix format. Sorts lexically in chronological order.
const BACKUP_SUFFIX_FORMAT: &str = "%Y%m%dT%H%M%S%.3fZ";

/// Append-only line writer with size-based rotation.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Writer for `path` using the default limits. Nothing is opened until
    /// the first line is written.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening, or writing the file, or
    /// an error if the lock was poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file is not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let suffix = Utc::now().format(BACKUP_SUFFIX_FORMAT);
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{suffix}"));

        fs::rename(&self.path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let Some(name) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));
        for stale in backups.iter().skip(self.max_backups) {
            // removal failures are ignored
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("trace.json."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"));

        writer.append_line("{\"a\":1}").unwrap();
        writer.append_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_past_limit_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 8, 2);

        for i in 0..5 {
            writer.append_line(&format!("line-number-{i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(backups(dir.path()), 2);
        let live = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(live, "line-number-4\n");
    }
}
