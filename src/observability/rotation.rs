//! Size-rotated append-only file.
//!
//! Backups are numbered: `<file>.1` is the most recent, `<file>.N` the oldest.
//! On rotation every backup shifts up by one and the oldest is dropped.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many backups to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Line-oriented writer that rotates its file once it grows past the policy limit.
///
/// The handle is opened lazily on the first write and guarded by a `Mutex` so
/// the exporter can be shared with the SDK.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotating, opening, writing, or flushing fails,
    /// or if the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("rotation lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::other("trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.policy.max_bytes)
    }

    /// Numbered backup path, e.g. `notesift-otlp.json.2`.
    fn backup(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup(self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup(n);
            if from.exists() {
                fs::rename(&from, self.backup(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_policy(max_backups: usize) -> RotationPolicy {
        RotationPolicy {
            max_bytes: 8,
            max_backups,
        }
    }

    #[test]
    fn appends_lines_below_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("t.json"), RotationPolicy::default());

        file.write_line("a").unwrap();
        file.write_line("b").unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "a\nb\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("t.json"), small_policy(2));

        for line in ["first-line", "second-line", "third-line", "fourth-line"] {
            file.write_line(line).unwrap();
        }

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "fourth-line\n");
        assert_eq!(fs::read_to_string(file.backup(1)).unwrap(), "third-line\n");
        assert_eq!(fs::read_to_string(file.backup(2)).unwrap(), "second-line\n");
        assert!(!file.backup(3).exists());
    }

    #[test]
    fn zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("t.json"), small_policy(0));

        file.write_line("first-line").unwrap();
        file.write_line("second-line").unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "second-line\n");
        assert!(!file.backup(1).exists());
    }
}
