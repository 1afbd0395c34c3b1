use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A newline-separated list of entries backed by a file that stays open for
/// the whole session. Every save replaces the file contents.
pub struct TaskFile {
    path: PathBuf,
    handle: File,
    lines: Vec<String>,
}

impl TaskFile {
    /// Open (creating if absent) and parse a task file.
    pub fn load(path: PathBuf) -> Result<Self> {
        let mut handle = open_read_write(&path)?;

        let mut bytes = Vec::new();
        handle
            .read_to_end(&mut bytes)
            .map_err(|source| Error::ReadFile {
                path: path.clone(),
                source,
            })?;
        let lines = parse_lines(&String::from_utf8_lossy(&bytes));
        tracing::debug!(path = %path.display(), entries = lines.len(), "loaded task file");

        Ok(Self {
            path,
            handle,
            lines,
        })
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Entries must not contain line breaks; callers sanitise first.
    pub fn append(&mut self, entry: String) {
        debug_assert!(!entry.contains(['\n', '\r']));
        self.lines.push(entry);
    }

    pub fn remove_first(&mut self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.lines.remove(0))
        }
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.lines.swap(a, b);
    }

    /// Truncate the backing file and write every entry back out.
    pub fn save(&mut self) -> Result<()> {
        let output = self.lines.join("\n");
        let write = |handle: &mut File| -> std::io::Result<()> {
            handle.set_len(0)?;
            handle.seek(SeekFrom::Start(0))?;
            handle.write_all(output.as_bytes())?;
            handle.flush()
        };
        write(&mut self.handle).map_err(|source| Error::WriteFile {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), entries = self.lines.len(), "saved task file");
        Ok(())
    }
}

/// Open a file for reading and writing, creating it with mode 0644 if needed.
pub fn open_read_write(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path).map_err(|source| Error::OpenFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Split file content into entries, skipping blank lines.
fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
