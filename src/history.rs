//! Append-only plaintext log of generated passwords.
//!
//! One line per password, `Generated Password: <password>`. The file is not
//! encrypted; it is an audit trail, not a vault.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::HistoryError;

pub const HISTORY_FILE_NAME: &str = "password_memory.txt";
const LINE_PREFIX: &str = "Generated Password: ";

pub struct History {
    path: PathBuf,
}

impl History {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, password: &str) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        writeln!(file, "{}{}", LINE_PREFIX, password).map_err(|e| self.io_error(e))?;
        debug!("appended password to {}", self.path.display());

        Ok(())
    }

    /// Passwords in the order they were written. A missing file is an empty history.
    pub fn entries(&self) -> Result<Vec<String>, HistoryError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| self.io_error(e))?;
            let entry = line.strip_prefix(LINE_PREFIX).unwrap_or(&line);
            if !entry.is_empty() {
                entries.push(entry.to_string());
            }
        }

        Ok(entries)
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
