//! Append-only feedback store.
//!
//! User corrections land here as `text,label` rows in a UTF-8 CSV file.
//! Rows are never mutated or deleted; every retrain reads the whole file.
//! The append path (serving) and the read path (retrain) share one mutex
//! so a retrain never observes a half-written row.

use crate::error::{DataError, DataResult};
use crate::types::TrainingExample;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

const HEADER: &str = "text,label";

/// Durable store of user-submitted (text, label) corrections.
pub struct FeedbackStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FeedbackStore {
    /// Create a store bound to a CSV path. The file itself is created lazily
    /// on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the underlying CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one correction.
    ///
    /// Fails with [`DataError::MissingField`] if either field is empty after
    /// trimming; nothing is written in that case. On the first successful
    /// append the file is created with a `text,label` header row.
    pub fn append(&self, text: &str, label: &str) -> DataResult<()> {
        if text.trim().is_empty() {
            return Err(DataError::MissingField("text"));
        }
        if label.trim().is_empty() {
            return Err(DataError::MissingField("label"));
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let existed = self.path.exists();
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        if !existed {
            writeln!(file, "{}", HEADER)?;
        }
        writeln!(file, "{},{}", escape_field(text), escape_field(label))?;
        file.flush()?;
        Ok(())
    }

    /// Load every previously appended correction.
    ///
    /// A missing file yields an empty list. Rows that cannot be parsed or
    /// that are missing a field are skipped with a warning rather than
    /// failing the whole load.
    pub fn load_all(&self) -> DataResult<Vec<TrainingExample>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let mut examples = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if idx == 0 || line.is_empty() {
                // Header row, or trailing blank line.
                continue;
            }
            match parse_row(line) {
                Some((text, label)) => examples.push(TrainingExample::new(text, label)),
                None => warn!(line = idx + 1, "skipping malformed feedback row"),
            }
        }
        Ok(examples)
    }
}

/// Escape a CSV field. Embedded line breaks are folded to spaces so the
/// store stays one record per line; commas and quotes get standard CSV
/// quoting.
fn escape_field(field: &str) -> String {
    let flat = field.replace(['\r', '\n'], " ");
    if flat.contains(',') || flat.contains('"') {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

/// Parse one CSV row into (text, label). Returns `None` for rows without
/// exactly two non-empty fields or with broken quoting.
fn parse_row(line: &str) -> Option<(String, String)> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if in_quotes {
        return None;
    }
    fields.push(current);

    if fields.len() != 2 {
        return None;
    }
    let text = fields[0].trim();
    let label = fields[1].trim();
    if text.is_empty() || label.is_empty() {
        return None;
    }
    Some((text.to_string(), label.to_string()))
}
