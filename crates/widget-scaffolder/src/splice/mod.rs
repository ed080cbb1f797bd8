//! Marker-based splicing of reference lines into aggregator files
//!
//! A splice inserts one line directly above the file's marker line and keeps
//! the marker itself byte-for-byte, so the next run can splice at the same
//! point. Lines spliced in successive runs therefore keep generation order.

pub mod marker;
pub mod references;

use crate::error::ScaffoldError;
use std::path::Path;
use tokio::fs;

pub use marker::{Marker, MARKER_TOKEN};

/// Result of a successful splice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// The line was inserted above the marker
    Inserted,
    /// The exact line was already in the file; nothing changed
    AlreadyPresent,
}

/// Marker problems found while splicing text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerError {
    NotFound,
    Ambiguous(usize),
}

impl MarkerError {
    fn at(self, path: &Path, marker: Marker) -> ScaffoldError {
        match self {
            MarkerError::NotFound => ScaffoldError::MarkerNotFound {
                path: path.to_path_buf(),
                marker: marker.to_string(),
            },
            MarkerError::Ambiguous(count) => ScaffoldError::MarkerAmbiguous {
                path: path.to_path_buf(),
                marker: marker.to_string(),
                count,
            },
        }
    }
}

fn without_eol(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Count marker lines in `text`
pub fn count_markers(text: &str, marker: Marker) -> usize {
    text.split_inclusive('\n')
        .filter(|l| marker.matches(without_eol(l)))
        .count()
}

/// Insert `line` above the single `marker` line of `text`.
///
/// The inserted line takes the marker's indentation and line ending. Returns
/// the new text, or the original text with [`SpliceOutcome::AlreadyPresent`]
/// when an identical line (ignoring surrounding whitespace) already exists.
pub fn splice_text(
    text: &str,
    marker: Marker,
    line: &str,
) -> Result<(String, SpliceOutcome), MarkerError> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();

    let positions: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| marker.matches(without_eol(l)))
        .map(|(i, _)| i)
        .collect();

    let index = match positions.as_slice() {
        [] => return Err(MarkerError::NotFound),
        [index] => *index,
        many => return Err(MarkerError::Ambiguous(many.len())),
    };

    let wanted = line.trim();
    if lines.iter().any(|l| l.trim() == wanted) {
        return Ok((text.to_string(), SpliceOutcome::AlreadyPresent));
    }

    let marker_line = lines[index];
    let indent_len = marker_line.len() - marker_line.trim_start().len();
    let indent = &marker_line[..indent_len];
    let crlf = if marker_line.ends_with('\n') {
        marker_line.ends_with("\r\n")
    } else {
        text.contains("\r\n")
    };
    let eol = if crlf { "\r\n" } else { "\n" };

    let mut out = String::with_capacity(text.len() + indent.len() + wanted.len() + eol.len());
    for l in &lines[..index] {
        out.push_str(l);
    }
    out.push_str(indent);
    out.push_str(wanted);
    out.push_str(eol);
    for l in &lines[index..] {
        out.push_str(l);
    }

    Ok((out, SpliceOutcome::Inserted))
}

/// Splice `line` into the file at `path`.
///
/// The file is only rewritten when a line was actually inserted; on a marker
/// error it is left untouched.
pub async fn splice_file(
    path: &Path,
    marker: Marker,
    line: &str,
) -> Result<SpliceOutcome, ScaffoldError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| ScaffoldError::io(path, e))?;

    let (patched, outcome) =
        splice_text(&content, marker, line).map_err(|e| e.at(path, marker))?;

    if outcome == SpliceOutcome::Inserted {
        fs::write(path, patched)
            .await
            .map_err(|e| ScaffoldError::io(path, e))?;
    }

    Ok(outcome)
}
