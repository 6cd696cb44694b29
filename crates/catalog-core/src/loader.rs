//! # Loader
//!
//! Reads a backing file, drops its header line and feeds every remaining
//! line through a record parser.
//!
//! Two explicit variants, chosen per file by the caller:
//! - [`load_keyed`]: first-wins insert into an insertion-ordered map
//! - [`load_sequence`]: unconditional append
//!
//! A file that cannot be read is not an error. The loader returns an empty
//! collection and a [`LoadReport`] saying why, and the caller decides how to
//! tell the operator. Malformed lines are skipped silently; they are only
//! counted in the report.

use crate::store::{Keyed, KeyedMap, insert_first_wins};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of reading one backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file was read.
    Loaded {
        /// Records kept in the collection.
        records: usize,
        /// Lines the parser rejected.
        skipped: usize,
        /// Well-formed records dropped because their key was already taken.
        duplicates: usize,
    },
    /// The file could not be read; the collection is empty.
    Unavailable {
        /// Kind of the read failure.
        kind: ErrorKind,
        /// Human-readable cause.
        reason: String,
    },
}

/// What happened while loading a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// The file that was read.
    pub path: PathBuf,
    /// The outcome.
    pub status: LoadStatus,
}

impl LoadReport {
    /// `true` when the file could not be read.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self.status, LoadStatus::Unavailable { .. })
    }

    /// Number of lines the parser rejected (0 for unavailable files).
    #[must_use]
    pub fn skipped(&self) -> usize {
        match self.status {
            LoadStatus::Loaded { skipped, .. } => skipped,
            LoadStatus::Unavailable { .. } => 0,
        }
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            LoadStatus::Loaded {
                records,
                skipped,
                duplicates,
            } => write!(
                f,
                "{}: {} records, {} malformed lines skipped, {} duplicates dropped",
                self.path.display(),
                records,
                skipped,
                duplicates
            ),
            LoadStatus::Unavailable {
                kind: ErrorKind::NotFound,
                ..
            } => write!(f, "Error: file \"{}\" was not found.", self.path.display()),
            LoadStatus::Unavailable { reason, .. } => write!(
                f,
                "Error: file \"{}\" could not be read: {}",
                self.path.display(),
                reason
            ),
        }
    }
}

/// A loaded collection together with its report.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    /// The collection (empty if the file was unavailable).
    pub data: T,
    /// What happened while reading.
    pub report: LoadReport,
}

/// Read the body lines of a file, header excluded.
///
/// Returns the unavailable report instead of the text when reading fails.
fn read_body(path: &Path) -> Result<String, LoadReport> {
    std::fs::read_to_string(path).map_err(|e| LoadReport {
        path: path.to_path_buf(),
        status: LoadStatus::Unavailable {
            kind: e.kind(),
            reason: e.to_string(),
        },
    })
}

/// Load a keyed file, keeping the first record seen for every key.
pub fn load_keyed<T, F>(path: &Path, parse: F) -> Loaded<KeyedMap<T>>
where
    T: Keyed,
    F: Fn(&str) -> Option<T>,
{
    let mut data = KeyedMap::<T>::default();
    let text = match read_body(path) {
        Ok(text) => text,
        Err(report) => return Loaded { data, report },
    };

    let mut skipped = 0;
    let mut duplicates = 0;
    for line in text.lines().skip(1) {
        match parse(line) {
            Some(record) => {
                if !insert_first_wins(&mut data, record) {
                    duplicates += 1;
                }
            }
            None => skipped += 1,
        }
    }

    let report = LoadReport {
        path: path.to_path_buf(),
        status: LoadStatus::Loaded {
            records: data.len(),
            skipped,
            duplicates,
        },
    };
    Loaded { data, report }
}

/// Load a sequence file, keeping every record in file order.
pub fn load_sequence<T, F>(path: &Path, parse: F) -> Loaded<Vec<T>>
where
    F: Fn(&str) -> Option<T>,
{
    let mut data = Vec::new();
    let text = match read_body(path) {
        Ok(text) => text,
        Err(report) => return Loaded { data, report },
    };

    let mut skipped = 0;
    for line in text.lines().skip(1) {
        match parse(line) {
            Some(record) => data.push(record),
            None => skipped += 1,
        }
    }

    let report = LoadReport {
        path: path.to_path_buf(),
        status: LoadStatus::Loaded {
            records: data.len(),
            skipped,
            duplicates: 0,
        },
    };
    Loaded { data, report }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_product_line, parse_relation_line, parse_supplier_line};
    use crate::{ProductId, SupplierCode};

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("write");
        path
    }

    #[test]
    fn header_line_is_discarded() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A header that happens to be well-formed must still be dropped.
        let path = write_file(&dir, "p.txt", "1 HEADER X\n10 WIDGET A\n");

        let loaded = load_keyed(&path, parse_product_line);
        assert_eq!(loaded.data.len(), 1);
        assert!(loaded.data.contains_key(&ProductId(10)));
    }

    #[test]
    fn keyed_first_wins_and_counts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(
            &dir,
            "s.txt",
            "COD NOMBRE ESTADO\n1 ACME A\nbroken\n1 IMPOSTOR I\n2 GLOBEX A\n\n",
        );

        let loaded = load_keyed(&path, parse_supplier_line);
        assert_eq!(loaded.data.len(), 2);
        assert_eq!(loaded.data[&SupplierCode(1)].name, "ACME");
        assert_eq!(
            loaded.report.status,
            LoadStatus::Loaded {
                records: 2,
                skipped: 2,
                duplicates: 1
            }
        );
    }

    #[test]
    fn sequence_keeps_duplicates_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(
            &dir,
            "r.txt",
            "PRV_COD PRO_COD ESTADO\n1 10 A\n1 10 I\n2 10 A extra\n",
        );

        let loaded = load_sequence(&path, parse_relation_line);
        let states: Vec<_> = loaded.data.iter().map(|r| r.state.as_str()).collect();
        assert_eq!(states, vec!["A", "I"]);
        assert_eq!(loaded.report.skipped(), 1);
    }

    #[test]
    fn missing_file_yields_empty_collection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.txt");

        let keyed = load_keyed(&path, parse_product_line);
        assert!(keyed.data.is_empty());
        assert!(keyed.report.is_unavailable());

        let seq = load_sequence(&path, parse_relation_line);
        assert!(seq.data.is_empty());
        assert!(seq.report.is_unavailable());
        assert!(seq.report.to_string().contains("was not found"));
    }

    #[test]
    fn non_utf8_file_reports_reason_not_absence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"ID PRODUCTO ESTADO\n10 CA\xD1O A\n").expect("write");

        let loaded = load_keyed(&path, parse_product_line);
        assert!(loaded.data.is_empty());
        assert!(matches!(
            loaded.report.status,
            LoadStatus::Unavailable {
                kind: ErrorKind::InvalidData,
                ..
            }
        ));
        let message = loaded.report.to_string();
        assert!(message.contains("could not be read"));
        assert!(!message.contains("was not found"));
    }

    #[test]
    fn directory_path_is_unavailable_but_not_missing() {
        let dir = tempfile::tempdir().expect("tempdir");

        let loaded = load_sequence(dir.path(), parse_relation_line);
        assert!(loaded.report.is_unavailable());
        assert!(!loaded.report.to_string().contains("was not found"));
    }

    #[test]
    fn empty_file_loads_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(&dir, "e.txt", "");

        let loaded = load_sequence(&path, parse_relation_line);
        assert!(loaded.data.is_empty());
        assert!(!loaded.report.is_unavailable());
    }
}
