//! The file artifact boundary.
//!
//! The transform itself does no I/O; [`CsvArtifact`] is the hand-off point
//! where the rendered document becomes named bytes and, on request, a file
//! on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::export::CsvExport;

/// Errors that can occur when saving an artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Failed to create the target directory or write the file.
    #[error("failed to write artifact: {0}")]
    Io(#[from] io::Error),
}

/// A named, fully rendered export artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvArtifact {
    /// The derived artifact file name.
    pub file_name: String,
    /// UTF-8 document bytes, byte-order marker included.
    pub bytes: Vec<u8>,
}

impl CsvArtifact {
    /// Renders an export into a named artifact.
    pub fn from_export(export: &CsvExport) -> Self {
        Self {
            file_name: export.file_name(),
            bytes: export.to_csv().into_bytes(),
        }
    }

    /// Writes the artifact into `dir`, creating the directory if needed.
    ///
    /// Returns the path of the written file.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ArtifactError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        tracing::debug!(path = %path.display(), size = self.bytes.len(), "wrote export artifact");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ExportRows, FileNameParts, SummaryExporter};
    use crate::summary::{ActionMeeting, MeetingSummary};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_export() -> CsvExport {
        let summary = MeetingSummary::action(
            "Acme",
            Utc.with_ymd_and_hms(2021, 3, 7, 18, 30, 0).unwrap(),
            ActionMeeting {
                meeting_members: vec![],
                agenda_items: vec![],
            },
        );
        SummaryExporter::with_defaults()
            .export(&summary)
            .expect("action meetings export")
    }

    #[test]
    fn from_export_carries_name_and_bom() {
        let artifact = CsvArtifact::from_export(&sample_export());
        assert_eq!(artifact.file_name, "RecapAction_Acme_2021-3-7.csv");
        assert!(artifact.bytes.starts_with("\u{feff}".as_bytes()));
    }

    #[test]
    fn save_to_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = CsvArtifact::from_export(&sample_export());

        let path = artifact.save_to(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("RecapAction_Acme_2021-3-7.csv"));
        assert_eq!(fs::read(&path).unwrap(), artifact.bytes);
    }

    #[test]
    fn save_to_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("2021");
        let artifact = CsvArtifact {
            file_name: "out.csv".to_string(),
            bytes: b"a,b".to_vec(),
        };

        let path = artifact.save_to(&nested).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), b"a,b");
    }

    #[test]
    fn export_rows_surface_in_bytes() {
        let export = CsvExport {
            rows: ExportRows::Action(vec![]),
            file_name_parts: FileNameParts {
                product: "Recap".to_string(),
                meeting_label: "Action".to_string(),
                team_name: "Acme".to_string(),
                end_date: NaiveDate::from_ymd_opt(2021, 3, 7).unwrap(),
            },
        };
        let artifact = CsvArtifact::from_export(&export);
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.contains("author,status,agendaItem"));
    }
}
