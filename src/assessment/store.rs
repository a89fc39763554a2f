//! Persistence for assessment results
//!
//! One canonical CSV file holds the latest score sheet. Writes go through
//! a temp file in the same directory and are renamed into place, so a
//! concurrent reader sees either the old sheet or the new one, never a
//! half-written file. A missing file is not an error; it means no
//! assessment has been taken yet.

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;

use super::scorer::ScoreSheet;
use super::RiasecType;

const CSV_HEADER: &str = "Type,Score";

#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a score sheet, replacing any previous result.
    ///
    /// The sheet is written as `Type,Score` rows in canonical order.
    pub fn save(&self, sheet: &ScoreSheet) -> crate::Result<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }

        let mut content = String::from(CSV_HEADER);
        content.push('\n');
        for (riasec_type, score) in sheet.entries() {
            content.push_str(&format!("{},{score}\n", riasec_type.label()));
        }

        // Temp file must live on the same filesystem as the target for the
        // rename to be atomic
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| crate::CareerRagError::Io(e.error))?;

        info!("Saved RIASEC scores to {}", self.path.display());
        Ok(())
    }

    /// Load the persisted score sheet.
    ///
    /// Returns `Ok(None)` when no result has been saved yet. A file that
    /// exists but does not parse is reported as a format error rather than
    /// silently treated as absent.
    pub fn load(&self) -> crate::Result<Option<ScoreSheet>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No results file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(crate::CareerRagError::Io(e)),
        };

        let mut lines = content
            .trim_start_matches('\u{feff}')
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        match lines.next() {
            Some(header) if header == CSV_HEADER => {}
            Some(header) => {
                return Err(crate::CareerRagError::ResultsFormat(format!(
                    "expected header '{CSV_HEADER}', found '{header}'"
                )));
            }
            None => {
                return Err(crate::CareerRagError::ResultsFormat(
                    "results file is empty".to_string(),
                ));
            }
        }

        let mut totals = [0u32; 6];
        for line in lines {
            let (label, score) = line.split_once(',').ok_or_else(|| {
                crate::CareerRagError::ResultsFormat(format!("malformed row '{line}'"))
            })?;
            let riasec_type = RiasecType::from_label(label.trim()).ok_or_else(|| {
                crate::CareerRagError::ResultsFormat(format!("unknown RIASEC type '{label}'"))
            })?;
            let score: u32 = score.trim().parse().map_err(|_| {
                crate::CareerRagError::ResultsFormat(format!(
                    "invalid score '{}' for {}",
                    score.trim(),
                    riasec_type
                ))
            })?;
            // Duplicate rows for a type keep the last value
            totals[riasec_type as usize] = score;
        }

        Ok(Some(ScoreSheet::from_totals(totals)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::score_answers;

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("riasec_scores.csv"));

        let sheet = score_answers(&[5, 4, 3, 2, 1, 5, 4, 3, 2, 1, 5, 4]);
        store.save(&sheet).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, sheet);
    }

    #[test]
    fn test_missing_file_means_no_result() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("nope.csv"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_writes_canonical_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riasec_scores.csv");
        let store = ResultStore::new(&path);

        let sheet = ScoreSheet::from_totals([10, 20, 30, 40, 50, 60]);
        store.save(&sheet).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Type,Score\nRealistic,10\nInvestigative,20\nArtistic,30\nSocial,40\nEnterprising,50\nConventional,60\n"
        );
    }

    #[test]
    fn test_save_overwrites_previous_result() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("riasec_scores.csv"));

        store
            .save(&ScoreSheet::from_totals([1, 1, 1, 1, 1, 1]))
            .unwrap();
        store
            .save(&ScoreSheet::from_totals([9, 8, 7, 6, 5, 4]))
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, ScoreSheet::from_totals([9, 8, 7, 6, 5, 4]));
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("docs").join("riasec_scores.csv"));
        store.save(&ScoreSheet::new()).unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn test_bad_header_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riasec_scores.csv");
        std::fs::write(&path, "Kind,Points\nRealistic,3\n").unwrap();

        let err = ResultStore::new(&path).load().unwrap_err();
        assert!(matches!(err, crate::CareerRagError::ResultsFormat(_)));
    }

    #[test]
    fn test_unknown_type_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riasec_scores.csv");
        std::fs::write(&path, "Type,Score\nAdventurous,3\n").unwrap();

        let err = ResultStore::new(&path).load().unwrap_err();
        assert!(matches!(err, crate::CareerRagError::ResultsFormat(_)));
    }

    #[test]
    fn test_non_numeric_score_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riasec_scores.csv");
        std::fs::write(&path, "Type,Score\nRealistic,many\n").unwrap();

        let err = ResultStore::new(&path).load().unwrap_err();
        assert!(matches!(err, crate::CareerRagError::ResultsFormat(_)));
    }

    #[test]
    fn test_partial_rows_default_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riasec_scores.csv");
        std::fs::write(&path, "Type,Score\nArtistic,12\n").unwrap();

        let sheet = ResultStore::new(&path).load().unwrap().unwrap();
        assert_eq!(sheet.get(RiasecType::Artistic), 12);
        assert_eq!(sheet.get(RiasecType::Realistic), 0);
        assert_eq!(sheet.dominant(), RiasecType::Artistic);
    }
}
