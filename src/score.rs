use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "snake-tty";
const SCORE_FILE_NAME: &str = "high_score.json";

/// Failure saving or loading the persisted high score.
///
/// These are reported as warnings by the driver; the tick loop never stops
/// because the score file is unreadable.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the persisted high score, treating a missing file as zero.
///
/// A file that exists but cannot be read or parsed is an error, so the
/// caller can surface a warning before entering raw terminal mode.
pub fn load_high_score() -> Result<u32, ScoreError> {
    load_from(&scores_path())
}

/// Persists a new high score, creating parent directories when needed.
pub fn save_high_score(score: u32) -> Result<(), ScoreError> {
    save_to(&scores_path(), score)
}

fn load_from(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let file: ScoreFile = serde_json::from_str(&raw)?;
    Ok(file.high_score)
}

fn save_to(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&ScoreFile { high_score: score })?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_from, save_to};

    #[test]
    fn score_round_trips_through_disk() {
        let path = unique_test_path("round_trip");

        save_to(&path, 42).expect("score save should succeed");
        let loaded = load_from(&path).expect("load should succeed");

        assert_eq!(loaded, 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_reads_as_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let loaded = load_from(&path).expect("missing file should read as Ok(0)");
        assert_eq!(loaded, 0);
    }

    #[test]
    fn malformed_score_file_is_an_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(load_from(&path).is_err());

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snake-tty-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &Path) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
