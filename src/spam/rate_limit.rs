//! Submission log backing the contact form rate limit.
//!
//! A JSON array of millisecond Unix timestamps, pruned to the window on
//! every check and written atomically. Storage trouble never blocks a
//! submission: reads and writes that fail are logged and the form is allowed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::error::{Result, ResultExt, TermfolioError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub allowed: bool,
    pub remaining: usize,
    /// Whole minutes (rounded up) until the oldest submission ages out
    pub minutes_until_reset: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct SubmissionLog {
    file_path: PathBuf,
    max_submissions: usize,
    window: Duration,
}

impl SubmissionLog {
    pub fn new(path: impl Into<PathBuf>, max_submissions: usize, window: Duration) -> Self {
        SubmissionLog {
            file_path: path.into(),
            max_submissions,
            window,
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read(&self) -> Result<Option<Vec<i64>>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.file_path).map_err(|source| {
            TermfolioError::StoreRead {
                path: self.file_path.display().to_string(),
                source,
            }
        })?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write(&self, timestamps: &[i64]) -> Result<()> {
        let write_err = |source| TermfolioError::StoreWrite {
            path: self.file_path.display().to_string(),
            source,
        };
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string(timestamps)?;
        let temp_path = self.file_path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(write_err)?;
        fs::rename(&temp_path, &self.file_path).map_err(write_err)?;
        Ok(())
    }

    fn recent(&self, timestamps: Vec<i64>, now: DateTime<Utc>) -> Vec<i64> {
        let now_ms = now.timestamp_millis();
        let window_ms = self.window.num_milliseconds();
        timestamps
            .into_iter()
            .filter(|ts| now_ms.saturating_sub(*ts) < window_ms)
            .collect()
    }

    /// Whether another submission is allowed at `now`.
    pub fn check(&self, now: DateTime<Utc>) -> RateLimitStatus {
        let open = RateLimitStatus {
            allowed: true,
            remaining: self.max_submissions,
            minutes_until_reset: None,
        };

        let stored = match self.read() {
            Ok(Some(stored)) => stored,
            Ok(None) => return open,
            Err(e) => {
                warn!(error = %e, "Rate limit check failed, allowing submission");
                return open;
            }
        };

        let recent = self.recent(stored, now);
        if recent.len() >= self.max_submissions {
            let oldest = recent.iter().copied().min().unwrap_or(now.timestamp_millis());
            let age_ms = now.timestamp_millis().saturating_sub(oldest);
            let until_reset_ms = self.window.num_milliseconds().saturating_sub(age_ms);
            let minutes = until_reset_ms.saturating_add(59_999) / 60_000;
            debug!(recent = recent.len(), minutes, "Contact form rate limited");
            return RateLimitStatus {
                allowed: false,
                remaining: 0,
                minutes_until_reset: Some(minutes),
            };
        }

        self.write(&recent).warn_on_err();
        RateLimitStatus {
            allowed: true,
            remaining: self.max_submissions - recent.len(),
            minutes_until_reset: None,
        }
    }

    /// Log a submission made at `now`.
    pub fn record(&self, now: DateTime<Utc>) {
        let mut stored = match self.read() {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Failed to read submission log, starting over");
                Vec::new()
            }
        };
        stored.push(now.timestamp_millis());
        let recent = self.recent(stored, now);
        // A lost entry loosens the rate limit
        self.write(&recent).log_err();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    fn log_in(dir: &Path) -> SubmissionLog {
        SubmissionLog::new(dir.join("subs.json"), 3, Duration::hours(1))
    }

    #[test]
    fn test_fresh_log_allows_full_quota() {
        let dir = tempdir().unwrap();
        let status = log_in(dir.path()).check(t0());
        assert!(status.allowed);
        assert_eq!(status.remaining, 3);
    }

    #[test]
    fn test_remaining_counts_down() {
        let dir = tempdir().unwrap();
        let log = log_in(dir.path());
        log.record(t0());
        log.record(t0() + Duration::minutes(1));
        let status = log.check(t0() + Duration::minutes(2));
        assert!(status.allowed);
        assert_eq!(status.remaining, 1);
    }

    #[test]
    fn test_fourth_submission_blocked_with_reset_minutes() {
        let dir = tempdir().unwrap();
        let log = log_in(dir.path());
        for m in 0..3 {
            log.record(t0() + Duration::minutes(m));
        }
        let status = log.check(t0() + Duration::minutes(10) + Duration::seconds(30));
        assert!(!status.allowed);
        assert_eq!(status.remaining, 0);
        // 49.5 minutes left on the oldest entry, rounded up
        assert_eq!(status.minutes_until_reset, Some(50));
    }

    #[test]
    fn test_old_submissions_age_out() {
        let dir = tempdir().unwrap();
        let log = log_in(dir.path());
        for m in 0..3 {
            log.record(t0() + Duration::minutes(m));
        }
        let status = log.check(t0() + Duration::minutes(60) + Duration::seconds(30));
        assert!(status.allowed);
        assert_eq!(status.remaining, 1);

        let stored: Vec<i64> =
            serde_json::from_str(&fs::read_to_string(log.path()).unwrap()).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_corrupt_log_fails_open() {
        let dir = tempdir().unwrap();
        let log = log_in(dir.path());
        fs::write(log.path(), "not json").unwrap();
        let status = log.check(t0());
        assert!(status.allowed);
        assert_eq!(status.remaining, 3);

        log.record(t0());
        assert_eq!(log.check(t0()).remaining, 2);
    }

    #[test]
    fn test_out_of_range_timestamps_do_not_overflow() {
        let dir = tempdir().unwrap();
        let log = log_in(dir.path());
        fs::write(log.path(), format!("[{}, {}]", i64::MIN, i64::MAX)).unwrap();

        // The ancient entry ages out; the far-future one still counts
        let status = log.check(t0());
        assert!(status.allowed);
        assert_eq!(status.remaining, 2);
    }

    #[test]
    fn test_maximum_window_reports_reset_without_overflow() {
        let dir = tempdir().unwrap();
        let log = SubmissionLog::new(dir.path().join("subs.json"), 1, Duration::MAX);
        log.record(t0());
        let status = log.check(t0() + Duration::seconds(1));
        assert!(!status.allowed);
        assert!(status.minutes_until_reset.unwrap() > 0);
    }
}
