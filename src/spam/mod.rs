//! Contact form spam mitigation.
//!
//! Checks run in a fixed order and the first failure decides the verdict:
//! honeypot, rate limit, fill time, email address, message, name.

mod rate_limit;
mod rules;

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::SpamConfig;

pub use rate_limit::{RateLimitStatus, SubmissionLog};
pub use rules::{filled_slowly_enough, form_started_at, KeywordList, SPAM_KEYWORDS};

/// Fields submitted by the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot: hidden from people, filled in by bots
    #[serde(default)]
    pub website: String,
}

/// Why a submission was rejected. `Display` is the message shown to the sender.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpamReason {
    #[error("Spam detected: honeypot field filled")]
    Honeypot,
    #[error("Rate limit exceeded. Please try again in {minutes} minute(s).")]
    RateLimited { minutes: i64 },
    #[error("Form filled too quickly. Please take your time.")]
    TooFast,
    #[error("Invalid email address")]
    SuspiciousEmail,
    #[error("Message contains inappropriate content")]
    SpamMessage,
    #[error("Invalid name")]
    SpamName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpamVerdict {
    pub reason: Option<SpamReason>,
}

impl SpamVerdict {
    pub fn clean() -> Self {
        SpamVerdict { reason: None }
    }

    pub fn is_spam(&self) -> bool {
        self.reason.is_some()
    }

    /// User-facing messages; empty for a clean submission.
    pub fn errors(&self) -> Vec<String> {
        self.reason.iter().map(ToString::to_string).collect()
    }
}

impl From<SpamReason> for SpamVerdict {
    fn from(reason: SpamReason) -> Self {
        SpamVerdict {
            reason: Some(reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpamFilter {
    keywords: KeywordList,
    log: Option<SubmissionLog>,
    min_fill_time: Duration,
}

impl SpamFilter {
    /// Filter with no rate limiting.
    pub fn new(keywords: KeywordList, min_fill_time: Duration) -> Self {
        SpamFilter {
            keywords,
            log: None,
            min_fill_time,
        }
    }

    /// Filter with thresholds from `config`, rate limited through a log at `log_path`.
    pub fn from_config(config: &SpamConfig, log_path: impl Into<PathBuf>) -> Self {
        SpamFilter {
            keywords: KeywordList::with_extra(&config.extra_keywords),
            log: Some(SubmissionLog::new(
                log_path,
                config.max_submissions,
                config.window(),
            )),
            min_fill_time: config.min_fill_time(),
        }
    }

    pub fn check(
        &self,
        form: &ContactForm,
        started_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> SpamVerdict {
        let verdict = match self.first_failure(form, started_at, now) {
            Some(reason) => SpamVerdict::from(reason),
            None => SpamVerdict::clean(),
        };
        info!(
            spam = verdict.is_spam(),
            reason = ?verdict.reason,
            "Checked contact form submission"
        );
        verdict
    }

    fn first_failure(
        &self,
        form: &ContactForm,
        started_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Option<SpamReason> {
        if !form.website.trim().is_empty() {
            return Some(SpamReason::Honeypot);
        }

        if let Some(log) = &self.log {
            let status = log.check(now);
            if !status.allowed {
                return Some(SpamReason::RateLimited {
                    minutes: status.minutes_until_reset.unwrap_or(0),
                });
            }
        }

        if !filled_slowly_enough(started_at, now, self.min_fill_time) {
            return Some(SpamReason::TooFast);
        }
        if self.keywords.is_suspicious_email(&form.email) {
            return Some(SpamReason::SuspiciousEmail);
        }
        if self.keywords.contains_spam(&form.message) {
            return Some(SpamReason::SpamMessage);
        }
        if self.keywords.contains_spam(&form.name) {
            return Some(SpamReason::SpamName);
        }
        None
    }

    /// Count a successful send against the rate limit.
    pub fn record_submission(&self, now: DateTime<Utc>) {
        if let Some(log) = &self.log {
            log.record(now);
        }
    }
}

impl Default for SpamFilter {
    fn default() -> Self {
        SpamFilter::new(
            KeywordList::default(),
            SpamConfig::default().min_fill_time(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Loved the projects page, let's talk.".to_string(),
            website: String::new(),
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 10, 0, 0).unwrap()
    }

    fn later() -> DateTime<Utc> {
        start() + Duration::seconds(30)
    }

    fn reason(filter: &SpamFilter, form: &ContactForm) -> Option<SpamReason> {
        filter.check(form, start(), later()).reason
    }

    #[test]
    fn test_clean_submission_passes() {
        let verdict = SpamFilter::default().check(&form(), start(), later());
        assert!(!verdict.is_spam());
        assert!(verdict.errors().is_empty());
    }

    #[test]
    fn test_honeypot_wins_over_everything() {
        let f = ContactForm {
            website: "http://bots.example".to_string(),
            message: "buy now".to_string(),
            ..form()
        };
        let verdict = SpamFilter::default().check(&f, start(), start());
        assert_eq!(verdict.reason, Some(SpamReason::Honeypot));
        assert_eq!(
            verdict.errors(),
            vec!["Spam detected: honeypot field filled".to_string()]
        );
    }

    #[test]
    fn test_whitespace_honeypot_is_ignored() {
        let f = ContactForm {
            website: "   ".to_string(),
            ..form()
        };
        assert_eq!(reason(&SpamFilter::default(), &f), None);
    }

    #[test]
    fn test_too_fast() {
        let verdict = SpamFilter::default().check(&form(), start(), start() + Duration::seconds(1));
        assert_eq!(verdict.reason, Some(SpamReason::TooFast));
    }

    #[test]
    fn test_rule_order_email_message_name() {
        let filter = SpamFilter::default();
        let all_bad = ContactForm {
            name: "casino king".to_string(),
            email: "fake@example.com".to_string(),
            message: "free money".to_string(),
            website: String::new(),
        };
        assert_eq!(reason(&filter, &all_bad), Some(SpamReason::SuspiciousEmail));

        let message_and_name = ContactForm {
            email: "ada@example.com".to_string(),
            ..all_bad.clone()
        };
        assert_eq!(reason(&filter, &message_and_name), Some(SpamReason::SpamMessage));

        let name_only = ContactForm {
            message: "hello".to_string(),
            ..message_and_name
        };
        assert_eq!(reason(&filter, &name_only), Some(SpamReason::SpamName));
    }

    #[test]
    fn test_rate_limit_after_recorded_submissions() {
        let dir = tempdir().unwrap();
        let config = SpamConfig::default();
        let filter = SpamFilter::from_config(&config, dir.path().join("subs.json"));
        for _ in 0..config.max_submissions {
            assert!(!filter.check(&form(), start(), later()).is_spam());
            filter.record_submission(later());
        }
        let verdict = filter.check(&form(), start(), later());
        assert_eq!(verdict.reason, Some(SpamReason::RateLimited { minutes: 60 }));
        assert_eq!(
            verdict.errors(),
            vec!["Rate limit exceeded. Please try again in 60 minute(s).".to_string()]
        );
    }

    #[test]
    fn test_extra_keywords_from_config() {
        let dir = tempdir().unwrap();
        let config = SpamConfig {
            extra_keywords: vec!["guest post".to_string()],
            ..SpamConfig::default()
        };
        let filter = SpamFilter::from_config(&config, dir.path().join("subs.json"));
        let f = ContactForm {
            message: "Can I write a Guest Post?".to_string(),
            ..form()
        };
        assert_eq!(reason(&filter, &f), Some(SpamReason::SpamMessage));
    }

    #[test]
    fn test_huge_config_values_do_not_panic() {
        let dir = tempdir().unwrap();
        let config = SpamConfig {
            max_submissions: 1,
            window_minutes: u64::MAX,
            min_fill_seconds: 1_000_000_000_000_000_000,
            ..SpamConfig::default()
        };
        let filter = SpamFilter::from_config(&config, dir.path().join("subs.json"));
        assert_eq!(reason(&filter, &form()), Some(SpamReason::TooFast));

        let quick = SpamConfig {
            min_fill_seconds: 0,
            ..config
        };
        let filter = SpamFilter::from_config(&quick, dir.path().join("subs.json"));
        assert!(!filter.check(&form(), start(), later()).is_spam());
        filter.record_submission(later());
        assert!(matches!(
            reason(&filter, &form()),
            Some(SpamReason::RateLimited { .. })
        ));
    }
}
