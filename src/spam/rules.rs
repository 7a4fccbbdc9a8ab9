//! Content heuristics: spam phrases, suspicious addresses and fill time.

use std::sync::OnceLock;

use regex::Regex;

/// Phrases that mark a message, name or address as spam (matched as
/// case-insensitive substrings)
pub const SPAM_KEYWORDS: &[&str] = &[
    "viagra", "cialis", "casino", "poker", "lottery", "winner", "congratulations",
    "click here", "buy now", "limited time", "act now", "urgent", "immediate",
    "make money", "work from home", "get rich", "free money", "no investment",
    "weight loss", "lose weight", "diet pills", "miracle", "guaranteed",
    "credit card", "loan", "debt", "consolidation", "refinance",
    "enlarge", "penis", "sex", "porn", "adult", "dating",
    "nigerian prince", "inheritance", "lottery win", "prize",
    "pharmacy", "prescription", "medication", "drugs",
    "seo service", "backlink", "rank higher", "google ranking",
    "crypto", "bitcoin", "investment opportunity", "trading",
    "click this link", "visit our website", "special offer",
];

fn suspicious_email_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // long digit run right before the @
            r"\d{10,}@",
            // one or two letters then many digits
            r"[a-z]{1,2}\d{6,}@",
            r"(?i)temp|test|fake|spam",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid regex"))
        .collect()
    })
}

/// Keyword list: built-ins plus configured extras, lower-cased.
#[derive(Debug, Clone)]
pub struct KeywordList {
    keywords: Vec<String>,
}

impl Default for KeywordList {
    fn default() -> Self {
        KeywordList::with_extra(&[])
    }
}

impl KeywordList {
    pub fn with_extra(extra: &[String]) -> Self {
        let keywords = SPAM_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(extra.iter().map(|k| k.trim().to_lowercase()))
            .filter(|k| !k.is_empty())
            .collect();
        KeywordList { keywords }
    }

    /// Whether `text` contains any spam phrase. Empty text never does.
    pub fn contains_spam(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    /// Address matches a throwaway pattern or contains a spam phrase.
    pub fn is_suspicious_email(&self, email: &str) -> bool {
        if email.is_empty() {
            return false;
        }
        let lower = email.to_lowercase();
        suspicious_email_patterns().iter().any(|re| re.is_match(&lower))
            || self.contains_spam(&lower)
    }
}

/// True when the form took at least `min` to fill in.
pub fn filled_slowly_enough(
    started_at: chrono::DateTime<chrono::Utc>,
    now: chrono::DateTime<chrono::Utc>,
    min: chrono::Duration,
) -> bool {
    now - started_at >= min
}

/// When a form was opened, given how many seconds it has been open at `now`.
///
/// `None` if the result falls outside chrono's representable range.
pub fn form_started_at(
    now: chrono::DateTime<chrono::Utc>,
    elapsed_secs: i64,
) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::Duration::try_seconds(elapsed_secs).and_then(|elapsed| now.checked_sub_signed(elapsed))
}
