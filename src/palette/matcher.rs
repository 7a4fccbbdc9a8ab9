//! Ordered-subsequence fuzzy ranking of palette commands.
//!
//! A field matches when every query character appears in it in order,
//! case-insensitively. A command scores the best of its title, description
//! and keywords; non-matches are dropped and the rest keep declaration order
//! among equal scores.

use super::catalog::CommandDescriptor;

/// Score given to every command when the query is empty
pub const EMPTY_QUERY_SCORE: u32 = 1;

/// A command that survived filtering, with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    pub command: &'a CommandDescriptor,
    pub score: u32,
}

/// Score one field against an already lower-cased query.
///
/// Returns the number of matched characters when the whole query was
/// consumed, otherwise 0.
fn field_score(text: &str, query: &[char]) -> u32 {
    if query.is_empty() {
        return EMPTY_QUERY_SCORE;
    }

    let mut pointer = 0;
    let mut score = 0u32;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch == query[pointer] {
            pointer += 1;
            score += 1;
            if pointer == query.len() {
                return score;
            }
        }
    }
    0
}

fn lower_chars(query: &str) -> Vec<char> {
    query.chars().flat_map(char::to_lowercase).collect()
}

/// Subsequence score of `query` against `text`; 0 means no match.
pub fn subsequence_score(text: &str, query: &str) -> u32 {
    field_score(text, &lower_chars(query))
}

/// Whether `query` is a case-insensitive subsequence of `text`.
pub fn is_subsequence(text: &str, query: &str) -> bool {
    subsequence_score(text, query) > 0
}

fn command_score_lowered(command: &CommandDescriptor, query: &[char]) -> u32 {
    std::iter::once(command.title.as_str())
        .chain(std::iter::once(command.description.as_str()))
        .chain(command.keywords.iter().map(String::as_str))
        .map(|field| field_score(field, query))
        .max()
        .unwrap_or(0)
}

/// Best score of `query` across the command's title, description and keywords.
pub fn command_score(command: &CommandDescriptor, query: &str) -> u32 {
    command_score_lowered(command, &lower_chars(query))
}

/// Rank `commands` against `query`, highest score first.
///
/// Pure and linear in the total text length; safe to call on every keystroke.
pub fn match_commands<'a>(commands: &'a [CommandDescriptor], query: &str) -> Vec<MatchResult<'a>> {
    let query = lower_chars(query);
    let mut matches: Vec<MatchResult<'a>> = commands
        .iter()
        .map(|command| MatchResult {
            command,
            score: command_score_lowered(command, &query),
        })
        .filter(|m| m.score > 0)
        .collect();

    // sort_by is stable: equal scores keep declaration order
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
