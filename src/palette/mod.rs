//! Command palette: the command catalog, the fuzzy matcher that ranks it,
//! and the overlay state that runs the chosen command.

mod catalog;
mod matcher;
mod query_store;
mod state;

pub use catalog::{
    default_commands, CommandAction, CommandDescriptor, CommandHandler, Route, HELP_TEXT,
};
pub use matcher::{
    command_score, is_subsequence, match_commands, subsequence_score, MatchResult,
    EMPTY_QUERY_SCORE,
};
pub use query_store::QueryStore;
pub use state::CommandPalette;
