//! Conversation attribute surface
//!
//! Outside the token, a multi-turn conversation can carry the search
//! cursor and query in a short-lived key-value store (the "try the next
//! match?" follow-up flow). That store keeps the query in placeholder
//! form, exactly as the token's `q` value does; these conversions are
//! the single place where the two representations meet.

use crate::session::SessionState;
use crate::token::QUERY_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Search retry state stashed in the conversation's attribute store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationAttributes {
    /// Cursor into the ranked search-result list
    #[serde(default)]
    pub sr: usize,

    /// Search text in placeholder form (spaces as `_`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,
}

impl ConversationAttributes {
    /// Capture the retry state of a session, converting the query into
    /// the store's placeholder form.
    pub fn capture(state: &SessionState) -> Self {
        Self {
            sr: state.search_result,
            query: state.query.replace(' ', "_"),
        }
    }

    /// Write this retry state back into a session, restoring spaces in
    /// the query.
    pub fn apply_to(&self, state: &mut SessionState) {
        state.search_result = self.sr;
        state.query = self.query.replace(QUERY_PLACEHOLDER, " ");
    }

    /// The next cursor position, for a "yes, try the next one" turn.
    pub fn advanced(&self) -> Self {
        Self {
            sr: self.sr + 1,
            query: self.query.clone(),
        }
    }
}
