//! Continuation-token codec
//!
//! The whole session travels inside one opaque ASCII string of
//! `key=value` pairs joined by `&`, echoed back verbatim by the caller
//! on the next request. Encoding is lossy for defaults: a field at its
//! zero/empty/false value is omitted and reconstructed as that default
//! on decode. The one asymmetry is autoplay, which defaults to *true*
//! when its key is absent.
//!
//! Values are not escaped: a query or track id containing `&` or `=`
//! corrupts the token. Accepted limitation of the wire format.

use crate::session::SessionState;
use std::collections::{BTreeMap, HashMap};

/// Placeholder for spaces inside the `q` value.
pub const QUERY_PLACEHOLDER: char = '_';

/// Token keys, in emission order: `s`, `sr`, `a`, `i`, `q`, `l`,
/// `v0..vN`, `p`.
impl SessionState {
    /// Serialize this session into its continuation token.
    pub fn encode(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.shuffle {
            parts.push("s=1".to_string());
        }
        if self.search_result > 0 {
            parts.push(format!("sr={}", self.search_result));
        }
        if self.autoplay {
            parts.push("a=1".to_string());
        }
        if !self.current_intent.is_empty() {
            parts.push(format!("i={}", self.current_intent));
        }
        if !self.query.is_empty() {
            parts.push(format!("q={}", self.query.replace(' ', "_")));
        }
        if self.loop_enabled {
            parts.push("l=1".to_string());
        }
        for (slot, id) in self.queue.iter().enumerate() {
            parts.push(format!("v{slot}={id}"));
        }
        if self.current_index > 0 {
            parts.push(format!("p={}", self.current_index));
        }

        parts.join("&")
    }

    /// Reconstruct a session from a continuation token.
    ///
    /// Decoding is permissive and cannot fail: unknown keys are
    /// ignored, missing or unparseable numbers read as zero, and a
    /// token that yields an empty queue is indistinguishable from one
    /// where nothing was ever queued.
    pub fn decode(token: &str) -> Self {
        let mut fields: HashMap<&str, &str> = HashMap::new();
        // Queue slots keyed by N so out-of-order `v<N>` keys still land
        // in index order; duplicate slots last-wins.
        let mut slots: BTreeMap<usize, &str> = BTreeMap::new();

        for segment in token.split('&') {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));

            if let Some(n) = parse_queue_slot(key) {
                slots.insert(n, value);
            } else {
                fields.insert(key, value);
            }
        }

        Self {
            shuffle: fields.get("s").copied() == Some("1"),
            search_result: parse_number(fields.get("sr").copied()),
            autoplay: fields.get("a").map_or(true, |v| *v == "1"),
            current_intent: fields.get("i").copied().unwrap_or("").to_string(),
            query: fields
                .get("q")
                .copied()
                .unwrap_or("")
                .replace(QUERY_PLACEHOLDER, " "),
            loop_enabled: fields.get("l").copied() == Some("1"),
            queue: slots.into_values().map(str::to_string).collect(),
            current_index: parse_number(fields.get("p").copied()),
        }
    }
}

/// `v<digits>` keys carry queue entries; anything else (including a
/// bare `v`) is an ordinary key.
fn parse_queue_slot(key: &str) -> Option<usize> {
    let digits = key.strip_prefix('v')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_number(value: Option<&str>) -> usize {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_decodes_to_fresh_session() {
        let state = SessionState::decode("");
        assert_eq!(state, SessionState::new());
        // The absent `a` key still means autoplay on.
        assert!(state.autoplay);
    }

    #[test]
    fn encode_omits_defaults() {
        let mut state = SessionState::new();
        state.autoplay = false;
        assert_eq!(state.encode(), "");

        state.autoplay = true;
        assert_eq!(state.encode(), "a=1");
    }

    #[test]
    fn encode_emits_keys_in_order() {
        let state = SessionState {
            shuffle: true,
            search_result: 2,
            autoplay: true,
            current_intent: "Search".to_string(),
            query: "lo fi beats".to_string(),
            loop_enabled: true,
            queue: vec!["abc".into(), "def".into()],
            current_index: 1,
        };

        assert_eq!(
            state.encode(),
            "s=1&sr=2&a=1&i=Search&q=lo_fi_beats&l=1&v0=abc&v1=def&p=1"
        );
    }

    #[test]
    fn decode_reads_every_field() {
        let state = SessionState::decode("s=1&sr=2&a=1&i=Search&q=lo_fi_beats&l=1&v0=abc&v1=def&p=1");

        assert!(state.shuffle);
        assert_eq!(state.search_result, 2);
        assert!(state.autoplay);
        assert_eq!(state.current_intent, "Search");
        assert_eq!(state.query, "lo fi beats");
        assert!(state.loop_enabled);
        assert_eq!(state.queue, vec!["abc".to_string(), "def".to_string()]);
        assert_eq!(state.current_index, 1);
    }

    #[test]
    fn autoplay_defaults_to_true_when_absent() {
        assert!(SessionState::decode("v0=abc").autoplay);
        assert!(SessionState::decode("a=1&v0=abc").autoplay);
        // Only an explicit non-1 value reads as off.
        assert!(!SessionState::decode("a=0&v0=abc").autoplay);
    }

    #[test]
    fn autoplay_off_is_not_encodable() {
        let mut state = SessionState::new();
        state.autoplay = false;
        state.queue = vec!["abc".into()];

        // The off state collapses out of the token and comes back on.
        let round_tripped = SessionState::decode(&state.encode());
        assert!(round_tripped.autoplay);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let state = SessionState::decode("x=9&v0=abc&zz=&s=1");
        assert_eq!(state.queue, vec!["abc".to_string()]);
        assert!(state.shuffle);
    }

    #[test]
    fn malformed_numbers_read_as_zero() {
        let state = SessionState::decode("sr=abc&p=-4&v0=x");
        assert_eq!(state.search_result, 0);
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn bare_segments_read_as_empty_values() {
        let state = SessionState::decode("s&v0=abc");
        // `s` with no `=` has an empty value, which is not "1".
        assert!(!state.shuffle);
        assert_eq!(state.queue.len(), 1);
    }

    #[test]
    fn queue_slots_sort_by_index_not_encounter_order() {
        let state = SessionState::decode("v2=c&v0=a&v1=b");
        assert_eq!(
            state.queue,
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn duplicate_queue_slots_last_wins() {
        let state = SessionState::decode("v0=a&v0=b");
        assert_eq!(state.queue, vec!["b".to_string()]);
    }

    #[test]
    fn non_numeric_v_keys_are_not_queue_slots() {
        let state = SessionState::decode("v=a&vx=b&v1x=c&v0=real");
        assert_eq!(state.queue, vec!["real".to_string()]);
    }

    #[test]
    fn query_placeholder_round_trip() {
        let mut state = SessionState::new();
        state.query = "never gonna give".to_string();

        let token = state.encode();
        assert!(token.contains("q=never_gonna_give"));
        assert_eq!(SessionState::decode(&token).query, "never gonna give");
    }

    #[test]
    fn display_is_the_token() {
        let mut state = SessionState::new();
        state.queue = vec!["abc".into()];
        assert_eq!(state.to_string(), state.encode());
    }

    #[test]
    fn round_trip_preserves_non_default_fields() {
        let state = SessionState {
            shuffle: true,
            search_result: 7,
            autoplay: true,
            current_intent: "Playlist".to_string(),
            query: "study mix".to_string(),
            loop_enabled: true,
            queue: vec!["q1".into(), "q2".into(), "q3".into()],
            current_index: 2,
        };

        assert_eq!(SessionState::decode(&state.encode()), state);
    }
}
