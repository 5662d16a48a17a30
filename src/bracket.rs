// src/bracket.rs
//
// Snapshot data model. Both the live-scrape path and the stored-bracket
// path produce the same `BracketSnapshot` shape; only `method` tells
// them apart.

use serde::{Deserialize, Serialize};

/// Sentinel for roster lookups that miss. Downstream consumers treat it
/// as "unknown player", never as an error.
pub const PLAYER_NOT_FOUND: i64 = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(rename = "playerName")]
    pub player_name: String,
}

/// A set score. Live scraping yields compacted digit strings ("6264",
/// "W" for a walkover); stored brackets persist integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetScore {
    Points(i64),
    Games(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<SetScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Outcome>,
}

impl ScoreResult {
    pub fn won(&self) -> bool {
        self.result == Some(Outcome::Win)
    }
}

/// One completed match. id1/id2 are the two competing seed slots in
/// roster scan order (ascending slot id, never winner-first); the
/// winner is encoded only by which opponent object carries the win
/// marker. Stored brackets may leave either side unfilled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub id1: Option<i64>,
    pub id2: Option<i64>,
    pub opponent1: Option<ScoreResult>,
    pub opponent2: Option<ScoreResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketSnapshot {
    pub title: String,
    /// One entry per seed slot; byes are null.
    pub roster: Vec<Option<RosterEntry>>,
    pub results: Vec<MatchOutcome>,
    /// "webscrape" or "database".
    pub method: String,
}

/* ---------------- persisted records ---------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlayer {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub result: Option<Outcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMatch {
    #[serde(rename = "matchId")]
    pub match_id: i64,
    #[serde(default)]
    pub player1: Option<StoredPlayer>,
    #[serde(default)]
    pub player2: Option<StoredPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBracket {
    pub title: String,
    pub matches: Vec<StoredMatch>,
    pub roster: Vec<Option<RosterEntry>>,
}

/// Resolve a player name to its seed-slot id, stripping a leading
/// "(seed) " prefix from roster names before comparing. Misses return
/// the sentinel rather than failing.
pub fn search_id_for_player(player: &str, roster: &[Option<RosterEntry>]) -> i64 {
    for item in roster.iter().flatten() {
        let name = match item.player_name.find(") ") {
            Some(i) => &item.player_name[i + 2..],
            None => item.player_name.as_str(),
        };
        if name == player {
            return item.player_id;
        }
    }
    PLAYER_NOT_FOUND
}
