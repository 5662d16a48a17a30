// src/reconcile.rs
//
// Rebuild a stored bracket into the same snapshot shape the live
// scrape produces; only `method` differs. Winning scores are persisted
// with a synthetic leading digit (integer columns cannot hold a
// leading zero), which shows up as a length mismatch against the
// loser's score and is stripped on the way out.

use crate::bracket::{
    BracketSnapshot, MatchOutcome, Outcome, ScoreResult, SetScore, StoredBracket, StoredMatch,
    StoredPlayer,
};

pub fn snapshot(stored: StoredBracket) -> BracketSnapshot {
    let results = stored.matches.iter().map(outcome).collect();
    BracketSnapshot {
        title: stored.title,
        roster: stored.roster,
        results,
        method: s!("database"),
    }
}

fn outcome(m: &StoredMatch) -> MatchOutcome {
    let strip = placeholder_present(m);
    MatchOutcome {
        id1: m.player1.as_ref().map(|p| p.player_id),
        id2: m.player2.as_ref().map(|p| p.player_id),
        opponent1: m.player1.as_ref().map(|p| score_result(p, strip)),
        opponent2: m.player2.as_ref().map(|p| score_result(p, strip)),
    }
}

/// Placeholder detection needs both scores; a half-filled match is
/// passed through untouched.
fn placeholder_present(m: &StoredMatch) -> bool {
    match (&m.player1, &m.player2) {
        (Some(p1), Some(p2)) => match (p1.score, p2.score) {
            (Some(a), Some(b)) => a.to_string().len() != b.to_string().len(),
            _ => false,
        },
        _ => false,
    }
}

fn score_result(p: &StoredPlayer, strip: bool) -> ScoreResult {
    let score = match p.score {
        Some(n) if strip && p.result == Some(Outcome::Win) => Some(strip_leading_digit(n)),
        other => other,
    };
    ScoreResult {
        score: score.map(SetScore::Points),
        result: p.result,
    }
}

fn strip_leading_digit(n: i64) -> i64 {
    let s = n.to_string();
    s.get(1..).and_then(|t| t.parse().ok()).unwrap_or(n)
}
