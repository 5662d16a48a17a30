// src/scrape/matches.rs
//
// Completed-match decoder: a forward scan over the flat node stream of
// the completed-singles fragment. Matches open at a round token, pair
// two hyperlinked players, and close at the first score-looking token.
// The winner is always the player listed first in the markup (the "d."
// = defeated convention of the upstream pages).

use crate::bracket::{
    MatchOutcome, Outcome, RosterEntry, ScoreResult, SetScore, search_id_for_player,
};
use crate::core::html::{Node, slice_offsets, tokenize};
use crate::error::ScrapeError;

const ROUND_TOKENS: [&str; 7] = ["R1", "R2", "R3", "R4", "QF", "SF", "F"];

// Byte trims around the fragment markers, per the upstream layout.
const SINGLES_LEAD: usize = 19;
const SINGLES_TAIL: usize = 7;

/// The script slice holding completed singles matches.
pub fn completed_singles_fragment(script: &str) -> Option<&str> {
    slice_offsets(
        script,
        "completedSingles",
        "completedDoubles",
        SINGLES_LEAD,
        SINGLES_TAIL,
    )
}

/// Decode all completed matches from the bracket script against an
/// already-parsed roster.
pub fn decode(
    script: &str,
    roster: &[Option<RosterEntry>],
) -> Result<Vec<MatchOutcome>, ScrapeError> {
    let fragment = completed_singles_fragment(script)
        .ok_or_else(|| ScrapeError::MarkupShape(s!("completed-singles fragment not found")))?;
    decode_nodes(&tokenize(fragment), roster)
}

/// Cursor loop over the node stream. Qualifying-round tokens (Q1/Q2)
/// stop the whole decode; those rounds are out of scope.
pub fn decode_nodes(
    nodes: &[Node],
    roster: &[Option<RosterEntry>],
) -> Result<Vec<MatchOutcome>, ScrapeError> {
    let mut matches = Vec::new();
    let mut i = 0usize;

    while i < nodes.len() {
        let text = nodes[i].text();
        if contains_round_token(text) {
            let (next_i, found) = seek_match(nodes, i)?;
            if let Some((p1, p2, score_text)) = found {
                matches.push(build_outcome(&p1, &p2, &score_text, roster));
            }
            i = next_i;
        } else if text.contains("Q1") || text.contains("Q2") {
            break;
        } else {
            i += 1;
        }
    }
    Ok(matches)
}

fn contains_round_token(text: &str) -> bool {
    ROUND_TOKENS.iter().any(|r| text.contains(r))
}

/// Score predicate: a walkover marker or at least two digits.
fn has_score(text: &str) -> bool {
    text.contains("W/O") || text.chars().filter(|c| c.is_ascii_digit()).count() >= 2
}

type MatchTexts = (String, String, String);

/// One match from its round token onward. Returns the cursor position
/// to resume from and, unless the first player drew a bye, the two
/// player names plus the raw score text. Running past the fragment end
/// while seeking is fatal for the whole decode.
fn seek_match(nodes: &[Node], start: usize) -> Result<(usize, Option<MatchTexts>), ScrapeError> {
    let mut i = start + 1;

    // SeekPlayer1: next hyperlink that is not the "defeated" separator
    let p1 = seek_player(nodes, &mut i, "player 1")?;

    // SeekPlayer2OrBye: the very next token decides
    i += 1;
    let after = nodes
        .get(i)
        .ok_or_else(|| overrun("bye check", start))?;
    if after.text().contains("bye") {
        return Ok((i, None));
    }

    i += 1;
    let p2 = seek_player(nodes, &mut i, "player 2")?;

    // SeekScore
    i += 1;
    loop {
        let node = nodes.get(i).ok_or_else(|| overrun("score", start))?;
        if has_score(node.text()) {
            return Ok((i, Some((p1, p2, s!(node.text())))));
        }
        i += 1;
    }
}

fn seek_player(nodes: &[Node], i: &mut usize, what: &str) -> Result<String, ScrapeError> {
    loop {
        match nodes.get(*i) {
            None => return Err(overrun(what, *i)),
            Some(Node::Link(t)) if t != "d." => return Ok(t.clone()),
            _ => *i += 1,
        }
    }
}

fn overrun(what: &str, at: usize) -> ScrapeError {
    ScrapeError::MarkupShape(format!("fragment ended while seeking {what} (near token {at})"))
}

/// Assemble a `MatchOutcome`. Slot ids are listed ascending; the win
/// marker follows the scan-order-first player wherever its id lands.
fn build_outcome(
    p1: &str,
    p2: &str,
    score_text: &str,
    roster: &[Option<RosterEntry>],
) -> MatchOutcome {
    let pid1 = search_id_for_player(p1, roster);
    let pid2 = search_id_for_player(p2, roster);

    let combined = filter_score(score_text);
    let winner = ScoreResult {
        score: Some(SetScore::Games(player_score(&combined, 1))),
        result: Some(Outcome::Win),
    };
    let loser = ScoreResult {
        score: Some(SetScore::Games(player_score(&combined, 2))),
        result: None,
    };

    if pid1 < pid2 {
        MatchOutcome {
            id1: Some(pid1),
            id2: Some(pid2),
            opponent1: Some(winner),
            opponent2: Some(loser),
        }
    } else {
        MatchOutcome {
            id1: Some(pid2),
            id2: Some(pid1),
            opponent1: Some(loser),
            opponent2: Some(winner),
        }
    }
}

/* ---------------- score codec ---------------- */

/// Compact raw score text into a flat digit string: leading non-digits
/// are skipped, then digits are kept along with any parentheses (which
/// fence off tiebreak points). "W/O" short-circuits to "W".
pub fn filter_score(text: &str) -> String {
    if text.contains("W/O") {
        return s!("W");
    }
    let mut out = String::new();
    let mut number_found = false;
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            number_found = true;
            out.push(ch);
        } else if number_found && (ch == '(' || ch == ')') {
            out.push(ch);
        }
    }
    out
}

/// Split a combined digit string into one player's set digits: a
/// stride-2 walk offset by player number, jumping past parenthesized
/// tiebreak digits so they are attributed to neither player.
pub fn player_score(combined: &str, player: u8) -> String {
    let chars: Vec<char> = combined.chars().collect();
    let mut out = String::new();
    let mut i: usize = if player == 1 { 0 } else { 1 };

    while i < chars.len() {
        let after_open = i > 0 && chars[i - 1] == '(';
        if after_open || chars[i] == '(' {
            let mut close = i;
            while close < chars.len() && chars[close] != ')' {
                close += 1;
            }
            i = if player == 1 { close + 1 } else { close + 2 };
        } else {
            out.push(chars[i]);
            i += 2;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::PLAYER_NOT_FOUND;

    fn roster(names: &[&str]) -> Vec<Option<RosterEntry>> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                Some(RosterEntry {
                    player_id: i as i64,
                    player_name: s!(*n),
                })
            })
            .collect()
    }

    #[test]
    fn filter_score_drops_separators_and_leading_noise() {
        assert_eq!(filter_score("6-2, 6-4"), "6264");
        assert_eq!(filter_score(" 7-6(3) 6-4"), "76(3)64");
        assert_eq!(filter_score("(x) 6-2 6-3"), "6263");
        assert_eq!(filter_score("ret. W/O"), "W");
    }

    #[test]
    fn player_score_stride_walk() {
        assert_eq!(player_score("6264", 1), "66");
        assert_eq!(player_score("6264", 2), "24");
    }

    #[test]
    fn player_score_skips_tiebreak_digits() {
        // 7-6(3) 6-4: tiebreak points belong to neither player
        assert_eq!(player_score("76(3)64", 1), "76");
        assert_eq!(player_score("76(3)64", 2), "64");
    }

    #[test]
    fn player_score_walkover() {
        assert_eq!(player_score("W", 1), "W");
        assert_eq!(player_score("W", 2), "");
    }

    fn nodes(markup: &str) -> Vec<Node> {
        tokenize(markup)
    }

    #[test]
    fn decodes_one_match_winner_first() {
        let r = roster(&["Alpha", "Beta"]);
        let out = decode_nodes(
            &nodes(r#"R1: <a href="x">Alpha</a> d. <a href="y">Beta</a> 6-2 6-4<br/>"#),
            &r,
        )
        .unwrap();
        assert_eq!(out.len(), 1);
        let m = &out[0];
        assert_eq!((m.id1, m.id2), (Some(0), Some(1)));
        assert!(m.opponent1.as_ref().unwrap().won());
        assert_eq!(
            m.opponent1.as_ref().unwrap().score,
            Some(SetScore::Games(s!("66")))
        );
        assert_eq!(
            m.opponent2.as_ref().unwrap().score,
            Some(SetScore::Games(s!("24")))
        );
        assert!(!m.opponent2.as_ref().unwrap().won());
    }

    #[test]
    fn win_marker_follows_scan_order_when_ids_swap() {
        // Beta (slot 1) beat Alpha (slot 0): ids stay ascending, the
        // win marker moves to opponent2
        let r = roster(&["Alpha", "Beta"]);
        let out = decode_nodes(
            &nodes(r#"QF: <a href="y">Beta</a> d. <a href="x">Alpha</a> 7-5 6-1<br/>"#),
            &r,
        )
        .unwrap();
        let m = &out[0];
        assert_eq!((m.id1, m.id2), (Some(0), Some(1)));
        assert!(!m.opponent1.as_ref().unwrap().won());
        assert!(m.opponent2.as_ref().unwrap().won());
        assert_eq!(
            m.opponent2.as_ref().unwrap().score,
            Some(SetScore::Games(s!("76")))
        );
    }

    #[test]
    fn bye_emits_no_outcome_and_scan_continues() {
        let r = roster(&["Alpha", "Beta", "Gamma"]);
        let out = decode_nodes(
            &nodes(concat!(
                r#"R1: <a href="x">Alpha</a> had a bye<br/>"#,
                r#"R1: <a href="y">Beta</a> d. <a href="z">Gamma</a> 6-3 6-3<br/>"#
            )),
            &r,
        )
        .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!((out[0].id1, out[0].id2), (Some(1), Some(2)));
    }

    #[test]
    fn qualifying_rounds_stop_the_decode() {
        let r = roster(&["Alpha", "Beta"]);
        let out = decode_nodes(
            &nodes(concat!(
                r#"R1: <a href="x">Alpha</a> d. <a href="y">Beta</a> 6-0 6-0<br/>"#,
                r#"Q1: <a href="q">Other</a> d. <a href="q2">Guy</a> 6-1 6-1<br/>"#
            )),
            &r,
        )
        .unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn walkover_scores() {
        let r = roster(&["Alpha", "Beta"]);
        let out = decode_nodes(
            &nodes(r#"SF: <a href="x">Alpha</a> d. <a href="y">Beta</a> W/O<br/>"#),
            &r,
        )
        .unwrap();
        let m = &out[0];
        assert_eq!(
            m.opponent1.as_ref().unwrap().score,
            Some(SetScore::Games(s!("W")))
        );
        assert_eq!(
            m.opponent2.as_ref().unwrap().score,
            Some(SetScore::Games(s!("")))
        );
    }

    #[test]
    fn unknown_player_gets_sentinel_id() {
        let r = roster(&["Alpha"]);
        let out = decode_nodes(
            &nodes(r#"F: <a href="x">Alpha</a> d. <a href="y">Stranger</a> 6-4 6-4<br/>"#),
            &r,
        )
        .unwrap();
        let m = &out[0];
        // sentinel sorts below any real slot id
        assert_eq!((m.id1, m.id2), (Some(PLAYER_NOT_FOUND), Some(0)));
        assert!(m.opponent2.as_ref().unwrap().won());
    }

    #[test]
    fn truncated_fragment_fails_whole_decode() {
        let r = roster(&["Alpha", "Beta"]);
        let err = decode_nodes(&nodes(r#"R1: <a href="x">Alpha</a> d. "#), &r).unwrap_err();
        assert!(matches!(err, ScrapeError::MarkupShape(_)));
    }

    #[test]
    fn seed_prefix_names_resolve() {
        let r = vec![
            Some(RosterEntry {
                player_id: 0,
                player_name: s!("(1) Alpha"),
            }),
            Some(RosterEntry {
                player_id: 1,
                player_name: s!("Beta"),
            }),
        ];
        let out = decode_nodes(
            &nodes(r#"R2: <a href="x">Alpha</a> d. <a href="y">Beta</a> 6-2 7-5<br/>"#),
            &r,
        )
        .unwrap();
        assert_eq!((out[0].id1, out[0].id2), (Some(0), Some(1)));
    }
}
