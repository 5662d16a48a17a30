// src/predict.rs
//
// Score a predicted bracket against actual results. Matches pair up by
// their unordered slot-id pair, so a prediction still counts when the
// sides come back swapped.

use serde::Serialize;

use crate::bracket::MatchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionRate {
    #[serde(rename = "correctPredictions")]
    pub correct_predictions: u32,
    #[serde(rename = "totalPredictions")]
    pub total_predictions: u32,
}

/// Tally predictions. Only fully-filled predicted matches (both ids,
/// both opponent objects) participate; a prediction whose pair never
/// shows up in the actual results is skipped entirely.
pub fn score(predicted: &[MatchOutcome], actual: &[MatchOutcome]) -> PredictionRate {
    let mut rate = PredictionRate {
        correct_predictions: 0,
        total_predictions: 0,
    };

    for p in predicted {
        if p.id1.is_none() || p.id2.is_none() || p.opponent1.is_none() || p.opponent2.is_none() {
            continue;
        }
        let Some(a) = actual.iter().find(|a| same_pair(p, a)) else {
            continue;
        };

        rate.total_predictions += 1;
        if let (Some(pw), Some(aw)) = (winner_id(p), winner_id(a)) {
            if pw == aw {
                rate.correct_predictions += 1;
            }
        }
    }
    rate
}

fn same_pair(p: &MatchOutcome, a: &MatchOutcome) -> bool {
    (a.id1 == p.id1 && a.id2 == p.id2) || (a.id1 == p.id2 && a.id2 == p.id1)
}

fn winner_id(m: &MatchOutcome) -> Option<i64> {
    if m.opponent1.as_ref().is_some_and(|o| o.won()) {
        m.id1
    } else if m.opponent2.as_ref().is_some_and(|o| o.won()) {
        m.id2
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::{Outcome, ScoreResult, SetScore};

    fn side(won: bool) -> Option<ScoreResult> {
        Some(ScoreResult {
            score: Some(SetScore::Points(if won { 66 } else { 24 })),
            result: won.then_some(Outcome::Win),
        })
    }

    fn m(id1: i64, id2: i64, first_wins: bool) -> MatchOutcome {
        MatchOutcome {
            id1: Some(id1),
            id2: Some(id2),
            opponent1: side(first_wins),
            opponent2: side(!first_wins),
        }
    }

    #[test]
    fn direct_pair_correct_and_wrong() {
        let actual = vec![m(0, 1, true), m(2, 3, false)];
        let predicted = vec![m(0, 1, true), m(2, 3, true)];
        assert_eq!(
            score(&predicted, &actual),
            PredictionRate {
                correct_predictions: 1,
                total_predictions: 2,
            }
        );
    }

    #[test]
    fn swapped_pair_still_compares_winners() {
        // predicted slot 1 to win; actual lists the pair reversed with
        // slot 1 winning from the other side
        let actual = vec![m(1, 0, true)];
        let predicted = vec![m(0, 1, false)];
        assert_eq!(
            score(&predicted, &actual),
            PredictionRate {
                correct_predictions: 1,
                total_predictions: 1,
            }
        );
    }

    #[test]
    fn unmatched_predictions_are_skipped() {
        let actual = vec![m(0, 1, true)];
        let predicted = vec![m(4, 5, true)];
        assert_eq!(
            score(&predicted, &actual),
            PredictionRate {
                correct_predictions: 0,
                total_predictions: 0,
            }
        );
    }

    #[test]
    fn incomplete_predictions_are_skipped() {
        let actual = vec![m(0, 1, true)];
        let mut open = m(0, 1, true);
        open.opponent2 = None;
        let mut unseeded = m(0, 1, true);
        unseeded.id2 = None;
        assert_eq!(
            score(&[open, unseeded], &actual),
            PredictionRate {
                correct_predictions: 0,
                total_predictions: 0,
            }
        );
    }

    #[test]
    fn first_actual_pair_wins_ties() {
        let actual = vec![m(0, 1, true), m(0, 1, false)];
        let predicted = vec![m(0, 1, true)];
        assert_eq!(
            score(&predicted, &actual),
            PredictionRate {
                correct_predictions: 1,
                total_predictions: 1,
            }
        );
    }

    #[test]
    fn prediction_without_a_winner_counts_toward_total_only() {
        let actual = vec![m(0, 1, true)];
        let mut nowin = m(0, 1, true);
        nowin.opponent1.as_mut().unwrap().result = None;
        assert_eq!(
            score(&[nowin], &actual),
            PredictionRate {
                correct_predictions: 0,
                total_predictions: 1,
            }
        );
    }
}
