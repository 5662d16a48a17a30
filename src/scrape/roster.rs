// src/scrape/roster.rs
//
// Seed-slot roster from the projection fragment of the bracket script.

use crate::bracket::RosterEntry;
use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;
use crate::error::ScrapeError;

// Round-size markers, largest first; the first one present opens the
// projection fragment and the next distinct one closes it.
const PROJECTION_MARKERS: [&str; 8] = [
    "var proj128",
    "var proj64",
    "var proj32",
    "var proj16",
    "var proj8",
    "var proj4",
    "var proj2",
    "var projCurrent",
];

// Byte trims applied to the raw fragment bounds, matching the upstream
// script layout around the markers.
const FRAGMENT_LEAD: usize = 9;
const FRAGMENT_TAIL: usize = 7;

/// One position in the single-elimination roster.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedSlot {
    Player(RosterEntry),
    Qualifier(RosterEntry),
    Bye,
}

impl SeedSlot {
    pub fn entry(&self) -> Option<&RosterEntry> {
        match self {
            SeedSlot::Player(e) | SeedSlot::Qualifier(e) => Some(e),
            SeedSlot::Bye => None,
        }
    }
}

/// The script slice between the first-found projection marker and the
/// next distinct marker (or the near-end of the script when no later
/// marker exists).
pub fn projection_fragment(script: &str) -> Option<&str> {
    let mut begin = None;
    let mut begin_round = 0usize;
    for (i, marker) in PROJECTION_MARKERS.iter().enumerate() {
        if let Some(idx) = script.find(marker) {
            begin = Some(idx);
            begin_round = i;
            break;
        }
    }
    let begin = begin?;

    let mut end = None;
    for marker in &PROJECTION_MARKERS[begin_round + 1..] {
        if let Some(idx) = script.find(marker) {
            if idx != begin {
                end = Some(idx);
                break;
            }
        }
    }
    let end = end.unwrap_or(script.len());

    let start = begin + FRAGMENT_LEAD;
    let stop = end.checked_sub(FRAGMENT_TAIL)?;
    if start > stop {
        return None;
    }
    script.get(start..stop)
}

/// Parse the roster table inside the projection fragment. Cells with a
/// hyperlink become players (cell text before the link is kept, so seed
/// prefixes like "(1) " survive); "Bye" cells hold a position without
/// an identity; "Qualifier" cells are auto-named. Slot ids increment in
/// scan order and skip byes.
pub fn parse(script: &str) -> Result<Vec<SeedSlot>, ScrapeError> {
    let fragment = projection_fragment(script).ok_or(ScrapeError::NoRoster)?;
    let (ts, te) = next_tag_block_ci(fragment, "<table", "</table>", 0).ok_or(ScrapeError::NoRoster)?;
    let table = &fragment[ts..te];

    let mut slots = Vec::new();
    let mut player_id: i64 = 0;
    let mut qualifier_number = 1u32;

    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(table, "<td", "</td>", pos) {
        let cell = &table[td_s..td_e];
        pos = td_e;

        if let Some((a_s, a_e)) = next_tag_block_ci(cell, "<a", "</a>", 0) {
            let link_text = strip_tags(normalize_entities(&inner_after_open_tag(&cell[a_s..a_e])));
            let lead = strip_tags(normalize_entities(&cell[..a_s]));
            let player_name = if lead.is_empty() {
                link_text
            } else {
                format!("{lead} {link_text}")
            };
            slots.push(SeedSlot::Player(RosterEntry { player_id, player_name }));
            player_id += 1;
        } else {
            let text = strip_tags(normalize_entities(&inner_after_open_tag(cell)));
            if text == "Bye" {
                slots.push(SeedSlot::Bye);
            } else if text.contains("Qualifier") {
                slots.push(SeedSlot::Qualifier(RosterEntry {
                    player_id,
                    player_name: format!("Qualifier Player {qualifier_number}"),
                }));
                player_id += 1;
                qualifier_number += 1;
            }
            // any other cell is bracket chrome; skip it
        }
    }

    Ok(slots)
}

/// Snapshot roster shape: one entry per slot, byes as null.
pub fn to_roster(slots: &[SeedSlot]) -> Vec<Option<RosterEntry>> {
    slots.iter().map(|s| s.entry().cloned()).collect()
}
