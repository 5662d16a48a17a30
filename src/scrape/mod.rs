// src/scrape/mod.rs
//
// Scraping pipeline: fetch a tournament page, pull the bracket script
// out of <head>, and turn it into a snapshot. Parsing is pure; only
// `collect_bracket` touches the network.

pub mod h2h;
pub mod matches;
pub mod roster;
pub mod title;
pub mod tournaments;

use std::error::Error;
use std::time::Instant;

use crate::bracket::BracketSnapshot;
use crate::core::{html, net};
use crate::error::ScrapeError;

/// Tournament title from the page <title>, e.g.
/// "Tennis Abstract: 2023 ATP Cincinnati Results" -> "2023 ATP Cincinnati".
pub fn tournament_title(doc: &str) -> Result<String, ScrapeError> {
    let text =
        html::page_title(doc).ok_or_else(|| ScrapeError::MarkupShape(s!("page title missing")))?;
    let start = text
        .find(':')
        .map(|i| i + 2)
        .ok_or_else(|| ScrapeError::MarkupShape(s!("page title has no colon")))?;
    let stop = text
        .find("Results")
        .and_then(|i| i.checked_sub(1))
        .ok_or_else(|| ScrapeError::MarkupShape(s!("page title has no Results marker")))?;
    if start > stop || !text.is_char_boundary(start) || !text.is_char_boundary(stop) {
        return Err(ScrapeError::MarkupShape(format!(
            "page title too short: {text:?}"
        )));
    }
    Ok(s!(&text[start..stop]))
}

/// Parse a full tournament page into a live snapshot.
pub fn parse_bracket(doc: &str) -> Result<BracketSnapshot, ScrapeError> {
    let title = tournament_title(doc)?;
    let script = html::last_head_script(doc)
        .ok_or_else(|| ScrapeError::MarkupShape(s!("no script block in head")))?;

    let slots = roster::parse(&script)?;
    let roster = roster::to_roster(&slots);
    let results = matches::decode(&script, &roster)?;

    Ok(BracketSnapshot {
        title,
        roster,
        results,
        method: s!("webscrape"),
    })
}

/// Fetch and parse one tournament page.
pub fn collect_bracket(path: &str) -> Result<BracketSnapshot, Box<dyn Error>> {
    let doc = net::get_path(path)?;
    let t = Instant::now();
    let snapshot = parse_bracket(&doc)?;
    logd!(
        "parsed bracket {:?}: {} slots, {} matches in {:?}",
        snapshot.title,
        snapshot.roster.len(),
        snapshot.results.len(),
        t.elapsed()
    );
    Ok(snapshot)
}
