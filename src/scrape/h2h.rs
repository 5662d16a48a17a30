// src/scrape/h2h.rs
//
// Head-to-head record and current rank, scraped from player pages. Men
// and women live on different hosts with different script layouts, so
// both lookups are ordered two-branch probes: ATP first, WTA when the
// ATP slice comes back empty.

use std::error::Error;

use serde::Serialize;
use serde_json::Value;

use crate::core::{html, net};
use crate::params::{HOST, WTA_HOST};

// Record layout of one match-history row.
const IDX_RESULT: usize = 4;
const IDX_SCORE: usize = 9;
const IDX_OPPONENT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct H2HRecord {
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct H2HReport {
    pub wins: u32,
    pub losses: u32,
    /// Which tour answered the probe: "ATP" or "WTA".
    pub tour: String,
}

/// Head-to-head from `player`'s perspective. `player` and
/// `opponent_parsed` are URL-shaped names (no spaces); `opponent` is
/// the display name the history rows carry.
pub fn head_to_head(
    player: &str,
    opponent: &str,
    opponent_parsed: &str,
) -> Result<H2HReport, Box<dyn Error>> {
    let (records, tour) = match_history(player, opponent_parsed)?;
    let rec = tally(&records, opponent);
    logd!("h2h {player} vs {opponent}: {}-{} ({tour})", rec.wins, rec.losses);
    Ok(H2HReport {
        wins: rec.wins,
        losses: rec.losses,
        tour: s!(tour),
    })
}

/// Count wins and losses against one opponent. Walkovers and
/// not-yet-played rows (empty score) never count.
pub fn tally(records: &[Value], opponent: &str) -> H2HRecord {
    let mut rec = H2HRecord { wins: 0, losses: 0 };
    for row in records {
        let opp = row.get(IDX_OPPONENT).and_then(Value::as_str).unwrap_or("");
        let score = row.get(IDX_SCORE).and_then(Value::as_str).unwrap_or("");
        if opp != opponent || score == "W/O" || score.is_empty() {
            continue;
        }
        if row.get(IDX_RESULT).and_then(Value::as_str) == Some("W") {
            rec.wins += 1;
        } else {
            rec.losses += 1;
        }
    }
    rec
}

fn match_history(
    player: &str,
    opponent_parsed: &str,
) -> Result<(Vec<Value>, &'static str), Box<dyn Error>> {
    let url = format!("{HOST}/cgi-bin/player.cgi?p={player}&f=ACareerqq&q={opponent_parsed}");
    let fragment = script_slice(&url, "var matchmx", "var fourspaces", 14, 4)?;
    if !fragment.is_empty() {
        return Ok((serde_json::from_str(&fragment)?, "ATP"));
    }
    Ok((wta_matches(player)?, "WTA"))
}

/// WTA histories come as two raw .js files: recent matches and the
/// career backlog. Career rows go first so the combined list stays in
/// chronological order.
fn wta_matches(player: &str) -> Result<Vec<Value>, Box<dyn Error>> {
    let recent_page = net::http_get(&format!(
        "{WTA_HOST}/tennisabstract/cgi-bin/jsmatches/{player}.js"
    ))?;
    let career_page = net::http_get(&format!(
        "{WTA_HOST}/tennisabstract/cgi-bin/jsmatches/{player}Career.js"
    ))?;

    let recent = html::slice_offsets(&recent_page, "var matchmx", "]];", 14, 1)
        .ok_or("match history: recent matches script not in expected shape")?;
    let career = html::slice_offsets(&career_page, "var morematchmx", ";", 18, 0)
        .ok_or("match history: career matches script not in expected shape")?;

    let mut all: Vec<Value> = serde_json::from_str(career)?;
    all.extend(serde_json::from_str::<Vec<Value>>(recent)?);
    Ok(all)
}

/// Current tour rank; -1 means unranked. ATP page first, then the WTA
/// classic page when the ATP slice is empty.
pub fn player_rank(player: &str) -> Result<i64, Box<dyn Error>> {
    let mut data = script_slice(
        &format!("{HOST}/cgi-bin/player.cgi?p={player}"),
        "var currentrank",
        "var peakrank",
        18,
        2,
    )?;
    if data.is_empty() {
        data = script_slice(
            &format!("{HOST}/cgi-bin/wplayer-classic.cgi?p={player}"),
            "var currentrank",
            "var peakrank",
            18,
            2,
        )?;
    }
    parse_rank(&data)
}

fn parse_rank(data: &str) -> Result<i64, Box<dyn Error>> {
    if data == "\"UNR\"" {
        return Ok(-1);
    }
    Ok(data.trim().parse::<i64>()?)
}

/// Fetch `url` and slice the last <head> script between two markers.
/// A page without a head, or without the markers, yields an empty
/// string so callers can fall through to their next source.
fn script_slice(
    url: &str,
    start: &str,
    end: &str,
    add: usize,
    sub: usize,
) -> Result<String, Box<dyn Error>> {
    let doc = net::http_get(url)?;
    let Some(script) = html::last_head_script(&doc) else {
        return Ok(s!());
    };
    Ok(html::slice_offsets(&script, start, end, add, sub)
        .map(|s| s!(s))
        .unwrap_or_default())
}
