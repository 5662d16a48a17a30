// src/scrape/tournaments.rs
//
// Tournament listing from the /current/ index page. Rows updated within
// the last week are flagged recent and listed first.

use std::error::Error;

use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;

use crate::core::html::{self, attr_value, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::params::CURRENT_PATH;
use crate::scrape::title;

const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentRef {
    pub title: String,
    pub url: String,
    pub recent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentList {
    pub tournaments: Vec<TournamentRef>,
}

pub fn fetch_all() -> Result<TournamentList, Box<dyn Error>> {
    let doc = net::get_path(CURRENT_PATH)?;
    Ok(parse_index(&doc, Local::now().date_naive()))
}

/// Scan the first table on the index page. Each usable row has at least
/// three cells: name, link, last-update timestamp. Rows with stale-year
/// or navigation hrefs are skipped, as are rows whose identifier or
/// date does not parse.
pub fn parse_index(doc: &str, today: NaiveDate) -> TournamentList {
    let body = match next_tag_block_ci(doc, "<body", "</body>", 0) {
        Some((s, e)) => &doc[s..e],
        None => doc,
    };
    let table = match next_tag_block_ci(body, "<table", "</table>", 0) {
        Some((s, e)) => &body[s..e],
        None => {
            loge!("tournament index: no table found");
            return TournamentList { tournaments: Vec::new() };
        }
    };

    let mut recent = Vec::new();
    let mut current = Vec::new();

    let mut pos = 0usize;
    while let Some((rs, re)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let row = &table[rs..re];
        pos = re;

        let mut cells: Vec<&str> = Vec::new();
        let mut cp = 0usize;
        while let Some((cs, ce)) = next_tag_block_ci(row, "<td", "</td>", cp) {
            cells.push(&row[cs..ce]);
            cp = ce;
        }
        if cells.len() < 3 {
            continue;
        }

        let Some(href) = anchor_href(cells[1]) else {
            continue;
        };
        if href.starts_with("2022") || href == "favicon.ico" || href == "/" {
            continue;
        }

        let ident = href.strip_suffix(".html").unwrap_or(&href);
        let title = match title::normalize(ident) {
            Ok(t) => t,
            Err(e) => {
                loge!("tournament index: skipping {href:?}: {e}");
                continue;
            }
        };

        let stamp = strip_tags(normalize_entities(&inner_after_open_tag(cells[2])));
        let Some(updated) = parse_update_date(&stamp) else {
            continue;
        };

        let entry = TournamentRef {
            title,
            url: href,
            recent: today - updated <= Duration::days(RECENT_WINDOW_DAYS),
        };
        if entry.recent {
            recent.push(entry);
        } else {
            current.push(entry);
        }
    }

    recent.append(&mut current);
    TournamentList { tournaments: recent }
}

fn anchor_href(cell: &str) -> Option<String> {
    let lc = html::to_lower(cell);
    let a = lc.find("<a")?;
    let gt = cell[a..].find('>')? + a + 1;
    attr_value(&cell[a..gt], "href")
}

/// "2024-08-20 14:05" -> the date part. Anything but exactly Y-M-D
/// before the first space is rejected.
fn parse_update_date(text: &str) -> Option<NaiveDate> {
    let head = text.split(' ').next().unwrap_or("");
    let mut parts = head.split('-');
    let y: i32 = parts.next()?.parse().ok()?;
    let m: u32 = parts.next()?.parse().ok()?;
    let d: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(y, m, d)
}
