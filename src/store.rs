// src/store.rs
//
// One JSON file per bracket under .store/brackets/, named after the
// sanitized title. Saving replaces any same-title bracket atomically:
// serialize to a sibling temp file, then rename over the target.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bracket::{RosterEntry, StoredBracket, StoredMatch};
use crate::core::sanitize::sanitize_title_filename;
use crate::error::ScrapeError;
use crate::params::{BRACKETS_SUBDIR, STORE_DIR};

fn brackets_dir() -> PathBuf {
    Path::new(STORE_DIR).join(BRACKETS_SUBDIR)
}

fn bracket_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_title_filename(title)))
}

pub fn save_bracket(
    title: &str,
    matches: Vec<StoredMatch>,
    roster: Vec<Option<RosterEntry>>,
) -> Result<(), Box<dyn Error>> {
    save_bracket_in(&brackets_dir(), title, matches, roster)
}

pub fn save_bracket_in(
    dir: &Path,
    title: &str,
    matches: Vec<StoredMatch>,
    roster: Vec<Option<RosterEntry>>,
) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(dir)?;

    let bracket = StoredBracket {
        title: s!(title),
        matches,
        roster,
    };
    let target = bracket_path(dir, title);
    let tmp = target.with_extension("json.tmp");

    fs::write(&tmp, serde_json::to_vec_pretty(&bracket)?)?;
    fs::rename(&tmp, &target)?;
    logf!("saved bracket {title:?} -> {}", target.display());
    Ok(())
}

pub fn load_bracket(title: &str) -> Result<StoredBracket, Box<dyn Error>> {
    load_bracket_in(&brackets_dir(), title)
}

pub fn load_bracket_in(dir: &Path, title: &str) -> Result<StoredBracket, Box<dyn Error>> {
    let path = bracket_path(dir, title);
    if !path.exists() {
        return Err(ScrapeError::BracketNotFound(s!(title)).into());
    }
    Ok(serde_json::from_slice(&fs::read(&path)?)?)
}
