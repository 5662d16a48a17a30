// src/runner.rs
//
// Command execution. Every command produces one JSON document, written
// to stdout or to `--out`.

use std::error::Error;
use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bracket::{RosterEntry, StoredMatch};
use crate::params::{Command, Params};
use crate::{predict, reconcile, scrape, store};

pub fn run(params: &Params) -> Result<(), Box<dyn Error>> {
    let json = execute(&params.command)?;
    emit(params, &json)
}

pub fn execute(command: &Command) -> Result<Value, Box<dyn Error>> {
    match command {
        Command::Fetch { page } => to_value(scrape::collect_bracket(page)?),
        Command::List => to_value(scrape::tournaments::fetch_all()?),
        Command::Load { title } => to_value(reconcile::snapshot(store::load_bracket(title)?)),
        Command::Save { title, file } => {
            let text = fs::read_to_string(file)?;
            let records: SaveFile = serde_json::from_str(&text)?;
            store::save_bracket(title, records.matches, records.roster)?;
            Ok(serde_json::json!({ "saved": title }))
        }
        Command::Predict { title, page } => {
            let predicted = reconcile::snapshot(store::load_bracket(title)?);
            let actual = scrape::collect_bracket(page)?;
            to_value(predict::score(&predicted.results, &actual.results))
        }
        Command::H2h {
            player,
            opponent,
            opponent_parsed,
        } => to_value(scrape::h2h::head_to_head(player, opponent, opponent_parsed)?),
        Command::Rank { player } => {
            let rank = scrape::h2h::player_rank(player)?;
            Ok(serde_json::json!({ "rank": rank }))
        }
    }
}

/// Input shape for `save`: bracket records as exported by a frontend.
/// The title always comes from the command line, not the file.
#[derive(Debug, Deserialize)]
struct SaveFile {
    #[serde(default)]
    matches: Vec<StoredMatch>,
    #[serde(default)]
    roster: Vec<Option<RosterEntry>>,
}

fn to_value<T: Serialize>(v: T) -> Result<Value, Box<dyn Error>> {
    Ok(serde_json::to_value(v)?)
}

fn emit(params: &Params, json: &Value) -> Result<(), Box<dyn Error>> {
    let text = if params.pretty {
        serde_json::to_string_pretty(json)?
    } else {
        serde_json::to_string(json)?
    };
    match &params.out {
        Some(path) => {
            fs::write(path, text)?;
            logf!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
