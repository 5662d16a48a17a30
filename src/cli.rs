// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::{Command, Params};

pub fn parse() -> Result<Params, Box<dyn std::error::Error>> {
    parse_args(env::args().skip(1).collect())
}

pub fn run(params: Params) -> Result<(), Box<dyn std::error::Error>> {
    crate::runner::run(&params)
}

fn parse_args(args: Vec<String>) -> Result<Params, Box<dyn std::error::Error>> {
    let mut it = args.into_iter();
    let mut command: Option<Command> = None;
    let mut out: Option<PathBuf> = None;
    let mut pretty = false;

    while let Some(a) = it.next() {
        match a.as_str() {
            "fetch" => {
                command = Some(Command::Fetch {
                    page: it.next().ok_or("Missing tournament page for fetch")?,
                });
            }
            "list" => command = Some(Command::List),
            "load" => {
                command = Some(Command::Load {
                    title: it.next().ok_or("Missing title for load")?,
                });
            }
            "save" => {
                let title = it.next().ok_or("Missing title for save")?;
                let file = PathBuf::from(it.next().ok_or("Missing bracket file for save")?);
                command = Some(Command::Save { title, file });
            }
            "predict" => {
                let title = it.next().ok_or("Missing title for predict")?;
                let page = it.next().ok_or("Missing tournament page for predict")?;
                command = Some(Command::Predict { title, page });
            }
            "h2h" => {
                let player = it.next().ok_or("Missing player for h2h")?;
                let opponent = it.next().ok_or("Missing opponent for h2h")?;
                // url-shaped opponent defaults to the display name without spaces
                let opponent_parsed = it.next().unwrap_or_else(|| opponent.replace(' ', ""));
                command = Some(Command::H2h {
                    player,
                    opponent,
                    opponent_parsed,
                });
            }
            "rank" => {
                command = Some(Command::Rank {
                    player: it.next().ok_or("Missing player for rank")?,
                });
            }
            "-o" | "--out" => out = Some(PathBuf::from(it.next().ok_or("Missing output path")?)),
            "--pretty" => pretty = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let command = command.ok_or("No command given (try --help)")?;
    let mut params = Params::new(command);
    params.out = out;
    params.pretty = pretty;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| s!(*a)).collect()
    }

    #[test]
    fn fetch_with_output_flags() {
        let p = parse_args(args(&["fetch", "2023ATPCincinnati.html", "-o", "out.json", "--pretty"]))
            .unwrap();
        assert_eq!(
            p.command,
            Command::Fetch {
                page: s!("2023ATPCincinnati.html"),
            }
        );
        assert_eq!(p.out, Some(PathBuf::from("out.json")));
        assert!(p.pretty);
    }

    #[test]
    fn h2h_derives_parsed_opponent() {
        let p = parse_args(args(&["h2h", "CarlosAlcaraz", "Ben Shelton"])).unwrap();
        assert_eq!(
            p.command,
            Command::H2h {
                player: s!("CarlosAlcaraz"),
                opponent: s!("Ben Shelton"),
                opponent_parsed: s!("BenShelton"),
            }
        );
    }

    #[test]
    fn missing_command_or_value_errors() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["load"])).is_err());
        assert!(parse_args(args(&["save", "T"])).is_err());
        assert!(parse_args(args(&["--nope"])).is_err());
    }
}
