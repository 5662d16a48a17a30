// src/params.rs
use std::path::PathBuf;

pub const HOST: &str = "https://www.tennisabstract.com";
pub const WTA_HOST: &str = "https://www.minorleaguesplits.com";
pub const CURRENT_PATH: &str = "/current/";
pub const STORE_DIR: &str = ".store";
pub const BRACKETS_SUBDIR: &str = "brackets";

// The upstream site serves placeholder pages to unknown agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.95 Safari/537.36";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Scrape one tournament page into a bracket snapshot.
    Fetch { page: String },
    /// List tournaments from the /current/ index, recent first.
    List,
    /// Reconstruct a stored bracket into snapshot shape.
    Load { title: String },
    /// Persist bracket records from a JSON file (replaces same-title bracket).
    Save { title: String, file: PathBuf },
    /// Score a stored predicted bracket against a live tournament page.
    Predict { title: String, page: String },
    /// Head-to-head tally between two players.
    H2h {
        player: String,
        opponent: String,
        opponent_parsed: String,
    },
    /// Current rank of a player.
    Rank { player: String },
}

#[derive(Clone, Debug)]
pub struct Params {
    pub command: Command,
    pub out: Option<PathBuf>, // write JSON here instead of stdout
    pub pretty: bool,         // pretty-print JSON output
}

impl Params {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            out: None,
            pretty: false,
        }
    }
}
