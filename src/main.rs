// src/main.rs
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let params = bracket_scrape::cli::parse().map_err(|e| eyre!("{e}"))?;
    bracket_scrape::cli::run(params).map_err(|e| eyre!("{e}"))
}
