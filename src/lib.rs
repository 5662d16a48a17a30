// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod scrape;

pub mod bracket;
pub mod error;
pub mod params;
pub mod predict;
pub mod reconcile;
pub mod runner;
pub mod store;
