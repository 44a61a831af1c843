// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod model;
pub mod progress;
pub mod record;
pub mod runner;
pub mod scrape;
pub mod sheet;
pub mod specs;

pub use error::{Error, Result};
