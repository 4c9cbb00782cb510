//! Core domain + application logic for the batch link extractor bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the batch
//! catalog HTTP API live behind ports (traits) implemented in adapter crates.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod extract;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod report;

pub use errors::{Error, Result};
