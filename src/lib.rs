//! match-the-hatch
//!
//! Interactive fly-fishing trip planner. Given a location, body of water,
//! target species, and season, asks a language model for likely insect
//! hatches and fly patterns, then optionally for a tying material shopping
//! list. Pure prompt/parse logic lives in `match_the_hatch_common`; this
//! crate adds the completion providers, the generation pipeline, the trip
//! store, and the CLI.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod store;
