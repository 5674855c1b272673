//! Terminal host for cnmn.
//!
//! Wraps the [`cnmn_chain`] engine with everything the engine leaves to its
//! host: configuration, session snapshots on disk, a results history in
//! SQLite, and a line-oriented play loop.
//!
//! # Architecture
//!
//! - **Config**: [`CnmnConfig`] from `cnmn.toml`
//! - **Store**: [`SnapshotStore`] saves progress after every guess
//! - **History**: [`ResultHistory`] over the diesel [`ResultRepository`]
//! - **Play**: [`PlaySession`] renders prompts and reads guesses

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod history;
mod play;
mod store;

pub mod db;

pub use config::{CONFIG_ENV, CnmnConfig, ConfigError, DEFAULT_CONFIG_FILE, GlyphConfig};
pub use db::{ChainResult, DbError, NewChainResult, ResultRepository, ResultStats};
pub use history::{Recorded, ResultHistory};
pub use play::{PlayError, PlayOutcome, PlaySession, QUIT};
pub use store::{SnapshotStore, StoreError};
