//! Results history for completed chains.

mod error;
mod models;
mod repository;
mod schema;

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub use error::DbError;
pub use models::{ChainResult, NewChainResult, ResultStats};
pub use repository::ResultRepository;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
