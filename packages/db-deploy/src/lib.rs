//! Database bootstrap and schema migration for deployment workflows.
//! Used by the one-shot CLI and the lifecycle-event Lambda handler.

pub mod config;
pub mod error;
pub mod migrator;

pub use config::{AdminSecret, AppSecret, HostInfo};
pub use error::{error_chain_messages, BoxError, DeployError};
pub use migrator::DbMigrator;
