//! # kennel-log
//!
//! Logging setup shared by kennel binaries.
//!
//! Libraries only emit `tracing` events; a binary picks a [`Config`]
//! (usually [`Config::from_env`]) and installs the subscriber once:
//!
//! ```rust,no_run
//! use kennel_log::{Config, LoggerBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     LoggerBuilder::from_config(Config::from_env()).build()?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

mod builder;
pub mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, Format};
pub use error::{LogError, LogResult};
