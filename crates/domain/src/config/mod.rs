//! Configuration module for Ferrous Dig
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP surface binding
//! - `resolver`: Upstream resolver settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
