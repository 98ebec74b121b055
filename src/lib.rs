//! MongoDB browsing gateway
//!
//! This library connects a hosting application (an editor plugin, a tool) to
//! a MongoDB server through four self-contained operations: verify
//! connectivity and credentials, enumerate databases and collections, and
//! fetch documents with or without query options. Every call opens a fresh
//! client and returns plain data; no state is retained between calls.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Output formatting and display
//! - `gateway`: The database gateway operations
//! - `model`: Server/database/collection descriptors and fetch results
//! - `query`: Query options and plan selection
//!
//! # Example
//!
//! ```no_run
//! use mongoscope::{config::ServerConfig, gateway::Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = ServerConfig::default();
//!     let gateway = Gateway::new();
//!
//!     let tree = gateway.enumerate(&server).await?;
//!     for database in &tree.databases {
//!         println!("{} ({} collections)", database.name, database.collections.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod gateway;
pub mod model;
pub mod query;

// Re-export commonly used types
pub use config::{Config, ServerConfig};
pub use error::{ConfigurationError, GatewayError, Result};
pub use gateway::Gateway;
pub use model::{CollectionInfo, CollectionResult, DatabaseInfo, ServerInfo};
pub use query::{QueryOptions, QueryPlan};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}
