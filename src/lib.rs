//! # modmine
//!
//! A minimal, Rust-native miner for removed comments in Reddit moderation
//! logs. Give it a subreddit you moderate and a target count, and it walks
//! the cursor-paginated moderation log, collects the bodies of removed
//! comments, and hands them back in API order (or writes them to a JSON
//! file).
//!
//! ## Features
//!
//! - **Script-app authentication**: OAuth2 password grant with token caching
//! - **Cursor pagination**: batches capped at the API's 500-item page limit
//! - **AutoModerator filtering**: bot removals are excluded unless asked for
//! - **JSON export**: pretty-printed `<filename>.json` output
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use modmine::{MineRequest, Miner, MinerConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = MinerConfig::from_yaml_file("modmine.yaml")?;
//!     let miner = Miner::connect(&config).await?;
//!
//!     let request = MineRequest::new("rust").count(750);
//!     let mined = miner.mine(&request).await?;
//!     println!("collected {} removed comments", mined.len());
//!
//!     miner.mine_to_file(&request, "minedcomments").await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for modmine
pub mod error;

/// Common types and type aliases
pub mod types;

/// Script-app authentication and token caching
pub mod auth;

/// HTTP client wrapper
pub mod http;

/// Authenticated Reddit session client
pub mod reddit;

/// The mining core: page planning and the accumulation loop
pub mod miner;

/// JSON file output
pub mod output;

/// Runtime configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::MinerConfig;
pub use error::{Error, Result};
pub use miner::{ApiGateway, MineRequest, MinedComments, Miner};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
