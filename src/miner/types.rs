//! Mining request/result types, the gateway seam, and the listing wire shape

use crate::error::{Error, Result};
use crate::types::JsonValue;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Gateway Seam
// ============================================================================

/// GET-style request capability the miner drives
///
/// Implemented by the authenticated session client; substituted with a
/// canned double in tests. The miner never embeds a concrete client.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// Issue a GET request against `path` with the given query parameters
    async fn get(&self, path: &str, query: &HashMap<String, String>) -> Result<JsonValue>;
}

// ============================================================================
// Request
// ============================================================================

/// A request to mine removed comments from one subreddit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineRequest {
    /// Subreddit whose moderation log to read
    pub subreddit: String,
    /// Number of comments to request across all pages
    pub count: u32,
    /// Whether AutoModerator removals are kept
    pub include_automod: bool,
}

impl MineRequest {
    /// Create a request with the default count of 10, excluding AutoModerator
    pub fn new(subreddit: impl Into<String>) -> Self {
        Self {
            subreddit: subreddit.into(),
            count: 10,
            include_automod: false,
        }
    }

    /// Set the number of comments to request
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Keep AutoModerator removals in the result
    #[must_use]
    pub fn include_automod(mut self, include: bool) -> Self {
        self.include_automod = include;
        self
    }

    /// Validate field contents
    pub fn validate(&self) -> Result<()> {
        if self.subreddit.is_empty() {
            return Err(Error::invalid_argument("subreddit", "must not be empty"));
        }
        if self.count == 0 {
            return Err(Error::invalid_argument("count", "must be greater than 0"));
        }
        Ok(())
    }
}

// ============================================================================
// Result
// ============================================================================

/// Removed-comment bodies collected from the moderation log, in API order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinedComments {
    /// The removed comment bodies
    pub removed_comments: Vec<String>,
}

impl MinedComments {
    /// Number of collected comments
    pub fn len(&self) -> usize {
        self.removed_comments.len()
    }

    /// Whether nothing was collected
    pub fn is_empty(&self) -> bool {
        self.removed_comments.is_empty()
    }
}

// ============================================================================
// Listing Wire Shape
// ============================================================================

/// One page of the moderation-log listing
#[derive(Debug, Clone, Deserialize)]
pub struct ModLogPage {
    /// Listing envelope
    pub data: ModLogData,
}

/// Listing envelope: cursor plus entries
#[derive(Debug, Clone, Deserialize)]
pub struct ModLogData {
    /// Cursor for the next page, absent on the last one
    pub after: Option<String>,
    /// Entries on this page
    #[serde(default)]
    pub children: Vec<ModLogChild>,
}

/// Wrapper the listing puts around each entry
#[derive(Debug, Clone, Deserialize)]
pub struct ModLogChild {
    /// The entry itself
    pub data: ModLogEntry,
}

/// A single moderation-log entry
#[derive(Debug, Clone, Deserialize)]
pub struct ModLogEntry {
    /// Name of the moderator who performed the removal
    #[serde(rename = "mod")]
    pub moderator: String,
    /// Body of the removed comment
    pub target_body: String,
}
