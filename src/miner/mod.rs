//! The mining core
//!
//! `Miner` drives the moderation-log listing endpoint: it validates the
//! request, computes a page plan, walks the cursor-paginated log strictly
//! sequentially, filters AutoModerator removals on request, and accumulates
//! removed-comment bodies in API order.

mod plan;
mod types;

pub use plan::PagePlan;
pub use types::{
    ApiGateway, MineRequest, MinedComments, ModLogChild, ModLogData, ModLogEntry, ModLogPage,
};

use crate::config::MinerConfig;
use crate::error::{Error, Result};
use crate::output;
use crate::reddit::RedditClient;
use crate::types::{OptionStringExt, AUTO_MODERATOR, REMOVED_COMMENT_ACTION};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Mines removed comments out of a subreddit's moderation log
pub struct Miner {
    gateway: Arc<dyn ApiGateway>,
}

impl Miner {
    /// Create a miner over any API gateway
    ///
    /// Tests substitute a canned gateway here; production code usually goes
    /// through [`Miner::connect`].
    pub fn new(gateway: Arc<dyn ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Create a miner with an authenticated session
    ///
    /// Fails with [`Error::Auth`] when the session cannot be established.
    pub async fn connect(config: &MinerConfig) -> Result<Self> {
        let client = RedditClient::connect(config).await?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Mine removed comments from the subreddit's moderation log
    ///
    /// Issues `ceil(count / 500)` page requests (a single one when
    /// `count < 500`), threading the listing cursor between them. Entries
    /// removed by AutoModerator are skipped unless the request asks for
    /// them. Gateway failures propagate unchanged; a mid-loop failure
    /// discards all progress.
    pub async fn mine(&self, request: &MineRequest) -> Result<MinedComments> {
        request.validate()?;

        let plan = PagePlan::for_count(request.count);
        let path = format!("/r/{}/about/log", request.subreddit);
        let mut mined = MinedComments::default();
        let mut after: Option<String> = None;

        for page in 1..=plan.total_pages {
            debug!(
                "Requesting page {page}/{} of r/{}",
                plan.total_pages, request.subreddit
            );

            let mut query = HashMap::new();
            query.insert("type".to_string(), REMOVED_COMMENT_ACTION.to_string());
            query.insert("limit".to_string(), plan.limit_for_page(page).to_string());
            if let Some(cursor) = &after {
                query.insert("after".to_string(), cursor.clone());
            }

            let body = self.gateway.get(&path, &query).await?;
            let listing: ModLogPage = serde_json::from_value(body)
                .map_err(|e| Error::decode(format!("unexpected listing shape: {e}")))?;

            for child in listing.data.children {
                let entry = child.data;
                if !request.include_automod && entry.moderator == AUTO_MODERATOR {
                    continue;
                }
                mined.removed_comments.push(entry.target_body);
            }

            // The cursor only matters while pages remain; a listing without
            // one means the log is exhausted.
            if page < plan.total_pages {
                match listing.data.after.none_if_empty() {
                    Some(cursor) => after = Some(cursor),
                    None => {
                        debug!("Moderation log exhausted after page {page}");
                        break;
                    }
                }
            }
        }

        info!(
            "Mined {} removed comments from r/{}",
            mined.len(),
            request.subreddit
        );
        Ok(mined)
    }

    /// Mine removed comments and write them to `<filename>.json`
    ///
    /// The file is created (or truncated) only after mining succeeds, so a
    /// failed fetch never leaves a partial document behind. Returns the
    /// written path.
    pub async fn mine_to_file(&self, request: &MineRequest, filename: &str) -> Result<PathBuf> {
        if filename.is_empty() {
            return Err(Error::invalid_argument("filename", "must not be empty"));
        }

        let mined = self.mine(request).await?;
        let path = output::json_path(filename);
        output::write_json_pretty(&path, &mined)?;

        info!(
            "Wrote {} removed comments to {}",
            mined.len(),
            path.display()
        );
        Ok(path)
    }
}

impl std::fmt::Debug for Miner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Miner").finish_non_exhaustive()
    }
}
