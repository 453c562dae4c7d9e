//! CLI command execution

use super::commands::{Cli, Commands};
use crate::config::MinerConfig;
use crate::error::Result;
use crate::miner::{MineRequest, Miner};
use crate::output;
use crate::reddit::RedditClient;

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        let config = MinerConfig::from_yaml_file(&self.cli.config)?;

        match &self.cli.command {
            Commands::Check => {
                let client = RedditClient::connect(&config).await?;
                let identity = client.me().await?;
                println!("Authenticated as u/{}", identity.name);
            }

            Commands::Mine {
                subreddit,
                count,
                include_automod,
            } => {
                let miner = Miner::connect(&config).await?;
                let request = MineRequest::new(subreddit)
                    .count(*count)
                    .include_automod(*include_automod);
                let mined = miner.mine(&request).await?;
                println!("{}", output::to_json_pretty(&mined)?);
            }

            Commands::Export {
                subreddit,
                count,
                include_automod,
                output,
            } => {
                let miner = Miner::connect(&config).await?;
                let request = MineRequest::new(subreddit)
                    .count(*count)
                    .include_automod(*include_automod);
                let path = miner.mine_to_file(&request, output).await?;
                println!("Wrote {}", path.display());
            }
        }

        Ok(())
    }
}
