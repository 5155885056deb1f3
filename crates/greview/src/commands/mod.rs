pub mod drafts;
pub mod presets;
pub mod review;

use std::sync::Arc;

use clap::Subcommand;

use greview_rest::HttpReviewClient;

use crate::config::Config;

#[derive(Subcommand)]
pub enum Commands {
    /// Vote on a change and publish your draft comments
    Review(review::ReviewArgs),
    /// List your draft comments on a change
    Drafts(drafts::DraftsArgs),
    /// List the built-in vote presets
    Presets,
}

impl Commands {
    pub async fn run(self) -> anyhow::Result<()> {
        match self {
            Commands::Review(args) => review::run(args).await,
            Commands::Drafts(args) => drafts::run(args).await,
            Commands::Presets => presets::run(),
        }
    }
}

/// Build a REST client for a configured profile.
pub(crate) fn connect(config: &Config, profile: &str) -> anyhow::Result<Arc<HttpReviewClient>> {
    let profile_entry = config.profile(profile)?;
    let client = HttpReviewClient::new(profile_entry.remote_config())?;
    tracing::debug!(profile, base_url = %profile_entry.base_url, "connected");
    Ok(Arc::new(client))
}
