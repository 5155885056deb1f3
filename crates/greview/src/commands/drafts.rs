use clap::Args;

use greview_core::{ChangeId, RevisionId};
use greview_rest::ReviewTransport;

use crate::config::load_config;
use crate::output;

use super::connect;

#[derive(Args)]
pub struct DraftsArgs {
    /// Change number, Change-Id or project~branch~Change-Id
    change: String,
    /// Revision to read drafts from (defaults to the current patch set)
    #[arg(long)]
    revision: Option<String>,
    /// Config profile to use
    #[arg(long, default_value = "default")]
    profile: String,
}

pub async fn run(args: DraftsArgs) -> anyhow::Result<()> {
    let config = load_config();
    let client = connect(&config, &args.profile)?;
    if !client.is_authenticated() {
        anyhow::bail!(
            "profile '{}' has no username; drafts are only visible to their author",
            args.profile
        );
    }

    let change = ChangeId::new(args.change);
    let revision = args.revision.map(RevisionId::from).unwrap_or_default();
    let drafts = client.fetch_draft_comments(&change, &revision).await?;

    if drafts.is_empty() {
        println!("No draft comments on change {change} ({revision}).");
        return Ok(());
    }

    for (path, comments) in &drafts {
        println!("{}", output::header(path));
        for comment in comments {
            let message = comment.message.as_deref().unwrap_or("");
            println!("{}", output::kv(&output::location(comment), message));
        }
    }
    Ok(())
}
