use std::sync::Arc;

use clap::Args;

use greview_core::{ChangeId, ReviewPreset, RevisionId};
use greview_rest::ReviewTransport;
use greview_submit::{
    CascadeStatus, ReviewAction, ReviewOutcome, ReviewSubmissionService, SelectedRevisions,
    SubmitOptions,
};

use crate::config::load_config;
use crate::console::{ConsoleNotifier, PromptConfirmation};
use crate::error::{EXIT_REVIEW_FAILED, EXIT_SUBMIT_FAILED};

use super::connect;

#[derive(Args)]
pub struct ReviewArgs {
    /// Change number, Change-Id or project~branch~Change-Id
    change: String,
    /// Vote preset such as code-review+2 or verified-1... (see `greview presets`)
    #[arg(long, conflicts_with = "rating")]
    preset: Option<String>,
    /// Label to vote on
    #[arg(short, long, default_value = "Code-Review")]
    label: String,
    /// Rating to apply to the label
    #[arg(short, long, allow_negative_numbers = true)]
    rating: Option<i32>,
    /// Revision to review (defaults to the current patch set)
    #[arg(long)]
    revision: Option<String>,
    /// Review message
    #[arg(short, long)]
    message: Option<String>,
    /// Do not send notification emails
    #[arg(long)]
    no_notify: bool,
    /// Submit the change after the review is posted
    #[arg(long)]
    submit: bool,
    /// Ask for confirmation (and a message) before posting
    #[arg(long)]
    confirm: bool,
    /// Config profile to use
    #[arg(long, default_value = "default")]
    profile: String,
}

fn resolve_preset(args: &ReviewArgs) -> anyhow::Result<ReviewPreset> {
    let mut preset = match (&args.preset, args.rating) {
        (Some(key), _) => ReviewPreset::find(key)?,
        (None, Some(rating)) => ReviewPreset::custom(&args.label, rating, false),
        (None, None) => anyhow::bail!("either --preset or --rating is required"),
    };
    preset.show_dialog |= args.confirm;
    Ok(preset)
}

pub async fn run(args: ReviewArgs) -> anyhow::Result<()> {
    let preset = resolve_preset(&args)?;
    let config = load_config();
    let client = connect(&config, &args.profile)?;

    let change = client.get_change(&ChangeId::new(args.change.as_str())).await?;
    let selector = Arc::new(SelectedRevisions::new());
    if let Some(revision) = args.revision {
        selector.select(change.id.clone(), RevisionId::new(revision));
    }

    let service = ReviewSubmissionService::new(client.clone())
        .with_labels(config.label_catalog()?)
        .with_confirmation(Arc::new(PromptConfirmation));

    let action = ReviewAction::new(
        preset,
        Arc::new(service),
        selector,
        Arc::new(ConsoleNotifier),
        client,
    )
    .with_defaults(SubmitOptions {
        message: args.message,
        notify: !args.no_notify,
        cascade_submit: args.submit,
        ..Default::default()
    });

    // Failures were already reported by the notifier.
    match action.perform(&change).await {
        Ok(ReviewOutcome::Posted(posted)) => {
            if let CascadeStatus::Failed(_) = posted.cascade {
                std::process::exit(EXIT_SUBMIT_FAILED);
            }
            if let CascadeStatus::Submitted = posted.cascade {
                println!("Change {} submitted", change.id);
            }
        }
        Ok(ReviewOutcome::Cancelled) => println!("Review cancelled"),
        Err(_) => std::process::exit(EXIT_REVIEW_FAILED),
    }
    Ok(())
}
