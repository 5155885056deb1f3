use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod console;
mod error;
mod output;

use commands::Commands;

#[derive(Parser)]
#[command(name = "greview", version, about = "Post Gerrit code reviews from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.command.run().await {
        eprintln!("{}", error::format_error(&err));
        std::process::exit(error::EXIT_REVIEW_FAILED);
    }
}
