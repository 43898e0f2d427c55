//! GitHub Status - Set a GitHub user's status
//!
//! Sends the fixed `changeUserStatus` mutation to the GitHub GraphQL API and
//! prints the JSON response to stdout. Failures are printed to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Send the mutation with a real token
//! github-status --token ghp_xxx
//!
//! # Pretty-print the response
//! GITHUB_STATUS_TOKEN=ghp_xxx github-status --pretty
//!
//! # Show the confirmation notice
//! github-status alert
//! ```

use clap::{Parser, Subcommand};
use github_status::{
    ConsoleSink, DEFAULT_ENDPOINT, MutationRequest, PLACEHOLDER_TOKEN, my_alert,
    send_status_mutation,
};
use reqwest::Client;
use tracing_subscriber::EnvFilter;

/// Sets a GitHub user's status through the GraphQL API.
#[derive(Parser, Debug)]
#[command(name = "github-status")]
#[command(about = "Sends the changeUserStatus mutation to GitHub")]
struct Args {
    /// GraphQL endpoint.
    #[arg(long, env = "GITHUB_STATUS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// GitHub personal access token.
    #[arg(short, long, env = "GITHUB_STATUS_TOKEN", default_value = PLACEHOLDER_TOKEN, hide_env_values = true)]
    token: String,

    /// Pretty-print JSON output.
    #[arg(short, long, env = "GITHUB_STATUS_PRETTY")]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Send the status mutation (default).
    Send,
    /// Print the confirmation notice.
    Alert,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command.unwrap_or(Command::Send) {
        Command::Alert => {
            my_alert(&mut std::io::stdout().lock())?;
        }
        Command::Send => {
            if args.token == PLACEHOLDER_TOKEN {
                tracing::warn!("using placeholder token; GitHub will reject the request");
            }

            let request = MutationRequest::new(args.endpoint, &args.token)?;
            let client = Client::builder().build()?;

            send_status_mutation(&client, &request, &ConsoleSink::stdio(args.pretty)).await;
        }
    }

    Ok(())
}
