use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use gh_propagate::github::{auth, client};
use gh_propagate::inputs;
use gh_propagate::propagate;

#[derive(Parser)]
#[command(
    name = "gh-propagate",
    version,
    about = "Propagate a CODEOWNERS file across an organization via pull requests"
)]
struct Cli {
    /// Organization whose repositories receive the file.
    #[arg(long)]
    org: String,

    /// Name of the repository providing the seed file; never a target.
    #[arg(long)]
    source_repo: String,

    /// GitHub token. Falls back to `gh auth token`, then GH_TOKEN / GITHUB_TOKEN.
    #[arg(long)]
    github_token: Option<String>,

    /// Path of the file to propagate.
    #[arg(long, default_value = "CODEOWNERS")]
    seed_file: PathBuf,

    /// Path of the include/exclude policy JSON.
    #[arg(long, default_value = ".github/codeowners_repos_config.json")]
    policy_file: PathBuf,

    /// Override the API base URI (GitHub Enterprise).
    #[arg(long)]
    api_url: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing.
    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    // Both inputs must be readable before anything touches the network; a
    // missing file ends the run early, as a success.
    let Some((seed, policy)) = inputs::load_inputs(&cli.seed_file, &cli.policy_file)? else {
        tracing::warn!("local inputs missing; nothing to propagate");
        return Ok(());
    };

    // Install the rustls CryptoProvider before any TLS client is constructed.
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .expect("failed to install default CryptoProvider");

    let token = auth::resolve_token(cli.github_token.as_deref())?;
    let octocrab = client::build(token, cli.api_url.as_deref())?;

    tracing::info!(
        "propagating {} from {}/{}",
        cli.seed_file.display(),
        cli.org,
        cli.source_repo
    );

    let report = propagate::run(&octocrab, &cli.org, &cli.source_repo, &seed, &policy).await?;
    tracing::info!("{}", report.summary());

    let failures = report.failures();
    if !failures.is_empty() {
        let detail: Vec<String> = failures
            .iter()
            .map(|(repo, message)| format!("{repo}: {message}"))
            .collect();
        bail!(
            "propagation failed for {} repositories:\n  {}",
            failures.len(),
            detail.join("\n  ")
        );
    }

    Ok(())
}
