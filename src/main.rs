mod config;
mod domain;
mod notify;
mod repo;
mod usecase;

use anyhow::{Result, anyhow};
use clap::Parser;
use time::OffsetDateTime;

use config::{Config, Provider};
use domain::identity::IdentityMap;

#[derive(Parser, Debug)]
#[command(author, version, about = "nudge — remind reviewers about waiting pull requests", long_about = None)]
struct Args {
    /// Repository to scan, as owner/name (default: env GITHUB_REPOSITORY)
    #[arg(long)]
    repo: Option<String>,

    /// Chat provider receiving the reminder
    #[arg(long, value_enum)]
    provider: Provider,

    /// Incoming webhook URL of the provider
    #[arg(long)]
    webhook_url: String,

    /// Target channel (Slack only)
    #[arg(long, default_value = "")]
    channel: String,

    /// GitHub-login to provider-ID pairs, e.g. "bob:UP7PF,ann:UQPAA"
    #[arg(long, default_value = "")]
    github_provider_map: String,

    /// Days a PR must have been open before its reviewers are reminded
    #[arg(long, default_value_t = 1)]
    waiting_time: i64,

    /// PRs carrying this label are never reminded about
    #[arg(long, default_value = "")]
    ignore_label: String,

    /// GitHub Enterprise API base, e.g. https://ghe.example.com/api/v3
    #[arg(long)]
    api_base: Option<String>,

    /// Print the rendered payload instead of POSTing it
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = build_config(args)?;
    run(cfg)
}

fn build_config(args: Args) -> Result<Config> {
    let repo_ref = match args.repo {
        Some(r) => r,
        None => std::env::var("GITHUB_REPOSITORY")
            .map_err(|_| anyhow!("repository is required (--repo or env GITHUB_REPOSITORY)"))?,
    };
    let (owner, repo) = repo_ref
        .split_once('/')
        .ok_or_else(|| anyhow!("repository must be owner/name, got {repo_ref:?}"))?;

    Ok(Config {
        owner: owner.to_string(),
        repo: repo.to_string(),
        token: repo::github::auth::resolve_token()?,
        api_base: args.api_base,
        provider: args.provider,
        webhook_url: args.webhook_url,
        channel: args.channel,
        provider_map_raw: args.github_provider_map,
        waiting_time_days: args.waiting_time,
        ignore_label: args.ignore_label,
        dry_run: args.dry_run,
    })
}

/// Single pass: fetch, filter, expand, format, send.
fn run(cfg: Config) -> Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("failed to build tokio runtime: {e}"))?;

    rt.block_on(async {
        let octo = repo::github::build_client(cfg.token.clone(), cfg.api_base.as_deref())?;
        let prs = repo::github::fetch_open_prs(&octo, &cfg.owner, &cfg.repo).await?;

        let now_unix = OffsetDateTime::now_utc().unix_timestamp();
        let prs = usecase::remind::with_pending_reviewers(prs);
        let prs = usecase::remind::eligible(prs, &cfg.ignore_label, cfg.waiting_time_days, now_unix);
        let recipients = usecase::remind::expand_recipients(&prs);
        if recipients.is_empty() {
            println!("No pull requests are waiting for review; nothing to send.");
            return Ok(());
        }

        let identities = IdentityMap::parse(&cfg.provider_map_raw);
        let payload = notify::build_payload(cfg.provider, &cfg.channel, &recipients, &identities)?;
        if cfg.dry_run {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        let http = reqwest::Client::new();
        notify::send(&http, &cfg.webhook_url, &payload).await?;
        println!(
            "Reminded {} reviewer(s) across {} pull request(s).",
            recipients.len(),
            prs.len()
        );
        Ok(())
    })
}
