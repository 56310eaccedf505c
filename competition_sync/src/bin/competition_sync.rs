use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use competition_sync::config::SyncConfig;
use competition_sync::orchestrator::{Phase, SyncOrchestrator};
use competition_sync::store::{DocumentStore, FsStore, PurgeFilter};
use korastats_client::providers::korastats::KorastatsClient;

#[derive(Parser)]
#[command(version, about = "Korastats competition sync CLI")]
struct Cli {
    /// Document store root directory.
    #[arg(long, value_name = "DIR", default_value = "data", global = true)]
    store_dir: PathBuf,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run the sync pipeline.
    Run(RunCmd),
    /// Delete stored documents out-of-band.
    Purge(PurgeCmd),
}

#[derive(Args)]
struct RunCmd {
    /// TOML config file; CLI flags override its fields.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Restrict the run to these tournaments (repeatable).
    #[arg(long = "tournament", value_name = "ID")]
    tournament_ids: Vec<i64>,
    #[arg(long)]
    season: Option<String>,
    #[arg(long)]
    batch_size: Option<usize>,
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
    #[arg(long)]
    force_resync: bool,
    #[arg(long)]
    skip_existing: bool,
    /// Cap items per phase; useful for smoke runs.
    #[arg(long)]
    limit: Option<usize>,
    /// Run only these phases, in the given order (repeatable).
    #[arg(long = "phase", value_parser = parse_phase)]
    phases: Vec<Phase>,
}

#[derive(Args)]
struct PurgeCmd {
    #[arg(long)]
    collection: String,
    /// Restrict the purge to these ids (repeatable).
    #[arg(long = "id", value_name = "ID")]
    ids: Vec<i64>,
    /// Only purge documents last synced more than this many days ago.
    #[arg(long, value_name = "DAYS")]
    older_than_days: Option<i64>,
}

fn parse_phase(s: &str) -> Result<Phase, String> {
    match s {
        "tournaments" => Ok(Phase::Tournaments),
        "teams" => Ok(Phase::Teams),
        "matches" => Ok(Phase::Matches),
        "people" => Ok(Phase::People),
        "standings" => Ok(Phase::Standings),
        other => Err(format!("unknown phase: {other}")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let store = Arc::new(FsStore::new(&cli.store_dir));

    match cli.cmd {
        Cmd::Run(cmd) => run(store, cmd).await,
        Cmd::Purge(cmd) => purge(store.as_ref(), cmd).await,
    }
}

async fn run(store: Arc<dyn DocumentStore>, cmd: RunCmd) -> Result<()> {
    let mut config = match &cmd.config {
        Some(path) => SyncConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SyncConfig::default(),
    };
    if !cmd.tournament_ids.is_empty() {
        config.tournament_ids = Some(cmd.tournament_ids);
    }
    if let Some(season) = cmd.season {
        config.season = Some(season);
    }
    if let Some(n) = cmd.batch_size {
        config.batch_size = n;
    }
    if let Some(ms) = cmd.delay_ms {
        config.delay_between_batches_ms = ms;
    }
    if cmd.force_resync {
        config.force_resync = true;
    }
    if cmd.skip_existing {
        config.skip_existing = true;
    }
    if let Some(limit) = cmd.limit {
        config.limit = Some(limit);
    }

    let provider = Arc::new(KorastatsClient::new()?);
    let orchestrator = SyncOrchestrator::new(provider, store, config);

    let progress = orchestrator.progress();
    let poller = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(10));
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let snap = progress.snapshot();
            info!(
                phase = %snap.current_phase,
                completed = snap.completed,
                failed = snap.failed,
                total = snap.total,
                "progress"
            );
        }
    });

    let report = if cmd.phases.is_empty() {
        orchestrator.run().await?
    } else {
        orchestrator.run_phases(&cmd.phases).await?
    };
    poller.abort();

    println!("{}", serde_json::to_string_pretty(&report)?);
    if !report.aborted.is_empty() {
        bail!("{} phase(s) aborted", report.aborted.len());
    }
    Ok(())
}

async fn purge(store: &dyn DocumentStore, cmd: PurgeCmd) -> Result<()> {
    let filter = PurgeFilter {
        ids: (!cmd.ids.is_empty()).then_some(cmd.ids),
        last_synced_before: cmd
            .older_than_days
            .map(|days| Utc::now() - chrono::Duration::days(days)),
    };
    let removed = store.purge(&cmd.collection, &filter).await?;
    info!(collection = %cmd.collection, removed, "purge finished");
    Ok(())
}
