use anyhow::Result;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::prelude::*;

use tubeferry::cli::{Cli, Commands};
use tubeferry::core::{config, init_logger};
use tubeferry::download::{MediaSource, Pipeline, UploadResult, YtdlpSource};
use tubeferry::hosting::HostClient;
use tubeferry::links::{self, LinkKind};
use tubeferry::resolution::ResolutionLabel;
use tubeferry::session::SessionStore;
use tubeferry::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before any config is read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::Info { url }) => run_cli_info(&url).await,
        Some(Commands::Relay { url, quality, output }) => {
            run_cli_relay(&url, quality.as_deref(), output.as_deref()).await
        }
    }
}

/// Run the Telegram bot in long polling mode
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    let token = config::BOT_TOKEN.clone();
    let bot = create_bot(&token)?;
    setup_bot_commands(&bot).await?;

    let deps = build_deps(None)?;
    let handler = schema(deps);

    log::info!("Starting bot in long polling mode");
    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shut down");
    Ok(())
}

/// Print a video's title and available resolutions
async fn run_cli_info(url: &str) -> Result<()> {
    let request = links::classify(url)?;
    if request.kind == LinkKind::Playlist {
        anyhow::bail!("Info takes a single video URL, not a playlist");
    }

    let source = YtdlpSource::new();
    let streams = source.probe(&request.url).await?;

    println!("Title: {}", streams.title);
    println!("Available resolutions:");
    for label in streams.labels() {
        println!("  {}", label);
    }
    Ok(())
}

/// Download one video, upload it, print the hosting link
async fn run_cli_relay(url: &str, quality: Option<&str>, output: Option<&str>) -> Result<()> {
    let request = links::classify(url)?;
    if request.kind == LinkKind::Playlist {
        anyhow::bail!("Relay takes a single video URL, not a playlist");
    }

    let work_dir = output.map(PathBuf::from);
    let deps = build_deps(work_dir)?;
    let label = quality.map(ResolutionLabel::new);

    match deps.pipeline.process_video(&request.url, label.as_ref()).await? {
        UploadResult::Uploaded { title, link } => {
            println!("{}: {}", title, link);
            Ok(())
        }
        UploadResult::Failed { title } => Err(anyhow::anyhow!("Upload failed for '{}'", title)),
    }
}

/// Wires the session store, media source, and pipeline together.
fn build_deps(work_dir: Option<PathBuf>) -> Result<HandlerDeps> {
    let source: Arc<dyn MediaSource> = Arc::new(YtdlpSource::new());
    let host = HostClient::from_config()?;
    let work_dir = work_dir.unwrap_or_else(|| PathBuf::from(config::DOWNLOAD_DIR.as_str()));
    let pipeline = Arc::new(Pipeline::new(Arc::clone(&source), host, work_dir));

    Ok(HandlerDeps::new(Arc::new(SessionStore::new()), source, pipeline))
}
