//! PairsSpread - Main Entry Point
//!
//! Reads JSON-lines quote and order-update events from stdin (or a file),
//! drives the spread engine and writes every emitted intent pair to stdout
//! as one JSON line. Logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pairs_spread::common::channels::{create_event_channel_with_size, create_intent_channel_with_size};
use pairs_spread::config::load_config;
use pairs_spread::host::IntentRecord;
use pairs_spread::{
    run_engine, ChannelTransport, EngineConfig, EngineError, EventFeed, HostEvent, LineFeed,
    PairStrategy, SpreadEngine, TracingSink,
};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,

    /// Read events from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Event and intent channel buffer size; overrides the config file
    #[arg(long, env = "PAIRS_SPREAD_CHANNEL_SIZE")]
    channel_size: Option<usize>,
}

fn init_logging(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

async fn run_feed<R>(reader: R, config: EngineConfig, sender: mpsc::Sender<HostEvent>)
where
    R: AsyncBufRead + Unpin + Send,
{
    let mut feed = LineFeed::new(reader, config);
    match feed.run(sender).await {
        Ok(forwarded) => info!(feed = feed.feed_name(), forwarded, "feed finished"),
        Err(e) => warn!(feed = feed.feed_name(), error = %e, "feed stopped"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut app_config = load_config(Some(&args.config)).context("loading configuration")?;
    if let Some(size) = args.channel_size {
        app_config.settings.channel_size = size;
        app_config.settings.validate().context("--channel-size")?;
    }

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| app_config.settings.log_level.clone());
    init_logging(&level, args.json || app_config.settings.json_logs)?;

    info!("Starting PairsSpread engine");
    info!(
        config = %args.config,
        leg_a = %app_config.engine.leg_a.symbol,
        leg_b = %app_config.engine.leg_b.symbol,
        tick = %app_config.engine.tick_size,
        entry_ticks = app_config.engine.entry_threshold_ticks,
        exit_ticks = app_config.engine.exit_threshold_ticks,
        "engine configuration"
    );

    let channel_size = app_config.settings.channel_size;
    let (event_tx, event_rx) = create_event_channel_with_size(channel_size);
    let (intent_tx, mut intent_rx) = create_intent_channel_with_size(channel_size);

    let engine_config = app_config.engine.clone();
    let mut engine = SpreadEngine::new(engine_config.clone(), ChannelTransport::new(intent_tx), TracingSink)?;

    // Intent writer
    let writer_config = engine_config.clone();
    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(pair) = intent_rx.recv().await {
            let line = IntentRecord::from_pair(&pair, &writer_config).to_json_line()?;
            stdout.write_all(line.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
        Ok::<_, EngineError>(())
    });

    // Event feed
    let feed = match args.input.clone() {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("opening {}", path.display()))?;
            tokio::spawn(run_feed(BufReader::new(file), engine_config, event_tx))
        }
        None => tokio::spawn(run_feed(BufReader::new(tokio::io::stdin()), engine_config, event_tx)),
    };

    tokio::select! {
        summary = run_engine(&mut engine, event_rx) => {
            info!(?summary, "engine finished");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal, cleaning up...");
        }
    }

    engine.on_shutdown();
    feed.abort();
    // Dropping the engine closes the intent channel and lets the writer drain.
    drop(engine);

    match writer.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "intent writer failed"),
        Err(e) => warn!(error = %e, "intent writer task panicked"),
    }

    Ok(())
}
