use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;

use dlview_core::config::PresentationConfig;
use dlview_core::status::feed::StatusFeed;
use dlview_core::types::{TransferMetrics, TransferState, TransferTick};
use dlview_core::{dialog, headers};

mod terminal_observer;
use terminal_observer::TerminalStatusObserver;

#[derive(Parser)]
#[command(name = "dlview", about = "Download status line preview")]
struct Args {
    /// Locale tag (en or ru; anything else falls back to en)
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Optional JSON presentation config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total bytes the simulated transfer receives
    #[arg(short, long, default_value = "10485760")]
    bytes: u64,

    /// Simulated transfer rate in bytes per second
    #[arg(short, long, default_value = "524288")]
    rate: u64,

    /// Number of progress ticks to emit
    #[arg(short, long, default_value = "20")]
    ticks: u64,

    /// Simulate a transfer failure after the last tick
    #[arg(long)]
    fail: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match PresentationConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load config: {}", e);
                return;
            }
        },
        None => PresentationConfig::default(),
    };
    config.locale = args.locale.clone();

    let table = config.table();
    println!("{}", table.window_header);
    log::debug!(
        "transfer engine would send {:?}",
        headers::accept_language_line(table).trim_end()
    );

    let (tick_tx, tick_rx) = mpsc::channel(64);

    let mut feed = StatusFeed::new(&config);
    feed.add_observer(Box::new(TerminalStatusObserver::new()));
    let feed_handle = tokio::spawn(async move { feed.run(tick_rx).await });

    // Drive the feed with a synthetic transfer. A real shell would wire
    // the engine's progress channel here instead.
    let mut interval = tokio::time::interval(Duration::from_millis(100));
    let ticks = args.ticks.max(1);

    let ready = TransferTick::new(TransferState::Ready, TransferMetrics::default());
    let _ = tick_tx.send(Ok(ready)).await;

    for i in 1..=ticks {
        interval.tick().await;
        let metrics = TransferMetrics::new(args.bytes * i / ticks, args.rate);
        let tick = TransferTick::new(TransferState::Downloading, metrics);
        if tick_tx.send(Ok(tick)).await.is_err() {
            break;
        }
    }

    if args.fail {
        let _ = tick_tx.send(Err("simulated transfer failure".to_string())).await;
    }

    // Dropping the sender closes the feed channel; on a clean close the
    // feed emits the completion frame.
    drop(tick_tx);
    let _ = feed_handle.await;

    if !args.fail {
        let destination = config.save_dir.join("download.bin");
        println!("{}", dialog::saved_message(table, &destination));
    }
}
