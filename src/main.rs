//! bcast — broadcast newline-delimited records to local subscribers
//!
//! Usage:
//!   bcast publish PATH      read stdin, fan records out to subscribers
//!   bcast subscribe PATH    print records received from the publisher
//!
//! Examples:
//!   bcast publish /tmp/feed.sock < events.log
//!   bcast subscribe /tmp/feed.sock
//!
//! The publisher exits 0 on SIGINT/SIGTERM or when stdin closes, removing
//! PATH on the way out. Logging goes to stderr and is controlled with
//! RUST_LOG (quiet by default).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bcast::{signal, Publisher, Subscriber};

fn usage() -> ExitCode {
    eprintln!("usage: bcast publish|subscribe PATH");
    eprintln!("Broadcasts newline-delimited records to every connected subscriber");
    ExitCode::FAILURE
}

async fn run_publish(path: &Path) -> bcast::Result<()> {
    let publisher = Publisher::bind(path)?;
    publisher
        .run_until(tokio::io::stdin(), signal::wait_for_shutdown_signal())
        .await
}

async fn run_subscribe(path: &Path) -> bcast::Result<()> {
    let subscriber = Subscriber::connect(path).await?;
    subscriber
        .run_until(tokio::io::stdout(), signal::wait_for_shutdown_signal())
        .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (mode, path) = match (args.next(), args.next(), args.next()) {
        (Some(mode), Some(path), None) => (mode, PathBuf::from(path)),
        _ => return usage(),
    };

    let result = match mode.as_str() {
        "publish" => run_publish(&path).await,
        "subscribe" => run_subscribe(&path).await,
        _ => return usage(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bcast: {e}");
            ExitCode::FAILURE
        }
    }
}
