//! Shutdown signal watcher
//!
//! The relay loops take a shutdown future instead of reading process-wide
//! state; this module provides the future the binary passes in. Completes
//! on SIGINT or SIGTERM on Unix, with [`tokio::signal::ctrl_c`] as a
//! fallback elsewhere.

#[cfg(unix)]
pub async fn wait_for_shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let sigint = signal(SignalKind::interrupt());
    let sigterm = signal(SignalKind::terminate());

    match (sigint, sigterm) {
        (Ok(mut sigint), Ok(mut sigterm)) => {
            tokio::select! {
                _ = sigint.recv() => {}
                _ = sigterm.recv() => {}
            }
        }
        // Handler registration failed; fall back to ctrl_c
        _ => {
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
