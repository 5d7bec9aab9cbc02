//! Signal-driven shutdown coordination.
//!
//! The first SIGINT/SIGTERM flips the shared watch flag so the UDP loop and
//! the HTTP server drain and exit cleanly. A second signal skips the drain
//! and exits immediately.

use tokio::sync::watch;

/// Install the signal handler task and return the shutdown flag receiver.
/// Must be called from within the tokio runtime.
pub fn install() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        wait_for_signal().await;
        tracing::info!("shutdown requested, draining");
        let _ = tx.send(true);

        wait_for_signal().await;
        tracing::warn!("second shutdown request, exiting immediately");
        std::process::exit(1);
    });
    rx
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = term.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
