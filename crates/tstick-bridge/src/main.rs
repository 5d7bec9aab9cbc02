//! T-Stick bridge binary.
//!
//! - UDP OSC listener on `BIND_ADDRESS:OSC_PORT`
//! - Prometheus scrape endpoint on `BIND_ADDRESS:EXPORTER_PORT`
//! - JSON logs, level from `EXPORTER_LOG_LEVEL` (`RUST_LOG` overrides)
//! - Graceful shutdown on SIGINT/SIGTERM, immediate exit on a second signal

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use tstick_bridge::{app_state, config, router, shutdown, transport};

#[tokio::main]
async fn main() {
    // Bind and config failures are fatal: better to exit non-zero than run
    // half-initialized.
    let (cfg, config_warnings) = config::from_env().expect("config load failed");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    fmt().json().with_env_filter(filter).init();

    // Deferred from config resolution, which runs before the subscriber.
    for warning in &config_warnings {
        tracing::error!("{warning}");
    }

    let state = app_state::AppState::new(cfg.clone()).expect("state build failed");

    let osc_addr = SocketAddr::new(cfg.bind_address, cfg.osc_port);
    let http_addr = SocketAddr::new(cfg.bind_address, cfg.exporter_port);

    let socket = tokio::net::UdpSocket::bind(osc_addr)
        .await
        .expect("failed to bind OSC UDP socket");
    let listener = tokio::net::TcpListener::bind(http_addr)
        .await
        .expect("failed to bind metrics listener");

    let shutdown_rx = shutdown::install();

    let app = router::build_router(state.clone());
    let mut http_shutdown = shutdown_rx.clone();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = http_shutdown.changed().await;
            })
            .await
    });

    tracing::info!(%osc_addr, %http_addr, "tstick-bridge starting");

    transport::osc::run_listener(state, socket, shutdown_rx).await;

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!(error = %e, "metrics server failed"),
        Err(e) => tracing::error!(error = %e, "metrics server task panicked"),
    }
    tracing::info!("tstick-bridge stopped");
}
