//! UDP OSC listener.
//!
//! Responsibilities:
//! - Receive datagrams and decode them with rosc (messages and nested
//!   bundles).
//! - Coerce arguments to f64 at the mapper boundary; non-numeric arguments
//!   drop the message with a warning.
//! - Hand each datagram to its own task; a malformed datagram never
//!   terminates the listening loop.
//! - On shutdown, stop receiving and drain in-flight handler tasks before
//!   returning.

use rosc::{decoder, OscMessage, OscPacket, OscType};
use tokio::net::UdpSocket;
use tokio::sync::watch;
use tokio::task::JoinSet;

use tstick_core::error::{BridgeError, Result};

use crate::app_state::AppState;

/// Largest payload a UDP datagram can carry.
const MAX_DATAGRAM: usize = 65_507;

/// Receive loop. Returns once `shutdown` fires and all in-flight handler
/// tasks have finished.
pub async fn run_listener(state: AppState, socket: UdpSocket, mut shutdown: watch::Receiver<bool>) {
    let mut buf = vec![0u8; MAX_DATAGRAM];
    let mut tasks: JoinSet<()> = JoinSet::new();

    loop {
        tokio::select! {
            _ = shutdown.changed() => break,

            // Reap finished handlers so the set does not grow unbounded.
            Some(_) = tasks.join_next(), if !tasks.is_empty() => {}

            recv = socket.recv_from(&mut buf) => match recv {
                Ok((len, _peer)) => {
                    let datagram = buf[..len].to_vec();
                    let state = state.clone();
                    tasks.spawn(async move {
                        handle_datagram(&state, &datagram);
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "udp recv failed");
                }
            },
        }
    }

    tracing::info!(in_flight = tasks.len(), "osc listener draining");
    while tasks.join_next().await.is_some() {}
}

fn handle_datagram(state: &AppState, datagram: &[u8]) {
    match decoder::decode_udp(datagram) {
        Ok((_rest, packet)) => handle_packet(state, packet),
        Err(e) => {
            tracing::warn!(error = ?e, "dropping undecodable datagram");
        }
    }
}

fn handle_packet(state: &AppState, packet: OscPacket) {
    match packet {
        OscPacket::Message(msg) => handle_message(state, msg),
        OscPacket::Bundle(bundle) => {
            for inner in bundle.content {
                handle_packet(state, inner);
            }
        }
    }
}

fn handle_message(state: &AppState, msg: OscMessage) {
    match coerce_args(&msg.args) {
        Ok(args) => state.dispatcher().route(state.buffer(), &msg.addr, &args),
        Err(e) => {
            tracing::warn!(address = %msg.addr, error = %e, "dropping message");
        }
    }
}

/// Normalize OSC arguments to f64. The sensors report loosely typed values
/// (ints for capsense, floats elsewhere); anything non-numeric is rejected.
fn coerce_args(args: &[OscType]) -> Result<Vec<f64>> {
    args.iter()
        .map(|a| match a {
            OscType::Float(v) => Ok(f64::from(*v)),
            OscType::Double(v) => Ok(*v),
            OscType::Int(v) => Ok(f64::from(*v)),
            OscType::Long(v) => Ok(*v as f64),
            OscType::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
            other => Err(BridgeError::BadArgument(format!(
                "non-numeric OSC argument: {other:?}"
            ))),
        })
        .collect()
}
