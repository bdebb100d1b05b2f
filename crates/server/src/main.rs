// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State as AxumState,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use futures::StreamExt;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use boardpulse_live::{ConnectionHub, EventFrame, ProviderEvent};

/// Boardpulse Server - webhook ingestion and live update streaming
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seconds between heartbeat frames on the live stream
    #[arg(long, default_value_t = 20)]
    heartbeat_secs: u64,
}

/// Application state shared across handlers.
///
/// The hub is the single fan-out point: the webhook handler publishes
/// into it and every stream handler subscribes from it.
#[derive(Clone)]
struct AppState {
    /// Fan-out registry for live stream subscribers.
    hub: ConnectionHub,
}

/// Handler for POST `/webhooks` endpoint.
///
/// Answers the provider's challenge handshake and forwards every other
/// notification to the live stream. Malformed bodies are accepted and
/// forwarded as empty events rather than rejected, the provider
/// retries on any non-2xx response.
#[allow(clippy::unused_async)]
async fn handle_webhook(AxumState(state): AxumState<AppState>, body: Bytes) -> Response {
    let payload: Value = serde_json::from_slice(&body).unwrap_or_else(|err| {
        warn!(error = %err, "webhook body is not JSON, treating as empty");
        json!({})
    });

    if let Some(challenge) = payload.get("challenge") {
        info!("answering webhook challenge handshake");
        return Json(json!({ "challenge": challenge })).into_response();
    }

    let event: ProviderEvent =
        ProviderEvent::from_value(payload.get("event").cloned().unwrap_or_else(|| json!({})));
    debug!(
        kind = ?event.kind,
        board_id = ?event.board_id,
        "received webhook notification"
    );

    let frame: EventFrame = EventFrame::webhook(event);
    let delivered: usize = state.hub.broadcast(&frame);
    info!(delivered, "webhook notification forwarded to live stream");

    Json(json!({ "ok": true })).into_response()
}

/// Handler for GET `/stream` endpoint.
///
/// Registers a subscriber and streams its frames as newline-delimited
/// JSON for as long as the client stays connected. The subscription
/// deregisters itself when the response body is dropped.
#[allow(clippy::unused_async)]
async fn handle_stream(AxumState(state): AxumState<AppState>) -> Response {
    let subscription = state.hub.subscribe();
    info!(
        subscriber_id = subscription.id(),
        "live stream client connected"
    );

    let lines = subscription.map(|frame| {
        let mut line: String =
            serde_json::to_string(&frame).unwrap_or_else(|_| String::from("{}"));
        line.push('\n');
        Ok::<Bytes, Infallible>(Bytes::from(line))
    });

    (
        [
            (header::CONTENT_TYPE, "application/x-ndjson"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(lines),
    )
        .into_response()
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/webhooks", post(handle_webhook))
        .route("/stream", get(handle_stream))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Boardpulse Server");

    let hub: ConnectionHub = ConnectionHub::new();
    let heartbeat = hub.spawn_heartbeat(Duration::from_secs(args.heartbeat_secs));

    let app_state: AppState = AppState { hub };
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    heartbeat.abort();
    Ok(())
}
