// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Auto-reconnecting consumer of the newline-delimited event stream.
//!
//! The client owns a background task that connects, reads frames, and
//! reconnects after a fixed delay whenever the stream drops. Consumers
//! observe it purely through the two callbacks: a connection status
//! callback fired on every transition, and an update callback fired for
//! every substantive frame. Heartbeats are consumed silently.

use std::time::Duration;

use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::event::EventFrame;

/// Where the client is in its connect/read/retry cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
}

/// Settings for a [`LiveClient`].
#[derive(Debug, Clone)]
pub struct LiveClientConfig {
    /// Full URL of the stream endpoint.
    pub stream_url: String,
    /// How long to wait before reconnecting after a drop.
    pub retry_delay: Duration,
}

impl LiveClientConfig {
    #[must_use]
    pub const fn new(stream_url: String) -> Self {
        Self {
            stream_url,
            retry_delay: Duration::from_secs(3),
        }
    }
}

/// Handle to a running client task. Signals shutdown when dropped.
#[derive(Debug)]
pub struct LiveClientHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl LiveClientHandle {
    /// Ask the background task to stop after the current read.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }

    #[must_use]
    pub const fn task(&self) -> &JoinHandle<()> {
        &self.task
    }
}

impl Drop for LiveClientHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

enum StreamEnd {
    Shutdown,
    Retry,
}

/// The connect-and-reconnect loop around the stream endpoint.
pub struct LiveClient;

impl LiveClient {
    /// Spawn the background task. `on_status` receives `true` when a
    /// stream is established and `false` when it drops, `on_update`
    /// receives every connected and webhook frame.
    pub fn spawn<S, U>(config: LiveClientConfig, on_status: S, on_update: U) -> LiveClientHandle
    where
        S: FnMut(bool) + Send + 'static,
        U: FnMut(EventFrame) + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(run(config, shutdown_rx, on_status, on_update));
        LiveClientHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

async fn run<S, U>(
    config: LiveClientConfig,
    mut shutdown: watch::Receiver<bool>,
    mut on_status: S,
    mut on_update: U,
) where
    S: FnMut(bool) + Send + 'static,
    U: FnMut(EventFrame) + Send + 'static,
{
    let http = reqwest::Client::new();
    loop {
        if *shutdown.borrow() {
            return;
        }
        debug!(state = ?ConnectionState::Connecting, url = %config.stream_url, "opening stream");
        let end = run_stream(&http, &config, &mut shutdown, &mut on_status, &mut on_update).await;
        debug!(state = ?ConnectionState::Disconnected, "stream closed");
        on_status(false);
        if matches!(end, StreamEnd::Shutdown) {
            return;
        }
        tokio::select! {
            () = tokio::time::sleep(config.retry_delay) => {}
            _ = shutdown.changed() => return,
        }
    }
}

/// Read one stream connection to completion. Returns whether the loop
/// should reconnect or stop.
async fn run_stream<S, U>(
    http: &reqwest::Client,
    config: &LiveClientConfig,
    shutdown: &mut watch::Receiver<bool>,
    on_status: &mut S,
    on_update: &mut U,
) -> StreamEnd
where
    S: FnMut(bool) + Send + 'static,
    U: FnMut(EventFrame) + Send + 'static,
{
    let response = match http.get(&config.stream_url).send().await {
        Ok(response) if response.status().is_success() => response,
        Ok(response) => {
            warn!("stream endpoint answered {}", response.status());
            return StreamEnd::Retry;
        }
        Err(err) => {
            warn!("stream connection failed: {err}");
            return StreamEnd::Retry;
        }
    };
    debug!(state = ?ConnectionState::Connected, "stream established");
    on_status(true);

    // Lines are assembled from raw bytes: network chunk boundaries can
    // fall inside a multi-byte UTF-8 character, so decoding happens per
    // complete line, never per chunk.
    let mut body = response.bytes_stream();
    let mut buffer: Vec<u8> = Vec::new();
    loop {
        let chunk = tokio::select! {
            chunk = body.next() => chunk,
            _ = shutdown.changed() => return StreamEnd::Shutdown,
        };
        let Some(chunk) = chunk else {
            debug!("stream ended");
            return StreamEnd::Retry;
        };
        let Ok(chunk) = chunk else {
            warn!("stream read failed");
            return StreamEnd::Retry;
        };
        buffer.extend_from_slice(&chunk);
        while let Some(newline) = buffer.iter().position(|&byte| byte == b'\n') {
            let raw: Vec<u8> = buffer.drain(..=newline).collect();
            let Ok(line) = std::str::from_utf8(&raw[..newline]) else {
                warn!("discarding non-UTF-8 stream line");
                continue;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<EventFrame>(line) {
                Ok(EventFrame::Heartbeat { .. }) => {}
                Ok(frame) => on_update(frame),
                Err(err) => warn!("discarding unparseable frame: {err}"),
            }
        }
    }
}
