// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fan-out registry for live stream subscribers.
//!
//! Every stream connection registers an unbounded channel under a fresh
//! numeric handle. Broadcasting walks the registry and evicts any
//! subscriber whose channel has closed, so a client that disconnected
//! mid-stream is dropped on the next delivery instead of accumulating.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::event::EventFrame;

#[derive(Debug, Default)]
struct HubInner {
    next_id: AtomicU64,
    senders: Mutex<HashMap<u64, mpsc::UnboundedSender<EventFrame>>>,
}

/// Shared registry of live stream subscribers. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct ConnectionHub {
    inner: Arc<HubInner>,
}

impl ConnectionHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber. The returned subscription already has
    /// a connected frame queued, so the first frame a client reads is
    /// always the handshake.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        // Queued before registration so no broadcast can precede it.
        let _ = tx.send(EventFrame::connected_now());
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock_senders().insert(id, tx);
        debug!("stream subscriber {id} registered");
        Subscription {
            id,
            rx,
            hub: self.clone(),
        }
    }

    /// Drop a subscriber by handle. Unknown handles are ignored.
    pub fn unsubscribe(&self, id: u64) {
        if self.lock_senders().remove(&id).is_some() {
            debug!("stream subscriber {id} removed");
        }
    }

    /// Deliver a frame to every live subscriber, returning how many
    /// received it. Subscribers whose channel has closed are evicted.
    pub fn broadcast(&self, frame: &EventFrame) -> usize {
        let mut senders = self.lock_senders();
        let mut dead = Vec::new();
        let mut delivered = 0;
        for (&id, tx) in senders.iter() {
            if tx.send(frame.clone()).is_ok() {
                delivered += 1;
            } else {
                dead.push(id);
            }
        }
        for id in dead {
            senders.remove(&id);
            debug!("stream subscriber {id} evicted after failed delivery");
        }
        trace!("frame delivered to {delivered} subscribers");
        delivered
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock_senders().len()
    }

    /// Spawn a task that broadcasts a heartbeat frame at the given
    /// interval for as long as the hub is alive.
    pub fn spawn_heartbeat(&self, period: Duration) -> JoinHandle<()> {
        let hub = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick fires immediately, skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                hub.broadcast(&EventFrame::heartbeat_now());
            }
        })
    }

    fn lock_senders(&self) -> std::sync::MutexGuard<'_, HashMap<u64, mpsc::UnboundedSender<EventFrame>>> {
        self.inner
            .senders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// A registered subscriber's receiving end. Deregisters itself from the
/// hub when dropped.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    rx: mpsc::UnboundedReceiver<EventFrame>,
    hub: ConnectionHub,
}

impl Subscription {
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Wait for the next frame. Returns `None` once the subscription
    /// has been removed from the hub and the queue is drained.
    pub async fn recv(&mut self) -> Option<EventFrame> {
        self.rx.recv().await
    }

    /// Take the next already-queued frame without waiting.
    pub fn try_recv(&mut self) -> Option<EventFrame> {
        self.rx.try_recv().ok()
    }
}

impl Stream for Subscription {
    type Item = EventFrame;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}
