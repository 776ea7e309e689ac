//! Live status channel bookkeeping.
//!
//! Every open WebSocket connection owns one background task that pushes a
//! [`LiveStats`] snapshot on a fixed interval. The [`ConnectionRegistry`]
//! pairs each connection id with that task's handle so both are released
//! together when the client goes away.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use folio_protocol::{ChannelMessage, LiveStats};
use rand::RngExt;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Active channel connections and their periodic update tasks.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    inner: Arc<Mutex<HashMap<Uuid, JoinHandle<()>>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `ticker` as the update task of connection `id`.
    pub async fn register(&self, id: Uuid, ticker: JoinHandle<()>) {
        let mut inner = self.inner.lock().await;
        if let Some(previous) = inner.insert(id, ticker) {
            previous.abort();
        }
    }

    /// Forget connection `id` and stop its update task.
    /// Returns false if the id was not registered.
    pub async fn release(&self, id: Uuid) -> bool {
        match self.inner.lock().await.remove(&id) {
            Some(ticker) => {
                ticker.abort();
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

/// Random dashboard numbers: 50-149 visitors, 5-24 AI requests.
pub fn sample_stats() -> LiveStats {
    let mut rng = rand::rng();
    LiveStats {
        visitors: rng.random_range(50..150),
        ai_requests: rng.random_range(5..25),
        system_status: "operational".into(),
    }
}

/// Spawn the periodic update task for one connection. The first update is
/// sent one full `period` after the call. The task ends on its own once the
/// receiving side is dropped.
pub fn spawn_ticker(period: Duration, tx: mpsc::Sender<ChannelMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        loop {
            interval.tick().await;
            if tx.send(ChannelMessage::update(sample_stats())).await.is_err() {
                break;
            }
        }
    })
}
