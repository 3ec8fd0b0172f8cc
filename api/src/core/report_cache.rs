//! In-memory cache of aggregated reports, keyed by report id.
//!
//! Switching the sort mode on an already loaded report re-ranks the cached
//! aggregation instead of downloading and decoding the report again. The
//! cache is bounded; the oldest report is evicted first.

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use raidbots_client::ReportId;
use tokio::sync::RwLock;
use tracing::debug;
use upgrade_engine::Aggregation;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<ReportId, Arc<Aggregation>>,
    order: VecDeque<ReportId>,
}

#[derive(Debug)]
pub struct ReportCache {
    capacity: usize,
    inner: RwLock<Inner>,
}

impl ReportCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(Inner::default()),
        }
    }

    pub async fn get(&self, id: &ReportId) -> Option<Arc<Aggregation>> {
        self.inner.read().await.entries.get(id).cloned()
    }

    pub async fn insert(&self, id: ReportId, aggregation: Arc<Aggregation>) {
        let mut inner = self.inner.write().await;

        if inner.entries.insert(id.clone(), aggregation).is_some() {
            inner.order.retain(|k| k != &id);
        }
        inner.order.push_back(id);

        while inner.order.len() > self.capacity {
            if let Some(old) = inner.order.pop_front() {
                debug!(report = %old, "evicting cached report");
                inner.entries.remove(&old);
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }
}
