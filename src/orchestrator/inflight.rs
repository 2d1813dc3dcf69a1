//! In-flight request de-duplication
//!
//! Concurrent identical requests queue on a per-key gate. The first holder
//! does the remote call and caches the result; followers then find it in
//! the cache instead of issuing their own call.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::Mutex as AsyncMutex;

use crate::cache::CacheKey;

pub type Gate = Arc<AsyncMutex<()>>;

#[derive(Debug, Default)]
pub struct InFlightRequests {
    // never locked across an await
    gates: Mutex<HashMap<CacheKey, Gate>>,
}

impl InFlightRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins the callers working on `key`.
    ///
    /// The returned guard keeps the gate registered; dropping it, including
    /// when the owning future is cancelled, unregisters the gate once no
    /// other caller holds it.
    pub fn enter(&self, key: &CacheKey) -> InFlightGuard<'_> {
        let gate = self
            .map()
            .entry(key.clone())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone();

        InFlightGuard {
            owner: self,
            key: key.clone(),
            gate,
        }
    }

    /// Keys with at least one caller in flight.
    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    fn map(&self) -> MutexGuard<'_, HashMap<CacheKey, Gate>> {
        // the map stays consistent even if a holder panicked
        self.gates.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Membership in one key's in-flight group.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    owner: &'a InFlightRequests,
    key: CacheKey,
    gate: Gate,
}

impl InFlightGuard<'_> {
    pub fn gate(&self) -> &Gate {
        &self.gate
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut gates = self.owner.map();
        // one reference in the map, one in this guard
        if Arc::strong_count(&self.gate) <= 2 {
            gates.remove(&self.key);
        }
    }
}
