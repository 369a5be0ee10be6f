//! Per-berth write serialization.
//!
//! Creating or moving a booking is a read-then-write: the overlap scan must see every
//! committed booking of the berth before the new one is inserted. Writers touching the
//! same berth take that berth's lock for the duration of their transaction; writers on
//! different berths never wait on each other.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of one async mutex per berth number.
///
/// Cloning is cheap; all clones share the same registry.
#[derive(Clone, Default)]
pub struct BerthLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl BerthLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to a berth.
    ///
    /// The berth stays locked until the returned guard is dropped.
    pub async fn acquire(&self, berth_number: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(berth_number).or_default().clone()
        };

        lock.lock_owned().await
    }
}
