//! Polling view of the visitors on the premises.
//!
//! Writers may live in another process, so the store is simply re-read on a
//! fixed interval and the caller is told when the active set changed.

use crate::models::Visitor;
use crate::store::{Clock, KeyValueStore, RecordStore};
use std::thread;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct ActiveVisitorPoller {
    last: Option<Vec<Visitor>>,
}

impl ActiveVisitorPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the store. Returns the active visitors if they differ from the
    /// previous poll (always on the first one), `None` otherwise.
    pub fn poll<S: KeyValueStore, C: Clock>(
        &mut self,
        store: &RecordStore<S, C>,
    ) -> Option<Vec<Visitor>> {
        let current = store.active_visitors();
        if self.last.as_ref() == Some(&current) {
            return None;
        }
        self.last = Some(current.clone());
        Some(current)
    }
}

pub struct WatchLogic;

impl WatchLogic {
    /// Poll every `interval`, handing changed snapshots to `render`.
    /// Runs forever unless `iterations` is given. Returns the number of renders.
    pub fn run<S, C, F>(
        store: &RecordStore<S, C>,
        interval: Duration,
        iterations: Option<u64>,
        mut render: F,
    ) -> usize
    where
        S: KeyValueStore,
        C: Clock,
        F: FnMut(&[Visitor]),
    {
        let mut poller = ActiveVisitorPoller::new();
        let mut renders = 0;
        let mut tick: u64 = 0;

        loop {
            if let Some(active) = poller.poll(store) {
                render(&active);
                renders += 1;
            }

            tick += 1;
            if iterations.is_some_and(|max| tick >= max) {
                return renders;
            }
            thread::sleep(interval);
        }
    }
}
