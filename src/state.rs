use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::PortfolioRecord;
use crate::network::Network;

/// What the page renders from at any point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub record: PortfolioRecord,
    pub network: Network,
    pub loading: bool,
    /// Empty when the last load succeeded.
    pub notice: String,
}

/// Single owner of the display state shared by the loader and the renderer.
///
/// Each load takes a [`LoadTicket`]. Only the most recently issued ticket may
/// write back, so a slow response for a network the user already switched
/// away from is dropped instead of overwriting the newer result.
#[derive(Debug)]
pub struct PortfolioState {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    snapshot: PageSnapshot,
    issued: u64,
}

impl PortfolioState {
    pub fn init(network: Network) -> Self {
        Self {
            inner: Mutex::new(Inner {
                snapshot: PageSnapshot {
                    record: PortfolioRecord::default(),
                    network,
                    loading: false,
                    notice: String::new(),
                },
                issued: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.lock().snapshot.clone()
    }

    pub fn record(&self) -> PortfolioRecord {
        self.lock().snapshot.record.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().snapshot.loading
    }

    /// Marks a load for `network` as started and supersedes any load still in
    /// flight.
    pub fn begin(&self, network: Network) -> LoadTicket<'_> {
        let mut inner = self.lock();
        inner.issued += 1;
        inner.snapshot.network = network;
        inner.snapshot.loading = true;
        LoadTicket {
            state: self,
            seq: inner.issued,
        }
    }
}

/// Write-back handle for one load. Dropping it clears the loading flag if it
/// is still the latest ticket, whether or not [`LoadTicket::complete`] ran.
#[derive(Debug)]
pub struct LoadTicket<'a> {
    state: &'a PortfolioState,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Replace(PortfolioRecord),
    Keep { notice: String },
}

impl LoadTicket<'_> {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Applies `update` and returns `true`, or returns `false` without touching
    /// the state when a newer load has started since this ticket was issued.
    pub fn complete(self, update: Update) -> bool {
        let mut inner = self.state.lock();
        let current = inner.issued == self.seq;
        if current {
            match update {
                Update::Replace(record) => {
                    inner.snapshot.record = record;
                    inner.snapshot.notice.clear();
                }
                Update::Keep { notice } => inner.snapshot.notice = notice,
            }
        }
        // release before `self` drops and takes the lock again
        drop(inner);
        current
    }
}

impl Drop for LoadTicket<'_> {
    fn drop(&mut self) {
        let mut inner = self.state.lock();
        if inner.issued == self.seq {
            inner.snapshot.loading = false;
        }
    }
}
