use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use super::data::Snapshot;
use crate::error::FetchError;

/// Why a fetch was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// First load when the screen appears
    Mount,
    /// User asked for fresh data (button, F5, Ctrl+R)
    Refresh,
}

/// Identifies one fetch. Only the completion holding the in-flight ticket
/// is allowed to touch the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// The Catalog owns the latest snapshot and the status of the fetch
/// that produces it.
#[derive(Debug, Default)]
pub struct Catalog {
    snapshot: Snapshot,
    loading: bool,
    refreshing: bool,
    error: Option<FetchError>,
    in_flight: Option<LoadTicket>,
    /// Ticket of the fetch that produced the snapshot on screen
    shown: Option<LoadTicket>,
    issued: u64,
    loaded_at: Option<DateTime<Local>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started and hand out its ticket.
    ///
    /// Returns `None` when a fetch is already outstanding; the caller
    /// should not issue another request.
    pub fn begin(&mut self, trigger: Trigger) -> Option<LoadTicket> {
        if let Some(ticket) = self.in_flight {
            debug!("Fetch {:?} still running, ignoring {:?}", ticket, trigger);
            return None;
        }

        self.issued += 1;
        let ticket = LoadTicket(self.issued);

        self.in_flight = Some(ticket);
        self.loading = true;
        self.refreshing = trigger == Trigger::Refresh;
        self.error = None;

        info!("🔄 Fetching products ({:?}, {:?})", trigger, ticket);
        Some(ticket)
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns true when the result was applied, false when it belonged to
    /// a fetch that is no longer current.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<Snapshot, FetchError>) -> bool {
        if self.in_flight != Some(ticket) {
            debug!("Dropping stale fetch result {:?}", ticket);
            return false;
        }

        self.in_flight = None;
        self.loading = false;
        self.refreshing = false;

        match result {
            Ok(snapshot) => {
                info!("✅ Loaded {} products", snapshot.len());
                self.snapshot = snapshot;
                self.shown = Some(ticket);
                self.loaded_at = Some(Local::now());
            }
            Err(err) => {
                // Snapshot is kept as-is
                warn!("⚠️  Fetch failed: {}", err);
                self.error = Some(err);
            }
        }

        true
    }

    /// Whether the snapshot on screen came from the fetch holding `ticket`.
    ///
    /// A failed or still running refresh does not change the answer.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.shown == Some(ticket)
    }

    /// Ticket of the outstanding fetch, if any
    pub fn in_flight(&self) -> Option<LoadTicket> {
        self.in_flight
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    /// True once any fetch has been started
    pub fn has_started(&self) -> bool {
        self.issued > 0
    }
}
