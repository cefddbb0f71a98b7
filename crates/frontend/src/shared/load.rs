//! Explicit state machine for asynchronous work shown in the UI.
//!
//! A view owns a `RwSignal<LoadTracker<T>>`, starts work with [`spawn_load`]
//! and renders from [`LoadTracker::state`]. Every start hands out a new
//! [`Ticket`]; a result that comes back for an older ticket is dropped, so a
//! slow answer for a previous video never overwrites the current one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Placeholder text shown while work is pending.
pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Load<T> {
    Idle,
    Pending,
    Resolved(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Load::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTracker<T> {
    generation: u64,
    state: Load<T>,
}

impl<T> Default for LoadTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LoadTracker<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: Load::Idle,
        }
    }

    pub fn state(&self) -> &Load<T> {
        &self.state
    }

    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = Load::Pending;
        Ticket(self.generation)
    }

    /// Apply a result. Returns `false` when the ticket was superseded.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(value) => Load::Resolved(value),
            Err(e) => Load::Failed(e),
        };
        true
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = Load::Idle;
    }
}

/// Move the tracker to `Pending`. `None` once the owning view is gone.
pub fn begin_load<T>(tracker: RwSignal<LoadTracker<T>>) -> Option<Ticket>
where
    T: Send + Sync + 'static,
{
    tracker.try_update(LoadTracker::begin)
}

/// Await `work` and settle `ticket` with its result.
pub async fn finish_load<T, F>(tracker: RwSignal<LoadTracker<T>>, ticket: Ticket, work: F) -> bool
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, String>>,
{
    let result = work.await;
    if let Err(e) = &result {
        log::warn!("Load failed: {}", e);
    }
    tracker
        .try_update(|t| t.settle(ticket, result))
        .unwrap_or(false)
}

pub fn spawn_load<T, F>(tracker: RwSignal<LoadTracker<T>>, work: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, String>> + 'static,
{
    let Some(ticket) = begin_load(tracker) else {
        return;
    };
    spawn_local(async move {
        if !finish_load(tracker, ticket, work).await {
            log::debug!("Discarded stale result for {:?}", ticket);
        }
    });
}
