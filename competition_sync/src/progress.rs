//! Live, pollable sync progress.
//!
//! Each unit of work produces an immutable [`ItemOutcome`]; the orchestrator
//! folds outcomes into a [`ProgressTracker`] that publishes whole
//! [`ProgressSnapshot`]s through an `ArcSwap`. Pollers read a consistent
//! snapshot at any time without taking a lock; nothing outside the tracker
//! mutates progress state.

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Cap on retained error strings so a pathological run cannot grow the
/// snapshot without bound; `failed` keeps the true count.
const MAX_ERRORS: usize = 100;

/// The result of one item's Collect -> Map -> Reconcile -> Persist chain.
#[derive(Debug)]
pub struct ItemOutcome {
    pub kind: &'static str,
    pub id: i64,
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn success(kind: &'static str, id: i64) -> Self {
        Self {
            kind,
            id,
            error: None,
        }
    }

    pub fn failure(kind: &'static str, id: i64, message: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    pub current_phase: String,
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
    pub errors: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl ProgressSnapshot {
    fn idle() -> Self {
        Self {
            current_phase: "idle".to_string(),
            total: 0,
            completed: 0,
            failed: 0,
            errors: Vec::new(),
            started_at: Utc::now(),
            ended_at: None,
        }
    }
}

/// Aggregates item outcomes and publishes snapshots.
pub struct ProgressTracker {
    snapshot: Arc<ArcSwap<ProgressSnapshot>>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(ArcSwap::from_pointee(ProgressSnapshot::idle())),
        }
    }

    /// A cloneable read-side handle for mid-run polling.
    pub fn handle(&self) -> ProgressHandle {
        ProgressHandle {
            snapshot: Arc::clone(&self.snapshot),
        }
    }

    pub fn begin_phase(&self, phase: &str, total: usize) {
        self.snapshot.store(Arc::new(ProgressSnapshot {
            current_phase: phase.to_string(),
            total,
            completed: 0,
            failed: 0,
            errors: Vec::new(),
            started_at: Utc::now(),
            ended_at: None,
        }));
    }

    /// Records one settled item. Called by the single aggregating task as
    /// each future in the batch completes.
    pub fn record(&self, outcome: &ItemOutcome) {
        let mut next = ProgressSnapshot::clone(&self.snapshot.load());
        match &outcome.error {
            None => next.completed += 1,
            Some(message) => {
                next.failed += 1;
                if next.errors.len() < MAX_ERRORS {
                    next.errors
                        .push(format!("{} {}: {}", outcome.kind, outcome.id, message));
                }
            }
        }
        self.snapshot.store(Arc::new(next));
    }

    pub fn finish_phase(&self) {
        let mut next = ProgressSnapshot::clone(&self.snapshot.load());
        next.ended_at = Some(Utc::now());
        self.snapshot.store(Arc::new(next));
    }

    pub fn snapshot(&self) -> Arc<ProgressSnapshot> {
        self.snapshot.load_full()
    }
}

/// Read-only progress view, safe to clone into pollers and log loops.
#[derive(Clone)]
pub struct ProgressHandle {
    snapshot: Arc<ArcSwap<ProgressSnapshot>>,
}

impl ProgressHandle {
    pub fn snapshot(&self) -> Arc<ProgressSnapshot> {
        self.snapshot.load_full()
    }
}
