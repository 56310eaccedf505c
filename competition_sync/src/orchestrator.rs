//! Batch orchestrator.
//!
//! Drives the sync phases in order (tournaments, teams, matches, people,
//! standings). Each phase enumerates its work items, splits them into
//! contiguous batches, and runs every item's Collect -> Map -> Reconcile ->
//! Persist chain concurrently within the batch. The orchestrator waits for
//! a batch to fully settle before sleeping the configured delay and starting
//! the next one. Item failures are recorded and never stop a batch; only a
//! failed enumeration aborts a phase, and an aborted phase never stops the
//! following ones.

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use korastats_client::models::tournament::TournamentSummary;
use korastats_client::providers::StatsProvider;
use serde::Serialize;
use tracing::{info, warn};

use crate::collect::fixture::FixtureCollector;
use crate::collect::person::PersonCollector;
use crate::collect::standings::StandingsCollector;
use crate::collect::team::TeamCollector;
use crate::collect::tournament::TournamentCollector;
use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::map::fixture::map_fixture;
use crate::map::person::map_person;
use crate::map::standings::map_standings;
use crate::map::team::{combine_team, map_team};
use crate::map::tournament::map_tournament;
use crate::merge::Reconcile;
use crate::models::person::PersonKind;
use crate::models::{CanonicalDoc, fixture, standings, tournament};
use crate::progress::{ItemOutcome, ProgressHandle, ProgressTracker};
use crate::store::{self, DocumentStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Tournaments,
    Teams,
    Matches,
    People,
    Standings,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Tournaments,
        Phase::Teams,
        Phase::Matches,
        Phase::People,
        Phase::Standings,
    ];

    pub fn describe(self) -> &'static str {
        match self {
            Phase::Tournaments => "tournaments",
            Phase::Teams => "teams",
            Phase::Matches => "matches",
            Phase::People => "people",
            Phase::Standings => "standings",
        }
    }
}

/// The settled outcome of one phase. Reached even with failures; a phase
/// only aborts when it cannot enumerate its work items.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseResult {
    pub phase: &'static str,
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AbortedPhase {
    pub phase: &'static str,
    pub error: String,
}

#[derive(Debug, Default, Serialize)]
pub struct SyncReport {
    pub phases: Vec<PhaseResult>,
    pub aborted: Vec<AbortedPhase>,
}

/// One team with every (tournament, season) scope it was listed under.
/// Grouping keeps document ids disjoint within the phase: the scopes are
/// collected into a single write instead of racing each other in a batch.
#[derive(Clone)]
struct TeamWork {
    team_id: i64,
    scopes: Vec<(i64, String)>,
}

#[derive(Clone)]
struct PersonWork {
    kind: PersonKind,
    id: i64,
}

#[derive(Clone)]
struct StandingsWork {
    tournament_id: i64,
    season: String,
}

pub struct SyncOrchestrator {
    provider: Arc<dyn StatsProvider>,
    store: Arc<dyn DocumentStore>,
    config: SyncConfig,
    tracker: ProgressTracker,
}

impl SyncOrchestrator {
    pub fn new(
        provider: Arc<dyn StatsProvider>,
        store: Arc<dyn DocumentStore>,
        config: SyncConfig,
    ) -> Self {
        Self {
            provider,
            store,
            config,
            tracker: ProgressTracker::new(),
        }
    }

    /// Read-side handle for polling progress while a run is in flight.
    pub fn progress(&self) -> ProgressHandle {
        self.tracker.handle()
    }

    /// Runs every phase in order.
    pub async fn run(&self) -> Result<SyncReport, SyncError> {
        self.run_phases(&Phase::ALL).await
    }

    /// Runs the given phases in order. The tournament master listing is the
    /// shared precondition: if it cannot be fetched nothing can run and the
    /// error propagates. Per-phase enumeration failures abort only that
    /// phase and are reported in `SyncReport::aborted`.
    pub async fn run_phases(&self, phases: &[Phase]) -> Result<SyncReport, SyncError> {
        let listing = self
            .provider
            .tournament_list(self.config.season.as_deref())
            .await
            .map_err(|source| SyncError::PhaseFatal {
                phase: "tournaments",
                source,
            })?;

        let scoped: Vec<TournamentSummary> = match &self.config.tournament_ids {
            Some(ids) => listing.into_iter().filter(|t| ids.contains(&t.id)).collect(),
            None => listing,
        };
        info!(tournaments = scoped.len(), "tournament listing resolved");

        let mut report = SyncReport::default();
        for phase in phases {
            match self.run_one(*phase, &scoped).await {
                Ok(result) => report.phases.push(result),
                Err(e) => {
                    warn!(phase = phase.describe(), error = %e, "phase aborted");
                    report.aborted.push(AbortedPhase {
                        phase: phase.describe(),
                        error: e.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    async fn run_one(
        &self,
        phase: Phase,
        scoped: &[TournamentSummary],
    ) -> Result<PhaseResult, SyncError> {
        match phase {
            Phase::Tournaments => self.sync_tournaments(scoped).await,
            Phase::Teams => self.sync_teams(scoped).await,
            Phase::Matches => self.sync_matches(scoped).await,
            Phase::People => self.sync_people(scoped).await,
            Phase::Standings => self.sync_standings(scoped).await,
        }
    }

    async fn sync_tournaments(
        &self,
        scoped: &[TournamentSummary],
    ) -> Result<PhaseResult, SyncError> {
        // Stat types only feed the top scorer/assister references; the
        // phase proceeds without them.
        let stat_types = match self.provider.stat_types().await {
            Ok(types) => types,
            Err(e) => {
                warn!(error = %e, "stat types unavailable; top performers skipped");
                Vec::new()
            }
        };

        let collector = TournamentCollector::new(self.provider.clone(), scoped, &stat_types);
        let items: Vec<(i64, i64)> = scoped.iter().map(|t| (t.id, t.id)).collect();
        let items = self.scope_items(tournament::COLLECTION, items).await?;

        Ok(self
            .run_phase(Phase::Tournaments, "tournament", items, |id| {
                let collector = collector.clone();
                async move {
                    let bundle = collector.collect(id).await?;
                    let doc = map_tournament(&bundle, Utc::now());
                    self.persist(doc).await
                }
            })
            .await)
    }

    async fn sync_teams(&self, scoped: &[TournamentSummary]) -> Result<PhaseResult, SyncError> {
        let mut scopes: BTreeMap<i64, Vec<(i64, String)>> = BTreeMap::new();
        let mut seen = BTreeSet::new();
        for t in scoped {
            let teams = self
                .provider
                .tournament_team_list(t.id, Some(&t.season))
                .await
                .map_err(|source| SyncError::PhaseFatal {
                    phase: "teams",
                    source,
                })?;
            for entry in teams {
                if seen.insert((t.id, entry.id)) {
                    scopes
                        .entry(entry.id)
                        .or_default()
                        .push((t.id, t.season.clone()));
                }
            }
        }
        let items: Vec<(i64, TeamWork)> = scopes
            .into_iter()
            .map(|(team_id, scopes)| (team_id, TeamWork { team_id, scopes }))
            .collect();
        let items = self
            .scope_items(crate::models::team::COLLECTION, items)
            .await?;

        Ok(self
            .run_phase(Phase::Teams, "team", items, |work: TeamWork| {
                let provider = self.provider.clone();
                async move {
                    // Every scope must collect; one incomplete scope fails
                    // the whole team, same as any other sub-fetch.
                    let mut merged = None;
                    for (tournament_id, season) in work.scopes {
                        let collector =
                            TeamCollector::new(provider.clone(), tournament_id, season);
                        let bundle = collector.collect(work.team_id).await?;
                        let doc = map_team(&bundle, Utc::now());
                        merged = Some(match merged {
                            None => doc,
                            Some(acc) => combine_team(acc, doc),
                        });
                    }
                    match merged {
                        Some(doc) => self.persist(doc).await,
                        None => Ok(()),
                    }
                }
            })
            .await)
    }

    async fn sync_matches(&self, scoped: &[TournamentSummary]) -> Result<PhaseResult, SyncError> {
        let mut items: Vec<(i64, i64)> = Vec::new();
        for t in scoped {
            let matches = self
                .provider
                .tournament_match_list(t.id, Some(&t.season))
                .await
                .map_err(|source| SyncError::PhaseFatal {
                    phase: "matches",
                    source,
                })?;
            items.extend(matches.into_iter().map(|m| (m.id, m.id)));
        }
        let items = self.scope_items(fixture::COLLECTION, items).await?;

        let collector = FixtureCollector::new(self.provider.clone());
        Ok(self
            .run_phase(Phase::Matches, "match", items, |id| {
                let collector = collector.clone();
                async move {
                    let bundle = collector.collect(id).await?;
                    let doc = map_fixture(&bundle, Utc::now())?;
                    self.persist(doc).await
                }
            })
            .await)
    }

    async fn sync_people(&self, scoped: &[TournamentSummary]) -> Result<PhaseResult, SyncError> {
        const KINDS: [PersonKind; 3] =
            [PersonKind::Player, PersonKind::Coach, PersonKind::Referee];
        fn kind_index(kind: PersonKind) -> usize {
            match kind {
                PersonKind::Player => 0,
                PersonKind::Coach => 1,
                PersonKind::Referee => 2,
            }
        }

        let mut items: Vec<(i64, PersonWork)> = Vec::new();
        let mut seen: [BTreeSet<i64>; 3] = Default::default();
        for t in scoped {
            let season = Some(t.season.as_str());
            let (players, coaches, referees) = tokio::join!(
                self.provider.tournament_player_list(t.id, season),
                self.provider.tournament_coach_list(t.id, season),
                self.provider.tournament_referee_list(t.id, season),
            );
            for (kind, listing) in [
                (PersonKind::Player, players),
                (PersonKind::Coach, coaches),
                (PersonKind::Referee, referees),
            ] {
                let listing = listing.map_err(|source| SyncError::PhaseFatal {
                    phase: "people",
                    source,
                })?;
                for entry in listing {
                    if seen[kind_index(kind)].insert(entry.id) {
                        items.push((entry.id, PersonWork { kind, id: entry.id }));
                    }
                }
            }
        }

        if self.config.should_skip_existing() {
            let mut existing: [BTreeSet<i64>; 3] = Default::default();
            for kind in KINDS {
                existing[kind_index(kind)] = self
                    .store
                    .list_ids(kind.collection())
                    .await
                    .map_err(SyncError::Persistence)?
                    .into_iter()
                    .collect();
            }
            items.retain(|(_, w)| !existing[kind_index(w.kind)].contains(&w.id));
        }
        if let Some(limit) = self.config.limit {
            items.truncate(limit);
        }

        let collector = PersonCollector::new(self.provider.clone());
        Ok(self
            .run_phase(Phase::People, "person", items, |work: PersonWork| {
                let collector = collector.clone();
                async move {
                    let bundle = collector.collect(work.kind, work.id).await?;
                    let doc = map_person(&bundle, Utc::now());
                    self.persist(doc).await
                }
            })
            .await)
    }

    async fn sync_standings(
        &self,
        scoped: &[TournamentSummary],
    ) -> Result<PhaseResult, SyncError> {
        let items: Vec<(i64, StandingsWork)> = scoped
            .iter()
            .map(|t| {
                (
                    t.id,
                    StandingsWork {
                        tournament_id: t.id,
                        season: t.season.clone(),
                    },
                )
            })
            .collect();
        let items = self.scope_items(standings::COLLECTION, items).await?;

        Ok(self
            .run_phase(Phase::Standings, "standings", items, |work: StandingsWork| {
                let provider = self.provider.clone();
                async move {
                    let collector = StandingsCollector::new(provider, Some(work.season));
                    let bundle = collector.collect(work.tournament_id).await?;
                    let doc = map_standings(&bundle, Utc::now());
                    self.persist(doc).await
                }
            })
            .await)
    }

    /// Applies the `skip_existing` filter and the per-phase `limit`.
    async fn scope_items<I>(
        &self,
        collection: &str,
        mut items: Vec<(i64, I)>,
    ) -> Result<Vec<(i64, I)>, SyncError> {
        if self.config.should_skip_existing() {
            let existing: BTreeSet<i64> = self
                .store
                .list_ids(collection)
                .await
                .map_err(SyncError::Persistence)?
                .into_iter()
                .collect();
            items.retain(|(id, _)| !existing.contains(id));
        }
        if let Some(limit) = self.config.limit {
            items.truncate(limit);
        }
        Ok(items)
    }

    /// Runs one phase over pre-enumerated items: contiguous batches, full
    /// per-batch concurrency, progress recorded as each item settles, and
    /// an inter-batch delay. Never returns early; `completed + failed`
    /// always equals the item count.
    async fn run_phase<I, F, Fut>(
        &self,
        phase: Phase,
        kind: &'static str,
        items: Vec<(i64, I)>,
        work: F,
    ) -> PhaseResult
    where
        I: Clone,
        F: Fn(I) -> Fut,
        Fut: Future<Output = Result<(), SyncError>>,
    {
        let total = items.len();
        self.tracker.begin_phase(phase.describe(), total);
        info!(
            phase = phase.describe(),
            total,
            batch_size = self.config.batch_size,
            "phase started"
        );

        let delay = Duration::from_millis(self.config.delay_between_batches_ms);
        let mut batches = items.chunks(self.config.batch_size.max(1)).peekable();

        while let Some(batch) = batches.next() {
            let mut inflight: FuturesUnordered<_> = batch
                .iter()
                .map(|(id, item)| {
                    let id = *id;
                    let fut = work(item.clone());
                    async move { (id, fut.await) }
                })
                .collect();

            while let Some((id, result)) = inflight.next().await {
                let outcome = match result {
                    Ok(()) => ItemOutcome::success(kind, id),
                    Err(e) => {
                        warn!(phase = phase.describe(), kind, id, error = %e, "item failed");
                        ItemOutcome::failure(kind, id, e.to_string())
                    }
                };
                self.tracker.record(&outcome);
            }

            if batches.peek().is_some() && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        self.tracker.finish_phase();
        let snapshot = self.tracker.snapshot();
        info!(
            phase = phase.describe(),
            completed = snapshot.completed,
            failed = snapshot.failed,
            "phase finished"
        );
        PhaseResult {
            phase: phase.describe(),
            total: snapshot.total,
            completed: snapshot.completed,
            failed: snapshot.failed,
            errors: snapshot.errors.clone(),
        }
    }

    /// Read-modify-write reconcile against the store. Safe for concurrent
    /// items because ids within a batch are disjoint; not safe across
    /// overlapping orchestrator runs over the same ids.
    async fn persist<T>(&self, incoming: T) -> Result<(), SyncError>
    where
        T: CanonicalDoc + Reconcile,
    {
        let existing = store::get_doc::<T>(
            self.store.as_ref(),
            incoming.collection(),
            incoming.korastats_id(),
        )
        .await?;
        let merged = T::reconcile(existing, incoming, Utc::now());
        store::put_doc(self.store.as_ref(), &merged).await?;
        Ok(())
    }
}
