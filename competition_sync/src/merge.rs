//! Merge-upsert engine.
//!
//! `reconcile` computes the persisted write from a freshly mapped document
//! and whatever was stored before. Scalar fields take the incoming value
//! when present, else keep the existing one. Season-keyed arrays merge by
//! composite key: a matching incoming element replaces the existing one in
//! place, an unmatched incoming element is appended, and existing elements
//! with no incoming counterpart are retained unchanged. Aggregates are
//! recomputed by folding over the whole merged array. Reconciling the same
//! incoming data twice yields byte-identical documents.

use chrono::{DateTime, Utc};

use crate::models::fixture::MatchDoc;
use crate::models::person::Person;
use crate::models::standings::Standings;
use crate::models::team::{StatsSummary, Team, TeamTournamentStats};
use crate::models::tournament::Tournament;

/// Merges `incoming` into `existing` by key: replace-in-place on a key
/// match, append otherwise, retain unmatched existing elements. Existing
/// order is preserved; new elements append in incoming order.
pub fn merge_keyed<T, K, F>(existing: Vec<T>, incoming: Vec<T>, key: F) -> Vec<T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut merged = existing;
    for item in incoming {
        let k = key(&item);
        match merged.iter().position(|e| key(e) == k) {
            Some(pos) => merged[pos] = item,
            None => merged.push(item),
        }
    }
    merged
}

/// Recomputes the team aggregate from the full per-season array.
pub fn summarize(stats: &[TeamTournamentStats]) -> StatsSummary {
    stats.iter().fold(StatsSummary::default(), |mut acc, s| {
        acc.seasons += 1;
        acc.fixtures_played += s.fixtures.played;
        acc.wins += s.fixtures.wins;
        acc.draws += s.fixtures.draws;
        acc.losses += s.fixtures.losses;
        acc.goals_for += s.goals.for_;
        acc.goals_against += s.goals.against;
        acc.clean_sheets += s.clean_sheet;
        acc
    })
}

/// One reconciliation step for a canonical document type.
pub trait Reconcile: Sized {
    fn reconcile(existing: Option<Self>, incoming: Self, now: DateTime<Utc>) -> Self;
}

fn next_version(existing_version: Option<u32>) -> u32 {
    existing_version.unwrap_or(0) + 1
}

impl Reconcile for Tournament {
    fn reconcile(existing: Option<Self>, mut incoming: Self, now: DateTime<Utc>) -> Self {
        let prev_version = existing.as_ref().map(|e| e.sync_version);
        if let Some(prev) = existing {
            incoming.organizer = incoming.organizer.or(prev.organizer);
            incoming.age_group = incoming.age_group.or(prev.age_group);
            incoming.gender = incoming.gender.or(prev.gender);
            incoming.country = incoming.country.or(prev.country);
            incoming.start_date = incoming.start_date.or(prev.start_date);
            incoming.end_date = incoming.end_date.or(prev.end_date);
            incoming.top_scorer = incoming.top_scorer.or(prev.top_scorer);
            incoming.top_assister = incoming.top_assister.or(prev.top_assister);
            if incoming.rounds.is_empty() {
                incoming.rounds = prev.rounds;
            }
        }
        incoming.sync_version = next_version(prev_version);
        incoming.last_synced = now;
        incoming
    }
}

impl Reconcile for Team {
    fn reconcile(existing: Option<Self>, mut incoming: Self, now: DateTime<Utc>) -> Self {
        let prev_version = existing.as_ref().map(|e| e.sync_version);
        if let Some(prev) = existing {
            incoming.code = incoming.code.or(prev.code);
            incoming.logo = incoming.logo.or(prev.logo);
            incoming.country = incoming.country.or(prev.country);
            incoming.venue = incoming.venue.or(prev.venue);
            if incoming.coaches.is_empty() {
                incoming.coaches = prev.coaches;
            }
            incoming.tournament_stats = merge_keyed(
                prev.tournament_stats,
                incoming.tournament_stats,
                |s| (s.league.id, s.league.season.clone()),
            );
            incoming.tournaments = merge_keyed(prev.tournaments, incoming.tournaments, |t| {
                (t.id, t.season.clone())
            });
        }
        incoming.stats_summary = summarize(&incoming.tournament_stats);
        incoming.sync_version = next_version(prev_version);
        incoming.last_synced = now;
        incoming
    }
}

impl Reconcile for MatchDoc {
    fn reconcile(existing: Option<Self>, mut incoming: Self, now: DateTime<Utc>) -> Self {
        let prev_version = existing.as_ref().map(|e| e.sync_version);
        if let Some(prev) = existing {
            // A fixture is a single-season document: the freshly collected
            // state overwrites wholesale, except optional extras the
            // provider may stop serving.
            incoming.venue = incoming.venue.or(prev.venue);
            incoming.referee = incoming.referee.or(prev.referee);
            incoming.highlights = incoming.highlights.or(prev.highlights);
        }
        incoming.sync_version = next_version(prev_version);
        incoming.last_synced = now;
        incoming
    }
}

impl Reconcile for Person {
    fn reconcile(existing: Option<Self>, mut incoming: Self, now: DateTime<Utc>) -> Self {
        let prev_version = existing.as_ref().map(|e| e.sync_version);
        if let Some(prev) = existing {
            incoming.nationality = incoming.nationality.or(prev.nationality);
            incoming.birth = incoming.birth.or(prev.birth);
            incoming.photo = incoming.photo.or(prev.photo);
            incoming.position = incoming.position.or(prev.position);
        }
        incoming.sync_version = next_version(prev_version);
        incoming.last_synced = now;
        incoming
    }
}

impl Reconcile for Standings {
    fn reconcile(existing: Option<Self>, mut incoming: Self, now: DateTime<Utc>) -> Self {
        let prev_version = existing.as_ref().map(|e| e.sync_version);
        if let Some(prev) = existing {
            incoming.seasons = merge_keyed(prev.seasons, incoming.seasons, |s| s.season.clone());
        }
        incoming.sync_version = next_version(prev_version);
        incoming.last_synced = now;
        incoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keyed_replaces_in_place_and_appends() {
        let existing = vec![(1, "a"), (2, "b"), (3, "c")];
        let incoming = vec![(2, "B"), (4, "d")];
        let merged = merge_keyed(existing, incoming, |e| e.0);
        assert_eq!(merged, vec![(1, "a"), (2, "B"), (3, "c"), (4, "d")]);
    }

    #[test]
    fn merge_keyed_is_idempotent() {
        let incoming = vec![(2, "B"), (4, "d")];
        let once = merge_keyed(vec![(1, "a"), (2, "b")], incoming.clone(), |e| e.0);
        let twice = merge_keyed(once.clone(), incoming, |e| e.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn summarize_folds_whole_array() {
        use crate::models::team::{FixtureTally, GoalTally, LeagueKey};

        let stats = vec![
            TeamTournamentStats {
                league: LeagueKey {
                    id: 1,
                    season: "2023".into(),
                },
                fixtures: FixtureTally {
                    played: 10,
                    wins: 6,
                    draws: 2,
                    losses: 2,
                },
                goals: GoalTally { for_: 18, against: 9 },
                clean_sheet: 4,
            },
            TeamTournamentStats {
                league: LeagueKey {
                    id: 1,
                    season: "2024".into(),
                },
                fixtures: FixtureTally {
                    played: 8,
                    wins: 3,
                    draws: 3,
                    losses: 2,
                },
                goals: GoalTally { for_: 11, against: 8 },
                clean_sheet: 2,
            },
        ];

        let summary = summarize(&stats);
        assert_eq!(summary.seasons, 2);
        assert_eq!(summary.fixtures_played, 18);
        assert_eq!(summary.wins, 9);
        assert_eq!(summary.goals_for, 29);
        assert_eq!(summary.goals_against, 17);
        assert_eq!(summary.clean_sheets, 6);
    }
}
