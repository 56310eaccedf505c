use chrono::{DateTime, Utc};

use crate::collect::team::TeamBundle;
use crate::map::names::clean_person_name;
use crate::merge::{merge_keyed, summarize};
use crate::models::Venue;
use crate::models::team::{
    FixtureTally, GoalTally, LeagueKey, StaffRef, Team, TeamTournamentStats, TournamentRef,
};

/// Folds another (tournament, season) mapping of the same team into `acc`.
///
/// A team scoped into several tournaments is still one document; its
/// per-scope mappings combine into a single write so the scopes cannot race
/// each other. Distinct `(league.id, league.season)` elements accumulate,
/// and the aggregate is recomputed over the combined array.
pub fn combine_team(mut acc: Team, other: Team) -> Team {
    acc.code = acc.code.or(other.code);
    acc.logo = acc.logo.or(other.logo);
    acc.country = acc.country.or(other.country);
    acc.venue = acc.venue.or(other.venue);
    if acc.coaches.is_empty() {
        acc.coaches = other.coaches;
    }
    acc.tournament_stats = merge_keyed(acc.tournament_stats, other.tournament_stats, |s| {
        (s.league.id, s.league.season.clone())
    });
    acc.tournaments = merge_keyed(acc.tournaments, other.tournaments, |t| {
        (t.id, t.season.clone())
    });
    acc.stats_summary = summarize(&acc.tournament_stats);
    acc
}

pub fn map_team(bundle: &TeamBundle, now: DateTime<Utc>) -> Team {
    let info = &bundle.info;
    let s = &bundle.stats;

    let tournament_stats = vec![TeamTournamentStats {
        league: LeagueKey {
            id: bundle.tournament_id,
            season: bundle.season.clone(),
        },
        fixtures: FixtureTally {
            played: s.matches_played,
            wins: s.wins,
            draws: s.draws,
            losses: s.losses,
        },
        goals: GoalTally {
            for_: s.goals_for,
            against: s.goals_against,
        },
        clean_sheet: s.clean_sheets,
    }];

    Team {
        korastats_id: info.id,
        name: info.name.clone(),
        code: info.code.clone(),
        logo: info.logo.clone(),
        country: info.country.clone(),
        venue: info.venue.as_ref().map(|v| Venue {
            id: v.id,
            name: v.name.clone(),
            city: v.city.clone(),
        }),
        coaches: info
            .staff
            .iter()
            .map(|m| StaffRef {
                id: m.id,
                name: clean_person_name(&m.name),
                role: m.role.clone(),
            })
            .collect(),
        stats_summary: summarize(&tournament_stats),
        tournament_stats,
        tournaments: vec![TournamentRef {
            id: bundle.tournament_id,
            season: bundle.season.clone(),
        }],
        last_synced: now,
        sync_version: 0,
    }
}
