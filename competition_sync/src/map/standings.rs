use chrono::{DateTime, Utc};

use crate::collect::standings::StandingsBundle;
use crate::models::standings::{SeasonStandings, StandingRow, Standings};

pub fn map_standings(bundle: &StandingsBundle, now: DateTime<Utc>) -> Standings {
    let table = &bundle.table;

    let rows = table
        .rows
        .iter()
        .map(|r| StandingRow {
            rank: r.rank,
            team_id: r.team_id,
            team_name: r.team_name.clone(),
            played: r.played,
            wins: r.wins,
            draws: r.draws,
            losses: r.losses,
            goals_for: r.goals_for,
            goals_against: r.goals_against,
            points: r.points,
        })
        .collect();

    Standings {
        korastats_id: table.tournament_id,
        seasons: vec![SeasonStandings {
            season: table.season.clone(),
            rows,
        }],
        last_synced: now,
        sync_version: 0,
    }
}
