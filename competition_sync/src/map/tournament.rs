use chrono::{DateTime, NaiveDate, Utc};

use crate::collect::tournament::TournamentBundle;
use crate::map::names::clean_person_name;
use crate::models::tournament::{TopPlayerRef, Tournament, TournamentStatus};

/// Derives the lifecycle status from the published dates.
///
/// Missing dates lean towards `Active`: a tournament is `Upcoming` only
/// when its start is known to be in the future, `Completed` only when its
/// end is known to have passed.
pub fn derive_status(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> TournamentStatus {
    if start.is_some_and(|s| s > today) {
        TournamentStatus::Upcoming
    } else if end.is_some_and(|e| e < today) {
        TournamentStatus::Completed
    } else {
        TournamentStatus::Active
    }
}

pub fn map_tournament(bundle: &TournamentBundle, now: DateTime<Utc>) -> Tournament {
    let summary = &bundle.summary;

    let rounds: Vec<String> = bundle
        .structure
        .stages
        .iter()
        .flat_map(|stage| stage.rounds.iter().map(|r| r.name.clone()))
        .collect();

    let top_ref = |p: &korastats_client::models::tournament::TopPerformer| TopPlayerRef {
        id: p.player_id,
        name: clean_person_name(&p.player_name),
        value: p.value,
    };

    Tournament {
        korastats_id: summary.id,
        name: summary.name.clone(),
        season: summary.season.clone(),
        organizer: summary.organizer.clone(),
        age_group: summary.age_group.clone(),
        gender: summary.gender.clone(),
        country: summary.country.clone(),
        start_date: summary.start_date,
        end_date: summary.end_date,
        rounds,
        status: derive_status(summary.start_date, summary.end_date, now.date_naive()),
        top_scorer: bundle.top_scorer.as_ref().map(top_ref),
        top_assister: bundle.top_assister.as_ref().map(top_ref),
        last_synced: now,
        sync_version: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn status_from_dates() {
        let today = d("2026-03-01");
        assert_eq!(
            derive_status(Some(d("2026-04-01")), Some(d("2026-06-01")), today),
            TournamentStatus::Upcoming
        );
        assert_eq!(
            derive_status(Some(d("2026-01-01")), Some(d("2026-02-01")), today),
            TournamentStatus::Completed
        );
        assert_eq!(
            derive_status(Some(d("2026-01-01")), Some(d("2026-06-01")), today),
            TournamentStatus::Active
        );
        assert_eq!(derive_status(None, None, today), TournamentStatus::Active);
    }
}
