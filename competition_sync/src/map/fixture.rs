use chrono::{DateTime, Utc};
use korastats_client::models::fixture::{
    MatchSummary, MatchTeamStats, MatchTimeline, PossessionPeriod, SquadSide, TimelineEvent,
};

use crate::collect::fixture::FixtureBundle;
use crate::error::SyncError;
use crate::map::names::clean_person_name;
use crate::models::fixture::{
    GoalsPair, Lineup, LineupPlayer, MatchDoc, MatchEvent, MatchTeam, MatchTeams, MomentumBucket,
    MomentumGoal, MomentumSide, PlayerStatistics, ScoreBreakdown, StatValue, TeamStatistics,
};
use crate::models::{PersonRef, Venue};

const MOMENTUM_BUCKET_MINUTES: u32 = 10;
const MOMENTUM_END_MINUTE: u32 = 90;

/// Normalizes a provider formation string.
///
/// The raw form is a keeper prefix plus outfield line digits, e.g.
/// `"1-433"` -> `"4-3-3"`. Zero and non-numeric segments are dropped
/// (`"1-0523"` -> `"5-2-3"`); anything malformed degrades to an empty
/// formation rather than an error.
pub fn normalize_formation(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let mut lines: Vec<String> = Vec::new();
    // First dash-separated segment is the keeper, always dropped.
    for segment in raw.split('-').skip(1) {
        for ch in segment.chars() {
            match ch.to_digit(10) {
                Some(0) | None => continue,
                Some(d) => lines.push(d.to_string()),
            }
        }
    }
    lines.join("-")
}

fn is_goal_event(kind: &str) -> bool {
    let kind = kind.to_lowercase();
    kind.contains("goal") && !kind.contains("miss")
}

fn event_person(id: Option<i64>, name: Option<&str>) -> Option<PersonRef> {
    id.map(|id| PersonRef {
        id,
        name: name.map(clean_person_name).unwrap_or_default(),
    })
}

fn possession_at(periods: &[PossessionPeriod], minute: u32) -> u32 {
    periods
        .iter()
        .find(|p| p.from_minute <= minute && minute < p.to_minute)
        // Truncated, not rounded; a missing period means an even split.
        .map_or(50, |p| (p.possession.trunc() as i64).clamp(0, 100) as u32)
}

/// Builds the 10-minute momentum series over minutes 0..90.
///
/// Each bucket takes the home possession from whichever provider period
/// overlaps the bucket start (away is the complement), and attaches every
/// goal whose minute falls in `[bucket, bucket + 10)` to the scoring
/// team's side.
pub fn build_momentum(
    summary: &MatchSummary,
    timeline: &MatchTimeline,
    team_stats: &MatchTeamStats,
) -> Vec<MomentumBucket> {
    let goals: Vec<&TimelineEvent> = timeline
        .events
        .iter()
        .filter(|e| is_goal_event(&e.event_type))
        .collect();

    (0..MOMENTUM_END_MINUTE)
        .step_by(MOMENTUM_BUCKET_MINUTES as usize)
        .map(|minute| {
            let home_possession = possession_at(&team_stats.home.possession_periods, minute);

            let mut home_goals = Vec::new();
            let mut away_goals = Vec::new();
            for event in &goals {
                if event.minute >= minute && event.minute < minute + MOMENTUM_BUCKET_MINUTES {
                    let goal = MomentumGoal {
                        minute: event.minute,
                        player: event_person(event.player_id, event.player_name.as_deref()),
                    };
                    if event.team_id == summary.home.id {
                        home_goals.push(goal);
                    } else {
                        away_goals.push(goal);
                    }
                }
            }

            MomentumBucket {
                minute,
                home: MomentumSide {
                    possession: home_possession,
                    goals: home_goals,
                },
                away: MomentumSide {
                    possession: 100 - home_possession,
                    goals: away_goals,
                },
            }
        })
        .collect()
}

/// Buckets goals into halftime (0-45), second half (45-90), extra time
/// (90-120) and penalties, summing the provider's per-15-minute interval
/// counts. Absent interval data leaves all buckets at zero.
pub fn score_breakdown(summary: &MatchSummary) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    if let Some(intervals) = &summary.goal_intervals {
        for (side, is_home) in [(&intervals.home, true), (&intervals.away, false)] {
            for interval in side.iter() {
                let pair = match interval.from_minute {
                    m if m < 45 => &mut breakdown.halftime,
                    m if m < 90 => &mut breakdown.fulltime,
                    m if m < 120 => &mut breakdown.extratime,
                    _ => continue,
                };
                if is_home {
                    pair.home += interval.goals;
                } else {
                    pair.away += interval.goals;
                }
            }
        }
    }

    breakdown.penalty.home = summary.penalty_home.unwrap_or(0);
    breakdown.penalty.away = summary.penalty_away.unwrap_or(0);
    breakdown
}

fn map_lineup(side: &SquadSide) -> Lineup {
    let player = |p: &korastats_client::models::fixture::SquadPlayer| LineupPlayer {
        id: p.id,
        name: clean_person_name(&p.name),
        number: p.number,
        position: p.position.clone().unwrap_or_else(|| "Unknown".to_string()),
    };

    Lineup {
        team_id: side.team_id,
        formation: normalize_formation(side.formation.as_deref()),
        starters: side.players.iter().filter(|p| p.starter).map(player).collect(),
        substitutes: side.players.iter().filter(|p| !p.starter).map(player).collect(),
    }
}

fn map_side(side: &korastats_client::models::fixture::MatchTeamSide) -> MatchTeam {
    MatchTeam {
        id: side.id,
        name: side.name.clone(),
        logo: side.logo.clone(),
        score: side.score,
        coach: side
            .coach
            .as_ref()
            .map(|c| PersonRef {
                id: c.id,
                name: clean_person_name(&c.name),
            })
            .unwrap_or_else(PersonRef::unknown_coach),
    }
}

pub fn map_fixture(bundle: &FixtureBundle, now: DateTime<Utc>) -> Result<MatchDoc, SyncError> {
    let summary = &bundle.summary;

    // The collector's completeness check rejects squads with no players on
    // either side; reaching this with one anyway is a structural bug.
    if bundle.squad.home.players.is_empty() && bundle.squad.away.players.is_empty() {
        return Err(SyncError::Mapping {
            entity: "match",
            id: summary.id,
            message: "squad has no players on either side".to_string(),
        });
    }

    let events: Vec<MatchEvent> = bundle
        .timeline
        .events
        .iter()
        .map(|e| MatchEvent {
            minute: e.minute,
            kind: e.event_type.clone(),
            team_id: e.team_id,
            player: event_person(e.player_id, e.player_name.as_deref()),
            assist: event_person(e.assist_id, e.assist_name.as_deref()),
            detail: e.detail.clone(),
        })
        .collect();

    let lineups = vec![map_lineup(&bundle.squad.home), map_lineup(&bundle.squad.away)];

    let stat_values = |stats: &indexmap::IndexMap<String, f64>| -> Vec<StatValue> {
        stats
            .iter()
            .map(|(name, value)| StatValue {
                name: name.clone(),
                value: *value,
            })
            .collect()
    };

    let statistics = vec![
        TeamStatistics {
            team_id: bundle.team_stats.home.team_id,
            stats: stat_values(&bundle.team_stats.home.stats),
        },
        TeamStatistics {
            team_id: bundle.team_stats.away.team_id,
            stats: stat_values(&bundle.team_stats.away.stats),
        },
    ];

    let players_stats: Vec<PlayerStatistics> = bundle
        .player_stats
        .players
        .iter()
        .map(|p| PlayerStatistics {
            player_id: p.player_id,
            team_id: p.team_id,
            stats: stat_values(&p.stats),
        })
        .collect();

    let momentum = build_momentum(summary, &bundle.timeline, &bundle.team_stats);
    let highlights = bundle.video.as_ref().and_then(|v| v.url.clone());

    let mut data_available = Vec::new();
    for (flag, present) in [
        ("events", !events.is_empty()),
        ("lineups", true),
        ("statistics", !statistics.iter().all(|s| s.stats.is_empty())),
        ("playersStats", !players_stats.is_empty()),
        ("momentum", !momentum.is_empty()),
        ("highlights", highlights.is_some()),
    ] {
        if present {
            data_available.push(flag.to_string());
        }
    }

    Ok(MatchDoc {
        korastats_id: summary.id,
        tournament_id: summary.tournament_id,
        season: summary.season.clone(),
        round: summary.round.clone(),
        date: summary.date,
        venue: summary.venue.as_ref().map(|v| Venue {
            id: v.id,
            name: v.name.clone(),
            city: v.city.clone(),
        }),
        referee: summary.referee.as_ref().map(|r| PersonRef {
            id: r.id,
            name: clean_person_name(&r.name),
        }),
        teams: MatchTeams {
            home: map_side(&summary.home),
            away: map_side(&summary.away),
        },
        goals: GoalsPair {
            home: summary.home.score,
            away: summary.away.score,
        },
        score: score_breakdown(summary),
        events,
        lineups,
        statistics,
        players_stats,
        momentum,
        highlights,
        data_available,
        last_synced: now,
        sync_version: 0,
    })
}

#[cfg(test)]
mod tests {
    use korastats_client::models::fixture::{
        GoalIntervals, IntervalCount, MatchTeamSide, TeamMatchStats,
    };

    use super::*;

    #[test]
    fn formation_plain() {
        assert_eq!(normalize_formation(Some("1-433")), "4-3-3");
    }

    #[test]
    fn formation_drops_zero_segments() {
        assert_eq!(normalize_formation(Some("1-0523")), "5-2-3");
    }

    #[test]
    fn formation_tolerates_garbage() {
        assert_eq!(normalize_formation(Some("1-")), "");
        assert_eq!(normalize_formation(Some("1-xyz")), "");
        assert_eq!(normalize_formation(Some("")), "");
        assert_eq!(normalize_formation(None), "");
    }

    #[test]
    fn formation_with_explicit_dashes() {
        assert_eq!(normalize_formation(Some("1-4-2-3-1")), "4-2-3-1");
    }

    fn summary(home_id: i64, away_id: i64) -> MatchSummary {
        MatchSummary {
            id: 900,
            tournament_id: 10,
            season: Some("2025/2026".into()),
            round: Some("Round 3".into()),
            date: None,
            venue: None,
            referee: None,
            home: MatchTeamSide {
                id: home_id,
                name: "Home".into(),
                logo: None,
                score: Some(2),
                coach: None,
            },
            away: MatchTeamSide {
                id: away_id,
                name: "Away".into(),
                logo: None,
                score: Some(1),
                coach: None,
            },
            goal_intervals: None,
            penalty_home: None,
            penalty_away: None,
        }
    }

    fn goal(minute: u32, team_id: i64) -> TimelineEvent {
        TimelineEvent {
            minute,
            event_type: "Goal".into(),
            team_id,
            player_id: Some(7),
            player_name: Some("Scorer".into()),
            assist_id: None,
            assist_name: None,
            detail: None,
        }
    }

    fn stats_with_possession(periods: Vec<PossessionPeriod>) -> MatchTeamStats {
        MatchTeamStats {
            home: TeamMatchStats {
                team_id: 1,
                stats: Default::default(),
                possession_periods: periods,
            },
            away: TeamMatchStats {
                team_id: 2,
                stats: Default::default(),
                possession_periods: vec![],
            },
        }
    }

    #[test]
    fn momentum_buckets_possession_and_goals() {
        let summary = summary(1, 2);
        let timeline = MatchTimeline {
            events: vec![goal(12, 1), goal(19, 2), goal(88, 1)],
        };
        let stats = stats_with_possession(vec![
            PossessionPeriod {
                from_minute: 0,
                to_minute: 45,
                possession: 61.9,
            },
            PossessionPeriod {
                from_minute: 45,
                to_minute: 90,
                possession: 48.2,
            },
        ]);

        let momentum = build_momentum(&summary, &timeline, &stats);
        assert_eq!(momentum.len(), 9);

        // Truncation, not rounding.
        assert_eq!(momentum[0].home.possession, 61);
        assert_eq!(momentum[0].away.possession, 39);
        assert_eq!(momentum[5].home.possession, 48);

        // Both the minute-12 and minute-19 goals land in the 10-20 bucket,
        // one per side.
        assert_eq!(momentum[1].minute, 10);
        assert_eq!(momentum[1].home.goals.len(), 1);
        assert_eq!(momentum[1].away.goals.len(), 1);
        assert_eq!(momentum[8].home.goals.len(), 1);
        assert_eq!(momentum[8].home.goals[0].minute, 88);
    }

    #[test]
    fn momentum_defaults_to_even_possession() {
        let summary = summary(1, 2);
        let timeline = MatchTimeline { events: vec![] };
        let stats = stats_with_possession(vec![]);

        let momentum = build_momentum(&summary, &timeline, &stats);
        assert!(momentum.iter().all(|b| b.home.possession == 50));
        assert!(momentum.iter().all(|b| b.away.possession == 50));
    }

    #[test]
    fn score_breakdown_sums_intervals() {
        let mut s = summary(1, 2);
        s.goal_intervals = Some(GoalIntervals {
            home: vec![
                IntervalCount {
                    from_minute: 0,
                    goals: 1,
                },
                IntervalCount {
                    from_minute: 30,
                    goals: 1,
                },
                IntervalCount {
                    from_minute: 75,
                    goals: 1,
                },
            ],
            away: vec![
                IntervalCount {
                    from_minute: 45,
                    goals: 1,
                },
                IntervalCount {
                    from_minute: 105,
                    goals: 1,
                },
            ],
        });
        s.penalty_home = Some(4);
        s.penalty_away = Some(3);

        let b = score_breakdown(&s);
        assert_eq!((b.halftime.home, b.halftime.away), (2, 0));
        assert_eq!((b.fulltime.home, b.fulltime.away), (1, 1));
        assert_eq!((b.extratime.home, b.extratime.away), (0, 1));
        assert_eq!((b.penalty.home, b.penalty.away), (4, 3));
    }

    #[test]
    fn score_breakdown_defaults_to_zero() {
        let b = score_breakdown(&summary(1, 2));
        assert_eq!(b, ScoreBreakdown::default());
    }
}
