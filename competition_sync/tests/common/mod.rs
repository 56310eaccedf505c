#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use korastats_client::errors::ProviderError;
use korastats_client::models::entity::{PersonEntry, PersonInfo};
use korastats_client::models::fixture::{
    GoalIntervals, IntervalCount, MatchEntry, MatchPlayerStats, MatchSquad, MatchSummary,
    MatchTeamSide, MatchTeamStats, MatchTimeline, MatchVideo, PlayerMatchStats, PossessionPeriod,
    SquadPlayer, SquadSide, TeamMatchStats, TimelineEvent,
};
use korastats_client::models::standings::{StandingRow, StandingsTable};
use korastats_client::models::team::{StaffEntry, TeamEntry, TeamInfo, TeamSeasonStats, VenueInfo};
use korastats_client::models::tournament::{
    Round, Stage, StatType, TopPerformer, TournamentStructure, TournamentSummary,
};
use korastats_client::providers::StatsProvider;

pub const TOURNAMENT: i64 = 840;
pub const TOURNAMENT_CUP: i64 = 841;
pub const SEASON: &str = "2025/2026";
pub const TEAM_HOME: i64 = 1;
pub const TEAM_AWAY: i64 = 2;
pub const MATCH_ONE: i64 = 9001;
pub const MATCH_TWO: i64 = 9002;

/// Canned provider for one seeded tournament. Any endpoint can be forced to
/// fail, either wholesale (`fail("match_timeline")`) or for a single id
/// (`fail_for("match_timeline", 9001)`). `with_cup()` adds a second
/// tournament whose only team is `TEAM_HOME`, for cross-tournament cases.
pub struct MockProvider {
    cup: bool,
    failures: Mutex<HashSet<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn seeded() -> Self {
        Self {
            cup: false,
            failures: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_cup(mut self) -> Self {
        self.cup = true;
        self
    }

    pub fn fail(&self, method: &str) {
        self.failures.lock().unwrap().insert(method.to_string());
    }

    pub fn fail_for(&self, method: &str, id: i64) {
        self.failures.lock().unwrap().insert(format!("{method}:{id}"));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn gate(&self, method: &str, id: Option<i64>) -> Result<(), ProviderError> {
        let key = match id {
            Some(id) => format!("{method}:{id}"),
            None => method.to_string(),
        };
        self.calls.lock().unwrap().push(key.clone());
        let failures = self.failures.lock().unwrap();
        if failures.contains(&key) || failures.contains(method) {
            return Err(ProviderError::Api {
                endpoint: key,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

fn tournament_summary() -> TournamentSummary {
    TournamentSummary {
        id: TOURNAMENT,
        name: "Pro League".to_string(),
        season: SEASON.to_string(),
        organizer: Some("Federation".to_string()),
        age_group: None,
        gender: Some("male".to_string()),
        country: Some("KSA".to_string()),
        start_date: NaiveDate::from_ymd_opt(2025, 8, 1),
        end_date: NaiveDate::from_ymd_opt(2026, 5, 30),
    }
}

fn person_info(id: i64, name: &str) -> PersonInfo {
    PersonInfo {
        id,
        name: name.to_string(),
        nationality: Some("KSA".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1998, 3, 14),
        birth_place: Some("Riyadh".to_string()),
        photo: None,
        position: (id < 200).then(|| "Forward".to_string()),
    }
}

fn side(team_id: i64, score: u32) -> MatchTeamSide {
    MatchTeamSide {
        id: team_id,
        name: format!("Team {team_id}"),
        logo: None,
        score: Some(score),
        coach: None,
    }
}

#[async_trait]
impl StatsProvider for MockProvider {
    async fn tournament_list(
        &self,
        _season: Option<&str>,
    ) -> Result<Vec<TournamentSummary>, ProviderError> {
        self.gate("tournament_list", None)?;
        let mut listing = vec![tournament_summary()];
        if self.cup {
            listing.push(TournamentSummary {
                id: TOURNAMENT_CUP,
                name: "Champions Cup".to_string(),
                ..tournament_summary()
            });
        }
        Ok(listing)
    }

    async fn tournament_team_list(
        &self,
        tournament_id: i64,
        _season: Option<&str>,
    ) -> Result<Vec<TeamEntry>, ProviderError> {
        self.gate("tournament_team_list", Some(tournament_id))?;
        let ids: &[i64] = if tournament_id == TOURNAMENT_CUP {
            &[TEAM_HOME]
        } else {
            &[TEAM_HOME, TEAM_AWAY]
        };
        Ok(ids
            .iter()
            .map(|&id| TeamEntry {
                id,
                name: format!("Team {id}"),
                code: None,
                logo: None,
                country: Some("KSA".to_string()),
            })
            .collect())
    }

    async fn tournament_match_list(
        &self,
        tournament_id: i64,
        _season: Option<&str>,
    ) -> Result<Vec<MatchEntry>, ProviderError> {
        self.gate("tournament_match_list", Some(tournament_id))?;
        if tournament_id == TOURNAMENT_CUP {
            return Ok(vec![]);
        }
        Ok([MATCH_ONE, MATCH_TWO]
            .into_iter()
            .map(|id| MatchEntry {
                id,
                tournament_id,
                season: Some(SEASON.to_string()),
                round: Some("Round 1".to_string()),
                date: Utc.with_ymd_and_hms(2025, 8, 15, 18, 0, 0).single(),
            })
            .collect())
    }

    async fn tournament_player_list(
        &self,
        tournament_id: i64,
        _season: Option<&str>,
    ) -> Result<Vec<PersonEntry>, ProviderError> {
        self.gate("tournament_player_list", Some(tournament_id))?;
        if tournament_id == TOURNAMENT_CUP {
            return Ok(vec![]);
        }
        Ok(vec![
            PersonEntry {
                id: 101,
                name: "Salem, Ahmed".to_string(),
            },
            PersonEntry {
                id: 102,
                name: "Omar Khalid".to_string(),
            },
        ])
    }

    async fn tournament_coach_list(
        &self,
        tournament_id: i64,
        _season: Option<&str>,
    ) -> Result<Vec<PersonEntry>, ProviderError> {
        self.gate("tournament_coach_list", Some(tournament_id))?;
        if tournament_id == TOURNAMENT_CUP {
            return Ok(vec![]);
        }
        Ok(vec![PersonEntry {
            id: 201,
            name: "Marco Rossi".to_string(),
        }])
    }

    async fn tournament_referee_list(
        &self,
        tournament_id: i64,
        _season: Option<&str>,
    ) -> Result<Vec<PersonEntry>, ProviderError> {
        self.gate("tournament_referee_list", Some(tournament_id))?;
        if tournament_id == TOURNAMENT_CUP {
            return Ok(vec![]);
        }
        Ok(vec![PersonEntry {
            id: 301,
            name: "Faisal Qahtani".to_string(),
        }])
    }

    async fn tournament_structure(&self, id: i64) -> Result<TournamentStructure, ProviderError> {
        self.gate("tournament_structure", Some(id))?;
        Ok(TournamentStructure {
            stages: vec![Stage {
                name: "Regular Season".to_string(),
                rounds: vec![
                    Round {
                        name: "Round 1".to_string(),
                        order: Some(1),
                    },
                    Round {
                        name: "Round 2".to_string(),
                        order: Some(2),
                    },
                ],
            }],
        })
    }

    async fn stat_types(&self) -> Result<Vec<StatType>, ProviderError> {
        self.gate("stat_types", None)?;
        Ok(vec![
            StatType {
                id: 1,
                name: "Total Goals Scored".to_string(),
            },
            StatType {
                id: 2,
                name: "Goal Assists".to_string(),
            },
        ])
    }

    async fn tournament_top_performers(
        &self,
        tournament_id: i64,
        stat_type: i64,
    ) -> Result<Vec<TopPerformer>, ProviderError> {
        self.gate("tournament_top_performers", Some(tournament_id))?;
        let (player_id, name, value) = match stat_type {
            1 => (101, "Salem, Ahmed", 18.0),
            _ => (102, "Omar Khalid", 11.0),
        };
        Ok(vec![TopPerformer {
            player_id,
            player_name: name.to_string(),
            value,
        }])
    }

    async fn team_info(&self, id: i64) -> Result<TeamInfo, ProviderError> {
        self.gate("team_info", Some(id))?;
        Ok(TeamInfo {
            id,
            name: format!("Team {id}"),
            code: Some(format!("T{id:02}")),
            logo: None,
            country: Some("KSA".to_string()),
            venue: Some(VenueInfo {
                id: 500 + id,
                name: format!("Stadium {id}"),
                city: Some("Riyadh".to_string()),
            }),
            staff: vec![StaffEntry {
                id: 201,
                name: "Marco Rossi".to_string(),
                role: Some("Head Coach".to_string()),
            }],
        })
    }

    async fn tournament_team_stats(
        &self,
        _tournament_id: i64,
        team_id: i64,
        _season: Option<&str>,
    ) -> Result<TeamSeasonStats, ProviderError> {
        self.gate("tournament_team_stats", Some(team_id))?;
        Ok(TeamSeasonStats {
            matches_played: 10,
            wins: 6,
            draws: 2,
            losses: 2,
            goals_for: 18,
            goals_against: 9,
            clean_sheets: 4,
        })
    }

    async fn match_summary(&self, id: i64) -> Result<MatchSummary, ProviderError> {
        self.gate("match_summary", Some(id))?;
        Ok(MatchSummary {
            id,
            tournament_id: TOURNAMENT,
            season: Some(SEASON.to_string()),
            round: Some("Round 1".to_string()),
            date: Utc.with_ymd_and_hms(2025, 8, 15, 18, 0, 0).single(),
            venue: Some(VenueInfo {
                id: 501,
                name: "Stadium 1".to_string(),
                city: Some("Riyadh".to_string()),
            }),
            referee: None,
            home: side(TEAM_HOME, 2),
            away: side(TEAM_AWAY, 1),
            goal_intervals: Some(GoalIntervals {
                home: vec![
                    IntervalCount {
                        from_minute: 0,
                        goals: 1,
                    },
                    IntervalCount {
                        from_minute: 75,
                        goals: 1,
                    },
                ],
                away: vec![IntervalCount {
                    from_minute: 60,
                    goals: 1,
                }],
            }),
            penalty_home: None,
            penalty_away: None,
        })
    }

    async fn match_timeline(&self, id: i64) -> Result<MatchTimeline, ProviderError> {
        self.gate("match_timeline", Some(id))?;
        Ok(MatchTimeline {
            events: vec![
                TimelineEvent {
                    minute: 12,
                    event_type: "Goal".to_string(),
                    team_id: TEAM_HOME,
                    player_id: Some(101),
                    player_name: Some("Salem, Ahmed".to_string()),
                    assist_id: Some(102),
                    assist_name: Some("Omar Khalid".to_string()),
                    detail: None,
                },
                TimelineEvent {
                    minute: 64,
                    event_type: "Goal".to_string(),
                    team_id: TEAM_AWAY,
                    player_id: Some(103),
                    player_name: Some("Tariq Noor".to_string()),
                    assist_id: None,
                    assist_name: None,
                    detail: None,
                },
            ],
        })
    }

    async fn match_squad(&self, id: i64) -> Result<MatchSquad, ProviderError> {
        self.gate("match_squad", Some(id))?;
        let squad_side = |team_id: i64, base: i64| SquadSide {
            team_id,
            formation: Some("1-433".to_string()),
            players: vec![
                SquadPlayer {
                    id: base,
                    name: format!("Player {base}"),
                    number: Some(9),
                    position: Some("Forward".to_string()),
                    starter: true,
                },
                SquadPlayer {
                    id: base + 1,
                    name: format!("Player {}", base + 1),
                    number: Some(14),
                    position: Some("Midfielder".to_string()),
                    starter: false,
                },
            ],
        };
        Ok(MatchSquad {
            home: squad_side(TEAM_HOME, 101),
            away: squad_side(TEAM_AWAY, 103),
        })
    }

    async fn match_player_stats(&self, id: i64) -> Result<MatchPlayerStats, ProviderError> {
        self.gate("match_player_stats", Some(id))?;
        Ok(MatchPlayerStats {
            players: vec![PlayerMatchStats {
                player_id: 101,
                team_id: TEAM_HOME,
                stats: [("Goals".to_string(), 1.0), ("Shots".to_string(), 4.0)]
                    .into_iter()
                    .collect(),
            }],
        })
    }

    async fn match_team_stats(&self, id: i64) -> Result<MatchTeamStats, ProviderError> {
        self.gate("match_team_stats", Some(id))?;
        let team = |team_id: i64, possession: f64| TeamMatchStats {
            team_id,
            stats: [("Shots".to_string(), 11.0)].into_iter().collect(),
            possession_periods: vec![
                PossessionPeriod {
                    from_minute: 0,
                    to_minute: 45,
                    possession,
                },
                PossessionPeriod {
                    from_minute: 45,
                    to_minute: 90,
                    possession: possession - 5.0,
                },
            ],
        };
        Ok(MatchTeamStats {
            home: team(TEAM_HOME, 61.9),
            away: team(TEAM_AWAY, 38.1),
        })
    }

    async fn match_video(&self, id: i64) -> Result<MatchVideo, ProviderError> {
        self.gate("match_video", Some(id))?;
        Ok(MatchVideo {
            url: Some(format!("https://video.example/{id}")),
        })
    }

    async fn player_info(&self, id: i64) -> Result<PersonInfo, ProviderError> {
        self.gate("player_info", Some(id))?;
        Ok(person_info(id, "Salem, Ahmed"))
    }

    async fn coach_info(&self, id: i64) -> Result<PersonInfo, ProviderError> {
        self.gate("coach_info", Some(id))?;
        Ok(person_info(id, "Marco Rossi"))
    }

    async fn referee_info(&self, id: i64) -> Result<PersonInfo, ProviderError> {
        self.gate("referee_info", Some(id))?;
        Ok(person_info(id, "Faisal Qahtani"))
    }

    async fn tournament_standings(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<StandingsTable, ProviderError> {
        self.gate("tournament_standings", Some(tournament_id))?;
        Ok(StandingsTable {
            tournament_id,
            season: season.unwrap_or(SEASON).to_string(),
            rows: vec![
                StandingRow {
                    rank: 1,
                    team_id: TEAM_HOME,
                    team_name: "Team 1".to_string(),
                    played: 10,
                    wins: 6,
                    draws: 2,
                    losses: 2,
                    goals_for: 18,
                    goals_against: 9,
                    points: 20,
                },
                StandingRow {
                    rank: 2,
                    team_id: TEAM_AWAY,
                    team_name: "Team 2".to_string(),
                    played: 10,
                    wins: 5,
                    draws: 2,
                    losses: 3,
                    goals_for: 14,
                    goals_against: 11,
                    points: 17,
                },
            ],
        })
    }
}
