use std::collections::HashMap;

use uuid::Uuid;

use crate::snapshot::{
    determine_side, events_by_round, kill_events, RoundData, RoundEventData, Side, TeamIndex,
    CLUTCH_CONFIRM_DELAY_MS, ROUND_END_PADDING_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ClutchSituation {
    PrePlant,
    PostPlant,
}

impl ClutchSituation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrePlant => "pre-plant",
            Self::PostPlant => "post-plant",
        }
    }
}

/// A confirmed 1-vs-N situation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClutchResult {
    pub round_id: Uuid,
    pub clutcher_id: Uuid,
    /// Opponents alive when the clutcher became alone.
    pub opponent_ids: Vec<Uuid>,
    pub clutch_type: i16,
    pub won: bool,
    pub side: Side,
    pub situation: ClutchSituation,
    pub start_time_ms: i64,
    pub end_time_ms: i64,
}

#[derive(Debug, Clone)]
struct TentativeClutch {
    candidate: Uuid,
    alone_since: i64,
    opponent_ids: Vec<Uuid>,
    side: Side,
    situation: ClutchSituation,
}

/// Clutch detection: at most one confirmed clutch per round.
pub fn compute_clutches(
    rounds: &[RoundData],
    events: &[RoundEventData],
    teams: &TeamIndex,
) -> Vec<ClutchResult> {
    let by_round = events_by_round(events);

    rounds
        .iter()
        .filter_map(|round| {
            let round_events = by_round.get(&round.id).map(Vec::as_slice).unwrap_or(&[]);
            detect_round_clutch(round, round_events, teams)
        })
        .collect()
}

fn detect_round_clutch(
    round: &RoundData,
    events: &[&RoundEventData],
    teams: &TeamIndex,
) -> Option<ClutchResult> {
    let mut alive: HashMap<Uuid, bool> = HashMap::new();
    for team_id in teams.team_ids() {
        for player_id in teams.players_of(*team_id) {
            alive.insert(*player_id, true);
        }
    }

    // Tentative states in creation order, at most one per team. The first
    // state to satisfy the confirmation predicate wins the round.
    let mut states: Vec<(Uuid, TentativeClutch)> = Vec::new();
    let mut confirmed: Option<TentativeClutch> = None;
    let mut confirmed_team = Uuid::nil();
    let mut last_timestamp = 0;

    let kills = kill_events(events);
    for kill in &kills {
        let victim_team = match teams.team_of(kill.victim_id) {
            Some(t) => t,
            None => continue,
        };

        alive.insert(kill.victim_id, false);
        last_timestamp = kill.timestamp_ms;

        let team_alive: Vec<Uuid> = alive_players(teams.players_of(victim_team), &alive);
        if team_alive.len() == 1 {
            let candidate = team_alive[0];
            if let Some(opponent_team) = teams.opposing_team(victim_team) {
                let opponents = alive_players(teams.players_of(opponent_team), &alive);
                if (1..=5).contains(&opponents.len()) {
                    if let Some(tag) = teams.tag_of(victim_team) {
                        let planted = round
                            .plant_time_ms
                            .map(|plant| plant <= kill.timestamp_ms)
                            .unwrap_or(false);
                        let state = TentativeClutch {
                            candidate,
                            alone_since: kill.timestamp_ms,
                            opponent_ids: opponents,
                            side: determine_side(round.round_number, tag),
                            situation: if planted {
                                ClutchSituation::PostPlant
                            } else {
                                ClutchSituation::PrePlant
                            },
                        };
                        states.retain(|(team, _)| *team != victim_team);
                        states.push((victim_team, state));
                    }
                }
            }
        }

        if confirmed.is_none() {
            for (team, state) in &states {
                if kill.timestamp_ms - state.alone_since >= CLUTCH_CONFIRM_DELAY_MS {
                    confirmed = Some(state.clone());
                    confirmed_team = *team;
                    break;
                }
            }
        }

        // A candidate dying before confirmation voids the attempt.
        states.retain(|(_, state)| state.candidate != kill.victim_id);
    }

    // Candidates still alive after the last kill get the estimated round end.
    if confirmed.is_none() {
        let round_end = last_timestamp + ROUND_END_PADDING_MS;
        for (team, state) in &states {
            let candidate_alive = alive.get(&state.candidate).copied().unwrap_or(false);
            if candidate_alive && round_end - state.alone_since >= CLUTCH_CONFIRM_DELAY_MS {
                confirmed = Some(state.clone());
                confirmed_team = *team;
                break;
            }
        }
    }

    let state = confirmed?;
    Some(ClutchResult {
        round_id: round.id,
        clutcher_id: state.candidate,
        clutch_type: state.opponent_ids.len() as i16,
        won: round.winner_team_id == Some(confirmed_team),
        side: state.side,
        situation: state.situation,
        start_time_ms: state.alone_since,
        end_time_ms: last_timestamp,
        opponent_ids: state.opponent_ids,
    })
}

fn alive_players(player_ids: &[Uuid], alive: &HashMap<Uuid, bool>) -> Vec<Uuid> {
    player_ids
        .iter()
        .copied()
        .filter(|id| alive.get(id).copied().unwrap_or(false))
        .collect()
}
