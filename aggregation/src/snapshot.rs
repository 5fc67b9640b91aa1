use std::collections::HashMap;

use uuid::Uuid;

/// Window for trade kill/death detection.
pub const TRADE_WINDOW_MS: i64 = 3000;
/// A lone survivor must stay alive this long before the clutch counts.
pub const CLUTCH_CONFIRM_DELAY_MS: i64 = 3000;
/// Maximum gap between consecutive kills of one streak.
pub const MULTI_KILL_WINDOW_MS: i64 = 5000;
/// Padding added after the last kill when estimating the round end.
pub const ROUND_END_PADDING_MS: i64 = 1000;

/// Weapon name used for deaths caused by the spike explosion.
pub const SPIKE_WEAPON: &str = "Spike";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TeamTag {
    Red,
    Blue,
}

impl TeamTag {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Red" | "RED" => Some(Self::Red),
            "Blue" | "BLUE" => Some(Self::Blue),
            _ => None,
        }
    }

    pub fn as_upper_str(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Blue => "BLUE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Attack,
    Defense,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Attack => Self::Defense,
            Self::Defense => Self::Attack,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defense => "Defense",
        }
    }
}

/// Side of a team for a given round, derived from the round number and the
/// team tag.
///
/// - Rounds 0-11: Red attacks, Blue defends.
/// - Rounds 12-23: inverted.
/// - Rounds 24+: two-round overtime periods, Red opens the first period on
///   Attack and the opening side alternates every period.
pub fn determine_side(round_number: i16, tag: TeamTag) -> Side {
    let red = matches!(tag, TeamTag::Red);

    if round_number < 12 {
        return if red { Side::Attack } else { Side::Defense };
    }
    if round_number < 24 {
        return if red { Side::Defense } else { Side::Attack };
    }

    let overtime_round = round_number - 24;
    let period = overtime_round / 2;
    let first_of_period = overtime_round % 2 == 0;
    let red_opens_attack = period % 2 == 0;

    let red_side = if red_opens_attack == first_of_period {
        Side::Attack
    } else {
        Side::Defense
    };
    if red {
        red_side
    } else {
        red_side.opposite()
    }
}

pub fn is_overtime_round(round_number: i16) -> bool {
    round_number >= 24
}

pub fn is_match_overtime(team_red_score: i16, team_blue_score: i16) -> bool {
    team_red_score > 13 || team_blue_score > 13
}

/// Tag of the match winner, `None` when tied.
pub fn winning_tag(team_red_score: i16, team_blue_score: i16) -> Option<TeamTag> {
    if team_red_score > team_blue_score {
        Some(TeamTag::Red)
    } else if team_blue_score > team_red_score {
        Some(TeamTag::Blue)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EventKind {
    Kill,
    Damage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundEventData {
    pub id: Uuid,
    pub round_id: Uuid,
    pub timestamp_ms: i64,
    pub kind: EventKind,
    pub actor_id: Uuid,
    pub victim_id: Option<Uuid>,
    pub damage: Option<i32>,
    pub headshot: Option<i32>,
    pub bodyshot: Option<i32>,
    pub legshot: Option<i32>,
    pub weapon: Option<String>,
    pub weapon_id: Option<Uuid>,
    pub weapon_category: Option<String>,
    pub assistants: Vec<Uuid>,
}

impl RoundEventData {
    pub fn is_kill(&self) -> bool {
        matches!(self.kind, EventKind::Kill)
    }

    /// Self-reference with the spike as weapon marks a death to the explosion.
    pub fn is_spike_death(&self) -> bool {
        self.victim_id == Some(self.actor_id) && self.weapon.as_deref() == Some(SPIKE_WEAPON)
    }

    pub fn is_suicide(&self) -> bool {
        self.victim_id == Some(self.actor_id) && self.weapon.as_deref() != Some(SPIKE_WEAPON)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundData {
    pub id: Uuid,
    pub round_number: i16,
    pub winner_team_id: Option<Uuid>,
    pub winning_team: Option<String>,
    pub win_method: Option<String>,
    pub spike_event: Option<String>,
    pub plant_time_ms: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchPlayerData {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub team_id: Option<Uuid>,
    pub team_tag: Option<TeamTag>,
    pub agent_id: Option<Uuid>,
    pub agent_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundPlayerStateData {
    pub id: Uuid,
    pub round_id: Uuid,
    pub player_id: Uuid,
    pub score: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundPlayerLoadoutData {
    pub round_player_id: Uuid,
    pub loadout_id: Option<Uuid>,
    pub value: Option<i32>,
    pub remaining: Option<i32>,
    pub spent: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositionData {
    pub match_id: Uuid,
    pub team_tag: Option<TeamTag>,
    pub agent_list_hash: String,
}

/// One match's canonical data, loaded once per job and owned by it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSnapshot {
    pub match_id: Uuid,
    pub match_key: String,
    pub match_date: chrono::NaiveDate,
    pub match_type: Option<String>,
    pub team_red_score: i16,
    pub team_blue_score: i16,
    pub rounds: Vec<RoundData>,
    pub match_players: Vec<MatchPlayerData>,
    pub round_events: Vec<RoundEventData>,
    pub round_player_states: Vec<RoundPlayerStateData>,
    pub round_player_loadouts: Vec<RoundPlayerLoadoutData>,
    pub compositions: Vec<CompositionData>,
}

/// Lookup maps from the match-player bindings, built once per job.
#[derive(Debug, Default)]
pub struct TeamIndex {
    player_team: HashMap<Uuid, Uuid>,
    team_players: HashMap<Uuid, Vec<Uuid>>,
    team_tags: HashMap<Uuid, TeamTag>,
    team_ids: Vec<Uuid>,
}

impl TeamIndex {
    pub fn new(match_players: &[MatchPlayerData]) -> Self {
        let mut index = Self::default();
        for mp in match_players {
            let team_id = match mp.team_id {
                Some(t) => t,
                None => continue,
            };
            index.player_team.insert(mp.player_id, team_id);
            index.team_players.entry(team_id).or_default().push(mp.player_id);
            if let Some(tag) = mp.team_tag {
                index.team_tags.insert(team_id, tag);
            }
            if !index.team_ids.contains(&team_id) {
                index.team_ids.push(team_id);
            }
        }
        index
    }

    pub fn team_of(&self, player_id: Uuid) -> Option<Uuid> {
        self.player_team.get(&player_id).copied()
    }

    pub fn players_of(&self, team_id: Uuid) -> &[Uuid] {
        self.team_players.get(&team_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tag_of(&self, team_id: Uuid) -> Option<TeamTag> {
        self.team_tags.get(&team_id).copied()
    }

    pub fn team_ids(&self) -> &[Uuid] {
        &self.team_ids
    }

    pub fn team_by_tag(&self, tag: TeamTag) -> Option<Uuid> {
        self.team_ids
            .iter()
            .copied()
            .find(|team| self.tag_of(*team) == Some(tag))
    }

    pub fn opposing_team(&self, team_id: Uuid) -> Option<Uuid> {
        self.team_ids.iter().copied().find(|t| *t != team_id)
    }

    /// Both players bound to the same team. Players without a team binding are
    /// never allies.
    pub fn allies(&self, a: Uuid, b: Uuid) -> bool {
        match (self.team_of(a), self.team_of(b)) {
            (Some(ta), Some(tb)) => ta == tb,
            _ => false,
        }
    }
}

/// Events grouped per round, preserving input order within a round.
pub fn events_by_round(events: &[RoundEventData]) -> HashMap<Uuid, Vec<&RoundEventData>> {
    let mut grouped: HashMap<Uuid, Vec<&RoundEventData>> = HashMap::new();
    for event in events {
        grouped.entry(event.round_id).or_default().push(event);
    }
    grouped
}

/// A kill reduced to the fields the detections care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillEvent {
    pub killer_id: Uuid,
    pub victim_id: Uuid,
    pub timestamp_ms: i64,
}

/// All kills with a victim, in non-decreasing timestamp order. The sort is
/// stable, so ties keep input order.
pub fn kill_events(events: &[&RoundEventData]) -> Vec<KillEvent> {
    let mut kills: Vec<KillEvent> = events
        .iter()
        .filter(|e| e.is_kill())
        .filter_map(|e| {
            e.victim_id.map(|victim_id| KillEvent {
                killer_id: e.actor_id,
                victim_id,
                timestamp_ms: e.timestamp_ms,
            })
        })
        .collect();
    kills.sort_by_key(|k| k.timestamp_ms);
    kills
}

/// Kills between opposing players only: self-kills and teamkills are dropped.
pub fn combat_kill_events(events: &[&RoundEventData], teams: &TeamIndex) -> Vec<KillEvent> {
    kill_events(events)
        .into_iter()
        .filter(|k| k.killer_id != k.victim_id && !teams.allies(k.killer_id, k.victim_id))
        .collect()
}
