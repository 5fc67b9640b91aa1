#![allow(dead_code)]

use chrono::NaiveDate;
use uuid::Uuid;

use aggregation::snapshot::{
    EventKind, MatchPlayerData, MatchSnapshot, RoundData, RoundEventData, RoundPlayerStateData,
    TeamIndex, TeamTag,
};

pub const MATCH_ID: Uuid = Uuid::from_u128(0xA);
pub const RED_TEAM: Uuid = Uuid::from_u128(0x1);
pub const BLUE_TEAM: Uuid = Uuid::from_u128(0x2);

pub fn red(n: u128) -> Uuid {
    Uuid::from_u128(0x100 + n)
}

pub fn blue(n: u128) -> Uuid {
    Uuid::from_u128(0x200 + n)
}

pub fn round_uuid(n: u128) -> Uuid {
    Uuid::from_u128(0x300 + n)
}

/// Standard 5v5 roster: red(0..4) on Red, blue(0..4) on Blue.
pub fn roster() -> Vec<MatchPlayerData> {
    let mut players = Vec::new();
    for n in 0..5 {
        players.push(MatchPlayerData {
            id: Uuid::new_v4(),
            match_id: MATCH_ID,
            player_id: red(n),
            team_id: Some(RED_TEAM),
            team_tag: Some(TeamTag::Red),
            agent_id: None,
            agent_name: "Fuse".to_owned(),
        });
    }
    for n in 0..5 {
        players.push(MatchPlayerData {
            id: Uuid::new_v4(),
            match_id: MATCH_ID,
            player_id: blue(n),
            team_id: Some(BLUE_TEAM),
            team_tag: Some(TeamTag::Blue),
            agent_id: None,
            agent_name: "Warden".to_owned(),
        });
    }
    players
}

pub fn team_index(players: &[MatchPlayerData]) -> TeamIndex {
    TeamIndex::new(players)
}

pub fn round(number: i16) -> RoundData {
    RoundData {
        id: round_uuid(number as u128),
        round_number: number,
        winner_team_id: None,
        winning_team: None,
        win_method: None,
        spike_event: None,
        plant_time_ms: None,
    }
}

pub fn won_round(number: i16, winner: Uuid) -> RoundData {
    RoundData {
        winner_team_id: Some(winner),
        ..round(number)
    }
}

pub fn kill(round_id: Uuid, timestamp_ms: i64, killer: Uuid, victim: Uuid) -> RoundEventData {
    RoundEventData {
        id: Uuid::new_v4(),
        round_id,
        timestamp_ms,
        kind: EventKind::Kill,
        actor_id: killer,
        victim_id: Some(victim),
        damage: None,
        headshot: None,
        bodyshot: None,
        legshot: None,
        weapon: None,
        weapon_id: None,
        weapon_category: None,
        assistants: Vec::new(),
    }
}

pub fn kill_with_weapon(
    round_id: Uuid,
    timestamp_ms: i64,
    killer: Uuid,
    victim: Uuid,
    weapon: &str,
) -> RoundEventData {
    RoundEventData {
        weapon: Some(weapon.to_owned()),
        ..kill(round_id, timestamp_ms, killer, victim)
    }
}

pub fn headshot_kill(
    round_id: Uuid,
    timestamp_ms: i64,
    killer: Uuid,
    victim: Uuid,
) -> RoundEventData {
    RoundEventData {
        headshot: Some(1),
        ..kill(round_id, timestamp_ms, killer, victim)
    }
}

pub fn damage(
    round_id: Uuid,
    timestamp_ms: i64,
    actor: Uuid,
    victim: Uuid,
    amount: i32,
    hits: (i32, i32, i32),
) -> RoundEventData {
    RoundEventData {
        id: Uuid::new_v4(),
        round_id,
        timestamp_ms,
        kind: EventKind::Damage,
        actor_id: actor,
        victim_id: Some(victim),
        damage: Some(amount),
        headshot: Some(hits.0),
        bodyshot: Some(hits.1),
        legshot: Some(hits.2),
        weapon: None,
        weapon_id: None,
        weapon_category: None,
        assistants: Vec::new(),
    }
}

/// One state row per rostered player per round, no combat score.
pub fn states_for(rounds: &[RoundData]) -> Vec<RoundPlayerStateData> {
    let mut states = Vec::new();
    for round in rounds {
        for n in 0..5 {
            states.push(RoundPlayerStateData {
                id: Uuid::new_v4(),
                round_id: round.id,
                player_id: red(n),
                score: None,
            });
        }
        for n in 0..5 {
            states.push(RoundPlayerStateData {
                id: Uuid::new_v4(),
                round_id: round.id,
                player_id: blue(n),
                score: None,
            });
        }
    }
    states
}

pub fn snapshot(rounds: Vec<RoundData>, events: Vec<RoundEventData>) -> MatchSnapshot {
    let states = states_for(&rounds);
    MatchSnapshot {
        match_id: MATCH_ID,
        match_key: "MTCH-0001".to_owned(),
        match_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        match_type: Some("Scrim".to_owned()),
        team_red_score: 13,
        team_blue_score: 7,
        rounds,
        match_players: roster(),
        round_events: events,
        round_player_states: states,
        round_player_loadouts: Vec::new(),
        compositions: Vec::new(),
    }
}
