use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::snapshot::Side;

/// One clutch participant: the clutcher or one of the opponents facing them.
#[derive(Debug, Clone, PartialEq)]
pub struct ClutchRow {
    pub id: Uuid,
    pub round_id: Uuid,
    pub player_id: Uuid,
    pub side: Side,
    pub won: bool,
    pub is_clutcher: bool,
    pub situation: String,
    pub clutch_type: i16,
    pub clutch_start_time_ms: i64,
    pub clutch_end_time_ms: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundPlayerStatsRow {
    pub id: Uuid,
    pub round_id: Uuid,
    pub player_id: Uuid,
    pub loadout_id: Option<Uuid>,
    pub agent: String,
    pub cs: f64,
    pub kills: i16,
    pub deaths: i16,
    pub assists: i16,
    pub headshot_percent: f64,
    pub headshot_kills: i32,
    pub bodyshot_kills: i32,
    pub legshot_kills: i32,
    pub headshot_hit: i32,
    pub bodyshot_hit: i32,
    pub legshot_hit: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub survived: bool,
    pub first_kill: bool,
    pub first_death: bool,
    pub suicides: i32,
    pub deaths_by_teammate: i32,
    pub teammates_killed: i32,
    pub killed_by_spike: bool,
    pub trade_kill: i32,
    pub traded_death: i32,
    pub clutch_id: Option<Uuid>,
    pub credits_spent: i32,
    pub credits_remaining: i32,
    pub is_overtime: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundTeamStatsRow {
    pub id: Uuid,
    pub round_id: Uuid,
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub team_id: Uuid,
    pub team_tag: String,
    pub credits_spent: i32,
    pub credits_remaining: i32,
    pub buy_type: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub first_kills: i32,
    pub first_deaths: i32,
    pub trade_kills: i32,
    pub traded_deaths: i32,
    pub side: Side,
    pub situation: String,
    pub round_won: bool,
    pub is_overtime: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchPlayerStatsRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub player_id: Uuid,
    pub acs: f64,
    pub kd: f64,
    pub kast: f64,
    pub adr: f64,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub first_kills: i32,
    pub first_deaths: i32,
    pub trade_kills: i32,
    pub traded_deaths: i32,
    pub suicides: i32,
    pub teammates_killed: i32,
    pub deaths_by_spike: i32,
    pub multi_kills: i32,
    pub double_kills: i32,
    pub triple_kills: i32,
    pub quadra_kills: i32,
    pub penta_kills: i32,
    pub clutches_played: i32,
    pub clutches_won: i32,
    pub v1_played: i32,
    pub v1_won: i32,
    pub v2_played: i32,
    pub v2_won: i32,
    pub v3_played: i32,
    pub v3_won: i32,
    pub v4_played: i32,
    pub v4_won: i32,
    pub v5_played: i32,
    pub v5_won: i32,
    pub headshot_percent: f64,
    pub headshot_kills: i32,
    pub bodyshot_kills: i32,
    pub legshot_kills: i32,
    pub headshot_hit: i32,
    pub bodyshot_hit: i32,
    pub legshot_hit: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub rounds_played: i32,
    pub rounds_won: i32,
    pub round_win_rate: f64,
    pub first_kills_traded: i32,
    pub first_deaths_traded: i32,
    pub flawless_rounds: i32,
    pub mvp: bool,
    pub match_won: bool,
    pub is_overtime: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMatchStatsRow {
    pub id: Uuid,
    pub team_id: Uuid,
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub match_type: Option<String>,
    pub rounds_played: i32,
    pub rounds_won: i32,
    pub rounds_lost: i32,
    pub round_win_rate: f64,
    pub kd: f64,
    pub avg_kpr: f64,
    pub avg_dpr: f64,
    pub avg_apr: f64,
    pub avg_adr: f64,
    pub avg_acs: f64,
    pub damage_delta: f64,
    pub kills: i32,
    pub deaths: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub first_kills: i32,
    pub first_deaths: i32,
    pub trade_kills: i32,
    pub traded_deaths: i32,
    pub suicides: i32,
    pub teammates_killed: i32,
    pub deaths_by_spike: i32,
    pub multi_kills: i32,
    pub double_kills: i32,
    pub triple_kills: i32,
    pub quadra_kills: i32,
    pub penta_kills: i32,
    pub clutches_played: i32,
    pub clutches_won: i32,
    pub clutches_lost: i32,
    pub clutch_win_rate: f64,
    pub attack_rounds_played: i32,
    pub attack_rounds_won: i32,
    pub defense_rounds_played: i32,
    pub defense_rounds_won: i32,
    pub match_won: bool,
    pub is_overtime: bool,
    pub rounds_overtime_won: i32,
    pub rounds_overtime_lost: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMatchSideStatsRow {
    pub id: Uuid,
    pub team_id: Uuid,
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub match_type: Option<String>,
    pub team_side: Side,
    pub side_outcome: String,
    pub rounds_played: i32,
    pub rounds_won: i32,
    pub rounds_lost: i32,
    pub round_win_rate: f64,
    pub kd: f64,
    pub avg_kpr: f64,
    pub avg_dpr: f64,
    pub avg_apr: f64,
    pub avg_adr: f64,
    pub avg_acs: f64,
    pub damage_delta: f64,
    pub kills: i32,
    pub deaths: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub first_kills: i32,
    pub first_deaths: i32,
    pub trade_kills: i32,
    pub traded_deaths: i32,
    pub suicides: i32,
    pub teammates_killed: i32,
    pub deaths_by_spike: i32,
    pub multi_kills: i32,
    pub double_kills: i32,
    pub triple_kills: i32,
    pub quadra_kills: i32,
    pub penta_kills: i32,
    pub clutches_played: i32,
    pub clutches_won: i32,
    pub clutches_lost: i32,
    pub clutch_win_rate: f64,
    pub is_match_overtime: bool,
    pub rounds_overtime_won: i32,
    pub rounds_overtime_lost: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchPlayerDuelsRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub player_id: Uuid,
    pub opponent_id: Uuid,
    pub kills: i32,
    pub deaths: i32,
    pub first_kills: i32,
    pub first_deaths: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub headshot_kills: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchPlayerWeaponStatsRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub player_id: Uuid,
    pub weapon_id: Option<Uuid>,
    pub weapon_name: String,
    pub weapon_category: Option<String>,
    pub kills: i32,
    pub deaths: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub first_kills: i32,
    pub headshot_kills: i32,
    pub bodyshot_kills: i32,
    pub legshot_kills: i32,
    pub created_at: DateTime<Utc>,
}

/// Unpivoted (player, clutch type) row for the downstream views.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerClutchStatsRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub player_id: Uuid,
    pub clutch_type: i16,
    pub played: i32,
    pub won: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositionWeaponStatsRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub composition_hash: String,
    pub weapon_category: String,
    pub kills: i32,
    pub headshot_kills: i32,
    pub bodyshot_kills: i32,
    pub legshot_kills: i32,
    pub damage: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositionClutchStatsRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub composition_hash: String,
    pub clutch_type: i16,
    pub played: i32,
    pub won: i32,
    pub created_at: DateTime<Utc>,
}

/// Everything one job writes for one match.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSet {
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub clutches: Vec<ClutchRow>,
    pub round_player_stats: Vec<RoundPlayerStatsRow>,
    pub round_team_stats: Vec<RoundTeamStatsRow>,
    pub match_player_stats: Vec<MatchPlayerStatsRow>,
    pub team_match_stats: Vec<TeamMatchStatsRow>,
    pub team_match_side_stats: Vec<TeamMatchSideStatsRow>,
    pub match_player_duels: Vec<MatchPlayerDuelsRow>,
    pub match_player_weapon_stats: Vec<MatchPlayerWeaponStatsRow>,
    pub player_clutch_stats: Vec<PlayerClutchStatsRow>,
    pub composition_weapon_stats: Vec<CompositionWeaponStatsRow>,
    pub composition_clutch_stats: Vec<CompositionClutchStatsRow>,
}
