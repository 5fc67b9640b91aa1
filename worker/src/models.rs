use diesel::prelude::*;

use aggregation::rows;

// Canonical rows, read-only.

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MatchRow {
    pub id: uuid::Uuid,
    pub match_id: String,
    pub match_type: Option<String>,
    pub match_date: chrono::NaiveDate,
    pub team_red_score: i16,
    pub team_blue_score: i16,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::rounds)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoundRow {
    pub id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub round_number: i16,
    pub winner: Option<uuid::Uuid>,
    pub winning_team: Option<String>,
    pub win_method: Option<String>,
    pub spike_event: Option<String>,
    pub plant_time_ms: Option<i64>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::match_players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MatchPlayerRow {
    pub id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub player_id: uuid::Uuid,
    pub team_id: Option<uuid::Uuid>,
    pub team_tag: Option<String>,
    pub agent_id: Option<uuid::Uuid>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::asset_agents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AssetAgentRow {
    pub id: uuid::Uuid,
    pub name: String,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::round_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoundEventRow {
    pub id: uuid::Uuid,
    pub round_id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub timestamp_ms: i64,
    pub event_type: String,
    pub player_id: uuid::Uuid,
    pub victim_id: Option<uuid::Uuid>,
    pub damage_given: Option<i32>,
    pub headshot: Option<i32>,
    pub bodyshot: Option<i32>,
    pub legshot: Option<i32>,
    pub weapon: Option<String>,
    pub weapon_id: Option<uuid::Uuid>,
    pub weapon_category: Option<String>,
    pub assistants: Option<Vec<uuid::Uuid>>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::round_player_state)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoundPlayerStateRow {
    pub id: uuid::Uuid,
    pub round_id: uuid::Uuid,
    pub player_id: uuid::Uuid,
    pub score: Option<i32>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::round_player_loadouts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoundPlayerLoadoutRow {
    pub round_player_id: uuid::Uuid,
    pub loadout_id: Option<uuid::Uuid>,
    pub value: Option<i32>,
    pub remaining: Option<i32>,
    pub spent: Option<i32>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::compositions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompositionRow {
    pub id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub team_tag: String,
    pub agent_list_hash: String,
}

// Aggregate rows, insert-only. Each converts from the kernel's output row.

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::clutches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Clutch {
    pub id: uuid::Uuid,
    pub round_id: uuid::Uuid,
    pub player_id: uuid::Uuid,
    pub side: String,
    pub won: bool,
    pub is_clutcher: bool,
    pub situation: String,
    pub clutch_type: i16,
    pub clutch_start_time_ms: i64,
    pub clutch_end_time_ms: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::ClutchRow> for Clutch {
    fn from(r: &rows::ClutchRow) -> Self {
        Self {
            id: r.id,
            round_id: r.round_id,
            player_id: r.player_id,
            side: r.side.as_str().to_owned(),
            won: r.won,
            is_clutcher: r.is_clutcher,
            situation: r.situation.clone(),
            clutch_type: r.clutch_type,
            clutch_start_time_ms: r.clutch_start_time_ms,
            clutch_end_time_ms: r.clutch_end_time_ms,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::round_player_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoundPlayerStats {
    pub id: uuid::Uuid,
    pub round_id: uuid::Uuid,
    pub player_id: uuid::Uuid,
    pub loadout_id: Option<uuid::Uuid>,
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
    pub clutch_id: Option<uuid::Uuid>,
    pub credits_spent: i32,
    pub credits_remaining: i32,
    pub is_overtime: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::RoundPlayerStatsRow> for RoundPlayerStats {
    fn from(r: &rows::RoundPlayerStatsRow) -> Self {
        Self {
            id: r.id,
            round_id: r.round_id,
            player_id: r.player_id,
            loadout_id: r.loadout_id,
            agent: r.agent.clone(),
            cs: r.cs,
            kills: r.kills,
            deaths: r.deaths,
            assists: r.assists,
            headshot_percent: r.headshot_percent,
            headshot_kills: r.headshot_kills,
            bodyshot_kills: r.bodyshot_kills,
            legshot_kills: r.legshot_kills,
            headshot_hit: r.headshot_hit,
            bodyshot_hit: r.bodyshot_hit,
            legshot_hit: r.legshot_hit,
            damage_given: r.damage_given,
            damage_taken: r.damage_taken,
            survived: r.survived,
            first_kill: r.first_kill,
            first_death: r.first_death,
            suicides: r.suicides,
            deaths_by_teammate: r.deaths_by_teammate,
            teammates_killed: r.teammates_killed,
            killed_by_spike: r.killed_by_spike,
            trade_kill: r.trade_kill,
            traded_death: r.traded_death,
            clutch_id: r.clutch_id,
            credits_spent: r.credits_spent,
            credits_remaining: r.credits_remaining,
            is_overtime: r.is_overtime,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::round_team_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoundTeamStats {
    pub id: uuid::Uuid,
    pub round_id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub match_date: chrono::NaiveDate,
    pub team_id: uuid::Uuid,
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
    pub side: String,
    pub situation: String,
    pub round_won: bool,
    pub is_overtime: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::RoundTeamStatsRow> for RoundTeamStats {
    fn from(r: &rows::RoundTeamStatsRow) -> Self {
        Self {
            id: r.id,
            round_id: r.round_id,
            match_id: r.match_id,
            match_date: r.match_date,
            team_id: r.team_id,
            team_tag: r.team_tag.clone(),
            credits_spent: r.credits_spent,
            credits_remaining: r.credits_remaining,
            buy_type: r.buy_type.clone(),
            kills: r.kills,
            deaths: r.deaths,
            assists: r.assists,
            damage_given: r.damage_given,
            damage_taken: r.damage_taken,
            first_kills: r.first_kills,
            first_deaths: r.first_deaths,
            trade_kills: r.trade_kills,
            traded_deaths: r.traded_deaths,
            side: r.side.as_str().to_owned(),
            situation: r.situation.clone(),
            round_won: r.round_won,
            is_overtime: r.is_overtime,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::match_player_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MatchPlayerStats {
    pub id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub match_date: chrono::NaiveDate,
    pub player_id: uuid::Uuid,
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
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::MatchPlayerStatsRow> for MatchPlayerStats {
    fn from(r: &rows::MatchPlayerStatsRow) -> Self {
        Self {
            id: r.id,
            match_id: r.match_id,
            match_date: r.match_date,
            player_id: r.player_id,
            acs: r.acs,
            kd: r.kd,
            kast: r.kast,
            adr: r.adr,
            kills: r.kills,
            deaths: r.deaths,
            assists: r.assists,
            first_kills: r.first_kills,
            first_deaths: r.first_deaths,
            trade_kills: r.trade_kills,
            traded_deaths: r.traded_deaths,
            suicides: r.suicides,
            teammates_killed: r.teammates_killed,
            deaths_by_spike: r.deaths_by_spike,
            multi_kills: r.multi_kills,
            double_kills: r.double_kills,
            triple_kills: r.triple_kills,
            quadra_kills: r.quadra_kills,
            penta_kills: r.penta_kills,
            clutches_played: r.clutches_played,
            clutches_won: r.clutches_won,
            v1_played: r.v1_played,
            v1_won: r.v1_won,
            v2_played: r.v2_played,
            v2_won: r.v2_won,
            v3_played: r.v3_played,
            v3_won: r.v3_won,
            v4_played: r.v4_played,
            v4_won: r.v4_won,
            v5_played: r.v5_played,
            v5_won: r.v5_won,
            headshot_percent: r.headshot_percent,
            headshot_kills: r.headshot_kills,
            bodyshot_kills: r.bodyshot_kills,
            legshot_kills: r.legshot_kills,
            headshot_hit: r.headshot_hit,
            bodyshot_hit: r.bodyshot_hit,
            legshot_hit: r.legshot_hit,
            damage_given: r.damage_given,
            damage_taken: r.damage_taken,
            rounds_played: r.rounds_played,
            rounds_won: r.rounds_won,
            round_win_rate: r.round_win_rate,
            first_kills_traded: r.first_kills_traded,
            first_deaths_traded: r.first_deaths_traded,
            flawless_rounds: r.flawless_rounds,
            mvp: r.mvp,
            match_won: r.match_won,
            is_overtime: r.is_overtime,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::team_match_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TeamMatchStats {
    pub id: uuid::Uuid,
    pub team_id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub match_date: chrono::NaiveDate,
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
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::TeamMatchStatsRow> for TeamMatchStats {
    fn from(r: &rows::TeamMatchStatsRow) -> Self {
        Self {
            id: r.id,
            team_id: r.team_id,
            match_id: r.match_id,
            match_date: r.match_date,
            match_type: r.match_type.clone(),
            rounds_played: r.rounds_played,
            rounds_won: r.rounds_won,
            rounds_lost: r.rounds_lost,
            round_win_rate: r.round_win_rate,
            kd: r.kd,
            avg_kpr: r.avg_kpr,
            avg_dpr: r.avg_dpr,
            avg_apr: r.avg_apr,
            avg_adr: r.avg_adr,
            avg_acs: r.avg_acs,
            damage_delta: r.damage_delta,
            kills: r.kills,
            deaths: r.deaths,
            damage_given: r.damage_given,
            damage_taken: r.damage_taken,
            first_kills: r.first_kills,
            first_deaths: r.first_deaths,
            trade_kills: r.trade_kills,
            traded_deaths: r.traded_deaths,
            suicides: r.suicides,
            teammates_killed: r.teammates_killed,
            deaths_by_spike: r.deaths_by_spike,
            multi_kills: r.multi_kills,
            double_kills: r.double_kills,
            triple_kills: r.triple_kills,
            quadra_kills: r.quadra_kills,
            penta_kills: r.penta_kills,
            clutches_played: r.clutches_played,
            clutches_won: r.clutches_won,
            clutches_lost: r.clutches_lost,
            clutch_win_rate: r.clutch_win_rate,
            attack_rounds_played: r.attack_rounds_played,
            attack_rounds_won: r.attack_rounds_won,
            defense_rounds_played: r.defense_rounds_played,
            defense_rounds_won: r.defense_rounds_won,
            match_won: r.match_won,
            is_overtime: r.is_overtime,
            rounds_overtime_won: r.rounds_overtime_won,
            rounds_overtime_lost: r.rounds_overtime_lost,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::team_match_side_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TeamMatchSideStats {
    pub id: uuid::Uuid,
    pub team_id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub match_date: chrono::NaiveDate,
    pub match_type: Option<String>,
    pub team_side: String,
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
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::TeamMatchSideStatsRow> for TeamMatchSideStats {
    fn from(r: &rows::TeamMatchSideStatsRow) -> Self {
        Self {
            id: r.id,
            team_id: r.team_id,
            match_id: r.match_id,
            match_date: r.match_date,
            match_type: r.match_type.clone(),
            team_side: r.team_side.as_str().to_owned(),
            side_outcome: r.side_outcome.clone(),
            rounds_played: r.rounds_played,
            rounds_won: r.rounds_won,
            rounds_lost: r.rounds_lost,
            round_win_rate: r.round_win_rate,
            kd: r.kd,
            avg_kpr: r.avg_kpr,
            avg_dpr: r.avg_dpr,
            avg_apr: r.avg_apr,
            avg_adr: r.avg_adr,
            avg_acs: r.avg_acs,
            damage_delta: r.damage_delta,
            kills: r.kills,
            deaths: r.deaths,
            damage_given: r.damage_given,
            damage_taken: r.damage_taken,
            first_kills: r.first_kills,
            first_deaths: r.first_deaths,
            trade_kills: r.trade_kills,
            traded_deaths: r.traded_deaths,
            suicides: r.suicides,
            teammates_killed: r.teammates_killed,
            deaths_by_spike: r.deaths_by_spike,
            multi_kills: r.multi_kills,
            double_kills: r.double_kills,
            triple_kills: r.triple_kills,
            quadra_kills: r.quadra_kills,
            penta_kills: r.penta_kills,
            clutches_played: r.clutches_played,
            clutches_won: r.clutches_won,
            clutches_lost: r.clutches_lost,
            clutch_win_rate: r.clutch_win_rate,
            is_match_overtime: r.is_match_overtime,
            rounds_overtime_won: r.rounds_overtime_won,
            rounds_overtime_lost: r.rounds_overtime_lost,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::match_player_duels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MatchPlayerDuel {
    pub id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub match_date: chrono::NaiveDate,
    pub player_id: uuid::Uuid,
    pub opponent_id: uuid::Uuid,
    pub kills: i32,
    pub deaths: i32,
    pub first_kills: i32,
    pub first_deaths: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub headshot_kills: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::MatchPlayerDuelsRow> for MatchPlayerDuel {
    fn from(r: &rows::MatchPlayerDuelsRow) -> Self {
        Self {
            id: r.id,
            match_id: r.match_id,
            match_date: r.match_date,
            player_id: r.player_id,
            opponent_id: r.opponent_id,
            kills: r.kills,
            deaths: r.deaths,
            first_kills: r.first_kills,
            first_deaths: r.first_deaths,
            damage_given: r.damage_given,
            damage_taken: r.damage_taken,
            headshot_kills: r.headshot_kills,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::match_player_weapon_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MatchPlayerWeaponStats {
    pub id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub match_date: chrono::NaiveDate,
    pub player_id: uuid::Uuid,
    pub weapon_id: Option<uuid::Uuid>,
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
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::MatchPlayerWeaponStatsRow> for MatchPlayerWeaponStats {
    fn from(r: &rows::MatchPlayerWeaponStatsRow) -> Self {
        Self {
            id: r.id,
            match_id: r.match_id,
            match_date: r.match_date,
            player_id: r.player_id,
            weapon_id: r.weapon_id,
            weapon_name: r.weapon_name.clone(),
            weapon_category: r.weapon_category.clone(),
            kills: r.kills,
            deaths: r.deaths,
            damage_given: r.damage_given,
            damage_taken: r.damage_taken,
            first_kills: r.first_kills,
            headshot_kills: r.headshot_kills,
            bodyshot_kills: r.bodyshot_kills,
            legshot_kills: r.legshot_kills,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::player_clutch_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlayerClutchStats {
    pub id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub match_date: chrono::NaiveDate,
    pub player_id: uuid::Uuid,
    pub clutch_type: i16,
    pub played: i32,
    pub won: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::PlayerClutchStatsRow> for PlayerClutchStats {
    fn from(r: &rows::PlayerClutchStatsRow) -> Self {
        Self {
            id: r.id,
            match_id: r.match_id,
            match_date: r.match_date,
            player_id: r.player_id,
            clutch_type: r.clutch_type,
            played: r.played,
            won: r.won,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::composition_weapon_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompositionWeaponStats {
    pub id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub match_date: chrono::NaiveDate,
    pub composition_hash: String,
    pub weapon_category: String,
    pub kills: i32,
    pub headshot_kills: i32,
    pub bodyshot_kills: i32,
    pub legshot_kills: i32,
    pub damage: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::CompositionWeaponStatsRow> for CompositionWeaponStats {
    fn from(r: &rows::CompositionWeaponStatsRow) -> Self {
        Self {
            id: r.id,
            match_id: r.match_id,
            match_date: r.match_date,
            composition_hash: r.composition_hash.clone(),
            weapon_category: r.weapon_category.clone(),
            kills: r.kills,
            headshot_kills: r.headshot_kills,
            bodyshot_kills: r.bodyshot_kills,
            legshot_kills: r.legshot_kills,
            damage: r.damage,
            created_at: r.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::composition_clutch_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompositionClutchStats {
    pub id: uuid::Uuid,
    pub match_id: uuid::Uuid,
    pub match_date: chrono::NaiveDate,
    pub composition_hash: String,
    pub clutch_type: i16,
    pub played: i32,
    pub won: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&rows::CompositionClutchStatsRow> for CompositionClutchStats {
    fn from(r: &rows::CompositionClutchStatsRow) -> Self {
        Self {
            id: r.id,
            match_id: r.match_id,
            match_date: r.match_date,
            composition_hash: r.composition_hash.clone(),
            clutch_type: r.clutch_type,
            played: r.played,
            won: r.won,
            created_at: r.created_at,
        }
    }
}
