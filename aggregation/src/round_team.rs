use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::rows::{RoundPlayerStatsRow, RoundTeamStatsRow};
use crate::snapshot::{determine_side, is_overtime_round, MatchSnapshot, Side, TeamIndex};

/// Economy classification from the team's total spend. The first round of
/// each half is always a pistol round, whatever was spent.
pub fn classify_buy_type(round_number: i16, credits_spent: i32) -> &'static str {
    if round_number == 0 || round_number == 12 {
        return "Pistol";
    }
    if credits_spent < 1000 {
        return "DRY";
    }
    if credits_spent < 3000 {
        return "ECO";
    }
    if credits_spent < 15000 {
        return "SEMI";
    }
    "FULL"
}

/// Tactical situation from the side and whether the spike went down.
pub fn classify_situation(side: Side, spike_planted: bool) -> &'static str {
    match (side, spike_planted) {
        (Side::Attack, false) => "Pre-Plant",
        (Side::Attack, true) => "Post-Plant",
        (Side::Defense, false) => "Def Holds",
        (Side::Defense, true) => "Def Retakes",
    }
}

/// Team-level stats per round, summed from the round player rows.
pub fn build_round_team_stats(
    data: &MatchSnapshot,
    round_player_stats: &[RoundPlayerStatsRow],
    teams: &TeamIndex,
    now: DateTime<Utc>,
) -> Vec<RoundTeamStatsRow> {
    let mut by_round_team: HashMap<(Uuid, Uuid), Vec<&RoundPlayerStatsRow>> = HashMap::new();
    for rps in round_player_stats {
        if let Some(team_id) = teams.team_of(rps.player_id) {
            by_round_team.entry((rps.round_id, team_id)).or_default().push(rps);
        }
    }

    let mut rows = Vec::new();

    for round in &data.rounds {
        for team_id in teams.team_ids() {
            let team_stats = match by_round_team.get(&(round.id, *team_id)) {
                Some(s) if !s.is_empty() => s,
                _ => continue,
            };
            let tag = match teams.tag_of(*team_id) {
                Some(t) => t,
                None => continue,
            };

            let mut kills = 0;
            let mut deaths = 0;
            let mut assists = 0;
            let mut damage_given = 0;
            let mut damage_taken = 0;
            let mut credits_spent = 0;
            let mut credits_remaining = 0;
            let mut first_kills = 0;
            let mut first_deaths = 0;
            let mut trade_kills = 0;
            let mut traded_deaths = 0;

            for rs in team_stats {
                kills += i32::from(rs.kills);
                deaths += i32::from(rs.deaths);
                assists += i32::from(rs.assists);
                damage_given += rs.damage_given;
                damage_taken += rs.damage_taken;
                credits_spent += rs.credits_spent;
                credits_remaining += rs.credits_remaining;
                trade_kills += rs.trade_kill;
                traded_deaths += rs.traded_death;
                if rs.first_kill {
                    first_kills += 1;
                }
                if rs.first_death {
                    first_deaths += 1;
                }
            }

            let side = determine_side(round.round_number, tag);

            rows.push(RoundTeamStatsRow {
                id: Uuid::new_v4(),
                round_id: round.id,
                match_id: data.match_id,
                match_date: data.match_date,
                team_id: *team_id,
                team_tag: tag.as_upper_str().to_owned(),
                credits_spent,
                credits_remaining,
                buy_type: classify_buy_type(round.round_number, credits_spent).to_owned(),
                kills,
                deaths,
                assists,
                damage_given,
                damage_taken,
                first_kills,
                first_deaths,
                trade_kills,
                traded_deaths,
                side,
                situation: classify_situation(side, round.plant_time_ms.is_some()).to_owned(),
                round_won: round.winner_team_id == Some(*team_id),
                is_overtime: is_overtime_round(round.round_number),
                created_at: now,
            });
        }
    }

    rows
}
