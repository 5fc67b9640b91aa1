use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::clutches::ClutchResult;
use crate::multikills::{aggregate_for_player_rounds, MultiKillResult};
use crate::rows::{RoundPlayerStatsRow, TeamMatchSideStatsRow};
use crate::snapshot::{
    determine_side, is_match_overtime, is_overtime_round, MatchSnapshot, Side, TeamIndex,
};
use crate::team_match::{mean_rates, PlayerRates};

/// Team stats restricted to the rounds played on one side.
pub fn build_team_match_side_stats(
    data: &MatchSnapshot,
    round_player_stats: &[RoundPlayerStatsRow],
    clutches: &[ClutchResult],
    multikills: &HashMap<Uuid, HashMap<Uuid, MultiKillResult>>,
    teams: &TeamIndex,
    now: DateTime<Utc>,
) -> Vec<TeamMatchSideStatsRow> {
    let is_match_ot = is_match_overtime(data.team_red_score, data.team_blue_score);

    let mut rows = Vec::new();

    for team_id in teams.team_ids() {
        let tag = match teams.tag_of(*team_id) {
            Some(t) => t,
            None => continue,
        };

        for side in [Side::Attack, Side::Defense] {
            let side_rounds: HashSet<Uuid> = data
                .rounds
                .iter()
                .filter(|r| determine_side(r.round_number, tag) == side)
                .map(|r| r.id)
                .collect();
            if side_rounds.is_empty() {
                continue;
            }

            let mut stats_by_player: BTreeMap<Uuid, Vec<&RoundPlayerStatsRow>> = BTreeMap::new();
            for rps in round_player_stats {
                if teams.team_of(rps.player_id) != Some(*team_id) {
                    continue;
                }
                if side_rounds.contains(&rps.round_id) {
                    stats_by_player.entry(rps.player_id).or_default().push(rps);
                }
            }

            let mut kills = 0;
            let mut deaths = 0;
            let mut damage_given = 0;
            let mut damage_taken = 0;
            let mut first_kills = 0;
            let mut first_deaths = 0;
            let mut trade_kills = 0;
            let mut traded_deaths = 0;
            let mut suicides = 0;
            let mut teammates_killed = 0;
            let mut deaths_by_spike = 0;
            let mut mk = MultiKillResult::default();
            let mut rates: Vec<PlayerRates> = Vec::new();

            for (player_id, player_rounds) in &stats_by_player {
                let mut p_kills = 0;
                let mut p_deaths = 0;
                let mut p_assists = 0;
                let mut p_damage = 0;
                let mut p_cs = 0.0;
                let p_rounds = player_rounds.len() as i32;

                for rs in player_rounds {
                    p_kills += i32::from(rs.kills);
                    p_deaths += i32::from(rs.deaths);
                    p_assists += i32::from(rs.assists);
                    p_damage += rs.damage_given;
                    p_cs += rs.cs;

                    kills += i32::from(rs.kills);
                    deaths += i32::from(rs.deaths);
                    damage_given += rs.damage_given;
                    damage_taken += rs.damage_taken;
                    trade_kills += rs.trade_kill;
                    traded_deaths += rs.traded_death;
                    suicides += rs.suicides;
                    teammates_killed += rs.teammates_killed;
                    if rs.first_kill {
                        first_kills += 1;
                    }
                    if rs.first_death {
                        first_deaths += 1;
                    }
                    if rs.killed_by_spike {
                        deaths_by_spike += 1;
                    }
                }

                mk.add(&aggregate_for_player_rounds(multikills, *player_id, &side_rounds));

                if p_rounds > 0 {
                    rates.push(PlayerRates {
                        kpr: f64::from(p_kills) / f64::from(p_rounds),
                        dpr: f64::from(p_deaths) / f64::from(p_rounds),
                        apr: f64::from(p_assists) / f64::from(p_rounds),
                        adr: f64::from(p_damage) / f64::from(p_rounds),
                        acs: p_cs / f64::from(p_rounds),
                    });
                }
            }

            let (avg_kpr, avg_dpr, avg_apr, avg_adr, avg_acs) = mean_rates(&rates);

            let rounds_played = side_rounds.len() as i32;
            let mut rounds_won = 0;
            let mut rounds_overtime_won = 0;
            let mut rounds_overtime_lost = 0;
            for round in &data.rounds {
                if !side_rounds.contains(&round.id) {
                    continue;
                }
                if round.winner_team_id == Some(*team_id) {
                    rounds_won += 1;
                    if is_overtime_round(round.round_number) {
                        rounds_overtime_won += 1;
                    }
                } else if is_overtime_round(round.round_number) {
                    rounds_overtime_lost += 1;
                }
            }
            let rounds_lost = rounds_played - rounds_won;

            let side_outcome = if rounds_won > rounds_lost {
                "Win"
            } else if rounds_lost > rounds_won {
                "Lose"
            } else {
                "Tie"
            };

            let round_win_rate = if rounds_played > 0 {
                f64::from(rounds_won) / f64::from(rounds_played) * 100.0
            } else {
                0.0
            };
            let kd = if deaths > 0 {
                f64::from(kills) / f64::from(deaths)
            } else {
                0.0
            };

            let side_clutches: Vec<&ClutchResult> = clutches
                .iter()
                .filter(|c| c.side == side && teams.team_of(c.clutcher_id) == Some(*team_id))
                .collect();
            let clutches_played = side_clutches.len() as i32;
            let clutches_won = side_clutches.iter().filter(|c| c.won).count() as i32;
            let clutches_lost = clutches_played - clutches_won;
            let clutch_win_rate = if clutches_played > 0 {
                f64::from(clutches_won) / f64::from(clutches_played) * 100.0
            } else {
                0.0
            };

            rows.push(TeamMatchSideStatsRow {
                id: Uuid::new_v4(),
                team_id: *team_id,
                match_id: data.match_id,
                match_date: data.match_date,
                match_type: data.match_type.clone(),
                team_side: side,
                side_outcome: side_outcome.to_owned(),
                rounds_played,
                rounds_won,
                rounds_lost,
                round_win_rate,
                kd,
                avg_kpr,
                avg_dpr,
                avg_apr,
                avg_adr,
                avg_acs,
                damage_delta: f64::from(damage_given - damage_taken),
                kills,
                deaths,
                damage_given,
                damage_taken,
                first_kills,
                first_deaths,
                trade_kills,
                traded_deaths,
                suicides,
                teammates_killed,
                deaths_by_spike,
                multi_kills: mk.multi_kills,
                double_kills: mk.double_kills,
                triple_kills: mk.triple_kills,
                quadra_kills: mk.quadra_kills,
                penta_kills: mk.penta_kills,
                clutches_played,
                clutches_won,
                clutches_lost,
                clutch_win_rate,
                is_match_overtime: is_match_ot,
                rounds_overtime_won,
                rounds_overtime_lost,
                created_at: now,
            });
        }
    }

    rows
}
