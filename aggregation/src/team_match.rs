use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::clutches::ClutchResult;
use crate::multikills::{aggregate_for_player, MultiKillResult};
use crate::rows::{RoundPlayerStatsRow, TeamMatchStatsRow};
use crate::snapshot::{
    determine_side, is_match_overtime, is_overtime_round, winning_tag, MatchSnapshot, Side,
    TeamIndex,
};

/// Per-player rates feeding the team averages.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PlayerRates {
    pub kpr: f64,
    pub dpr: f64,
    pub apr: f64,
    pub adr: f64,
    pub acs: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct TeamRoundInfo {
    total: i32,
    won: i32,
    attack_played: i32,
    attack_won: i32,
    defense_played: i32,
    defense_won: i32,
}

/// Match-level stats per team. Averages are the mean of the per-player
/// rates, not the team total over team rounds.
pub fn build_team_match_stats(
    data: &MatchSnapshot,
    round_player_stats: &[RoundPlayerStatsRow],
    clutches: &[ClutchResult],
    multikills: &HashMap<Uuid, HashMap<Uuid, MultiKillResult>>,
    teams: &TeamIndex,
    now: DateTime<Utc>,
) -> Vec<TeamMatchStatsRow> {
    let is_overtime = is_match_overtime(data.team_red_score, data.team_blue_score);
    let winner_tag = winning_tag(data.team_red_score, data.team_blue_score);

    let mut stats_by_team_player: HashMap<Uuid, BTreeMap<Uuid, Vec<&RoundPlayerStatsRow>>> =
        HashMap::new();
    for rps in round_player_stats {
        if let Some(team_id) = teams.team_of(rps.player_id) {
            stats_by_team_player
                .entry(team_id)
                .or_default()
                .entry(rps.player_id)
                .or_default()
                .push(rps);
        }
    }

    let round_info = analyze_rounds(data, teams);

    let mut clutches_by_team: HashMap<Uuid, Vec<&ClutchResult>> = HashMap::new();
    for clutch in clutches {
        if let Some(team_id) = teams.team_of(clutch.clutcher_id) {
            clutches_by_team.entry(team_id).or_default().push(clutch);
        }
    }

    let mut rows = Vec::new();

    for team_id in teams.team_ids() {
        let team_players = stats_by_team_player.get(team_id);
        let info = round_info.get(team_id).copied().unwrap_or_default();

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

        if let Some(team_players) = team_players {
            for (player_id, player_rounds) in team_players {
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

                mk.add(&aggregate_for_player(multikills, *player_id));

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
        }

        let (avg_kpr, avg_dpr, avg_apr, avg_adr, avg_acs) = mean_rates(&rates);

        let rounds_played = info.total;
        let rounds_won = info.won;
        let rounds_lost = rounds_played - rounds_won;
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

        let team_clutches = clutches_by_team.get(team_id).map(Vec::as_slice).unwrap_or(&[]);
        let clutches_played = team_clutches.len() as i32;
        let clutches_won = team_clutches.iter().filter(|c| c.won).count() as i32;
        let clutches_lost = clutches_played - clutches_won;
        let clutch_win_rate = if clutches_played > 0 {
            f64::from(clutches_won) / f64::from(clutches_played) * 100.0
        } else {
            0.0
        };

        let match_won = winner_tag.is_some() && teams.tag_of(*team_id) == winner_tag;

        let mut rounds_overtime_won = 0;
        let mut rounds_overtime_lost = 0;
        for round in &data.rounds {
            if !is_overtime_round(round.round_number) {
                continue;
            }
            if round.winner_team_id == Some(*team_id) {
                rounds_overtime_won += 1;
            } else {
                rounds_overtime_lost += 1;
            }
        }

        rows.push(TeamMatchStatsRow {
            id: Uuid::new_v4(),
            team_id: *team_id,
            match_id: data.match_id,
            match_date: data.match_date,
            match_type: data.match_type.clone(),
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
            attack_rounds_played: info.attack_played,
            attack_rounds_won: info.attack_won,
            defense_rounds_played: info.defense_played,
            defense_rounds_won: info.defense_won,
            match_won,
            is_overtime,
            rounds_overtime_won,
            rounds_overtime_lost,
            created_at: now,
        });
    }

    rows
}

pub(crate) fn mean_rates(rates: &[PlayerRates]) -> (f64, f64, f64, f64, f64) {
    if rates.is_empty() {
        return (0.0, 0.0, 0.0, 0.0, 0.0);
    }
    let n = rates.len() as f64;
    let mut sums = PlayerRates::default();
    for r in rates {
        sums.kpr += r.kpr;
        sums.dpr += r.dpr;
        sums.apr += r.apr;
        sums.adr += r.adr;
        sums.acs += r.acs;
    }
    (sums.kpr / n, sums.dpr / n, sums.apr / n, sums.adr / n, sums.acs / n)
}

fn analyze_rounds(data: &MatchSnapshot, teams: &TeamIndex) -> HashMap<Uuid, TeamRoundInfo> {
    let mut info: HashMap<Uuid, TeamRoundInfo> = HashMap::new();

    for round in &data.rounds {
        for team_id in teams.team_ids() {
            let entry = info.entry(*team_id).or_default();
            entry.total += 1;

            let side = teams.tag_of(*team_id).map(|tag| determine_side(round.round_number, tag));
            match side {
                Some(Side::Attack) => entry.attack_played += 1,
                Some(Side::Defense) => entry.defense_played += 1,
                None => {}
            }

            if round.winner_team_id == Some(*team_id) {
                entry.won += 1;
                match side {
                    Some(Side::Attack) => entry.attack_won += 1,
                    Some(Side::Defense) => entry.defense_won += 1,
                    None => {}
                }
            }
        }
    }

    info
}
