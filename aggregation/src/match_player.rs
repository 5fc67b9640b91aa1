use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::clutches::ClutchResult;
use crate::entries::EntryResult;
use crate::multikills::{aggregate_for_player, MultiKillResult};
use crate::rows::{MatchPlayerStatsRow, RoundPlayerStatsRow};
use crate::snapshot::{is_match_overtime, winning_tag, MatchSnapshot, TeamIndex};
use crate::trades::{trade_result_for, TradeResult};

/// Match-level stats per player, aggregated from the round rows.
pub fn build_match_player_stats(
    data: &MatchSnapshot,
    round_player_stats: &[RoundPlayerStatsRow],
    clutches: &[ClutchResult],
    multikills: &HashMap<Uuid, HashMap<Uuid, MultiKillResult>>,
    entries: &HashMap<Uuid, EntryResult>,
    trades: &HashMap<Uuid, HashMap<Uuid, TradeResult>>,
    teams: &TeamIndex,
    now: DateTime<Utc>,
) -> Vec<MatchPlayerStatsRow> {
    let is_overtime = is_match_overtime(data.team_red_score, data.team_blue_score);
    let winner_tag = winning_tag(data.team_red_score, data.team_blue_score);

    // Ordered grouping keeps MVP tie-breaking stable across reprocessing.
    let mut stats_by_player: BTreeMap<Uuid, Vec<&RoundPlayerStatsRow>> = BTreeMap::new();
    let mut stats_by_round: HashMap<Uuid, Vec<&RoundPlayerStatsRow>> = HashMap::new();
    for rps in round_player_stats {
        stats_by_player.entry(rps.player_id).or_default().push(rps);
        stats_by_round.entry(rps.round_id).or_default().push(rps);
    }

    let mut clutches_by_player: HashMap<Uuid, Vec<&ClutchResult>> = HashMap::new();
    for clutch in clutches {
        clutches_by_player.entry(clutch.clutcher_id).or_default().push(clutch);
    }

    let flawless_by_team = flawless_rounds(data, &stats_by_round, teams);

    let mut rows = Vec::new();

    for (player_id, round_stats) in &stats_by_player {
        let player_id = *player_id;

        let mut cs_total = 0.0;
        let mut kills = 0;
        let mut deaths = 0;
        let mut assists = 0;
        let mut damage_given = 0;
        let mut damage_taken = 0;
        let mut first_kills = 0;
        let mut first_deaths = 0;
        let mut trade_kills = 0;
        let mut traded_deaths = 0;
        let mut headshot_kills = 0;
        let mut bodyshot_kills = 0;
        let mut legshot_kills = 0;
        let mut headshot_hit = 0;
        let mut bodyshot_hit = 0;
        let mut legshot_hit = 0;
        let mut suicides = 0;
        let mut teammates_killed = 0;
        let mut deaths_by_spike = 0;
        let mut kast_rounds = 0;

        for rs in round_stats {
            cs_total += rs.cs;
            kills += i32::from(rs.kills);
            deaths += i32::from(rs.deaths);
            assists += i32::from(rs.assists);
            damage_given += rs.damage_given;
            damage_taken += rs.damage_taken;
            trade_kills += rs.trade_kill;
            traded_deaths += rs.traded_death;
            headshot_kills += rs.headshot_kills;
            bodyshot_kills += rs.bodyshot_kills;
            legshot_kills += rs.legshot_kills;
            headshot_hit += rs.headshot_hit;
            bodyshot_hit += rs.bodyshot_hit;
            legshot_hit += rs.legshot_hit;
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
            if rs.kills > 0 || rs.assists > 0 || rs.survived || rs.traded_death > 0 {
                kast_rounds += 1;
            }
        }

        let rounds_played = round_stats.len() as i32;
        let mk = aggregate_for_player(multikills, player_id);

        let kd = if deaths > 0 {
            f64::from(kills) / f64::from(deaths)
        } else {
            0.0
        };
        let (adr, acs, kast) = if rounds_played > 0 {
            (
                f64::from(damage_given) / f64::from(rounds_played),
                cs_total / f64::from(rounds_played),
                f64::from(kast_rounds) / f64::from(rounds_played) * 100.0,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        let total_hits = headshot_hit + bodyshot_hit + legshot_hit;
        let headshot_percent = if total_hits > 0 {
            f64::from(headshot_hit) / f64::from(total_hits) * 100.0
        } else {
            0.0
        };

        let player_team = teams.team_of(player_id);
        let mut rounds_won = 0;
        if let Some(team_id) = player_team {
            rounds_won = data
                .rounds
                .iter()
                .filter(|r| r.winner_team_id == Some(team_id))
                .count() as i32;
        }
        let round_win_rate = if rounds_played > 0 {
            f64::from(rounds_won) / f64::from(rounds_played) * 100.0
        } else {
            0.0
        };

        let (first_kills_traded, first_deaths_traded) =
            traded_entry_counts(player_id, round_stats, entries, trades);

        let flawless_rounds = player_team
            .and_then(|team| flawless_by_team.get(&team).copied())
            .unwrap_or(0);

        let mut v_played = [0; 5];
        let mut v_won = [0; 5];
        let mut clutches_played = 0;
        let mut clutches_won = 0;
        for clutch in clutches_by_player.get(&player_id).map(Vec::as_slice).unwrap_or(&[]) {
            clutches_played += 1;
            if clutch.won {
                clutches_won += 1;
            }
            let slot = usize::from(clutch.clutch_type as u16).saturating_sub(1);
            if slot < 5 {
                v_played[slot] += 1;
                if clutch.won {
                    v_won[slot] += 1;
                }
            }
        }

        let player_tag = player_team.and_then(|team| teams.tag_of(team));
        let match_won = winner_tag.is_some() && player_tag == winner_tag;

        rows.push(MatchPlayerStatsRow {
            id: Uuid::new_v4(),
            match_id: data.match_id,
            match_date: data.match_date,
            player_id,
            acs,
            kd,
            kast,
            adr,
            kills,
            deaths,
            assists,
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
            v1_played: v_played[0],
            v1_won: v_won[0],
            v2_played: v_played[1],
            v2_won: v_won[1],
            v3_played: v_played[2],
            v3_won: v_won[2],
            v4_played: v_played[3],
            v4_won: v_won[3],
            v5_played: v_played[4],
            v5_won: v_won[4],
            headshot_percent,
            headshot_kills,
            bodyshot_kills,
            legshot_kills,
            headshot_hit,
            bodyshot_hit,
            legshot_hit,
            damage_given,
            damage_taken,
            rounds_played,
            rounds_won,
            round_win_rate,
            first_kills_traded,
            first_deaths_traded,
            flawless_rounds,
            mvp: false,
            match_won,
            is_overtime,
            created_at: now,
        });
    }

    mark_mvp(&mut rows, teams, winner_tag);

    rows
}

/// Rounds where a team took zero deaths, counted per team.
fn flawless_rounds(
    data: &MatchSnapshot,
    stats_by_round: &HashMap<Uuid, Vec<&RoundPlayerStatsRow>>,
    teams: &TeamIndex,
) -> HashMap<Uuid, i32> {
    let mut result = HashMap::new();

    for round in &data.rounds {
        let round_stats = match stats_by_round.get(&round.id) {
            Some(s) => s,
            None => continue,
        };

        let mut deaths_by_team: HashMap<Uuid, i32> = HashMap::new();
        for rs in round_stats {
            if let Some(team_id) = teams.team_of(rs.player_id) {
                *deaths_by_team.entry(team_id).or_default() += i32::from(rs.deaths);
            }
        }

        for (team_id, deaths) in deaths_by_team {
            if deaths == 0 {
                *result.entry(team_id).or_default() += 1;
            }
        }
    }

    result
}

/// Entry kills and entry deaths that ended up traded.
///
/// A first kill is "traded" when the entry killer died later that round and
/// that death was avenged; a first death is "traded" when the entry victim's
/// death was avenged. Both are gated strictly on the round's traded-death
/// count.
fn traded_entry_counts(
    player_id: Uuid,
    round_stats: &[&RoundPlayerStatsRow],
    entries: &HashMap<Uuid, EntryResult>,
    trades: &HashMap<Uuid, HashMap<Uuid, TradeResult>>,
) -> (i32, i32) {
    let mut first_kills_traded = 0;
    let mut first_deaths_traded = 0;

    for rs in round_stats {
        let entry = match entries.get(&rs.round_id) {
            Some(e) => e,
            None => continue,
        };
        let trade = trade_result_for(trades, rs.round_id, player_id);

        if rs.first_kill && entry.killer_id == player_id && rs.deaths > 0 && trade.traded_deaths > 0
        {
            first_kills_traded += 1;
        }
        if rs.first_death && entry.victim_id == player_id && trade.traded_deaths > 0 {
            first_deaths_traded += 1;
        }
    }

    (first_kills_traded, first_deaths_traded)
}

/// Exactly one MVP: highest ACS on the winning team, highest overall when the
/// match is tied. Earlier rows win ties.
fn mark_mvp(
    rows: &mut [MatchPlayerStatsRow],
    teams: &TeamIndex,
    winner_tag: Option<crate::snapshot::TeamTag>,
) {
    let mut best: Option<usize> = None;
    let mut best_acs = -1.0;

    for (i, row) in rows.iter().enumerate() {
        if let Some(winner) = winner_tag {
            let tag = teams.team_of(row.player_id).and_then(|team| teams.tag_of(team));
            if tag != Some(winner) {
                continue;
            }
        }
        if row.acs > best_acs {
            best_acs = row.acs;
            best = Some(i);
        }
    }

    if let Some(i) = best {
        rows[i].mvp = true;
    }
}
