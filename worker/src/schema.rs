// Canonical source tables, written by the ingest worker.

diesel::table! {
    matches (id) {
        id -> Uuid,
        match_id -> Text,
        match_type -> Nullable<Text>,
        match_date -> Date,
        team_red_score -> SmallInt,
        team_blue_score -> SmallInt,
    }
}

diesel::table! {
    rounds (id) {
        id -> Uuid,
        match_id -> Uuid,
        round_number -> SmallInt,
        winner -> Nullable<Uuid>,
        winning_team -> Nullable<Text>,
        win_method -> Nullable<Text>,
        spike_event -> Nullable<Text>,
        plant_time_ms -> Nullable<BigInt>,
    }
}

diesel::table! {
    match_players (id) {
        id -> Uuid,
        match_id -> Uuid,
        player_id -> Uuid,
        team_id -> Nullable<Uuid>,
        team_tag -> Nullable<Text>,
        agent_id -> Nullable<Uuid>,
    }
}

diesel::table! {
    asset_agents (id) {
        id -> Uuid,
        name -> Text,
    }
}

diesel::table! {
    round_events (id) {
        id -> Uuid,
        round_id -> Uuid,
        match_id -> Uuid,
        timestamp_ms -> BigInt,
        event_type -> Text,
        player_id -> Uuid,
        victim_id -> Nullable<Uuid>,
        damage_given -> Nullable<Integer>,
        headshot -> Nullable<Integer>,
        bodyshot -> Nullable<Integer>,
        legshot -> Nullable<Integer>,
        weapon -> Nullable<Text>,
        weapon_id -> Nullable<Uuid>,
        weapon_category -> Nullable<Text>,
        assistants -> Nullable<Array<Uuid>>,
    }
}

diesel::table! {
    round_player_state (id) {
        id -> Uuid,
        round_id -> Uuid,
        player_id -> Uuid,
        score -> Nullable<Integer>,
    }
}

diesel::table! {
    round_player_loadouts (round_player_id) {
        round_player_id -> Uuid,
        loadout_id -> Nullable<Uuid>,
        value -> Nullable<Integer>,
        remaining -> Nullable<Integer>,
        spent -> Nullable<Integer>,
    }
}

diesel::table! {
    compositions (id) {
        id -> Uuid,
        match_id -> Uuid,
        team_tag -> Text,
        agent_list_hash -> Text,
    }
}

// Aggregate output tables, owned by this worker.

diesel::table! {
    clutches (id) {
        id -> Uuid,
        round_id -> Uuid,
        player_id -> Uuid,
        side -> Text,
        won -> Bool,
        is_clutcher -> Bool,
        situation -> Text,
        clutch_type -> SmallInt,
        clutch_start_time_ms -> BigInt,
        clutch_end_time_ms -> BigInt,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    round_player_stats (id) {
        id -> Uuid,
        round_id -> Uuid,
        player_id -> Uuid,
        loadout_id -> Nullable<Uuid>,
        agent -> Text,
        cs -> Double,
        kills -> SmallInt,
        deaths -> SmallInt,
        assists -> SmallInt,
        headshot_percent -> Double,
        headshot_kills -> Integer,
        bodyshot_kills -> Integer,
        legshot_kills -> Integer,
        headshot_hit -> Integer,
        bodyshot_hit -> Integer,
        legshot_hit -> Integer,
        damage_given -> Integer,
        damage_taken -> Integer,
        survived -> Bool,
        first_kill -> Bool,
        first_death -> Bool,
        suicides -> Integer,
        deaths_by_teammate -> Integer,
        teammates_killed -> Integer,
        killed_by_spike -> Bool,
        trade_kill -> Integer,
        traded_death -> Integer,
        clutch_id -> Nullable<Uuid>,
        credits_spent -> Integer,
        credits_remaining -> Integer,
        is_overtime -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    round_team_stats (id) {
        id -> Uuid,
        round_id -> Uuid,
        match_id -> Uuid,
        match_date -> Date,
        team_id -> Uuid,
        team_tag -> Text,
        credits_spent -> Integer,
        credits_remaining -> Integer,
        buy_type -> Text,
        kills -> Integer,
        deaths -> Integer,
        assists -> Integer,
        damage_given -> Integer,
        damage_taken -> Integer,
        first_kills -> Integer,
        first_deaths -> Integer,
        trade_kills -> Integer,
        traded_deaths -> Integer,
        side -> Text,
        situation -> Text,
        round_won -> Bool,
        is_overtime -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    match_player_stats (id) {
        id -> Uuid,
        match_id -> Uuid,
        match_date -> Date,
        player_id -> Uuid,
        acs -> Double,
        kd -> Double,
        kast -> Double,
        adr -> Double,
        kills -> Integer,
        deaths -> Integer,
        assists -> Integer,
        first_kills -> Integer,
        first_deaths -> Integer,
        trade_kills -> Integer,
        traded_deaths -> Integer,
        suicides -> Integer,
        teammates_killed -> Integer,
        deaths_by_spike -> Integer,
        multi_kills -> Integer,
        double_kills -> Integer,
        triple_kills -> Integer,
        quadra_kills -> Integer,
        penta_kills -> Integer,
        clutches_played -> Integer,
        clutches_won -> Integer,
        v1_played -> Integer,
        v1_won -> Integer,
        v2_played -> Integer,
        v2_won -> Integer,
        v3_played -> Integer,
        v3_won -> Integer,
        v4_played -> Integer,
        v4_won -> Integer,
        v5_played -> Integer,
        v5_won -> Integer,
        headshot_percent -> Double,
        headshot_kills -> Integer,
        bodyshot_kills -> Integer,
        legshot_kills -> Integer,
        headshot_hit -> Integer,
        bodyshot_hit -> Integer,
        legshot_hit -> Integer,
        damage_given -> Integer,
        damage_taken -> Integer,
        rounds_played -> Integer,
        rounds_won -> Integer,
        round_win_rate -> Double,
        first_kills_traded -> Integer,
        first_deaths_traded -> Integer,
        flawless_rounds -> Integer,
        mvp -> Bool,
        match_won -> Bool,
        is_overtime -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    team_match_stats (id) {
        id -> Uuid,
        team_id -> Uuid,
        match_id -> Uuid,
        match_date -> Date,
        match_type -> Nullable<Text>,
        rounds_played -> Integer,
        rounds_won -> Integer,
        rounds_lost -> Integer,
        round_win_rate -> Double,
        kd -> Double,
        avg_kpr -> Double,
        avg_dpr -> Double,
        avg_apr -> Double,
        avg_adr -> Double,
        avg_acs -> Double,
        damage_delta -> Double,
        kills -> Integer,
        deaths -> Integer,
        damage_given -> Integer,
        damage_taken -> Integer,
        first_kills -> Integer,
        first_deaths -> Integer,
        trade_kills -> Integer,
        traded_deaths -> Integer,
        suicides -> Integer,
        teammates_killed -> Integer,
        deaths_by_spike -> Integer,
        multi_kills -> Integer,
        double_kills -> Integer,
        triple_kills -> Integer,
        quadra_kills -> Integer,
        penta_kills -> Integer,
        clutches_played -> Integer,
        clutches_won -> Integer,
        clutches_lost -> Integer,
        clutch_win_rate -> Double,
        attack_rounds_played -> Integer,
        attack_rounds_won -> Integer,
        defense_rounds_played -> Integer,
        defense_rounds_won -> Integer,
        match_won -> Bool,
        is_overtime -> Bool,
        rounds_overtime_won -> Integer,
        rounds_overtime_lost -> Integer,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    team_match_side_stats (id) {
        id -> Uuid,
        team_id -> Uuid,
        match_id -> Uuid,
        match_date -> Date,
        match_type -> Nullable<Text>,
        team_side -> Text,
        side_outcome -> Text,
        rounds_played -> Integer,
        rounds_won -> Integer,
        rounds_lost -> Integer,
        round_win_rate -> Double,
        kd -> Double,
        avg_kpr -> Double,
        avg_dpr -> Double,
        avg_apr -> Double,
        avg_adr -> Double,
        avg_acs -> Double,
        damage_delta -> Double,
        kills -> Integer,
        deaths -> Integer,
        damage_given -> Integer,
        damage_taken -> Integer,
        first_kills -> Integer,
        first_deaths -> Integer,
        trade_kills -> Integer,
        traded_deaths -> Integer,
        suicides -> Integer,
        teammates_killed -> Integer,
        deaths_by_spike -> Integer,
        multi_kills -> Integer,
        double_kills -> Integer,
        triple_kills -> Integer,
        quadra_kills -> Integer,
        penta_kills -> Integer,
        clutches_played -> Integer,
        clutches_won -> Integer,
        clutches_lost -> Integer,
        clutch_win_rate -> Double,
        is_match_overtime -> Bool,
        rounds_overtime_won -> Integer,
        rounds_overtime_lost -> Integer,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    match_player_duels (id) {
        id -> Uuid,
        match_id -> Uuid,
        match_date -> Date,
        player_id -> Uuid,
        opponent_id -> Uuid,
        kills -> Integer,
        deaths -> Integer,
        first_kills -> Integer,
        first_deaths -> Integer,
        damage_given -> Integer,
        damage_taken -> Integer,
        headshot_kills -> Integer,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    match_player_weapon_stats (id) {
        id -> Uuid,
        match_id -> Uuid,
        match_date -> Date,
        player_id -> Uuid,
        weapon_id -> Nullable<Uuid>,
        weapon_name -> Text,
        weapon_category -> Nullable<Text>,
        kills -> Integer,
        deaths -> Integer,
        damage_given -> Integer,
        damage_taken -> Integer,
        first_kills -> Integer,
        headshot_kills -> Integer,
        bodyshot_kills -> Integer,
        legshot_kills -> Integer,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    player_clutch_stats (id) {
        id -> Uuid,
        match_id -> Uuid,
        match_date -> Date,
        player_id -> Uuid,
        clutch_type -> SmallInt,
        played -> Integer,
        won -> Integer,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    composition_weapon_stats (id) {
        id -> Uuid,
        match_id -> Uuid,
        match_date -> Date,
        composition_hash -> Text,
        weapon_category -> Text,
        kills -> Integer,
        headshot_kills -> Integer,
        bodyshot_kills -> Integer,
        legshot_kills -> Integer,
        damage -> Integer,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    composition_clutch_stats (id) {
        id -> Uuid,
        match_id -> Uuid,
        match_date -> Date,
        composition_hash -> Text,
        clutch_type -> SmallInt,
        played -> Integer,
        won -> Integer,
        created_at -> Timestamptz,
    }
}
