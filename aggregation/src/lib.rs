pub mod builder;
pub mod clutches;
pub mod denormalized;
pub mod duels;
pub mod entries;
pub mod match_player;
pub mod multikills;
pub mod round_player;
pub mod round_team;
pub mod rows;
pub mod snapshot;
pub mod team_match;
pub mod team_side;
pub mod trades;
pub mod weapons;

pub use builder::build_aggregates;
