use std::collections::HashMap;

use uuid::Uuid;

use crate::snapshot::{events_by_round, kill_events, RoundData, RoundEventData};

/// First kill of a round and its victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryResult {
    pub round_id: Uuid,
    pub killer_id: Uuid,
    pub victim_id: Uuid,
    pub timestamp_ms: i64,
}

/// Entry kill per round: the kill with the lowest timestamp, ties broken by
/// input order. Rounds without kills produce no entry.
pub fn compute_entries(
    rounds: &[RoundData],
    events: &[RoundEventData],
) -> HashMap<Uuid, EntryResult> {
    let by_round = events_by_round(events);
    let mut results = HashMap::new();

    for round in rounds {
        let round_events = match by_round.get(&round.id) {
            Some(e) => e,
            None => continue,
        };
        let kills = kill_events(round_events);
        let first = match kills.first() {
            Some(k) => k,
            None => continue,
        };

        results.insert(
            round.id,
            EntryResult {
                round_id: round.id,
                killer_id: first.killer_id,
                victim_id: first.victim_id,
                timestamp_ms: first.timestamp_ms,
            },
        );
    }

    results
}
