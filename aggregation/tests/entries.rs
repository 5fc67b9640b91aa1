use pretty_assertions::assert_eq;

use aggregation::entries::compute_entries;

mod common;
use common::*;

#[test]
fn earliest_kill_is_the_entry() {
    let rounds = vec![round(0)];
    let r0 = rounds[0].id;
    let events = vec![
        damage(r0, 500, red(0), blue(0), 40, (0, 1, 0)),
        kill(r0, 4000, red(1), blue(1)),
        kill(r0, 2000, red(0), blue(0)),
    ];

    let entries = compute_entries(&rounds, &events);

    let entry = &entries[&r0];
    assert_eq!(entry.killer_id, red(0));
    assert_eq!(entry.victim_id, blue(0));
    assert_eq!(entry.timestamp_ms, 2000);
}

#[test]
fn timestamp_ties_break_by_input_order() {
    let rounds = vec![round(0)];
    let r0 = rounds[0].id;
    let events = vec![
        kill(r0, 1000, red(0), blue(0)),
        kill(r0, 1000, red(1), blue(1)),
    ];

    let entries = compute_entries(&rounds, &events);

    assert_eq!(entries[&r0].killer_id, red(0));
}

#[test]
fn rounds_without_kills_have_no_entry() {
    let rounds = vec![round(0), round(1)];
    let r1 = rounds[1].id;
    let events = vec![damage(r1, 500, red(0), blue(0), 20, (0, 1, 0))];

    let entries = compute_entries(&rounds, &events);

    assert!(entries.is_empty());
}
