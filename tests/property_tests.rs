//! Property-based tests for table counting and the fire engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated tables.

use fsm_table::core::{FireResult, Fsm, FsmError, Guard, StateId, Transition};
use fsm_table::table::{count_transitions, edges, MAX_TRANSITIONS};
use proptest::prelude::*;

fn pass(_: &Fsm<'_, ()>) -> bool {
    true
}

fn block(_: &Fsm<'_, ()>) -> bool {
    false
}

/// Row description: origin, dest and whether the guard passes
/// (`None` means no guard).
type Row = (StateId, StateId, Option<bool>);

fn build(rows: &[Row]) -> Vec<Transition<()>> {
    let mut table: Vec<Transition<()>> = rows
        .iter()
        .map(|&(origin, dest, guard)| {
            let guard = guard.map(|passes| Guard::new(if passes { pass } else { block }));
            Transition::new(origin, guard, dest, None)
        })
        .collect();
    table.push(Transition::SENTINEL);
    table
}

prop_compose! {
    fn arbitrary_row()(
        origin in 0..6i32,
        dest in 0..6i32,
        guard in prop::option::of(any::<bool>()),
    ) -> Row {
        (origin, dest, guard)
    }
}

/// Expected outcome of one fire pass, computed directly from the rows.
fn expected(rows: &[Row], state: StateId) -> (FireResult, StateId) {
    let mut matched = false;
    for &(origin, dest, guard) in rows {
        if origin != state {
            continue;
        }
        matched = true;
        if guard.unwrap_or(true) {
            return (FireResult::Fired, dest);
        }
    }
    if matched {
        (FireResult::Blocked, state)
    } else {
        (FireResult::NoTransition, state)
    }
}

proptest! {
    #[test]
    fn count_matches_valid_records(valid in 1..=MAX_TRANSITIONS, trailing in 0..4usize) {
        let mut table: Vec<Transition<()>> = (0..valid as StateId)
            .map(|i| Transition::always(i, i + 1))
            .collect();
        table.extend(std::iter::repeat(Transition::SENTINEL).take(trailing + 1));

        prop_assert_eq!(count_transitions(&table), Ok(valid));
    }

    #[test]
    fn count_fails_above_maximum(extra in 1..64usize) {
        let valid = MAX_TRANSITIONS + extra;
        let mut table: Vec<Transition<()>> = (0..valid as StateId)
            .map(|i| Transition::always(i, i + 1))
            .collect();
        table.push(Transition::SENTINEL);

        prop_assert_eq!(
            count_transitions(&table),
            Err(FsmError::TableTooLarge { max: MAX_TRANSITIONS })
        );
    }

    #[test]
    fn fire_follows_first_passing_record(
        rows in prop::collection::vec(arbitrary_row(), 1..12),
        state in 0..6i32,
    ) {
        let table = build(&rows);
        let mut fsm = Fsm::new(&table, ()).unwrap();
        fsm.set_state(state);

        let (result, next) = expected(&rows, state);

        prop_assert_eq!(fsm.fire(), result);
        prop_assert_eq!(fsm.current_state(), next);
    }

    #[test]
    fn unfired_pass_keeps_state(
        rows in prop::collection::vec(arbitrary_row(), 1..12),
        state in 0..6i32,
    ) {
        let table = build(&rows);
        let mut fsm = Fsm::new(&table, ()).unwrap();
        fsm.set_state(state);

        if !fsm.fire().fired() {
            prop_assert_eq!(fsm.current_state(), state);
        }
    }

    #[test]
    fn new_starts_in_first_origin(rows in prop::collection::vec(arbitrary_row(), 1..12)) {
        let table = build(&rows);
        let fsm = Fsm::new(&table, ()).unwrap();

        prop_assert_eq!(fsm.current_state(), rows[0].0);
    }

    #[test]
    fn edges_mirror_rows(rows in prop::collection::vec(arbitrary_row(), 1..12)) {
        let table = build(&rows);
        let described = edges(&table);

        prop_assert_eq!(described.len(), rows.len());
        for (edge, &(origin, dest, guard)) in described.iter().zip(&rows) {
            prop_assert_eq!(edge.origin, origin);
            prop_assert_eq!(edge.dest, dest);
            prop_assert_eq!(edge.guarded, guard.is_some());
            prop_assert!(!edge.has_action);
        }
    }
}
