use super::*;
use crate::history::Direction;
use crate::model::{Participant, ParticipantId, Side, BRIDGE_CAPACITY};

fn state_with_times(times: &[f64]) -> CrossingState {
    CrossingState::new(times.iter().enumerate().map(|(i, &t)| {
        Participant::new(ParticipantId(i), format!("P{i}"), t)
    }))
    .unwrap()
}

fn assert_all_across(log: &CrossingLog, n: usize) {
    let last = log.last().expect("non-empty log");
    assert!(last.origin().is_empty());
    assert!(last.bridge().is_empty());
    assert_eq!(last.destination().len(), n);
}

#[test]
fn nobody_to_cross() {
    let log = solve_greedy(&CrossingState::default()).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log.total_time(), 0.0);
    assert_eq!(log.snapshots()[0].population(), 0);
}

#[test]
fn single_participant_walks_alone() {
    let log = solve_greedy(&state_with_times(&[5.0])).unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log.total_time(), 5.0);
    assert_all_across(&log, 1);
}

#[test]
fn pair_travels_at_slower_pace() {
    let log = solve_greedy(&state_with_times(&[3.0, 7.0])).unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log.total_time(), 7.0);
    assert_all_across(&log, 2);
}

#[test]
fn canonical_four_takes_seventeen() {
    let log = solve_greedy(&state_with_times(&[1.0, 2.0, 5.0, 10.0])).unwrap();
    assert_eq!(log.total_time(), 17.0);
    assert_eq!(log.len(), 11);
    assert_all_across(&log, 4);

    let trips = log.trips();
    let durations: Vec<f64> = trips.iter().map(|t| t.duration).collect();
    assert_eq!(durations, vec![2.0, 1.0, 10.0, 2.0, 2.0]);
    let directions: Vec<Direction> = trips.iter().map(|t| t.direction).collect();
    assert_eq!(
        directions,
        vec![
            Direction::Forward,
            Direction::Return,
            Direction::Forward,
            Direction::Return,
            Direction::Forward,
        ]
    );
}

#[test]
fn three_participants_finish_after_slowest_pair() {
    let log = solve_greedy(&state_with_times(&[1.0, 2.0, 5.0])).unwrap();
    assert_eq!(log.total_time(), 8.0);
    assert_eq!(log.len(), 7);
    assert_all_across(&log, 3);
}

#[test]
fn five_participants_match_known_optimum() {
    let log = solve_greedy(&state_with_times(&[1.0, 2.0, 5.0, 10.0, 20.0])).unwrap();
    assert_eq!(log.total_time(), 33.0);
    assert_all_across(&log, 5);
}

#[test]
fn every_snapshot_respects_partition_and_capacity() {
    let times = [4.0, 1.0, 9.0, 2.5, 2.5, 13.0, 6.0];
    let log = solve_greedy(&state_with_times(&times)).unwrap();
    for snap in log.snapshots() {
        assert_eq!(snap.population(), times.len());
        assert!(snap.bridge().len() <= BRIDGE_CAPACITY);
    }
    assert_all_across(&log, times.len());
}

#[test]
fn input_state_is_not_mutated_and_runs_are_deterministic() {
    let initial = state_with_times(&[1.0, 2.0, 5.0, 10.0]);
    let before = initial.clone();
    let a = GreedyStrategy.solve(&initial).unwrap();
    let b = GreedyStrategy.solve(&initial.clone()).unwrap();
    assert_eq!(initial, before);
    assert_eq!(a, b);
    assert_eq!(GreedyStrategy.name(), "greedy");
}

#[test]
fn occupied_bridge_aborts_the_run() {
    let mut initial = state_with_times(&[1.0, 2.0, 5.0, 10.0]);
    let slow = initial.slowest(Side::Origin).unwrap().clone();
    let fast = initial.fastest(Side::Origin).unwrap().clone();
    initial.move_origin_to_bridge(&slow).unwrap();
    initial.move_origin_to_bridge(&fast).unwrap();
    assert_eq!(
        solve_greedy(&initial),
        Err(ContractViolation::BridgeFull {
            capacity: BRIDGE_CAPACITY
        })
    );
}
