//! End-to-end game scenarios against the public API.

use cw_core::{
    AggregateReport, ChamberEngine, ChamberError, ChamberState, Estimate, Knowledge, Odds,
    Probability, RoundKind,
};

#[test]
fn one_and_one_disclosure_scenario() {
    let mut state = ChamberState::create(1, 1).unwrap();

    let next = state.report().next.unwrap();
    assert_eq!(next.estimate.odds(), Odds::from_counts(1, 1).unwrap());
    assert_eq!(next.estimate.odds().lethal.to_string(), "50.0%");

    state.reveal_next(Some(RoundKind::Lethal)).unwrap();
    let next = state.report().next.unwrap();
    assert_eq!(next.estimate.odds().lethal, Probability::ONE);
    assert_eq!(next.estimate.odds().harmless, Probability::ZERO);

    let before = state.clone();
    assert_eq!(
        state.fire(RoundKind::Harmless),
        Err(ChamberError::TypeMismatch {
            position: 0,
            actual: RoundKind::Lethal,
            chosen: RoundKind::Harmless,
        })
    );
    assert_eq!(state, before);

    state.fire(RoundKind::Lethal).unwrap();
    assert_eq!(state.remaining_counts().lethal, 0);
    assert_eq!(state.remaining_counts().harmless, 1);
}

#[test]
fn two_and_eight_exclusion_scenario() {
    let mut state = ChamberState::create(2, 8).unwrap();
    for _ in 0..8 {
        state.fire(RoundKind::Harmless).unwrap();
    }
    assert_eq!(state.remaining_counts().harmless, 0);

    let report = state.report();
    let next = report.next.unwrap();
    assert_eq!(
        next.estimate,
        Estimate::Excluded {
            kind: RoundKind::Lethal
        }
    );
    assert_eq!(next.estimate.odds().lethal.to_string(), "100.0%");
    assert_eq!(report.positions.len(), 2);
    for pos in &report.positions {
        assert_eq!(
            state.at(pos.position).unwrap().knowledge(),
            Knowledge::Unknown
        );
        assert_eq!(pos.estimate.odds().lethal, Probability::ONE);
    }
}

#[test]
fn reveal_at_bad_positions_leaves_state_alone() {
    let mut state = ChamberState::create(2, 2).unwrap();
    state.fire(RoundKind::Lethal).unwrap();
    let before = state.clone();

    for position in [0, 4, 100] {
        assert!(matches!(
            state.reveal_at(position, Some(RoundKind::Harmless)),
            Err(ChamberError::InvalidPosition { .. })
        ));
    }
    assert_eq!(state, before);
}

#[test]
fn aggregate_and_unknown_odds_diverge_after_disclosure() {
    let mut state = ChamberState::create(3, 3).unwrap();
    state.reveal_at(5, Some(RoundKind::Lethal)).unwrap();
    state.reveal_at(4, Some(RoundKind::Lethal)).unwrap();

    let report = state.report();
    match report.aggregate {
        AggregateReport::Remaining { odds, .. } => {
            assert_eq!(odds.lethal, Probability::new(1, 2).unwrap());
        }
        AggregateReport::Exhausted => panic!("rounds remain"),
    }
    let next = report.next.unwrap().estimate.odds();
    assert_eq!(next.lethal, Probability::new(1, 4).unwrap());
    assert_eq!(next.harmless.to_string(), "75.0%");
}

#[test]
fn full_game_through_engine() {
    let mut engine = ChamberEngine::new();
    engine.start_game(2, 3).unwrap();

    engine.reveal_next(Some(RoundKind::Harmless)).unwrap();
    engine.fire(RoundKind::Harmless).unwrap();
    engine.reveal_at(4, Some(RoundKind::Lethal)).unwrap();
    engine.fire(RoundKind::Lethal).unwrap();
    engine.fire(RoundKind::Harmless).unwrap();

    // One harmless left hidden at position 3; position 4 is the disclosed lethal.
    let snap = engine.snapshot().unwrap();
    assert_eq!(snap.unknown_remaining, 1);
    assert!(!snap.fire_options.lethal);
    assert!(snap.fire_options.harmless);

    engine.fire(RoundKind::Harmless).unwrap();
    engine.fire(RoundKind::Lethal).unwrap();
    let state = engine.state().unwrap();
    assert!(state.is_exhausted());
    assert!(state.check_invariants().is_ok());
    assert_eq!(engine.report().unwrap().aggregate, AggregateReport::Exhausted);

    engine.reset();
    assert!(engine.state().is_err());
}
