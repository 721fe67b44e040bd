use super::*;
use crate::net::error::ApiError;
use crate::net::types::{Mark, Session};
use crate::state::board::{BoardPhase, BoardState};

// =============================================================
// Helpers
// =============================================================

fn fresh(id: String) -> Session {
    Session {
        id,
        board: [None; 9],
        current_player: Mark::X,
        winner: None,
        is_draw: false,
        status: "X to move".to_owned(),
    }
}

fn won(index: usize, mark: Mark) -> OutcomeEvent {
    OutcomeEvent { index, outcome: Outcome::Won(mark) }
}

/// Drive one meta round the way the page does: every board enters
/// `Loading`, then all nine results land together.
fn run_round(
    meta: &mut MetaState,
    boards: &mut [BoardState; BOARD_COUNT],
    results: Vec<Result<Session, ApiError>>,
) {
    let round = meta.restart();
    let generations: Vec<u64> = boards.iter_mut().map(BoardState::begin_create).collect();
    for ((board, generation), result) in boards.iter_mut().zip(generations).zip(results) {
        assert!(board.finish_create(generation, result));
    }
    assert!(meta.finish_round(round));
}

fn all_ok(prefix: &str) -> Vec<Result<Session, ApiError>> {
    (0..BOARD_COUNT).map(|i| Ok(fresh(format!("{prefix}-{i}")))).collect()
}

// =============================================================
// MetaOutcomeGrid
// =============================================================

#[test]
fn grid_default_is_all_undecided() {
    let grid = MetaOutcomeGrid::default();
    assert_eq!(grid.cells().len(), BOARD_COUNT);
    assert!(grid.cells().iter().all(|o| *o == Outcome::Undecided));
    assert_eq!(grid.decided_count(), 0);
}

#[test]
fn grid_apply_sets_slot() {
    let mut grid = MetaOutcomeGrid::default();
    assert!(grid.apply(won(4, Mark::X)));
    assert_eq!(grid.get(4), Outcome::Won(Mark::X));
    assert_eq!(grid.get(3), Outcome::Undecided);
    assert_eq!(grid.decided_count(), 1);
}

#[test]
fn grid_apply_same_value_is_idempotent() {
    let mut grid = MetaOutcomeGrid::default();
    assert!(grid.apply(won(0, Mark::O)));
    assert!(!grid.apply(won(0, Mark::O)));
    assert_eq!(grid.get(0), Outcome::Won(Mark::O));
}

#[test]
fn grid_apply_different_value_overwrites() {
    let mut grid = MetaOutcomeGrid::default();
    grid.apply(won(2, Mark::X));
    assert!(grid.apply(OutcomeEvent { index: 2, outcome: Outcome::Draw }));
    assert_eq!(grid.get(2), Outcome::Draw);
}

#[test]
fn grid_never_reverts_to_undecided_without_clear() {
    let mut grid = MetaOutcomeGrid::default();
    grid.apply(won(7, Mark::X));
    assert!(!grid.apply(OutcomeEvent { index: 7, outcome: Outcome::Undecided }));
    assert_eq!(grid.get(7), Outcome::Won(Mark::X));
}

#[test]
fn grid_ignores_out_of_range_index() {
    let mut grid = MetaOutcomeGrid::default();
    assert!(!grid.apply(won(9, Mark::X)));
    assert_eq!(grid.decided_count(), 0);
    assert_eq!(grid.get(42), Outcome::Undecided);
}

#[test]
fn grid_clear_resets_every_slot() {
    let mut grid = MetaOutcomeGrid::default();
    for index in 0..BOARD_COUNT {
        grid.apply(won(index, Mark::X));
    }
    grid.clear();
    assert_eq!(grid, MetaOutcomeGrid::default());
}

// =============================================================
// MetaState rounds
// =============================================================

#[test]
fn meta_state_default_is_not_ready() {
    let meta = MetaState::default();
    assert!(!meta.is_ready());
    assert!(!meta.is_loading());
    assert_eq!(meta.round(), 0);
}

#[test]
fn restart_clears_grid_and_loads() {
    let mut meta = MetaState::default();
    meta.on_child_outcome(won(1, Mark::O));
    let round = meta.restart();
    assert_eq!(round, 1);
    assert!(meta.is_loading());
    assert_eq!(meta.grid.decided_count(), 0);
}

#[test]
fn stale_round_completion_is_ignored() {
    let mut meta = MetaState::default();
    let first = meta.restart();
    let second = meta.restart();
    assert!(!meta.finish_round(first));
    assert!(meta.is_loading());
    assert!(meta.finish_round(second));
    assert!(meta.is_ready());
    assert!(!meta.finish_round(second));
}

#[test]
fn all_nine_creations_leave_loading() {
    let mut meta = MetaState::default();
    let mut boards: [BoardState; BOARD_COUNT] = Default::default();
    run_round(&mut meta, &mut boards, all_ok("g"));
    assert!(meta.is_ready());
    for (index, board) in boards.iter().enumerate() {
        assert_eq!(board.phase, BoardPhase::Ready);
        assert!(!board.is_waiting_for_session());
        assert_eq!(board.session.as_ref().map(|s| s.id.clone()), Some(format!("g-{index}")));
    }
}

#[test]
fn partial_failure_only_affects_failed_slot() {
    let mut meta = MetaState::default();
    let mut boards: [BoardState; BOARD_COUNT] = Default::default();
    let mut results = all_ok("g");
    results[5] = Err(ApiError::Network("connection refused".to_owned()));
    run_round(&mut meta, &mut boards, results);
    assert!(meta.is_ready());
    assert_eq!(boards[5].phase, BoardPhase::Failed);
    assert!(boards[5].error.is_some());
    assert!(
        boards
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 5)
            .all(|(_, b)| b.phase == BoardPhase::Ready)
    );

    // A per-board retry recovers the failed slot on its own.
    let generation = boards[5].begin_create();
    assert!(boards[5].finish_create(generation, Ok(fresh("retry".to_owned()))));
    assert_eq!(boards[5].phase, BoardPhase::Ready);
}

#[test]
fn child_win_updates_slot_exactly_once() {
    let mut meta = MetaState::default();
    let mut boards: [BoardState; BOARD_COUNT] = Default::default();
    run_round(&mut meta, &mut boards, all_ok("g"));

    let ticket = boards[3].begin_move(0).unwrap();
    let mut next = fresh("g-3".to_owned());
    next.board[0] = Some(Mark::X);
    next.winner = Some(Mark::X);
    assert!(boards[3].finish_move(&ticket, Ok(next)));

    let mut applied = 0;
    for _ in 0..3 {
        if let Some(outcome) = boards[3].take_outcome_report() {
            if meta.on_child_outcome(OutcomeEvent { index: 3, outcome }) {
                applied += 1;
            }
        }
    }
    assert_eq!(applied, 1);
    assert_eq!(meta.grid.get(3), Outcome::Won(Mark::X));
    assert_eq!(meta.grid.decided_count(), 1);
}

#[test]
fn reset_clears_outcomes_and_reacquires_sessions() {
    let mut meta = MetaState::default();
    let mut boards: [BoardState; BOARD_COUNT] = Default::default();
    run_round(&mut meta, &mut boards, all_ok("first"));
    meta.on_child_outcome(won(0, Mark::O));
    meta.on_child_outcome(OutcomeEvent { index: 8, outcome: Outcome::Draw });

    run_round(&mut meta, &mut boards, all_ok("second"));
    assert!(meta.grid.cells().iter().all(|o| *o == Outcome::Undecided));
    assert!(boards.iter().all(|b| b.session.as_ref().is_some_and(|s| s.id.starts_with("second-"))));
}

#[test]
fn reset_discards_in_flight_child_move() {
    let mut meta = MetaState::default();
    let mut boards: [BoardState; BOARD_COUNT] = Default::default();
    run_round(&mut meta, &mut boards, all_ok("first"));
    let ticket = boards[0].begin_move(4).unwrap();

    run_round(&mut meta, &mut boards, all_ok("second"));
    let mut late = fresh("first-0".to_owned());
    late.winner = Some(Mark::O);
    assert!(!boards[0].finish_move(&ticket, Ok(late)));
    assert_eq!(boards[0].take_outcome_report(), None);
    assert_eq!(meta.grid.get(0), Outcome::Undecided);
}

// =============================================================
// Layout
// =============================================================

#[test]
fn cell_dividers_follow_three_by_three() {
    assert_eq!(cell_dividers(0), (true, true));
    assert_eq!(cell_dividers(2), (false, true));
    assert_eq!(cell_dividers(6), (true, false));
    assert_eq!(cell_dividers(8), (false, false));
}
