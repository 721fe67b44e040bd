use super::*;
use crate::net::types::Mark;
use crate::state::outcome::Outcome;

#[test]
fn headline_before_first_round() {
    let meta = MetaState::default();
    assert_eq!(round_headline(&meta, 0), "Starting games... 0/9 ready");
}

#[test]
fn headline_while_loading_counts_ready_boards() {
    let mut meta = MetaState::default();
    meta.restart();
    assert_eq!(round_headline(&meta, 4), "Starting games... 4/9 ready");
}

#[test]
fn headline_counts_decided_boards() {
    let mut meta = MetaState::default();
    let round = meta.restart();
    meta.finish_round(round);
    assert_eq!(round_headline(&meta, 9), "0/9 boards decided");
    meta.on_child_outcome(OutcomeEvent { index: 0, outcome: Outcome::Won(Mark::X) });
    meta.on_child_outcome(OutcomeEvent { index: 1, outcome: Outcome::Draw });
    assert_eq!(round_headline(&meta, 9), "2/9 boards decided");
}

#[test]
fn headline_when_every_board_decided() {
    let mut meta = MetaState::default();
    let round = meta.restart();
    meta.finish_round(round);
    for index in 0..BOARD_COUNT {
        meta.on_child_outcome(OutcomeEvent { index, outcome: Outcome::Won(Mark::O) });
    }
    assert_eq!(round_headline(&meta, 9), "All boards decided");
}
