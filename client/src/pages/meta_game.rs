//! Meta page: nine nested boards plus the outcome summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The page owns an arena of nine board signals
//! addressed by index and the `MetaState` aggregate. On mount (and on New
//! Game) it acquires all nine sessions concurrently; afterwards each board
//! runs independently and reports its terminal outcome back up through a
//! single callback that applies `OutcomeEvent`s to the grid.

#[cfg(test)]
#[path = "meta_game_test.rs"]
mod meta_game_test;

use leptos::prelude::*;

use crate::components::board_grid::BoardGrid;
use crate::components::meta_summary::MetaSummary;
use crate::state::board::BoardState;
use crate::state::meta::{BOARD_COUNT, MetaState, OutcomeEvent};
use crate::util::session_tasks::start_meta_round;

#[component]
pub fn MetaGamePage() -> impl IntoView {
    let meta = RwSignal::new(MetaState::default());
    let boards: [RwSignal<BoardState>; BOARD_COUNT] =
        std::array::from_fn(|_| RwSignal::new(BoardState::default()));

    // Effects only run in the browser, so SSR renders the loading placeholders.
    Effect::new(move || start_meta_round(meta, boards));

    let on_outcome = Callback::new(move |event: OutcomeEvent| {
        meta.update(|m| {
            m.on_child_outcome(event);
        });
    });

    let grid = Signal::derive(move || meta.with(|m| m.grid));
    let headline = move || {
        let ready = boards.iter().filter(|b| !b.with(BoardState::is_waiting_for_session)).count();
        meta.with(|m| round_headline(m, ready))
    };

    view! {
        <div class="meta-page">
            <MetaSummary grid=grid/>
            <div class="meta-page__main">
                <div class="meta-page__status">{headline}</div>
                <div class="meta-page__boards">
                    {boards
                        .into_iter()
                        .enumerate()
                        .map(|(index, board)| {
                            view! {
                                <div class="meta-page__slot">
                                    <BoardGrid
                                        board=board
                                        index=index
                                        on_outcome=on_outcome
                                        nested=true
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="meta-page__actions">
                    <button
                        class="btn meta-page__new-game"
                        on:click=move |_| start_meta_round(meta, boards)
                        disabled=move || meta.with(MetaState::is_loading)
                    >
                        "New Game"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Page status line for the current round.
fn round_headline(meta: &MetaState, ready_boards: usize) -> String {
    if !meta.is_ready() {
        return format!("Starting games... {ready_boards}/{BOARD_COUNT} ready");
    }
    let decided = meta.grid.decided_count();
    if decided == BOARD_COUNT {
        "All boards decided".to_owned()
    } else {
        format!("{decided}/{BOARD_COUNT} boards decided")
    }
}
