//! One 3×3 tic-tac-toe board bound to a `BoardState` signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used standalone on the classic page and nine times on the meta page. The
//! component owns no game logic: clicks go through `play_move`, which admits
//! or ignores them, and the terminal outcome is forwarded to the parent as an
//! index-tagged `OutcomeEvent`.

#[cfg(test)]
#[path = "board_grid_test.rs"]
mod board_grid_test;

use leptos::prelude::*;

use crate::net::types::{CELL_COUNT, Mark};
use crate::state::board::{BoardPhase, BoardState};
use crate::state::meta::OutcomeEvent;
use crate::state::outcome::Outcome;
use crate::util::session_tasks::{play_move, start_session};

#[component]
pub fn BoardGrid(
    board: RwSignal<BoardState>,
    /// Slot reported with the outcome when nested in the meta page.
    #[prop(optional)]
    index: usize,
    #[prop(optional)] on_outcome: Option<Callback<OutcomeEvent>>,
    /// Compact rendering for the meta page.
    #[prop(optional)]
    nested: bool,
) -> impl IntoView {
    let report = on_outcome.map(|parent| {
        Callback::new(move |outcome: Outcome| parent.run(OutcomeEvent { index, outcome }))
    });

    let grid_class = move || board_class(nested, board.with(BoardState::outcome));
    let is_waiting = move || board.with(BoardState::is_waiting_for_session);
    let is_failed = move || board.with(|b| b.phase == BoardPhase::Failed);
    let error_text = move || board.with(|b| b.error.clone().unwrap_or_default());

    view! {
        <Show
            when=move || !is_waiting()
            fallback=|| view! { <div class="board-grid__loading">"Loading..."</div> }
        >
            <Show
                when=move || !is_failed()
                fallback=move || {
                    view! {
                        <div class="board-grid__failed">
                            <p class="board-grid__error">
                                "Error: " {error_text}
                            </p>
                            <button
                                class="btn board-grid__retry"
                                on:click=move |_| start_session(board)
                            >
                                "Retry"
                            </button>
                        </div>
                    }
                }
            >
                <div class=grid_class>
                    {(0..CELL_COUNT)
                        .map(|cell| {
                            view! {
                                <button
                                    class="board-grid__cell"
                                    on:click=move |_| play_move(board, cell, report)
                                    disabled=move || !board.with(|b| b.can_play(cell))
                                >
                                    {move || cell_text(board.with(|b| b.cell(cell)))}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || board.with(|b| b.error.is_some())>
                    <p class="board-grid__error">{error_text}</p>
                </Show>
            </Show>
        </Show>
    }
}

fn cell_text(mark: Option<Mark>) -> &'static str {
    mark.map_or("", Mark::as_str)
}

fn board_class(nested: bool, outcome: Outcome) -> String {
    let mut class = String::from("board-grid");
    if nested {
        class.push_str(" board-grid--nested");
    }
    if let Some(modifier) = outcome.css_modifier() {
        class.push_str(" board-grid--");
        class.push_str(modifier);
    }
    class
}
