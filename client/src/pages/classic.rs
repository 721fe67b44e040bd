//! Classic page: one standalone board.

use leptos::prelude::*;

use crate::components::board_grid::BoardGrid;
use crate::state::board::BoardState;
use crate::util::session_tasks::start_session;

#[component]
pub fn ClassicPage() -> impl IntoView {
    let board = RwSignal::new(BoardState::default());

    Effect::new(move || start_session(board));

    view! {
        <div class="classic-page">
            <div class="classic-page__status">{move || board.with(BoardState::status_text)}</div>
            <BoardGrid board=board/>
            <div class="classic-page__actions">
                <button
                    class="btn classic-page__new-game"
                    on:click=move |_| start_session(board)
                    disabled=move || board.with(BoardState::is_busy)
                >
                    "New Game"
                </button>
            </div>
        </div>
    }
}
