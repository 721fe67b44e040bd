//! Small 3×3 "Meta Board" showing each nested board's outcome.

use leptos::prelude::*;

use crate::state::meta::{BOARD_COUNT, MetaOutcomeGrid, cell_dividers};

#[component]
pub fn MetaSummary(#[prop(into)] grid: Signal<MetaOutcomeGrid>) -> impl IntoView {
    view! {
        <aside class="meta-summary">
            <h3 class="meta-summary__title">"Meta Board"</h3>
            <div class="meta-summary__grid">
                {(0..BOARD_COUNT)
                    .map(|index| {
                        let (right, bottom) = cell_dividers(index);
                        view! {
                            <div
                                class="meta-summary__cell"
                                class:meta-summary__cell--right=right
                                class:meta-summary__cell--bottom=bottom
                            >
                                {move || grid.with(|g| g.get(index).label())}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}
