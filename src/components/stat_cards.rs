//! Hero stat cards whose values count up on page load.

use leptos::prelude::*;

use crate::content::PortfolioContent;
use crate::state::counters::{CounterBoard, CounterKey};
use crate::util::entrance::{EntranceOrder, entrance_style};

/// Row of hero stat cards.
#[component]
pub fn StatCards() -> impl IntoView {
    let counters = expect_context::<RwSignal<CounterBoard>>();
    let order = expect_context::<EntranceOrder>();
    let content = expect_context::<PortfolioContent>();

    content
        .stats
        .into_iter()
        .enumerate()
        .map(|(index, stat)| {
            let key = CounterKey::Stat(index);
            view! {
                <div class="card stat-card entering" style=entrance_style(order.stats + index)>
                    <span class="stat-value" data-target=stat.target.to_string()>
                        {move || counters.with(|board| board.value(key)).to_string()}
                    </span>
                    <span class="stat-suffix">{stat.suffix}</span>
                    <span class="stat-label">{stat.label}</span>
                </div>
            }
        })
        .collect_view()
}
