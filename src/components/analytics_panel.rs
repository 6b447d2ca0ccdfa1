//! Four analytics tiles backed by animated counters.

use leptos::prelude::*;

use crate::state::counters::{AnalyticsCounter, CounterBoard, CounterKey};
use crate::util::entrance::{EntranceOrder, entrance_style};

/// Analytics tiles; the activity refresh nudges their values.
#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let counters = expect_context::<RwSignal<CounterBoard>>();
    let order = expect_context::<EntranceOrder>();

    let tiles = AnalyticsCounter::ALL
        .into_iter()
        .enumerate()
        .map(|(index, which)| {
            let key = CounterKey::Analytics(which);
            view! {
                <div class="card analytics-tile entering" style=entrance_style(order.analytics + index)>
                    <span class="analytics-tile__label">{which.label()}</span>
                    <span id=which.dom_id() class="analytics-tile__value">
                        {move || counters.with(|board| board.value(key)).to_string()}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! { <div class="analytics-grid">{tiles}</div> }
}
