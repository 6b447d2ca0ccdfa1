//! Recent-activity list with the simulated refresh control.
//!
//! SYSTEM CONTEXT
//! ==============
//! A refresh queries nothing. It schedules the fade/restore and cue timers
//! against `ActivityState` and, when the spin settles, bumps the analytics
//! counters through the shared `CounterBoard`.

use leptos::prelude::*;

use crate::consts::BUMP_ANIMATION_MS;
#[cfg(feature = "csr")]
use crate::consts::{REFRESH_CONFIRM_MS, REFRESH_SETTLE_MS};
use crate::state::activity::{ActivityState, RestoreStep};
use crate::state::counters::{self, CounterBoard};
use crate::util::frame_loop::now_ms;

/// Add a random increment to each analytics counter and animate it.
fn bump_analytics(counters: RwSignal<CounterBoard>) {
    let now = now_ms();
    let tickets = counters
        .try_update(|board| board.bump_analytics(BUMP_ANIMATION_MS, now))
        .unwrap_or_default();
    for ticket in tickets {
        counters::drive(counters, ticket);
    }
}

/// Schedule the restore, settle and revert timers for refresh `seq`.
fn schedule_refresh(
    activity: RwSignal<ActivityState>,
    counters: RwSignal<CounterBoard>,
    seq: u64,
    steps: Vec<RestoreStep>,
) {
    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Timeout;

        for step in steps {
            Timeout::new(step.delay_ms, move || {
                activity.try_update(|state| state.restore(seq, step.index));
            })
            .forget();
        }

        Timeout::new(REFRESH_SETTLE_MS, move || {
            let settled = activity.try_update(|state| state.settle(seq)).unwrap_or(false);
            if settled {
                Timeout::new(REFRESH_CONFIRM_MS, move || {
                    activity.try_update(|state| state.revert(seq));
                })
                .forget();
            }
            bump_analytics(counters);
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        // Without timers the sequence collapses into one step.
        activity.update(|state| {
            for step in &steps {
                state.restore(seq, step.index);
            }
            if state.settle(seq) {
                state.revert(seq);
            }
        });
        bump_analytics(counters);
    }
}

/// Activity list and its refresh trigger. `entrance` is the card's inline
/// entrance-delay style.
#[component]
pub fn ActivityFeed(entrance: String) -> impl IntoView {
    let activity = expect_context::<RwSignal<ActivityState>>();
    let counters = expect_context::<RwSignal<CounterBoard>>();

    let on_refresh = move |_| {
        let Some((seq, steps)) = activity.try_update(ActivityState::begin_refresh) else {
            return;
        };
        leptos::logging::log!("activity refresh #{seq}");
        schedule_refresh(activity, counters, seq, steps);
    };

    let cue = move || activity.with(|state| state.cue);

    view! {
        <div class="card activity-card entering" style=entrance>
            <div class="card__header">
                <h2>"Recent activity"</h2>
                <button id="refreshActivity" class=move || cue().button_class() on:click=on_refresh title="Refresh">
                    <span aria-hidden="true">{move || cue().glyph()}</span>
                </button>
            </div>
            <ul id="activityList" class="activity-list">
                <For
                    each=move || activity.get().entries
                    key=|entry| entry.id
                    children=move |entry| {
                        let id = entry.id;
                        let opacity = move || {
                            activity.with(|state| state.entries.get(id).map_or(1.0, |e| e.opacity()))
                        };
                        view! {
                            <li class="activity" style=move || format!("opacity: {}", opacity())>
                                <span class="activity__icon" aria-hidden="true">{entry.icon}</span>
                                <span class="activity__title">{entry.title}</span>
                                <span class="activity__time muted">{entry.time}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
