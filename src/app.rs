//! Root application component and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::sidebar::Sidebar;
use crate::consts::STAT_INTRO_MS;
use crate::content::{self, PortfolioContent};
use crate::pages::{dashboard::DashboardPage, profile::ProfilePage};
use crate::state::activity::ActivityState;
use crate::state::counters::{self, AnalyticsCounter, CounterBoard, CounterKey};
use crate::state::page::PageVisibility;
use crate::state::sections::SectionRegistry;
use crate::state::sidebar::SidebarState;
use crate::state::theme::{DARK_THEME_CLASS, ThemeController};
use crate::util::dom;
use crate::util::entrance::EntranceOrder;
use crate::util::frame_loop::now_ms;
use crate::util::storage::BrowserStorage;

/// Theme controller as provided through context.
pub type ThemeSignal = RwSignal<ThemeController<BrowserStorage>>;

/// Flip the theme and sync the `<body>` class in the same handler.
pub fn toggle_theme(theme: ThemeSignal) {
    let Some(next) = theme.try_update(ThemeController::toggle) else {
        return;
    };
    dom::set_body_class(DARK_THEME_CLASS, next.is_dark());
    leptos::logging::log!("theme switched to {}", next.stored_value());
}

/// Register every counter the dashboard renders with its configured value.
#[must_use]
pub fn seed_counters(content: &PortfolioContent, seed: u64) -> CounterBoard {
    let mut board = CounterBoard::new(seed);
    for (index, stat) in content.stats.iter().enumerate() {
        board.insert(CounterKey::Stat(index), stat.target);
    }
    let analytics = content.analytics;
    for (which, value) in AnalyticsCounter::ALL.into_iter().zip([
        analytics.visitors,
        analytics.projects_viewed,
        analytics.resume_downloads,
        analytics.skills_views,
    ]) {
        board.insert(CounterKey::Analytics(which), value);
    }
    board
}

/// Page-load intro: every counter restarts at 0 and climbs to its value.
fn play_intro(counters: RwSignal<CounterBoard>) {
    let now = now_ms();
    let mut tickets = Vec::new();
    counters.update(|board| {
        let mut index = 0;
        while let Some(target) = board.get(CounterKey::Stat(index)).map(|c| c.target()) {
            tickets.extend(board.start_from_zero(CounterKey::Stat(index), target, STAT_INTRO_MS, now));
            index += 1;
        }
        for which in AnalyticsCounter::ALL {
            let key = CounterKey::Analytics(which);
            let target = board.value(key);
            let duration = board.analytics_intro_ms();
            tickets.extend(board.start_from_zero(key, target, duration, now));
        }
    });
    for ticket in tickets {
        counters::drive(counters, ticket);
    }
}

/// Root application component.
///
/// Creates every state model once, provides them via context, and mounts
/// the sidebar, dashboard and profile subtrees.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = content::load();
    let title = format!("{} · Portfolio", content.owner.name);

    let theme = RwSignal::new(ThemeController::initialize(BrowserStorage));
    let sidebar = RwSignal::new(SidebarState::new(dom::is_mobile_viewport()));
    let counters = RwSignal::new(seed_counters(&content, dom::clock_seed()));
    let activity = RwSignal::new(ActivityState::from_content(&content.activities));
    let page = RwSignal::new(PageVisibility::default());
    let sections = SectionRegistry::new();
    let entrance = EntranceOrder::new(content.stats.len(), content.projects.len(), AnalyticsCounter::ALL.len());

    dom::set_body_class(DARK_THEME_CLASS, theme.with_untracked(|t| t.theme().is_dark()));

    provide_context(theme);
    provide_context(sidebar);
    provide_context(counters);
    provide_context(activity);
    provide_context(page);
    provide_context(sections);
    provide_context(entrance);
    provide_context(content);

    Effect::new(move || play_intro(counters));

    view! {
        <Title text=title/>
        <div class="app-shell">
            <Sidebar/>
            <DashboardPage/>
            <ProfilePage/>
        </div>
    }
}
