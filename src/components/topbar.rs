//! Top bar: mobile menu trigger, greeting, theme toggle and profile menu.

#[cfg(test)]
#[path = "topbar_test.rs"]
mod topbar_test;

use leptos::prelude::*;

use crate::app::{ThemeSignal, toggle_theme};
use crate::content::PortfolioContent;
use crate::state::page::PageVisibility;
use crate::state::sidebar::SidebarState;
use crate::util::dom;

const CLOSE_PROMPT: &str = "Close this page?";

fn dropdown_menu_class(open: bool) -> &'static str {
    if open { "dropdown-menu open" } else { "dropdown-menu" }
}

/// First name used in the greeting, falling back to the full name.
fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// Header above the dashboard sections.
#[component]
pub fn Topbar() -> impl IntoView {
    let theme = expect_context::<ThemeSignal>();
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let page = expect_context::<RwSignal<PageVisibility>>();
    let content = expect_context::<PortfolioContent>();
    let dropdown_open = RwSignal::new(false);

    let current = move || theme.with(|t| t.theme());
    let greeting = format!("Welcome back, {}", first_name(&content.owner.name));

    let on_mobile_menu = move |_| sidebar.update(SidebarState::toggle_mobile);
    let on_theme = move |_| toggle_theme(theme);
    let on_dropdown = move |_| dropdown_open.update(|open| *open = !*open);
    let on_view_profile = move |_| {
        dropdown_open.set(false);
        page.update(PageVisibility::open_profile);
    };
    let on_close_page = move |_| {
        dropdown_open.set(false);
        dom::confirm_and_close_window(CLOSE_PROMPT);
    };

    view! {
        <header class="topbar">
            <button id="mobileMenuBtn" class="icon-btn topbar__menu" on:click=on_mobile_menu title="Toggle menu">
                "☰"
            </button>
            <div class="topbar__greeting">
                <h1>{greeting}</h1>
                <p class="muted">{content.owner.role.clone()}</p>
            </div>
            <span class="topbar__spacer"></span>
            <button id="themeToggle" class="btn theme-toggle" data-action="theme" on:click=on_theme title="Toggle theme">
                <i class=move || current().icon_class() aria-hidden="true"></i>
                <span class="theme-pill">{move || current().label()}</span>
            </button>
            <div class="profile-dropdown">
                <button class="avatar-btn" on:click=on_dropdown title="Account">
                    {content.owner.initials()}
                </button>
                <div class=move || dropdown_menu_class(dropdown_open.get())>
                    <button class="dropdown-menu__item" on:click=on_view_profile>
                        "View profile"
                    </button>
                    <button class="dropdown-menu__item" on:click=on_close_page>
                        "Close page"
                    </button>
                </div>
            </div>
        </header>
    }
}
