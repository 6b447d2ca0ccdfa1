//! Navigation sidebar with collapse control and profile shortcut.
//!
//! ARCHITECTURE
//! ============
//! Mode and selection live in `SidebarState`; this component only renders
//! them and forwards clicks. Scroll targets resolve through the shared
//! `SectionRegistry`.

use leptos::prelude::*;

use crate::content::PortfolioContent;
use crate::state::page::PageVisibility;
use crate::state::sections::{SectionId, SectionRegistry};
use crate::state::sidebar::{MenuItem, SidebarState};

/// Sidebar container class, including the profile-page `hidden` flag.
fn sidebar_class(state: &SidebarState, visible: bool) -> String {
    let base = state.container_class();
    if visible { base.to_owned() } else { format!("{base} hidden") }
}

fn menu_item_class(active: bool) -> &'static str {
    if active { "menu-item active" } else { "menu-item" }
}

/// Left navigation sidebar.
#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let page = expect_context::<RwSignal<PageVisibility>>();
    let sections = expect_context::<SectionRegistry>();
    let content = expect_context::<PortfolioContent>();

    let select = move |item: MenuItem| {
        let Some(target) = sidebar.try_update(|s| s.select(item)).flatten() else {
            return;
        };
        sections.scroll_to(target);
    };

    let on_collapse = move |_| sidebar.update(SidebarState::toggle_collapse);
    let on_profile = move |_| page.update(PageVisibility::open_profile);

    let menu = MenuItem::ALL
        .into_iter()
        .map(|item| {
            view! {
                <div
                    class=move || menu_item_class(sidebar.get().is_active(item))
                    role="button"
                    tabindex="0"
                    data-section=item.section().map(SectionId::dom_id)
                    on:click=move |_| select(item)
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            select(item);
                        }
                    }
                >
                    <span class="menu-item__icon" aria-hidden="true">{item.icon()}</span>
                    <span class="menu-item__label">{item.label()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <aside id="sidebar" class=move || sidebar_class(&sidebar.get(), page.get().sidebar)>
            <div class="sidebar__brand">
                <span class="sidebar__logo">{content.owner.initials()}</span>
                <span class="sidebar__name">{content.owner.name.clone()}</span>
                <button id="collapseBtn" class="icon-btn" on:click=on_collapse title="Collapse sidebar">
                    "⇤"
                </button>
            </div>
            <nav class="sidebar__menu">{menu}</nav>
            <button class="sidebar__profile btn" on:click=on_profile>
                "View profile"
            </button>
        </aside>
    }
}
