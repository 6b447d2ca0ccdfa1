//! Dashboard page: hero stats, projects, skills, analytics and activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing view. Its sections bind their `node_ref`s from the
//! shared `SectionRegistry` so sidebar navigation can scroll to them, and the
//! main column follows the sidebar's leading offset.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::activity_feed::ActivityFeed;
use crate::components::analytics_panel::AnalyticsPanel;
use crate::components::footer::Footer;
use crate::components::project_list::ProjectList;
use crate::components::skill_list::SkillList;
use crate::components::stat_cards::StatCards;
use crate::components::topbar::Topbar;
use crate::state::page::PageVisibility;
use crate::state::sections::{SectionId, SectionRegistry};
use crate::state::sidebar::SidebarState;
use crate::util::entrance::{EntranceOrder, entrance_style};

fn main_class(visible: bool) -> &'static str {
    if visible { "main" } else { "main hidden" }
}

fn main_style(offset_px: u32) -> String {
    format!("margin-left: {offset_px}px")
}

/// Dashboard main column.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let page = expect_context::<RwSignal<PageVisibility>>();
    let sections = expect_context::<SectionRegistry>();
    let order = expect_context::<EntranceOrder>();

    view! {
        <main
            class=move || main_class(page.get().main)
            style=move || main_style(sidebar.get().main_offset_px())
        >
            <Topbar/>

            <section id=SectionId::Overview.dom_id() class="hero entering" style=entrance_style(order.hero) node_ref=sections.node_ref(SectionId::Overview)>
                <div class="stat-row">
                    <StatCards/>
                </div>
            </section>

            <section id=SectionId::Projects.dom_id() class="section" node_ref=sections.node_ref(SectionId::Projects)>
                <h2>"Featured projects"</h2>
                <div class="project-grid">
                    <ProjectList/>
                </div>
            </section>

            <section id=SectionId::Skills.dom_id() class="section" node_ref=sections.node_ref(SectionId::Skills)>
                <h2>"Skills"</h2>
                <div class="card skill-card entering" style=entrance_style(order.skills)>
                    <SkillList/>
                </div>
            </section>

            <section id=SectionId::Analytics.dom_id() class="section" node_ref=sections.node_ref(SectionId::Analytics)>
                <h2>"Portfolio analytics"</h2>
                <AnalyticsPanel/>
            </section>

            <section id=SectionId::Activity.dom_id() class="section" node_ref=sections.node_ref(SectionId::Activity)>
                <ActivityFeed entrance=entrance_style(order.activity)/>
            </section>

            <Footer/>
        </main>
    }
}
