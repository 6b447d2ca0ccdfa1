//! Skill bars.

use leptos::prelude::*;

use crate::content::PortfolioContent;

fn bar_width(level: u64) -> String {
    format!("width: {}%", level.min(100))
}

#[component]
pub fn SkillList() -> impl IntoView {
    let content = expect_context::<PortfolioContent>();

    content
        .skills
        .into_iter()
        .map(|skill| {
            view! {
                <div class="skill">
                    <div class="skill__header">
                        <span>{skill.name}</span>
                        <span class="muted">{format!("{}%", skill.level.min(100))}</span>
                    </div>
                    <div class="skill__track">
                        <div class="skill__fill" style=bar_width(skill.level)></div>
                    </div>
                </div>
            }
        })
        .collect_view()
}
