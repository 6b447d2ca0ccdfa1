//! Featured project cards.

use leptos::prelude::*;

use crate::content::PortfolioContent;
use crate::util::entrance::{EntranceOrder, entrance_style};

#[component]
pub fn ProjectList() -> impl IntoView {
    let content = expect_context::<PortfolioContent>();
    let order = expect_context::<EntranceOrder>();

    content
        .projects
        .into_iter()
        .enumerate()
        .map(|(index, project)| {
            let tags = project
                .tags
                .into_iter()
                .map(|tag| view! { <span class="tag">{tag}</span> })
                .collect_view();
            view! {
                <article class="card featured entering" style=entrance_style(order.projects + index)>
                    <h3>{project.name}</h3>
                    <p class="muted">{project.summary}</p>
                    <div class="tag-row">{tags}</div>
                </article>
            }
        })
        .collect_view()
}
