//! Profile sub-page, shown in place of the dashboard.

use leptos::prelude::*;

use crate::content::PortfolioContent;
use crate::state::page::PageVisibility;

fn profile_class(visible: bool) -> &'static str {
    if visible { "profile-page" } else { "profile-page hidden" }
}

/// Full-width profile view with a way back to the dashboard.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageVisibility>>();
    let content = expect_context::<PortfolioContent>();
    let owner = content.owner;

    let on_back = move |_| page.update(PageVisibility::close_profile);
    let mailto = format!("mailto:{}", owner.email);

    view! {
        <div id="profilePage" class=move || profile_class(page.get().profile)>
            <button id="closeProfile" class="btn" on:click=on_back>
                "← Back to dashboard"
            </button>
            <div class="card profile-card">
                <span class="profile-card__avatar">{owner.initials()}</span>
                <h1>{owner.name.clone()}</h1>
                <p class="muted">{owner.role.clone()}</p>
                <p>{owner.bio.clone()}</p>
                <dl class="profile-card__facts">
                    <dt>"Location"</dt>
                    <dd>{owner.location.clone()}</dd>
                    <dt>"Email"</dt>
                    <dd>
                        <a href=mailto>{owner.email.clone()}</a>
                    </dd>
                </dl>
            </div>
        </div>
    }
}
