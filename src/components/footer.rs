//! Page footer with the current year.

use leptos::prelude::*;

use crate::content::PortfolioContent;
use crate::util::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<PortfolioContent>();
    let year = dom::current_year().map(|y| y.to_string());

    view! {
        <footer class="footer muted">
            "© "
            <span id="year">{year}</span>
            " "
            {content.owner.name}
        </footer>
    }
}
