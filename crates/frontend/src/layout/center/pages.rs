//! Page registry: maps the active [`NavPage`] to its content.
//!
//! Both dashboards stay mounted so their canvases exist while hidden; the
//! remaining pages are placeholders.

use crate::dashboards::{SalesOverviewDashboard, SeasonDashboard};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::navigation::NavPage;
use leptos::prelude::*;

#[component]
pub fn PageContent() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_hidden = move |page: NavPage| ctx.active.get() != page;

    view! {
        <div class="page" class:page--hidden=move || is_hidden(NavPage::Dashboard)>
            <SalesOverviewDashboard />
        </div>
        <div class="page" class:page--hidden=move || is_hidden(NavPage::ThisSeason)>
            <SeasonDashboard />
        </div>
        {move || {
            let page = ctx.active.get();
            match page {
                NavPage::Dashboard | NavPage::ThisSeason => None,
                _ => Some(view! { <PlaceholderPage page=page /> }),
            }
        }}
    }
}

#[component]
fn PlaceholderPage(page: NavPage) -> impl IntoView {
    view! {
        <div class="page placeholder-page">
            {icon(page.key())}
            <h2>{page.label()}</h2>
            <p>"This section is not available yet."</p>
        </div>
    }
}
