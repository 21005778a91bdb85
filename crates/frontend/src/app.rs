use crate::dashboards::d400_sales_overview::SalesOverviewState;
use crate::layout::center::PageContent;
use crate::layout::global_context::{page_from_url, AppGlobalContext};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::config::DashboardConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_window();
    log::info!("dashboard config: {:?}", config);

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config.clone());
    provide_context(ctx);

    // The sales overview controller is shared by the sidebar and the dashboard
    let sales = SalesOverviewState::new(&config, ctx.active);
    provide_context(sales);

    if let Some(key) = page_from_url() {
        sales.navigate(&key);
    }
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageContent /> }.into_any()
        />
    }
}
