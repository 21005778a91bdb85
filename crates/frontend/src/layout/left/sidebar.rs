//! Sidebar navigation

use crate::dashboards::d400_sales_overview::SalesOverviewState;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::navigation::NavPage;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<NavPage>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Overview",
            items: vec![NavPage::Dashboard, NavPage::ThisSeason],
        },
        MenuGroup {
            label: "Sales",
            items: vec![
                NavPage::Orders,
                NavPage::Products,
                NavPage::Customers,
                NavPage::Invoices,
            ],
        },
    ]
}

fn nav_icon(page: NavPage) -> &'static str {
    match page {
        NavPage::Dashboard => "dashboard",
        NavPage::ThisSeason => "calendar",
        NavPage::Orders => "orders",
        NavPage::Products => "products",
        NavPage::Customers => "customers",
        NavPage::Invoices => "invoices",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let sales = use_context::<SalesOverviewState>().expect("SalesOverviewState not found");

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|page| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || ctx.active.get() == page
                                    data-page=page.key()
                                    on:click=move |_| sales.navigate(page.key())
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(nav_icon(page))}
                                        <span>{page.label()}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
