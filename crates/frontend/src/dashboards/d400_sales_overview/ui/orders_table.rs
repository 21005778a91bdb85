use crate::dashboards::d400_sales_overview::SalesOverviewState;
use crate::shared::components::{PaginationControls, SearchInput};
use leptos::prelude::*;

/// Recent orders with search and pagination
#[component]
pub fn OrdersTable() -> impl IntoView {
    let state = use_context::<SalesOverviewState>().expect("SalesOverviewState not found");
    let orders = state.surface.orders;

    view! {
        <div class="orders-card">
            <div class="orders-card__header">
                <h3>"Recent orders"</h3>
                <SearchInput
                    value=Signal::derive(move || orders.with(|page| page.search_term.clone()))
                    on_change=Callback::new(move |text: String| state.search(&text))
                    placeholder="Search orders..."
                />
            </div>

            <table class="orders-table">
                <thead>
                    <tr>
                        <th>"Order ID"</th>
                        <th>"Date"</th>
                        <th>"Customer"</th>
                        <th class="orders-table__amount">"Amount"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = orders.with(|page| page.rows.clone());
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="orders-table__empty">"No orders found"</td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            rows.into_iter()
                                .map(|row| {
                                    let badge = format!("status-badge {}", row.status.css_class());
                                    view! {
                                        <tr>
                                            <td>{row.id}</td>
                                            <td>{row.date}</td>
                                            <td>{row.customer}</td>
                                            <td class="orders-table__amount">{row.amount}</td>
                                            <td><span class=badge>{row.status.as_str()}</span></td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>

            <div class="orders-card__footer">
                <span class="pagination-info">{move || orders.with(|page| page.caption())}</span>
                <PaginationControls
                    current_page=Signal::derive(move || orders.with(|page| page.current_page))
                    buttons=Signal::derive(move || orders.with(|page| page.buttons.clone()))
                    has_previous=Signal::derive(move || orders.with(|page| page.has_previous))
                    has_next=Signal::derive(move || orders.with(|page| page.has_next))
                    on_page_change=Callback::new(move |page: usize| state.select_page(page))
                />
            </div>
        </div>
    }
}
