use super::orders_table::OrdersTable;
use crate::dashboards::d400_sales_overview::SalesOverviewState;
use crate::shared::chart_js::canvas_id;
use crate::shared::components::MetricGrid;
use crate::shared::icons::icon;
use contracts::dashboards::d400_sales_overview::LoadPhase;
use contracts::shared::chart::ChartName;
use leptos::prelude::*;

/// Sales overview: metric cards, two charts and the recent orders table
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let state = use_context::<SalesOverviewState>().expect("SalesOverviewState not found");
    let phase = state.surface.phase;

    // First load once the canvases are in the DOM
    Effect::new(move |_| {
        state.load();
    });

    let is_loading = move || phase.with(|p| matches!(p, LoadPhase::Idle | LoadPhase::Loading));
    let is_ready = move || phase.with(|p| *p == LoadPhase::Ready);
    let error = move || {
        phase.with(|p| match p {
            LoadPhase::Failed(err) => Some(err.to_string()),
            _ => None,
        })
    };

    view! {
        <div id="d400_sales_overview--dashboard" class="d400-dashboard">
            <div id="loading" class="d400-loading" class:hidden=move || !is_loading()>
                <div class="spinner"></div>
                <span>"Loading dashboard..."</span>
            </div>

            {move || error().map(|err| view! {
                <div id="error" class="d400-error">
                    <strong>"⚠ Failed to load dashboard: "</strong>
                    {err}
                    <button class="button" on:click=move |_| state.load()>
                        {icon("refresh")}
                        <span>"Retry"</span>
                    </button>
                </div>
            })}

            <div id="dashboard" class="d400-content" class:hidden=move || !is_ready()>
                <MetricGrid metrics=state.surface.metrics />

                <div class="d400-charts">
                    <div class="chart-card">
                        <h3 class="chart-card__title">"Daily sales"</h3>
                        <div class="chart-card__body">
                            <canvas id=canvas_id(ChartName::DailySales)></canvas>
                        </div>
                    </div>
                    <div class="chart-card">
                        <h3 class="chart-card__title">"Average order value"</h3>
                        <div class="chart-card__body">
                            <canvas id=canvas_id(ChartName::AverageOrder)></canvas>
                        </div>
                    </div>
                </div>

                <OrdersTable />
            </div>
        </div>
    }
}
