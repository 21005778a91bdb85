use crate::layout::global_context::AppGlobalContext;
use crate::shared::chart_js::{canvas_id, ChartJsBackend};
use crate::shared::components::MetricGrid;
use contracts::dashboards::d401_this_season::{SeasonProduct, SeasonRange, SeasonView};
use contracts::shared::chart::ChartName;
use contracts::shared::metric::MetricCard;
use leptos::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// "This Season" dashboard: time range and product filters over season figures
#[component]
pub fn SeasonDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let locale = ctx.config.with_value(|config| config.number_locale());

    // Chart handles are JS objects, store locally
    let season = StoredValue::new_local(SeasonView::new(
        ChartJsBackend::new(locale.clone()),
        StdRng::seed_from_u64(js_sys::Date::now() as u64),
        locale,
    ));

    let (cards, set_cards) = signal(Vec::<MetricCard>::new());
    let (range, set_range) = signal(SeasonRange::default());
    let (product, set_product) = signal(SeasonProduct::default());

    let select_range = move |key: String| {
        let selected = season.try_update_value(|view| {
            let cards = view.select_range(&key);
            (cards, view.range(), view.product())
        });
        if let Some((new_cards, new_range, new_product)) = selected {
            set_cards.set(new_cards);
            set_range.set(new_range);
            set_product.set(new_product);
        }
    };

    let select_product = move |key: String| {
        if let Some(selected) = season.try_update_value(|view| {
            view.select_product(&key);
            view.product()
        }) {
            set_product.set(selected);
        }
    };

    // Initial figures and chart once the canvas is mounted
    Effect::new(move |_| {
        select_range(SeasonRange::default().key().to_string());
    });

    view! {
        <div id="d401_this_season--dashboard" class="d401-dashboard">
            <div class="d401-filters">
                <label class="d401-filter">
                    <span>"Time range"</span>
                    <select
                        id="timeRangeFilter"
                        prop:value=move || range.get().key()
                        on:change=move |ev| select_range(event_target_value(&ev))
                    >
                        {SeasonRange::ALL.into_iter().map(|option| view! {
                            <option value=option.key()>{option.label()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="d401-filter">
                    <span>"Product"</span>
                    <select
                        id="productFilter"
                        prop:value=move || product.get().key()
                        on:change=move |ev| select_product(event_target_value(&ev))
                    >
                        {SeasonProduct::ALL.into_iter().map(|option| view! {
                            <option value=option.key()>{option.label()}</option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <MetricGrid metrics=cards />

            <div class="chart-card chart-card--wide">
                <h3 class="chart-card__title">"Season performance"</h3>
                <div class="chart-card__body">
                    <canvas id=canvas_id(ChartName::SeasonPerformance)></canvas>
                </div>
            </div>
        </div>
    }
}
