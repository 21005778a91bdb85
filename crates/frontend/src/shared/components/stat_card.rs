use crate::shared::icons::icon;
use contracts::shared::metric::MetricCard;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    card: MetricCard,
    /// Icon name from the icon() helper
    #[prop(optional)]
    icon_name: Option<&'static str>,
) -> impl IntoView {
    let direction = card.display.direction;
    let change_class = format!("stat-card__change {}", direction.css_class());
    let growth = card.display.growth_text();

    view! {
        <div class="stat-card">
            {icon_name.map(|name| view! {
                <div class="stat-card__icon">
                    {icon(name)}
                </div>
            })}
            <div class="stat-card__content">
                <div class="stat-card__label">{card.label}</div>
                <div class="stat-card__value">{card.display.display_value}</div>
                <span class=change_class>
                    <span class="growth-arrow">{direction.arrow()}</span>
                    {growth}
                </span>
            </div>
        </div>
    }
}

/// Grid of metric cards, in the order given.
#[component]
pub fn MetricGrid(#[prop(into)] metrics: Signal<Vec<MetricCard>>) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {move || {
                metrics
                    .get()
                    .into_iter()
                    .map(|card| view! { <StatCard card=card /> })
                    .collect_view()
            }}
        </div>
    }
}
