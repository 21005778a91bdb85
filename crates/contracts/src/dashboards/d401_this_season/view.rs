use super::dto::{SeasonProduct, SeasonRange, SeasonSnapshot};
use super::mock::{season_chart, season_snapshot};
use crate::shared::chart::{ChartBackend, ChartName, ChartRegistry};
use crate::shared::metric::{format_value, GrowthDirection, MetricCard, MetricDisplay, MetricKind};
use crate::shared::number_format::NumberLocale;
use rand::Rng;

/// Share of season cards that show a positive growth indicator.
pub const POSITIVE_GROWTH_RATIO: f64 = 0.7;

/// Random growth for a season card: 70% positive in `[5, 25)`, otherwise
/// negative in `[1, 11)`, rounded to one decimal.
pub fn mock_growth<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let positive = rng.gen::<f64>() < POSITIVE_GROWTH_RATIO;
    let value: f64 = if positive {
        rng.gen_range(5.0..25.0)
    } else {
        -rng.gen_range(1.0..11.0)
    };
    (value * 10.0).round() / 10.0
}

/// Cards of the season view, in display order.
pub fn season_cards<R: Rng + ?Sized>(
    snapshot: &SeasonSnapshot,
    locale: &NumberLocale,
    rng: &mut R,
) -> Vec<MetricCard> {
    let cards = [
        ("Season revenue", snapshot.revenue, MetricKind::Currency),
        ("Schools onboarded", snapshot.schools as f64, MetricKind::Count),
        ("Revenue growth", snapshot.growth, MetricKind::Percent),
        ("Total kids", snapshot.kids as f64, MetricKind::Count),
    ];

    cards
        .into_iter()
        .map(|(label, value, kind)| {
            let growth = mock_growth(rng);
            MetricCard::new(
                label,
                MetricDisplay {
                    display_value: format_value(value, kind, locale),
                    direction: GrowthDirection::from_growth(growth),
                    magnitude: growth.abs(),
                },
            )
        })
        .collect()
}

/// "This Season" view: range and product selection over fixed figures.
pub struct SeasonView<B: ChartBackend, R: Rng> {
    charts: ChartRegistry<B>,
    rng: R,
    locale: NumberLocale,
    range: SeasonRange,
    product: SeasonProduct,
}

impl<B: ChartBackend, R: Rng> SeasonView<B, R> {
    pub fn new(backend: B, rng: R, locale: NumberLocale) -> Self {
        Self {
            charts: ChartRegistry::new(backend),
            rng,
            locale,
            range: SeasonRange::default(),
            product: SeasonProduct::default(),
        }
    }

    pub fn range(&self) -> SeasonRange {
        self.range
    }

    pub fn product(&self) -> SeasonProduct {
        self.product
    }

    pub fn snapshot(&self) -> SeasonSnapshot {
        season_snapshot(self.range)
    }

    pub fn charts(&self) -> &ChartRegistry<B> {
        &self.charts
    }

    /// Switches the time range. The product filter goes back to all
    /// products and the chart is redrawn. Returns the new cards.
    pub fn select_range(&mut self, key: &str) -> Vec<MetricCard> {
        self.range = SeasonRange::lookup(key);
        log::info!("season range: {}", self.range.key());
        self.product = SeasonProduct::AllProducts;
        self.render_chart();
        self.season_metrics()
    }

    /// Returns whether the chart is live afterwards.
    pub fn select_product(&mut self, key: &str) -> bool {
        self.product = SeasonProduct::lookup(key);
        log::info!("season product: {}", self.product.key());
        self.render_chart()
    }

    /// Cards for the current range; growth indicators are redrawn each call.
    pub fn season_metrics(&mut self) -> Vec<MetricCard> {
        season_cards(&season_snapshot(self.range), &self.locale, &mut self.rng)
    }

    pub fn render_chart(&mut self) -> bool {
        self.charts
            .render_checked(ChartName::SeasonPerformance, season_chart(self.product))
    }

    pub fn teardown(&mut self) {
        self.charts.destroy_all();
    }
}

impl<B: ChartBackend, R: Rng> Drop for SeasonView<B, R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
