use super::dto::{SummaryField, SummaryMetrics};
use crate::shared::metric::{format_metric, MetricCard, MetricKind};
use crate::shared::number_format::NumberLocale;

/// Cards shown in the metrics grid, in display order.
pub const METRIC_CARDS: [(&str, SummaryField, MetricKind); 4] = [
    ("Total sales", SummaryField::TotalSales, MetricKind::Currency),
    ("Total orders", SummaryField::TotalOrders, MetricKind::Count),
    (
        "Average order value",
        SummaryField::AverageOrderValue,
        MetricKind::Currency,
    ),
    (
        "Returning customer rate",
        SummaryField::ReturningCustomerRate,
        MetricKind::Percent,
    ),
];

pub fn summary_metrics(summary: &SummaryMetrics, locale: &NumberLocale) -> Vec<MetricCard> {
    METRIC_CARDS
        .iter()
        .map(|(label, field, kind)| {
            MetricCard::new(
                label,
                format_metric(summary.value(*field), summary.growth(*field), *kind, locale),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_overview::mock;
    use crate::shared::metric::GrowthDirection;

    #[test]
    fn test_four_cards_in_fixed_order() {
        let cards = summary_metrics(&mock::dashboard_data().summary, &NumberLocale::fr_eur());
        let labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Total sales",
                "Total orders",
                "Average order value",
                "Returning customer rate"
            ]
        );

        assert_eq!(cards[0].display.display_value, "12\u{202f}500,00\u{a0}€");
        assert_eq!(cards[1].display.display_value, "310");
        assert_eq!(cards[2].display.display_value, "450,00\u{a0}€");
        assert_eq!(cards[3].display.display_value, "68%");
        assert!(cards
            .iter()
            .all(|c| c.display.direction == GrowthDirection::Up));
    }

    #[test]
    fn test_negative_growth_card() {
        let mut summary = mock::dashboard_data().summary;
        summary.growth_percent.total_orders = -4.5;
        let cards = summary_metrics(&summary, &NumberLocale::en_usd());
        assert_eq!(cards[1].display.direction, GrowthDirection::Down);
        assert_eq!(cards[1].display.magnitude, 4.5);
    }
}
