//! Fixed season figures per time range and product

use super::dto::{SeasonProduct, SeasonRange, SeasonSnapshot};
use crate::shared::chart::{ChartError, ChartSeries};

pub const WEEKS: usize = 12;

pub fn season_snapshot(range: SeasonRange) -> SeasonSnapshot {
    let (revenue, schools, kids, growth) = match range {
        SeasonRange::ThisSeason => (35500.0, 45, 1250, 25.9),
        SeasonRange::LastSeason => (28200.0, 38, 980, 15.2),
        SeasonRange::ThisMonth => (8900.0, 12, 320, 8.7),
        SeasonRange::Last30Days => (11200.0, 15, 420, 12.3),
        SeasonRange::CustomRange => (15800.0, 22, 680, 18.9),
    };
    SeasonSnapshot {
        revenue,
        schools,
        kids,
        growth,
    }
}

fn weekly_values(product: SeasonProduct) -> ([f64; WEEKS], [f64; WEEKS]) {
    match product {
        SeasonProduct::AllProducts => (
            [8500.0, 9200.0, 7800.0, 8900.0, 9500.0, 8200.0, 8800.0, 9100.0, 8600.0, 9300.0, 8700.0, 8900.0],
            [6800.0, 7200.0, 6500.0, 7100.0, 7800.0, 6900.0, 7300.0, 7600.0, 7100.0, 7800.0, 7200.0, 7400.0],
        ),
        SeasonProduct::PackS => (
            [3200.0, 3500.0, 2800.0, 3300.0, 3800.0, 3100.0, 3400.0, 3600.0, 3200.0, 3700.0, 3300.0, 3500.0],
            [2500.0, 2800.0, 2200.0, 2600.0, 3000.0, 2400.0, 2700.0, 2900.0, 2500.0, 3000.0, 2600.0, 2800.0],
        ),
        SeasonProduct::PackM => (
            [2800.0, 3100.0, 2600.0, 3000.0, 3400.0, 2700.0, 3000.0, 3200.0, 2800.0, 3300.0, 2900.0, 3100.0],
            [2200.0, 2500.0, 2000.0, 2400.0, 2800.0, 2100.0, 2400.0, 2600.0, 2200.0, 2700.0, 2300.0, 2500.0],
        ),
        SeasonProduct::PackL => (
            [1800.0, 2000.0, 1600.0, 1900.0, 2200.0, 1700.0, 1900.0, 2000.0, 1800.0, 2100.0, 1900.0, 2000.0],
            [1400.0, 1600.0, 1200.0, 1500.0, 1800.0, 1300.0, 1500.0, 1600.0, 1400.0, 1700.0, 1500.0, 1600.0],
        ),
        SeasonProduct::PackXl => (
            [700.0, 800.0, 600.0, 700.0, 900.0, 600.0, 700.0, 800.0, 700.0, 800.0, 700.0, 800.0],
            [500.0, 600.0, 400.0, 500.0, 700.0, 400.0, 500.0, 600.0, 500.0, 600.0, 500.0, 600.0],
        ),
    }
}

/// Weekly revenue of `product`, current season first.
pub fn season_chart(product: SeasonProduct) -> Result<ChartSeries, ChartError> {
    let (current, previous) = weekly_values(product);
    ChartSeries::new((1..=WEEKS).map(|week| format!("Week {}", week)))
        .with_series("Current Season", current.to_vec())?
        .with_series("Previous Season", previous.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_values() {
        let snapshot = season_snapshot(SeasonRange::LastSeason);
        assert_eq!(snapshot.revenue, 28200.0);
        assert_eq!(snapshot.schools, 38);
        assert_eq!(snapshot.kids, 980);
        assert_eq!(snapshot.growth, 15.2);
    }

    #[test]
    fn test_chart_shape_for_every_product() {
        for product in SeasonProduct::ALL {
            let chart = season_chart(product).unwrap();
            assert_eq!(chart.labels().len(), WEEKS);
            assert_eq!(chart.labels()[0], "Week 1");
            assert_eq!(chart.labels()[11], "Week 12");
            for series in chart.series() {
                assert_eq!(series.values.len(), WEEKS);
            }
        }
    }

    #[test]
    fn test_unknown_product_key_uses_all_products() {
        let chart = season_chart(SeasonProduct::lookup("pack-xxl")).unwrap();
        assert_eq!(chart.get("Current Season").map(|v| v[0]), Some(8500.0));
        assert_eq!(chart.get("Previous Season").map(|v| v[11]), Some(7400.0));
    }
}
