//! Series for the two sales overview charts

use crate::shared::chart::{cumulative_series, year_to_date_labels, ChartError, ChartSeries};
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Average daily sales of the reference year
pub const BASE_DAILY_SALES: f64 = 5000.0;
pub const CURRENT_YEAR_FACTOR: f64 = 1.35;
pub const PREVIOUS_YEAR_FACTOR: f64 = 1.21;

pub const HOUR_LABELS: [&str; 8] = [
    "12 AM", "3 AM", "6 AM", "9 AM", "12 PM", "3 PM", "6 PM", "9 PM",
];
const TODAY_AVERAGE: [f64; 8] = [320.0, 280.0, 350.0, 420.0, 480.0, 520.0, 450.0, 380.0];
const YESTERDAY_AVERAGE: [f64; 8] = [300.0, 250.0, 320.0, 380.0, 440.0, 480.0, 420.0, 350.0];

/// Year-to-date cumulative sales, current year first then previous year.
pub fn daily_sales_chart<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
) -> Result<ChartSeries, ChartError> {
    let labels = year_to_date_labels(today);
    let buckets = labels.len();
    let year = today.year();

    let current = cumulative_series(rng, BASE_DAILY_SALES * CURRENT_YEAR_FACTOR, buckets);
    let previous = cumulative_series(rng, BASE_DAILY_SALES * PREVIOUS_YEAR_FACTOR, buckets);
    ChartSeries::new(labels)
        .with_series(&year.to_string(), current)?
        .with_series(&(year - 1).to_string(), previous)
}

/// Average order value by time of day, today against yesterday.
pub fn average_order_chart() -> Result<ChartSeries, ChartError> {
    ChartSeries::new(HOUR_LABELS)
        .with_series("Aug 6, 2025", TODAY_AVERAGE.to_vec())?
        .with_series("Aug 5, 2025", YESTERDAY_AVERAGE.to_vec())
}
