use super::number_format::{format_count, format_currency, format_percent, NumberLocale};
use serde::{Deserialize, Serialize};

/// How a metric value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    Currency,
    Count,
    Percent,
}

/// Growth indicator direction. Zero growth counts as up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthDirection {
    Up,
    Down,
}

impl GrowthDirection {
    pub fn from_growth(growth: f64) -> Self {
        if growth >= 0.0 {
            GrowthDirection::Up
        } else {
            GrowthDirection::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            GrowthDirection::Up => "↗",
            GrowthDirection::Down => "↘",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            GrowthDirection::Up => "growth-positive",
            GrowthDirection::Down => "growth-negative",
        }
    }
}

/// Display-ready value with its growth indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDisplay {
    pub display_value: String,
    pub direction: GrowthDirection,
    /// Absolute growth in percent
    pub magnitude: f64,
}

impl MetricDisplay {
    /// "15%", shown next to the arrow
    pub fn growth_text(&self) -> String {
        format_percent(self.magnitude)
    }
}

/// A metric card: label plus formatted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    #[serde(flatten)]
    pub display: MetricDisplay,
}

impl MetricCard {
    pub fn new(label: &str, display: MetricDisplay) -> Self {
        Self {
            label: label.to_string(),
            display,
        }
    }
}

pub fn format_value(value: f64, kind: MetricKind, locale: &NumberLocale) -> String {
    match kind {
        MetricKind::Currency => format_currency(value, locale),
        MetricKind::Count => format_count(value, locale),
        MetricKind::Percent => format_percent(value),
    }
}

/// Maps a raw value and its growth delta to a display triple.
pub fn format_metric(
    value: f64,
    growth: f64,
    kind: MetricKind,
    locale: &NumberLocale,
) -> MetricDisplay {
    MetricDisplay {
        display_value: format_value(value, kind, locale),
        direction: GrowthDirection::from_growth(growth),
        magnitude: growth.abs(),
    }
}
