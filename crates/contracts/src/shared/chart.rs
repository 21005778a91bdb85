//! Chart data shaping and chart handle lifecycle.
//!
//! The core only produces labelled series; drawing them is the job of a
//! [`ChartBackend`] supplied by the rendering side.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Relative spread of the synthetic daily increments.
pub const JITTER: f64 = 0.2;

/// Logical chart slots on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartName {
    DailySales,
    AverageOrder,
    SeasonPerformance,
}

impl ChartName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartName::DailySales => "daily_sales",
            ChartName::AverageOrder => "average_order",
            ChartName::SeasonPerformance => "season_performance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("series '{name}' has {actual} values, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// Labels plus named series of the same length, in legend order.
///
/// Series can only be added through [`ChartSeries::with_series`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    labels: Vec<String>,
    series: Vec<NamedSeries>,
}

impl ChartSeries {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            series: Vec::new(),
        }
    }

    /// Appends a series, rejecting it when its length differs from the labels.
    pub fn with_series(mut self, name: &str, values: Vec<f64>) -> Result<Self, ChartError> {
        if values.len() != self.labels.len() {
            return Err(ChartError::LengthMismatch {
                name: name.to_string(),
                expected: self.labels.len(),
                actual: values.len(),
            });
        }
        self.series.push(NamedSeries {
            name: name.to_string(),
            values,
        });
        Ok(self)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn series(&self) -> &[NamedSeries] {
        &self.series
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }
}

/// Running sum of `base * (1 + jitter)` increments, jitter uniform in
/// `[-JITTER, JITTER]`. Each running total is rounded to a whole number.
pub fn cumulative_series<R: Rng + ?Sized>(rng: &mut R, base: f64, buckets: usize) -> Vec<f64> {
    let mut total = 0.0;
    (0..buckets)
        .map(|_| {
            let jitter: f64 = rng.gen_range(-JITTER..=JITTER);
            total += base * (1.0 + jitter);
            total.round()
        })
        .collect()
}

/// "Jan 1", "Feb 1", ... up to the current month, then today's date unless
/// it already is the first of the month.
pub fn year_to_date_labels(today: NaiveDate) -> Vec<String> {
    let mut labels: Vec<String> = (1..=today.month())
        .filter_map(|month| NaiveDate::from_ymd_opt(today.year(), month, 1))
        .map(|first| format!("{} 1", first.format("%b")))
        .collect();

    if today.day() != 1 {
        labels.push(format!("{} {}", today.format("%b"), today.day()));
    }
    labels
}

/// Draws charts. Implemented by the rendering surface.
pub trait ChartBackend {
    type Handle;

    /// Creates a chart; `None` when the target is not mounted.
    fn create(&mut self, name: ChartName, data: &ChartSeries) -> Option<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owns live chart handles, one per [`ChartName`].
///
/// Rendering a chart always destroys the previous handle for that name
/// before the replacement is created.
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    handles: HashMap<ChartName, B::Handle>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handles: HashMap::new(),
        }
    }

    /// Returns whether a chart is now live under `name`.
    pub fn render(&mut self, name: ChartName, data: &ChartSeries) -> bool {
        self.destroy(name);
        match self.backend.create(name, data) {
            Some(handle) => {
                self.handles.insert(name, handle);
                true
            }
            None => {
                log::debug!("chart '{}' not mounted, skipped", name.as_str());
                false
            }
        }
    }

    /// Like [`render`](Self::render) for a series that may have failed to
    /// build. A failed series leaves no chart under `name`.
    pub fn render_checked(
        &mut self,
        name: ChartName,
        data: Result<ChartSeries, ChartError>,
    ) -> bool {
        match data {
            Ok(data) => self.render(name, &data),
            Err(err) => {
                log::warn!("chart '{}' not rendered: {}", name.as_str(), err);
                self.destroy(name);
                false
            }
        }
    }

    pub fn destroy(&mut self, name: ChartName) -> bool {
        match self.handles.remove(&name) {
            Some(previous) => {
                self.backend.destroy(previous);
                true
            }
            None => false,
        }
    }

    pub fn destroy_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            self.backend.destroy(handle);
        }
    }

    pub fn is_rendered(&self, name: ChartName) -> bool {
        self.handles.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every create/destroy call.
    #[derive(Debug, Default)]
    pub struct RecordingBackend {
        pub next_id: u32,
        pub live: Vec<u32>,
        pub events: Vec<String>,
        pub last_data: HashMap<ChartName, ChartSeries>,
        pub unmounted: Vec<ChartName>,
    }

    impl ChartBackend for RecordingBackend {
        type Handle = u32;

        fn create(&mut self, name: ChartName, data: &ChartSeries) -> Option<u32> {
            if self.unmounted.contains(&name) {
                return None;
            }
            self.next_id += 1;
            self.live.push(self.next_id);
            self.events
                .push(format!("create {} #{}", name.as_str(), self.next_id));
            self.last_data.insert(name, data.clone());
            Some(self.next_id)
        }

        fn destroy(&mut self, handle: u32) {
            self.live.retain(|h| *h != handle);
            self.events.push(format!("destroy #{}", handle));
        }
    }
}
