//! Page-level configuration read from the query string.
//!
//! `?source=api&delay_ms=0&page_size=5&locale=en-usd`

use contracts::dashboards::d400_sales_overview::orders::DEFAULT_PAGE_SIZE;
use contracts::shared::number_format::NumberLocale;
use serde::Deserialize;

/// Where the sales overview payload comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in payload after `delay_ms`
    #[default]
    Mock,
    /// `GET /api/d400/dashboard` on the backend
    Api,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub source: SourceKind,
    pub delay_ms: u32,
    pub page_size: usize,
    /// `fr-eur` or `en-usd`
    pub locale: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Mock,
            delay_ms: 1000,
            page_size: DEFAULT_PAGE_SIZE,
            locale: "fr-eur".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parses a query string, with or without the leading `?`.
    /// Unknown keys are ignored; a malformed value yields the defaults.
    pub fn from_query(query: &str) -> Self {
        match serde_qs::from_str::<Self>(query.trim_start_matches('?')) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid dashboard config '{}': {}", query, err);
                Self::default()
            }
        }
    }

    pub fn from_window() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn number_locale(&self) -> NumberLocale {
        NumberLocale::from_key(&self.locale).unwrap_or_else(|| {
            log::warn!("unknown locale '{}', using fr-eur", self.locale);
            NumberLocale::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        let config = DashboardConfig::from_query("");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.source, SourceKind::Mock);
        assert_eq!(config.delay_ms, 1000);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_full_query() {
        let config =
            DashboardConfig::from_query("?source=api&delay_ms=0&page_size=5&locale=en-usd");
        assert_eq!(config.source, SourceKind::Api);
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.number_locale(), NumberLocale::en_usd());
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let config = DashboardConfig::from_query("page=orders&delay_ms=250");
        assert_eq!(config.delay_ms, 250);
        assert_eq!(config.source, SourceKind::Mock);
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let config = DashboardConfig::from_query("locale=de-chf");
        assert_eq!(config.number_locale(), NumberLocale::fr_eur());
    }

    #[test]
    fn test_malformed_value_falls_back() {
        let config = DashboardConfig::from_query("delay_ms=soon");
        assert_eq!(config, DashboardConfig::default());
    }
}
