use serde::{Deserialize, Serialize};

/// Time range of the season view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonRange {
    #[default]
    ThisSeason,
    LastSeason,
    ThisMonth,
    #[serde(rename = "last-30-days")]
    Last30Days,
    CustomRange,
}

impl SeasonRange {
    pub const ALL: [SeasonRange; 5] = [
        SeasonRange::ThisSeason,
        SeasonRange::LastSeason,
        SeasonRange::ThisMonth,
        SeasonRange::Last30Days,
        SeasonRange::CustomRange,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SeasonRange::ThisSeason => "this-season",
            SeasonRange::LastSeason => "last-season",
            SeasonRange::ThisMonth => "this-month",
            SeasonRange::Last30Days => "last-30-days",
            SeasonRange::CustomRange => "custom-range",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeasonRange::ThisSeason => "This season",
            SeasonRange::LastSeason => "Last season",
            SeasonRange::ThisMonth => "This month",
            SeasonRange::Last30Days => "Last 30 days",
            SeasonRange::CustomRange => "Custom range",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.key() == key)
    }

    /// Like `from_key`, falling back to `ThisSeason`.
    pub fn lookup(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            log::debug!("unknown season range '{}', using default", key);
            Self::default()
        })
    }
}

/// Product filter of the season performance chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonProduct {
    #[default]
    AllProducts,
    PackS,
    PackM,
    PackL,
    PackXl,
}

impl SeasonProduct {
    pub const ALL: [SeasonProduct; 5] = [
        SeasonProduct::AllProducts,
        SeasonProduct::PackS,
        SeasonProduct::PackM,
        SeasonProduct::PackL,
        SeasonProduct::PackXl,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SeasonProduct::AllProducts => "all-products",
            SeasonProduct::PackS => "pack-s",
            SeasonProduct::PackM => "pack-m",
            SeasonProduct::PackL => "pack-l",
            SeasonProduct::PackXl => "pack-xl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeasonProduct::AllProducts => "All products",
            SeasonProduct::PackS => "Pack S",
            SeasonProduct::PackM => "Pack M",
            SeasonProduct::PackL => "Pack L",
            SeasonProduct::PackXl => "Pack XL",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|product| product.key() == key)
    }

    /// Like `from_key`, falling back to `AllProducts`.
    pub fn lookup(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            log::debug!("unknown season product '{}', using default", key);
            Self::default()
        })
    }
}

/// Headline numbers for one time range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    pub revenue: f64,
    pub schools: u32,
    pub kids: u32,
    /// Revenue growth in percent
    pub growth: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_falls_back_to_defaults() {
        assert_eq!(SeasonRange::lookup("last-30-days"), SeasonRange::Last30Days);
        assert_eq!(SeasonRange::lookup("next-decade"), SeasonRange::ThisSeason);
        assert_eq!(SeasonProduct::lookup("pack-xl"), SeasonProduct::PackXl);
        assert_eq!(SeasonProduct::lookup(""), SeasonProduct::AllProducts);
    }

    #[test]
    fn test_serde_keys_match() {
        for range in SeasonRange::ALL {
            let json = serde_json::to_string(&range).unwrap();
            assert_eq!(json, format!("\"{}\"", range.key()));
        }
        for product in SeasonProduct::ALL {
            let json = serde_json::to_string(&product).unwrap();
            assert_eq!(json, format!("\"{}\"", product.key()));
        }
    }
}
