use serde::{Deserialize, Serialize};

/// Sidebar destinations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavPage {
    #[default]
    Dashboard,
    ThisSeason,
    Orders,
    Products,
    Customers,
    Invoices,
}

impl NavPage {
    pub const ALL: [NavPage; 6] = [
        NavPage::Dashboard,
        NavPage::ThisSeason,
        NavPage::Orders,
        NavPage::Products,
        NavPage::Customers,
        NavPage::Invoices,
    ];

    /// Key used in `data-page` attributes and query strings
    pub fn key(&self) -> &'static str {
        match self {
            NavPage::Dashboard => "dashboard",
            NavPage::ThisSeason => "this-season",
            NavPage::Orders => "orders",
            NavPage::Products => "products",
            NavPage::Customers => "customers",
            NavPage::Invoices => "invoices",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavPage::Dashboard => "Dashboard",
            NavPage::ThisSeason => "This Season",
            NavPage::Orders => "Orders",
            NavPage::Products => "Products",
            NavPage::Customers => "Customers",
            NavPage::Invoices => "Invoices",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }
}
