use crate::shared::config::DashboardConfig;
use contracts::shared::navigation::NavPage;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Page shown in the center zone
    pub active: RwSignal<NavPage>,
    pub left_open: RwSignal<bool>,
    pub config: StoredValue<DashboardConfig>,
}

impl AppGlobalContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            active: RwSignal::new(NavPage::default()),
            left_open: RwSignal::new(true),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    /// Mirrors the active page into `?page=`, keeping the other parameters.
    pub fn init_router_integration(&self) {
        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let mut params = query_params(&current_search);
            params.insert("page".to_string(), page.key().to_string());
            let new_url = format!("?{}", serde_qs::to_string(&params).unwrap_or_default());

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

fn query_params(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// `page` parameter of the current URL, if any.
pub fn page_from_url() -> Option<String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    query_params(&search).remove("page")
}
