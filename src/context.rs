//! Application Context
//!
//! API configuration shared via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpApi;
use crate::config::ApiConfig;

#[derive(Clone, Copy)]
pub struct AdminContext {
    config: StoredValue<ApiConfig>,
}

impl AdminContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Fresh client for one request (browser fetch keeps no pool)
    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.config.get_value())
    }

    /// Link to an uploaded file
    pub fn file_url(&self, file_path: &str) -> String {
        self.config.with_value(|config| config.file_url(file_path))
    }
}

pub fn use_admin_context() -> AdminContext {
    expect_context::<AdminContext>()
}
