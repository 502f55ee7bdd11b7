//! Showcase Context
//!
//! Parsed configuration shared with every widget via the Leptos Context API.
//! Widgets copy their section out at mount time; no widget state lives here.

use leptos::prelude::*;
use widget_state::config::{CollectiblesConfig, StatusConfig, TabsConfig, TodoConfig};
use widget_state::ShowcaseConfig;

#[derive(Clone, Copy)]
pub struct ShowcaseContext {
    config: StoredValue<ShowcaseConfig>,
}

impl ShowcaseContext {
    pub fn new(config: ShowcaseConfig) -> Self {
        Self { config: StoredValue::new(config) }
    }

    pub fn status(&self) -> StatusConfig {
        self.config.with_value(|c| c.status.clone())
    }

    pub fn tabs(&self) -> TabsConfig {
        self.config.with_value(|c| c.tabs.clone())
    }

    pub fn todo(&self) -> TodoConfig {
        self.config.with_value(|c| c.todo.clone())
    }

    pub fn collectibles(&self) -> CollectiblesConfig {
        self.config.with_value(|c| c.collectibles.clone())
    }
}

/// Get the showcase context provided by [`crate::app::App`]
pub fn use_showcase() -> ShowcaseContext {
    expect_context::<ShowcaseContext>()
}
