//! Showcase Configuration
//!
//! Plain data for every widget on the demo page. Each section defaults to the
//! stock demo content, so `{}` is a complete config.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::menu::MenuItem;
use crate::status::{StatusEntry, Tone};
use crate::todo::TaskSeed;
use crate::views::Collectible;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
    pub menu: MenuConfig,
    pub status: StatusConfig,
    pub tabs: TabsConfig,
    pub todo: TodoConfig,
    pub collectibles: CollectiblesConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            menu: MenuConfig::default(),
            status: StatusConfig::default(),
            tabs: TabsConfig::default(),
            todo: TodoConfig::default(),
            collectibles: CollectiblesConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub initial_open: bool,
    pub items: Vec<MenuItem>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            initial_open: false,
            items: vec![
                MenuItem::new("home", "Home", "⌂"),
                MenuItem::new("mail", "Mail", "✉"),
                MenuItem::new("user", "Profile", "☺"),
                MenuItem::new("settings", "Settings", "⚙"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Auto-advance period in milliseconds
    pub period_ms: u32,
    pub entries: Vec<StatusEntry>,
}

/// Floor for the auto-advance period; 0 would fire back to back
pub const MIN_PERIOD_MS: u32 = 250;

impl StatusConfig {
    /// Configured period, raised to [`MIN_PERIOD_MS`].
    pub fn period(&self) -> u32 {
        if self.period_ms < MIN_PERIOD_MS {
            tracing::debug!(period_ms = self.period_ms, min = MIN_PERIOD_MS, "status period clamped");
        }
        self.period_ms.max(MIN_PERIOD_MS)
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            period_ms: 5000,
            entries: default_status_entries(),
        }
    }
}

pub fn default_status_entries() -> Vec<StatusEntry> {
    vec![
        StatusEntry {
            id: "analyzing".to_string(),
            label: "Analysing Transaction".to_string(),
            tone: Tone::Info,
            icon: "◌".to_string(),
            spinning: true,
        },
        StatusEntry {
            id: "safe".to_string(),
            label: "Transaction Safe".to_string(),
            tone: Tone::Success,
            icon: "✓".to_string(),
            spinning: false,
        },
        StatusEntry {
            id: "warning".to_string(),
            label: "Transaction Warning".to_string(),
            tone: Tone::Danger,
            icon: "⚠".to_string(),
            spinning: false,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub labels: Vec<String>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            labels: (1..=5).map(|day| format!("Day {}", day)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub seed: Vec<TaskSeed>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            seed: vec![
                TaskSeed::new("Buy groceries", true),
                TaskSeed::new("Go to the gym", false),
                TaskSeed::new("Go for a walk", true),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectiblesConfig {
    pub items: Vec<Collectible>,
}

impl Default for CollectiblesConfig {
    fn default() -> Self {
        Self { items: default_collectibles() }
    }
}

pub fn default_collectibles() -> Vec<Collectible> {
    vec![
        Collectible {
            title: "Skilled Fingers Series".to_string(),
            image: "public/item2.svg".to_string(),
            price: 0.855,
            rank: "209".to_string(),
            angle: Some(-10.0),
        },
        Collectible {
            title: "Vibrant Vibes Series".to_string(),
            image: "public/item1.svg".to_string(),
            price: 0.209,
            rank: "808".to_string(),
            angle: Some(15.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;

    #[test]
    fn test_empty_object_is_stock_demo() {
        let config = ShowcaseConfig::from_json("{}").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.status.period_ms, 5000);
        assert_eq!(config.tabs.labels.len(), 5);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "log_level": "debug",
            "menu": { "initial_open": true },
            "status": { "period_ms": 1200 },
            "todo": { "seed": [ { "text": "Ship it" } ] }
        }"#;
        let config = ShowcaseConfig::from_json(json).unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(config.menu.initial_open);
        assert_eq!(config.menu.items.len(), 4);
        assert_eq!(config.status.period_ms, 1200);
        assert_eq!(config.status.entries.len(), 3);
        assert_eq!(config.todo.seed, vec![TaskSeed::new("Ship it", false)]);
    }

    #[test]
    fn test_status_tone_names() {
        let json = r#"{ "status": { "entries": [
            { "id": "x", "label": "X", "tone": "danger" }
        ] } }"#;
        let config = ShowcaseConfig::from_json(json).unwrap();
        assert_eq!(config.status.entries[0].tone, Tone::Danger);
        assert!(!config.status.entries[0].spinning);
    }

    #[test]
    fn test_malformed_json() {
        let err = ShowcaseConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, StateError::Config(_)));
    }

    #[test]
    fn test_status_period_floor() {
        let config = ShowcaseConfig::from_json(r#"{ "status": { "period_ms": 0 } }"#).unwrap();
        assert_eq!(config.status.period_ms, 0);
        assert_eq!(config.status.period(), MIN_PERIOD_MS);

        assert_eq!(StatusConfig::default().period(), 5000);
    }
}
