//! Dropdown Menu State
//!
//! Open/closed flag, the active (clicked) item and the hovered item.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StateError};
use crate::hover::HoverTarget;

/// Menu entry (plain data, supplied by the host page)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

impl MenuItem {
    pub fn new(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

const TOGGLE_SIZE: u32 = 56;
const ROW_HEIGHT: u32 = 62;
const EXPANDED_WIDTH: u32 = 150;

/// Container geometry handed to the CSS transition layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    pub width: u32,
    pub height: u32,
    pub radius: u32,
    pub halo_size: u32,
    pub halo_opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    items: Vec<MenuItem>,
    open: bool,
    active: Option<String>,
    hovered: HoverTarget<String>,
}

impl MenuState {
    pub fn new(items: Vec<MenuItem>, initial_open: bool) -> Self {
        Self {
            items,
            open: initial_open,
            active: None,
            hovered: HoverTarget::default(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.current().map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered() == Some(id)
    }

    /// Flip open/closed. The active item is remembered across a close.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "menu toggled");
    }

    /// Mark `id` active and return it for the host's selection callback.
    pub fn select(&mut self, id: &str) -> Result<String> {
        if !self.items.iter().any(|item| item.id == id) {
            tracing::debug!(id, "menu select ignored: unknown item");
            return Err(StateError::UnknownItem(id.to_string()));
        }
        self.active = Some(id.to_string());
        tracing::debug!(id, "menu item selected");
        Ok(id.to_string())
    }

    pub fn hover_enter(&mut self, id: &str) {
        self.hovered.enter(id.to_string());
    }

    pub fn hover_leave(&mut self, id: &str) {
        self.hovered.leave(&id.to_string());
    }

    pub fn layout(&self) -> MenuLayout {
        let rows = self.items.len() as u32;
        MenuLayout {
            width: if self.open && self.hovered().is_some() { EXPANDED_WIDTH } else { TOGGLE_SIZE },
            height: if self.open { rows * ROW_HEIGHT + TOGGLE_SIZE } else { TOGGLE_SIZE },
            radius: if self.open { 16 } else { 28 },
            halo_size: if self.open { 70 } else { 60 },
            halo_opacity: if self.open { 0.6 } else { 0.3 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_menu() -> MenuState {
        MenuState::new(
            vec![
                MenuItem::new("home", "Home", "⌂"),
                MenuItem::new("mail", "Mail", "✉"),
                MenuItem::new("user", "Profile", "☺"),
                MenuItem::new("settings", "Settings", "⚙"),
            ],
            false,
        )
    }

    #[test]
    fn test_select_persists_across_close() {
        let mut menu = make_menu();
        assert!(!menu.is_open());
        assert_eq!(menu.active(), None);

        menu.toggle_open();
        assert!(menu.is_open());

        let notified = menu.select("mail").unwrap();
        assert_eq!(notified, "mail");
        assert_eq!(menu.active(), Some("mail"));

        menu.toggle_open();
        assert!(!menu.is_open());
        assert_eq!(menu.active(), Some("mail"));
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let mut menu = make_menu();
        menu.select("home").unwrap();

        let err = menu.select("nope").unwrap_err();
        assert!(matches!(err, StateError::UnknownItem(ref id) if id == "nope"));
        assert_eq!(menu.active(), Some("home"));
    }

    #[test]
    fn test_hover_and_active_are_independent() {
        let mut menu = make_menu();
        menu.select("home").unwrap();
        menu.hover_enter("mail");

        assert!(menu.is_active("home") && !menu.is_hovered("home"));
        assert!(menu.is_hovered("mail") && !menu.is_active("mail"));

        menu.hover_leave("home");
        assert!(menu.is_hovered("mail"));
        menu.hover_leave("mail");
        assert_eq!(menu.hovered(), None);
        assert!(menu.is_active("home"));
    }

    #[test]
    fn test_layout_hints() {
        let mut menu = make_menu();
        let closed = menu.layout();
        assert_eq!((closed.width, closed.height, closed.radius), (56, 56, 28));

        menu.toggle_open();
        assert_eq!(menu.layout().height, 4 * 62 + 56);
        assert_eq!(menu.layout().width, 56);

        menu.hover_enter("user");
        assert_eq!(menu.layout().width, 150);
        assert_eq!(menu.layout().radius, 16);
    }
}
