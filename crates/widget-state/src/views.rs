//! Collectibles View Switcher
//!
//! One dataset, three layouts. [`ViewSwitcher::project`] is a pure function of
//! the mode, the pack front index and the items.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StateError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Pack,
    Card,
}

impl ViewMode {
    /// Switcher order
    pub const ALL: [ViewMode; 3] = [ViewMode::List, ViewMode::Pack, ViewMode::Card];

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::List => "List view",
            ViewMode::Pack => "Pack view",
            ViewMode::Card => "Card view",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ViewMode::List => "☰",
            ViewMode::Pack => "❏",
            ViewMode::Card => "▦",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ViewMode::List => "view-list",
            ViewMode::Pack => "view-pack",
            ViewMode::Card => "view-card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub title: String,
    pub image: String,
    pub price: f64,
    pub rank: String,
    /// Tilt in degrees when stacked in the pack
    #[serde(default)]
    pub angle: Option<f32>,
}

/// Where the rank badge sits, when it is shown at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankSlot {
    /// Next to the price (card grid)
    Inline,
    /// End of the row (list)
    Trailing,
}

/// Where and how one collectible is drawn in the current mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub rotation: f32,
    pub z_index: i32,
    pub show_details: bool,
    /// `None` hides the rank
    pub rank_slot: Option<RankSlot>,
}

const FRONT_Z_INDEX: i32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSwitcher {
    mode: ViewMode,
    front: Option<usize>,
}

impl ViewSwitcher {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Only meaningful in pack mode
    pub fn front(&self) -> Option<usize> {
        self.front
    }

    /// Switch layout. The pack front index does not survive leaving the pack.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.mode != mode {
            self.front = None;
        }
        self.mode = mode;
        tracing::debug!(?mode, "view mode set");
    }

    /// Raise item `index` to the top of the pack.
    pub fn bring_to_front(&mut self, index: usize, len: usize) -> Result<()> {
        if self.mode != ViewMode::Pack {
            tracing::debug!(index, mode = ?self.mode, "bring to front ignored: not in pack mode");
            return Err(StateError::WrongMode(self.mode));
        }
        if index >= len {
            tracing::debug!(index, len, "bring to front ignored: out of range");
            return Err(StateError::OutOfRange { index, len });
        }
        self.front = Some(index);
        tracing::debug!(index, "pack front set");
        Ok(())
    }

    pub fn project(&self, items: &[Collectible]) -> Vec<Placement> {
        let len = items.len();
        items
            .iter()
            .enumerate()
            .map(|(index, item)| match self.mode {
                ViewMode::Pack => Placement {
                    index,
                    rotation: item.angle.unwrap_or(0.0),
                    z_index: if self.front == Some(index) {
                        FRONT_Z_INDEX
                    } else {
                        (len - index) as i32
                    },
                    show_details: false,
                    rank_slot: None,
                },
                ViewMode::List => Placement {
                    index,
                    rotation: 0.0,
                    z_index: 0,
                    show_details: true,
                    rank_slot: Some(RankSlot::Trailing),
                },
                ViewMode::Card => Placement {
                    index,
                    rotation: 0.0,
                    z_index: 0,
                    show_details: true,
                    rank_slot: Some(RankSlot::Inline),
                },
            })
            .collect()
    }
}

/// "0.855 ETH TOTAL" style footer for the pack
pub fn pack_total(items: &[Collectible]) -> String {
    // fold from +0.0; an empty f64 sum() is -0.0
    let total = items.iter().map(|item| item.price).fold(0.0, |sum, price| sum + price);
    format!("{:.3} ETH TOTAL", total)
}
