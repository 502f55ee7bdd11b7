//! Status Carousel State
//!
//! A [`CycleIndex`] over status entries, advanced by an external timer until
//! the owning widget is torn down.

use serde::{Deserialize, Serialize};

use crate::cycle::CycleIndex;
use crate::error::{Result, StateError};

/// Visual tone of a status entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Danger,
}

impl Tone {
    /// CSS modifier used for the pill background, text and active dot
    pub fn class(self) -> &'static str {
        match self {
            Tone::Info => "tone-info",
            Tone::Success => "tone-success",
            Tone::Danger => "tone-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub id: String,
    pub label: String,
    pub tone: Tone,
    #[serde(default)]
    pub icon: String,
    /// Icon rotates continuously while this entry is showing
    #[serde(default)]
    pub spinning: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    entries: Vec<StatusEntry>,
    cursor: CycleIndex,
    live: bool,
}

impl Carousel {
    pub fn new(entries: Vec<StatusEntry>) -> Result<Self> {
        let cursor = CycleIndex::new(entries.len())?;
        Ok(Self { entries, cursor, live: true })
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn current(&self) -> &StatusEntry {
        // cursor is always in range for `entries`
        &self.entries[self.cursor.index()]
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Timer tick. Rejected once the widget has been torn down.
    pub fn tick(&mut self) -> Result<()> {
        if !self.live {
            tracing::debug!("carousel tick after teardown dropped");
            return Err(StateError::TornDown);
        }
        self.cursor.tick();
        Ok(())
    }

    pub fn next(&mut self) {
        self.cursor.next();
    }

    pub fn previous(&mut self) {
        self.cursor.previous();
    }

    pub fn select_index(&mut self, index: usize) -> Result<()> {
        self.cursor.select_index(index)
    }

    /// Stop accepting timer ticks.
    pub fn teardown(&mut self) {
        self.live = false;
        tracing::debug!(index = self.cursor.index(), "carousel torn down");
    }
}
