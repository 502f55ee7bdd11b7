//! Widget State
//!
//! State machines behind the showcase widgets. Each widget owns one of these
//! values; nothing here touches the DOM, so the UI layer only maps events to
//! method calls and state to classes and inline styles.

pub mod config;
pub mod cycle;
pub mod error;
pub mod hover;
pub mod menu;
pub mod plan;
pub mod status;
pub mod tabs;
pub mod todo;
pub mod views;

#[cfg(test)]
mod test_support;

pub use config::ShowcaseConfig;
pub use cycle::CycleIndex;
pub use error::{Result, StateError};
pub use hover::HoverTarget;
pub use menu::{MenuItem, MenuLayout, MenuState};
pub use plan::{Billing, PillSide, Plan, PlanToggle};
pub use status::{Carousel, StatusEntry, Tone};
pub use tabs::{Direction, TabState};
pub use todo::{Task, TaskId, TaskList, TaskSeed};
pub use views::{pack_total, Collectible, Placement, RankSlot, ViewMode, ViewSwitcher};
