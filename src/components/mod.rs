//! UI Components
//!
//! One Leptos component per showcase widget.

mod collectibles_view;
mod dropdown_menu;
mod plan_switch;
mod status_carousel;
mod tab_view;
mod todo_card;

pub use collectibles_view::CollectiblesView;
pub use dropdown_menu::DropdownMenu;
pub use plan_switch::PlanSwitch;
pub use status_carousel::StatusCarousel;
pub use tab_view::TabView;
pub use todo_card::TodoCard;
