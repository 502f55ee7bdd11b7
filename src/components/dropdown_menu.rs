//! Dropdown Menu Component
//!
//! Round toggle that expands downward into an icon list. Hovering a row
//! widens the container and reveals that row's label.

use leptos::prelude::*;
use widget_state::{MenuItem, MenuState};

use crate::style::class_list;

/// Animated dropdown menu
///
/// # Arguments
/// * `items` - Entries in display order
/// * `initial_open` - Start expanded
/// * `on_select` - Called with the item id after a successful selection
/// * `position_class` - Extra classes for the positioning wrapper
#[component]
pub fn DropdownMenu(
    items: Vec<MenuItem>,
    #[prop(optional)] initial_open: bool,
    #[prop(optional, into)] on_select: Option<Callback<String>>,
    #[prop(optional, into)] position_class: String,
) -> impl IntoView {
    let menu = RwSignal::new(MenuState::new(items, initial_open));
    let is_open = move || menu.with(|m| m.is_open());

    let halo_style = move || {
        let layout = menu.with(|m| m.layout());
        format!(
            "width: {0}px; height: {0}px; opacity: {1};",
            layout.halo_size, layout.halo_opacity
        )
    };

    let container_style = move || {
        let layout = menu.with(|m| m.layout());
        format!(
            "width: {}px; height: {}px; border-radius: {}px;",
            layout.width, layout.height, layout.radius
        )
    };

    let rows = menu
        .with_untracked(|m| m.items().to_vec())
        .into_iter()
        .map(|item| {
            let id = item.id.clone();
            let (click_id, enter_id, leave_id) = (id.clone(), id.clone(), id.clone());
            let row_id = id.clone();
            let badge_id = id.clone();
            let label_id = id;
            let icon = item.icon.clone();
            let label = item.label.clone();

            let on_click = move |_: web_sys::MouseEvent| {
                let selected = menu.try_update(|m| m.select(&click_id));
                if let Some(Ok(selected)) = selected {
                    if let Some(cb) = on_select {
                        cb.run(selected);
                    }
                }
            };

            view! {
                <div
                    class=move || menu.with(|m| class_list("menu-row", &[("active", m.is_active(&row_id))]))
                    on:click=on_click
                    on:mouseenter=move |_| menu.update(|m| m.hover_enter(&enter_id))
                    on:mouseleave=move |_| menu.update(|m| m.hover_leave(&leave_id))
                >
                    <div class=move || menu.with(|m| {
                        let emphasized = m.is_hovered(&badge_id) || m.is_active(&badge_id);
                        let wiggle = m.is_hovered(&badge_id) && m.active().is_none();
                        class_list("menu-icon", &[
                            ("active", m.is_active(&badge_id)),
                            ("emphasized", emphasized),
                            ("wiggle", wiggle),
                        ])
                    })>
                        {icon}
                    </div>
                    <Show when=move || menu.with(|m| m.is_hovered(&label_id))>
                        <span class="menu-label">{label.clone()}</span>
                    </Show>
                </div>
            }
        })
        .collect_view();

    let wrapper_class = format!("dropdown-menu {}", position_class).trim_end().to_string();

    view! {
        <div class=wrapper_class>
            <div class="menu-halo" style=halo_style></div>
            <div class=move || class_list("menu-container", &[("open", is_open())]) style=container_style>
                <button class="menu-toggle" on:click=move |_| menu.update(|m| m.toggle_open())>
                    <span class=move || class_list("menu-toggle-icon", &[("rotated", is_open())])>
                        {move || if is_open() { "✕" } else { "☰" }}
                    </span>
                </button>
                <div class=move || class_list("menu-divider", &[("visible", is_open())])></div>
                <div class=move || class_list("menu-rows", &[("visible", is_open())])>
                    {rows}
                </div>
            </div>
        </div>
    }
}
