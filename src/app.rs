//! Motion Showcase App
//!
//! Demo page: the dropdown menu pinned top-left, the status carousel, and a
//! tab view hosting the remaining widgets one per day.

use leptos::prelude::*;
use widget_state::ShowcaseConfig;

use crate::components::{
    CollectiblesView, DropdownMenu, PlanSwitch, StatusCarousel, TabView, TodoCard,
};
use crate::context::ShowcaseContext;

fn day_panel(index: usize) -> AnyView {
    match index {
        0 => view! { <TodoCard /> }.into_any(),
        1 => view! { <PlanSwitch /> }.into_any(),
        2 => view! { <CollectiblesView /> }.into_any(),
        3 => view! { <StatusCarousel /> }.into_any(),
        _ => view! { <p class="tab-empty">"Nothing planned yet"</p> }.into_any(),
    }
}

#[component]
pub fn App(config: ShowcaseConfig) -> impl IntoView {
    let menu = config.menu.clone();
    let tab_labels = config.tabs.labels.clone();

    // Provide context to all children
    provide_context(ShowcaseContext::new(config));

    let on_select = Callback::new(|id: String| {
        tracing::info!(%id, "menu selection");
    });

    view! {
        <div class="showcase">
            <DropdownMenu
                position_class="menu-corner"
                items=menu.items
                initial_open=menu.initial_open
                on_select=on_select
            />

            <section class="showcase-hero">
                <StatusCarousel />
            </section>

            <section class="showcase-days">
                <TabView labels=tab_labels panel=day_panel />
            </section>
        </div>
    }
}
