//! Tab View Component
//!
//! Tab strip with clamped prev/next arrows. The active panel is rebuilt on
//! every switch and slides in from the side the user moved toward.

use leptos::prelude::*;
use widget_state::TabState;

use crate::style::class_list;

#[component]
pub fn TabView<F>(labels: Vec<String>, panel: F) -> impl IntoView
where
    F: Fn(usize) -> AnyView + Send + Sync + 'static,
{
    let tabs = match TabState::new(labels.len()) {
        Ok(tabs) => RwSignal::new(tabs),
        Err(e) => {
            tracing::warn!(error = %e, "tab view has no tabs");
            return view! { <div class="tab-view empty"></div> }.into_any();
        }
    };
    let active = Memo::new(move |_| tabs.with(|t| t.active()));

    let strip = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            view! {
                <button
                    class=move || class_list("tab", &[("active", active.get() == index)])
                    on:click=move |_| tabs.update(|t| {
                        let _ = t.select(index);
                    })
                >
                    {label}
                    <Show when=move || active.get() == index>
                        <div class="tab-highlight"></div>
                    </Show>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="tab-view">
            <div class="tab-bar">
                <div class="tab-strip">{strip}</div>
                <div class="tab-arrows">
                    <button
                        class="tab-arrow"
                        disabled=move || !tabs.with(|t| t.can_step_back())
                        on:click=move |_| tabs.update(|t| t.step_back())
                    >
                        "‹"
                    </button>
                    <button
                        class="tab-arrow"
                        disabled=move || !tabs.with(|t| t.can_step_forward())
                        on:click=move |_| tabs.update(|t| t.step_forward())
                    >
                        "›"
                    </button>
                </div>
            </div>

            {move || {
                let index = active.get();
                let offset = tabs.with_untracked(|t| t.direction().offset());
                view! {
                    <div class="tab-panel" style=format!("--enter-x: {}px;", offset)>
                        {panel(index)}
                    </div>
                }
            }}
        </div>
    }
    .into_any()
}
