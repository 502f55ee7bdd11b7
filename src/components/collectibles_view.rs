//! Collectibles View Component
//!
//! The same collectibles shown as a list, a tilted pack or a card grid.

use leptos::prelude::*;
use widget_state::{pack_total, Collectible, Placement, RankSlot, ViewMode, ViewSwitcher};

use crate::context::use_showcase;
use crate::style::{class_list, transform_style};

/// One collectible in whichever layout is active
#[component]
fn CollectibleTile(
    item: Collectible,
    placement: Placement,
    mode: ViewMode,
    #[prop(optional, into)] on_click: Option<Callback<usize>>,
) -> impl IntoView {
    let index = placement.index;
    let rank = format!("#{}", item.rank);

    view! {
        <div
            class=format!("collectible {}", mode.class())
            style=transform_style(placement.rotation, placement.z_index)
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(index);
                }
            }
        >
            <div class="collectible-image">
                <img src=item.image.clone() alt=item.title.clone() />
            </div>
            {placement.show_details.then(|| view! {
                <div class="collectible-details">
                    <div class="collectible-meta">
                        <h3>{item.title.clone()}</h3>
                        <div class="collectible-price">
                            <span>{format!("{} ETH", item.price)}</span>
                            {(placement.rank_slot == Some(RankSlot::Inline)).then(|| view! { <span class="collectible-rank">"▢ " {rank.clone()}</span> })}
                        </div>
                    </div>
                    {(placement.rank_slot == Some(RankSlot::Trailing)).then(|| view! { <span class="collectible-rank">"▢ " {rank.clone()}</span> })}
                </div>
            })}
        </div>
    }
}

#[component]
pub fn CollectiblesView() -> impl IntoView {
    let items = StoredValue::new(use_showcase().collectibles().items);
    let switcher = RwSignal::new(ViewSwitcher::default());
    let mode = Memo::new(move |_| switcher.with(|s| s.mode()));

    let bring_to_front = Callback::new(move |index: usize| {
        let len = items.with_value(|items| items.len());
        switcher.update(|s| {
            let _ = s.bring_to_front(index, len);
        });
    });

    let mode_buttons = ViewMode::ALL
        .into_iter()
        .map(|view_mode| {
            view! {
                <button
                    class=move || class_list("view-option", &[("active", mode.get() == view_mode)])
                    on:click=move |_| switcher.update(|s| s.set_mode(view_mode))
                >
                    <span class="view-option-label">
                        {view_mode.icon()} " " {view_mode.title()}
                    </span>
                </button>
            }
        })
        .collect_view();

    let tiles = move || {
        let current = mode.get();
        let placements = items.with_value(|items| switcher.with(|s| s.project(items)));
        items.with_value(|items| {
            placements
                .into_iter()
                .map(|placement| {
                    let item = items[placement.index].clone();
                    if current == ViewMode::Pack {
                        view! { <CollectibleTile item=item placement=placement mode=current on_click=bring_to_front /> }.into_any()
                    } else {
                        view! { <CollectibleTile item=item placement=placement mode=current /> }.into_any()
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="collectibles">
            <h1 class="collectibles-title">"Collectibles"</h1>
            <div class="view-switcher">{mode_buttons}</div>

            <div class=move || format!("collectibles-area {}", mode.get().class())>
                <div class="collectibles-items">{tiles}</div>
                <Show when=move || mode.get() == ViewMode::Pack>
                    <div class="pack-summary">
                        <p class="pack-count">{move || format!("{} Collectibles", items.with_value(|i| i.len()))}</p>
                        <p class="pack-total">{move || items.with_value(|i| pack_total(i))}</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
