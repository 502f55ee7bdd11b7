//! Status Carousel Component
//!
//! Pill that cycles through status entries on a timer, with prev/next
//! buttons and one dot per entry.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use widget_state::Carousel;

use crate::context::use_showcase;
use crate::style::class_list;

#[component]
pub fn StatusCarousel() -> impl IntoView {
    let config = use_showcase().status();
    let period = config.period();

    let carousel = match Carousel::new(config.entries) {
        Ok(carousel) => RwSignal::new(carousel),
        Err(e) => {
            tracing::warn!(error = %e, "status carousel has nothing to show");
            return view! { <div class="status-carousel empty"></div> }.into_any();
        }
    };

    // Interval is cancelled when dropped; it lives until cleanup takes it.
    let interval = Interval::new(period, move || {
        carousel.try_update(|c| {
            let _ = c.tick();
        });
    });
    let interval = StoredValue::new_local(Some(interval));

    on_cleanup(move || {
        carousel.try_update_untracked(|c| c.teardown());
        interval.try_update_value(|slot| drop(slot.take()));
    });

    let current = Memo::new(move |_| carousel.with(|c| c.current().clone()));
    let entry_count = carousel.with_untracked(|c| c.entries().len());

    let dots = (0..entry_count)
        .map(|index| {
            let dot_class = move || {
                carousel.with(|c| {
                    let tone = c.entries()[index].tone.class();
                    if c.index() == index {
                        format!("status-dot {}", tone)
                    } else {
                        "status-dot".to_string()
                    }
                })
            };
            view! {
                <button
                    class=dot_class
                    on:click=move |_| carousel.update(|c| {
                        let _ = c.select_index(index);
                    })
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="status-carousel">
            <div class=move || format!("status-pill {}", current.get().tone.class())>
                {move || {
                    let entry = current.get();
                    view! {
                        <div class=class_list("status-icon", &[("spinning", entry.spinning)])>
                            {entry.icon.clone()}
                        </div>
                        <div class="status-text">{entry.label.clone()}</div>
                    }
                }}
            </div>

            <div class="status-controls">
                <button class="status-nav" on:click=move |_| carousel.update(|c| c.previous())>"‹"</button>
                <div class="status-dots">{dots}</div>
                <button class="status-nav" on:click=move |_| carousel.update(|c| c.next())>"›"</button>
            </div>
        </div>
    }
    .into_any()
}
