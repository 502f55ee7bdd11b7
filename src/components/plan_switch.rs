//! Plan Switch Component
//!
//! Free / Premium segmented control. Picking Premium swaps its label for a
//! nested Monthly / Annual switch.

use leptos::prelude::*;
use widget_state::{Billing, Plan, PlanToggle};

use crate::style::class_list;

#[component]
pub fn PlanSwitch() -> impl IntoView {
    let toggle = RwSignal::new(PlanToggle::default());
    let plan = Memo::new(move |_| toggle.with(|t| t.plan()));
    let billing_shown = Memo::new(move |_| toggle.with(|t| t.displayed_billing().is_some()));

    let billing_button = move |choice: Billing, label: &'static str| {
        view! {
            <button
                class=move || toggle.with(|t| class_list("billing-option", &[("selected", t.billing() == choice)]))
                on:click=move |ev| {
                    ev.stop_propagation();
                    toggle.update(|t| t.set_billing(choice));
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="plan-switch">
            <div class="plan-track">
                <div class=move || format!("plan-pill {}", toggle.with(|t| t.plan_pill().class()))></div>

                <button
                    class=move || class_list("plan-option", &[("selected", plan.get() == Plan::Free)])
                    on:click=move |_| toggle.update(|t| t.set_plan(Plan::Free))
                >
                    <span>"Free"</span>
                </button>

                <button
                    class=move || class_list("plan-option premium", &[("selected", plan.get() == Plan::Premium)])
                    on:click=move |_| toggle.update(|t| t.set_plan(Plan::Premium))
                >
                    <span class=move || class_list("plan-label", &[("hidden", plan.get() == Plan::Premium)])>
                        "Premium"
                    </span>
                    {move || if billing_shown.get() {
                        view! {
                            <div class="billing-switch">
                                <div class=move || format!("billing-pill {}", toggle.with(|t| t.billing_pill().class()))></div>
                                {billing_button(Billing::Monthly, "Monthly")}
                                {billing_button(Billing::Annual, "Annual")}
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="billing-caption">
                                <span>"Monthly"</span>
                                <span>"•"</span>
                                <span>"Annual"</span>
                            </div>
                        }.into_any()
                    }}
                </button>
            </div>
        </div>
    }
}
