//! Todo Card Component
//!
//! Task list with a progress bar, an add input and a delete button that only
//! shows on the hovered row.

use leptos::prelude::*;
use widget_state::{HoverTarget, Task, TaskId, TaskList};

use crate::context::use_showcase;
use crate::style::class_list;

/// A single task row
#[component]
fn TaskRow(
    task: Task,
    tasks: RwSignal<TaskList>,
    hovered: RwSignal<HoverTarget<TaskId>>,
) -> impl IntoView {
    let id = task.id;
    let done = task.done;

    view! {
        <div
            class="task-row"
            on:mouseenter=move |_| hovered.update(|h| h.enter(id))
            on:mouseleave=move |_| hovered.update(|h| h.leave(&id))
        >
            <div
                class=class_list("task-body", &[("done", done)])
                on:click=move |_| tasks.update(|list| {
                    let _ = list.toggle_done(id);
                })
            >
                <div class=class_list("task-check", &[("done", done)])>
                    {done.then(|| "✓")}
                </div>
                <span class="task-text">{task.text}</span>
                <Show when=move || hovered.with(|h| h.is_hovered(&id))>
                    <button
                        class="task-delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            tasks.update(|list| {
                                let _ = list.remove_task(id);
                            });
                            hovered.update(|h| h.leave(&id));
                        }
                    >
                        "🗑"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn TodoCard() -> impl IntoView {
    let seed = use_showcase().todo().seed;
    let tasks = RwSignal::new(TaskList::from_seeds(&seed));
    let hovered = RwSignal::new(HoverTarget::<TaskId>::default());
    let (new_text, set_new_text) = signal(String::new());

    let add_task = move || {
        let text = new_text.get_untracked();
        let added = tasks.try_update(|list| list.add_task(&text));
        if let Some(Ok(_)) = added {
            set_new_text.set(String::new());
        }
    };

    view! {
        <div class="todo-card">
            <div class="todo-progress">
                <div
                    class="todo-progress-fill"
                    style=move || tasks.with(|list| format!("width: {:.1}%;", list.progress_percent()))
                ></div>
            </div>

            <div class="todo-body">
                <div class="todo-header">
                    <h2>"Tasks"</h2>
                    <span class="todo-summary">{move || tasks.with(|list| list.summary())}</span>
                </div>

                <div class="todo-add">
                    <input
                        type="text"
                        placeholder="Add a new task..."
                        prop:value=move || new_text.get()
                        on:input=move |ev| set_new_text.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                add_task();
                            }
                        }
                    />
                    <button class="todo-add-btn" on:click=move |_| add_task()>"+"</button>
                </div>

                <div class="todo-list">
                    <For
                        each=move || tasks.with(|list| list.tasks().to_vec())
                        key=|task| (task.id, task.done)
                        children=move |task| view! { <TaskRow task=task tasks=tasks hovered=hovered /> }
                    />
                </div>
            </div>
        </div>
    }
}
