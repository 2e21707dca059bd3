//! Todo List Component
//!
//! Stateless item list with seen/unseen styling and click-to-mark.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::models::{ItemId, TodoItem};

/// Renders each item's title, gray when its id is in `seen_ids`.
/// Item clicks report the id upward and stop there, so a click inside
/// the list does not collapse the enclosing card.
#[component]
pub fn TodoList(
    items: Vec<TodoItem>,
    seen_ids: ReadSignal<HashSet<ItemId>>,
    #[prop(into)] on_item_click: Callback<ItemId>,
) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || items.clone()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let color = move || {
                        if seen_ids.get().contains(&id) { "color: gray;" } else { "color: black;" }
                    };

                    view! {
                        <li
                            style=color
                            on:click=move |ev: web_sys::MouseEvent| {
                                ev.stop_propagation();
                                on_item_click.run(id);
                            }
                        >
                            {item.title}
                        </li>
                    }
                }
            />
        </ul>
    }
}
