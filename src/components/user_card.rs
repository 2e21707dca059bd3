//! User Card Component
//!
//! One card per user: unseen count badge plus an expandable todo list.
//! The card fetches its own items and tracks its own seen set,
//! independent of the directory's search-driven seen flags.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::TodoList;
use crate::models::{Fetch, ItemId, TodoItem, User};
use crate::roster;

#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let user_id = user.id;
    let label = format!("{} ({})", user.name, user_id.raw());

    let (items, set_items) = signal(Fetch::<Vec<TodoItem>>::Loading);
    let (seen_ids, set_seen_ids) = signal(HashSet::<ItemId>::new());
    let (expanded, set_expanded) = signal(false);

    // Fetch this user's items on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_todos(user_id).await {
                Ok(loaded) => set_items.set(Fetch::Loaded(loaded)),
                Err(err) => {
                    web_sys::console::log_1(
                        &format!("[CARD] todos fetch failed for user {}: {}", user_id.raw(), err)
                            .into(),
                    );
                    set_items.set(Fetch::Failed(err));
                }
            }
        });
    });

    let unseen = move || match items.get() {
        Fetch::Loaded(list) => roster::unseen_count(&list, &seen_ids.get()),
        _ => 0,
    };

    let on_item_click = Callback::new(move |item_id: ItemId| {
        set_seen_ids.update(|seen| {
            seen.insert(item_id);
        });
    });

    view! {
        <div class="card" on:click=move |_| set_expanded.update(|v| *v = !*v)>
            <div class="card-label">{label}</div>
            <div class="card-count">{unseen}</div>
            {move || match (items.get(), expanded.get()) {
                (Fetch::Failed(err), _) => view! {
                    <div class="card-status">{format!("Could not load items: {}", err)}</div>
                }.into_any(),
                (Fetch::Loaded(list), true) => view! {
                    <TodoList items=list seen_ids=seen_ids on_item_click=on_item_click />
                }.into_any(),
                _ => view! { <div></div> }.into_any(),
            }}
        </div>
    }
}
