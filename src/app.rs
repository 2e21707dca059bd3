//! Todo Cards App
//!
//! Top-level directory: owns the assembled roster and the
//! search-driven seen flags shared with the search panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{SearchPanel, UserCard};
use crate::models::{Fetch, User, UserId};
use crate::roster;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div>
            <h1>"First-Level Cards"</h1>
            <UserDirectory />
        </div>
    }
}

/// Fetches the roster once at mount, derives the globally seen item id
/// set, and routes search-entry clicks into seen marking.
#[component]
fn UserDirectory() -> impl IntoView {
    let (roster, set_roster) = signal(Fetch::<Vec<User>>::Loading);

    // Load users and their items on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::load_roster().await {
                Ok(users) => {
                    web_sys::console::log_1(
                        &format!("[DIR] Loaded {} users", users.len()).into(),
                    );
                    set_roster.set(Fetch::Loaded(users));
                }
                Err(err) => {
                    web_sys::console::log_1(
                        &format!("[DIR] Roster load failed: {}", err).into(),
                    );
                    set_roster.set(Fetch::Failed(err));
                }
            }
        });
    });

    let users = Memo::new(move |_| match roster.get() {
        Fetch::Loaded(users) => users,
        _ => Vec::new(),
    });

    let seen_items = Memo::new(move |_| roster::seen_item_ids(&users.get()));

    let on_search_select = Callback::new(move |user_id: UserId| {
        set_roster.update(|state| {
            if let Fetch::Loaded(users) = state {
                roster::mark_user_items_seen(users, user_id);
            }
        });
    });

    view! {
        <div>
            <SearchPanel users=users seen_items=seen_items on_select=on_search_select />
            {move || match roster.get() {
                Fetch::Loading => view! {
                    <p class="status-line">"Loading users..."</p>
                }.into_any(),
                Fetch::Failed(err) => view! {
                    <p class="status-line">{format!("Could not load users: {}", err)}</p>
                }.into_any(),
                Fetch::Loaded(_) => view! { <div></div> }.into_any(),
            }}
            // Cards are keyed by user id, so seen-marking updates to the
            // roster do not remount them or reset their local state.
            <div class="container">
                <For
                    each=move || users.get()
                    key=|user| user.id
                    children=move |user| view! { <UserCard user=user /> }
                />
            </div>
        </div>
    }
}
