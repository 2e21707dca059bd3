//! Search Panel Component
//!
//! Filter view over the user roster with click-to-select entries.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::models::{ItemId, User, UserId};
use crate::roster;

/// Case-insensitive name filter over `users`; clicking an entry reports
/// the user's id to the directory.
#[component]
pub fn SearchPanel(
    users: Memo<Vec<User>>,
    seen_items: Memo<HashSet<ItemId>>,
    #[prop(into)] on_select: Callback<UserId>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let filtered = move || roster::filter_users(&users.get(), &query.get());

    view! {
        <div class="search-box">
            <input
                type="text"
                placeholder="Search users"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <ul>
                <For
                    each=filtered
                    key=|user| user.id
                    children=move |user| {
                        let id = user.id;
                        // Inherited display rule: the entry grays when the user's
                        // raw id appears in the *item* id set. The `raw` bridge
                        // keeps the cross-space comparison visible.
                        let color = move || {
                            if seen_items.get().contains(&ItemId::from_raw(id.raw())) {
                                "color: gray;"
                            } else {
                                "color: black;"
                            }
                        };

                        view! {
                            <li style=color on:click=move |_| on_select.run(id)>
                                {format!("{} ({})", user.name, id.raw())}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
