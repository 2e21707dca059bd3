//! Roster Logic
//!
//! Pure helpers over the in-memory user roster: name filtering,
//! seen-set derivation and seen-marking, unseen counting.

use std::collections::HashSet;

use crate::models::{ItemId, TodoItem, User, UserId};

/// Users whose name contains `query` case-insensitively.
/// An empty query keeps every user.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| user.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Ids of every item marked seen, flattened across all users.
pub fn seen_item_ids(users: &[User]) -> HashSet<ItemId> {
    users
        .iter()
        .flat_map(|user| user.items.iter())
        .filter(|item| item.seen)
        .map(|item| item.id)
        .collect()
}

/// Mark every item of the matching user as seen.
/// Silent no-op when no user has `user_id`.
pub fn mark_user_items_seen(users: &mut [User], user_id: UserId) {
    if let Some(user) = users.iter_mut().find(|user| user.id == user_id) {
        for item in &mut user.items {
            item.seen = true;
        }
    }
}

/// Count of items not present in `seen`. Counting the complement keeps
/// repeated insertions of the same id from over-decrementing.
pub fn unseen_count(items: &[TodoItem], seen: &HashSet<ItemId>) -> usize {
    items.iter().filter(|item| !seen.contains(&item.id)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, TodoItem, User, UserId};

    fn make_item(id: u32, title: &str) -> TodoItem {
        TodoItem {
            id: ItemId::from_raw(id),
            title: title.to_string(),
            seen: false,
        }
    }

    fn make_user(id: u32, name: &str, items: Vec<TodoItem>) -> User {
        User {
            id: UserId::from_raw(id),
            name: name.to_string(),
            items,
        }
    }

    #[test]
    fn test_initial_unseen_count_is_item_count() {
        let items = vec![make_item(10, "A"), make_item(11, "B"), make_item(12, "C")];
        assert_eq!(unseen_count(&items, &HashSet::new()), 3);
    }

    #[test]
    fn test_marking_seen_is_idempotent() {
        let items = vec![make_item(10, "A"), make_item(11, "B")];
        let mut seen = HashSet::new();

        seen.insert(ItemId::from_raw(10));
        assert_eq!(unseen_count(&items, &seen), 1);

        // Same id again must not decrement further
        seen.insert(ItemId::from_raw(10));
        assert_eq!(unseen_count(&items, &seen), 1);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let users = vec![
            make_user(1, "Ann", vec![]),
            make_user(2, "Annabel", vec![]),
            make_user(3, "Bob", vec![]),
        ];

        let hits = filter_users(&users, "ann");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Ann");
        assert_eq!(hits[1].name, "Annabel");

        let hits = filter_users(&users, "BOB");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bob");
    }

    #[test]
    fn test_empty_query_keeps_all_users() {
        let users = vec![make_user(1, "Ann", vec![]), make_user(2, "Bob", vec![])];
        assert_eq!(filter_users(&users, "").len(), 2);
    }

    #[test]
    fn test_mark_user_items_seen_marks_only_that_user() {
        let mut users = vec![
            make_user(1, "Ann", vec![make_item(10, "A"), make_item(11, "B")]),
            make_user(2, "Bob", vec![make_item(20, "C")]),
        ];

        mark_user_items_seen(&mut users, UserId::from_raw(1));

        assert!(users[0].items.iter().all(|item| item.seen));
        assert!(users[1].items.iter().all(|item| !item.seen));
    }

    #[test]
    fn test_mark_unknown_user_is_noop() {
        let mut users = vec![make_user(1, "Ann", vec![make_item(10, "A")])];
        mark_user_items_seen(&mut users, UserId::from_raw(99));
        assert!(!users[0].items[0].seen);
    }

    #[test]
    fn test_seen_item_ids_flattens_across_users() {
        let mut users = vec![
            make_user(1, "Ann", vec![make_item(10, "A"), make_item(11, "B")]),
            make_user(2, "Bob", vec![make_item(20, "C")]),
        ];
        assert!(seen_item_ids(&users).is_empty());

        mark_user_items_seen(&mut users, UserId::from_raw(1));
        mark_user_items_seen(&mut users, UserId::from_raw(2));

        let seen = seen_item_ids(&users);
        assert_eq!(seen.len(), 3);
        assert!(seen.contains(&ItemId::from_raw(10)));
        assert!(seen.contains(&ItemId::from_raw(11)));
        assert!(seen.contains(&ItemId::from_raw(20)));
    }

    #[test]
    fn test_directory_marking_leaves_card_local_set_alone() {
        // The search path mutates the roster's seen flags; a card's own
        // seen set is independent state and must stay untouched.
        let mut users = vec![make_user(1, "Ann", vec![make_item(10, "A"), make_item(11, "B")])];
        let card_seen: HashSet<ItemId> = HashSet::new();

        mark_user_items_seen(&mut users, UserId::from_raw(1));

        assert_eq!(seen_item_ids(&users).len(), 2);
        assert!(card_seen.is_empty());
        assert_eq!(unseen_count(&users[0].items, &card_seen), 2);
    }

    #[test]
    fn test_card_click_scenario() {
        // roster = Ann with items 10 "A" and 11 "B"; initial count 2,
        // clicking item 10 drops the count to 1 and only 10 reads seen.
        let items = vec![make_item(10, "A"), make_item(11, "B")];
        let mut seen = HashSet::new();
        assert_eq!(unseen_count(&items, &seen), 2);

        seen.insert(ItemId::from_raw(10));
        assert_eq!(unseen_count(&items, &seen), 1);
        assert!(seen.contains(&ItemId::from_raw(10)));
        assert!(!seen.contains(&ItemId::from_raw(11)));
    }
}
