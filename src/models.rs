//! Frontend Models
//!
//! Data structures matching the remote API records.

use serde::{Deserialize, Serialize};

/// User identifier. Distinct from [`ItemId`] so the two id spaces
/// cannot be compared without an explicit `raw()` bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// To-do item identifier, unique within a user's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// User record. `items` is not part of the wire form; the directory
/// attaches it after the per-user todo fetches complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<TodoItem>,
}

/// To-do item record. The API does not send `seen`; it defaults to
/// false and is flipped by the directory's search-driven marking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub seen: bool,
}

/// Outcome of an async fetch, tracked per component.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Loaded(T),
    Failed(String),
}
