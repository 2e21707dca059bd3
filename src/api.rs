//! Remote API Wrappers
//!
//! Frontend bindings to the REST collaborator.

use futures_util::future::join_all;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::{TodoItem, User, UserId};

const API_BASE: &str = "https://jsonplaceholder.typicode.com";

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn get_json(url: &str) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    let json = get_json(&format!("{}/users", API_BASE)).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

pub async fn fetch_todos(user_id: UserId) -> Result<Vec<TodoItem>, String> {
    let json = get_json(&format!("{}/todos?userId={}", API_BASE, user_id.raw())).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Fetch the full roster: the user list first, then every user's todos
/// concurrently. The join is all-or-nothing; a single failed todo fetch
/// fails the whole load and no partial roster is returned.
pub async fn load_roster() -> Result<Vec<User>, String> {
    let mut users = fetch_users().await?;
    let results = join_all(users.iter().map(|u| fetch_todos(u.id))).await;
    for (user, items) in users.iter_mut().zip(results) {
        user.items = items?;
    }
    Ok(users)
}
