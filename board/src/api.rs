//! HTTP bindings to the backend.
//!
//! Thin wrappers over reqwest's fetch backend; every call resolves
//! against the page origin so the same build works behind any proxy.

use crate::models::{DensityPoint, Item, ItemAverage, ItemsResponse, SubmitResponse, SubmitVotes};

const DEV_ORIGIN: &str = "http://localhost:3400";

fn base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEV_ORIGIN.to_string())
}

pub async fn fetch_items() -> Result<Vec<Item>, String> {
    let response = reqwest::Client::new()
        .get(format!("{}/items", base_url()))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let body: ItemsResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.items)
}

pub async fn submit_votes(payload: &SubmitVotes) -> Result<SubmitResponse, String> {
    let response = reqwest::Client::new()
        .post(format!("{}/votes", base_url()))
        .json(payload)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("server answered {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}

pub async fn fetch_averages() -> Result<Vec<ItemAverage>, String> {
    let response = reqwest::Client::new()
        .get(format!("{}/averages", base_url()))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response.json().await.map_err(|e| e.to_string())
}

pub async fn fetch_density() -> Result<Vec<DensityPoint>, String> {
    let response = reqwest::Client::new()
        .get(format!("{}/density", base_url()))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response.json().await.map_err(|e| e.to_string())
}
