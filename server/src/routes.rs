use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    catalog,
    error::AppError,
    state::AppState,
    store::{self, DensityPoint, Item, ItemAverage, NewVote},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteInput {
    pub item_id: i64,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub voter_id: Option<String>,
}

#[derive(Deserialize)]
pub struct SubmitVotes {
    #[serde(default)]
    pub votes: Vec<VoteInput>,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub count: usize,
}

#[derive(Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

/// Seed-then-list: upserting on every call keeps the endpoint
/// idempotent and lets a fresh deployment serve the catalog without a
/// separate provisioning step.
pub async fn items_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ItemsResponse>, AppError> {
    let conn = state.db.lock().await;

    store::seed_items(&conn, catalog::DISHES)?;
    let items = store::list_items(&conn)?;

    Ok(Json(ItemsResponse { items }))
}

pub async fn votes_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitVotes>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(submission) = payload.map_err(|_| AppError::MalformedPayload)?;

    if submission.votes.is_empty() {
        return Err(AppError::EmptySubmission);
    }

    let rows: Vec<NewVote> = submission
        .votes
        .into_iter()
        .map(|v| NewVote {
            item_id: v.item_id,
            x: v.x,
            y: v.y,
            voter_id: v.voter_id,
        })
        .collect();

    let mut conn = state.db.lock().await;
    let count = store::insert_votes(&mut conn, &rows)?;

    info!("Stored {count} votes");

    Ok(Json(SubmitResponse { ok: true, count }))
}

pub async fn averages_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemAverage>>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::item_averages(&conn)?))
}

pub async fn density_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DensityPoint>>, AppError> {
    let conn = state.db.lock().await;
    Ok(Json(store::density_points(&conn)?))
}
