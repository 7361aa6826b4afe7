//! Wire types shared with the backend. Field names are camelCase on
//! the wire to match the JSON contract.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub image_ref: Option<String>,
}

#[derive(Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAverage {
    pub item_id: i64,
    pub name: String,
    pub image_ref: Option<String>,
    pub avg_x: Option<f64>,
    pub avg_y: Option<f64>,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityPoint {
    pub item_id: i64,
    pub x: f64,
    pub y: f64,
    pub count: i64,
}

/// One placement on the normalized plane, origin bottom-left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteInput {
    pub item_id: i64,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_id: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SubmitVotes {
    pub votes: Vec<VoteInput>,
}

#[derive(Deserialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub count: usize,
}
