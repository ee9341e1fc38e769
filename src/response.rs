//! Success response envelopes.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body of a successful create: `{"Message": "last insert ID is 7"}`.
#[derive(Serialize)]
pub struct Created {
    #[serde(rename = "Message")]
    pub message: String,
}

pub fn created(id: i64) -> (StatusCode, Json<Created>) {
    (
        StatusCode::CREATED,
        Json(Created {
            message: format!("last insert ID is {}", id),
        }),
    )
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
