//! Success bodies shared by the handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// `{"Success": "..."}` returned by every mutating route.
#[derive(Debug, Serialize, ToSchema)]
pub struct Acknowledgement {
    #[serde(rename = "Success")]
    pub success: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Welcome {
    #[serde(rename = "Welcome")]
    pub welcome: String,
}

pub fn acknowledge(status: StatusCode, message: &str) -> (StatusCode, Json<Acknowledgement>) {
    (
        status,
        Json(Acknowledgement {
            success: message.to_string(),
        }),
    )
}

pub fn acknowledge_ok(message: &str) -> (StatusCode, Json<Acknowledgement>) {
    acknowledge(StatusCode::OK, message)
}
