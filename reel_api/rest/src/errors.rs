use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiSendResult;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

pub fn json_rejection(rejection: JsonRejection) -> Response {
    failure(rejection.status(), rejection.body_text())
}

pub fn failure(code: StatusCode, error: impl Into<String>) -> Response {
    (code, Json(ApiSendResult::failure(error.into()))).into_response()
}
