use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use reel_core_contact_contracts::{ContactSendMessageError, ContactService};
use reel_models::form::ContactFormFields;
use tracing::debug;

use crate::{
    errors::{failure, internal_server_error, json_rejection},
    models::{ApiContactForm, ApiSendResult},
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    form: Result<Json<ApiContactForm>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return json_rejection(rejection),
    };

    let message = match ContactFormFields::from(form).validate() {
        Ok(message) => message,
        Err(errors) => {
            debug!(?errors, "rejecting invalid contact message");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiSendResult::invalid(errors)),
            )
                .into_response();
        }
    };

    match service.send_message(message).await {
        Ok(()) => Json(ApiSendResult::ok()).into_response(),
        Err(err @ ContactSendMessageError::Send) => {
            failure(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}
