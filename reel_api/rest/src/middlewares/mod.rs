use axum::Router;

pub mod request_id;
mod trace;

/// Wraps the router in the http middlewares. The request id is assigned
/// before the trace span is created.
pub fn add(router: Router<()>) -> Router<()> {
    let router = trace::add(router);
    request_id::add(router)
}
