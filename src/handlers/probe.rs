use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, Uri},
};

/// Probe handler - answers every request the responder receives
///
/// The request target is compared verbatim against the recognized set:
/// no case folding, no slash normalisation, and any query string counts.
/// Returns 200 with body `OK` for a GET on a recognized target, 404 for a GET
/// on anything else and 501 for every other method.
pub async fn probe_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<&'static str, ApiError> {
    // Display of a Uri reproduces the request-line target, including the
    // authority-only form used by `GET health HTTP/1.1`.
    let target = uri.to_string();

    if method != Method::GET {
        return Err(ApiError::MethodNotImplemented(method));
    }

    if state.is_probe_path(&target) {
        tracing::debug!(%target, "Probe answered");
        Ok("OK")
    } else {
        Err(ApiError::NotFound(target))
    }
}
