//! Artificial response delay
//!
//! Holds diagnosis responses back for `RESPONSE_DELAY_MS` so clients can
//! show their "analyzing" state. Off when the delay is 0.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppState;

pub async fn response_delay(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if state.config.response_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.response_delay_ms)).await;
    }

    response
}
