use axum::http::StatusCode;

/// Liveness probe
///
/// Answers 200 with an empty body as long as the server accepts requests.
#[utoipa::path(
    get,
    path = "/health_check",
    tag = "health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
