//! JSON endpoints mirroring the HTML forms, for scripts and integrations.

use crate::domain::{NewSubscriber, Subscriber};
use crate::registry::{Outcome, RegistryError};
use crate::startup::AppState;
use crate::telemetry::error_chain_fmt;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use utoipa::OpenApi;
use uuid::Uuid;

#[derive(serde::Deserialize, utoipa::ToSchema)]
pub struct SubscribeBody {
    /// Display name, may be omitted
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

#[derive(serde::Deserialize, utoipa::ToSchema)]
pub struct UnsubscribeBody {
    #[serde(default)]
    pub email: String,
}

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct SubscriberView {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub subscribed_at: DateTime<Utc>,
}

impl From<Subscriber> for SubscriberView {
    fn from(subscriber: Subscriber) -> Self {
        Self {
            id: subscriber.id,
            email: subscriber.email.as_ref().to_owned(),
            name: subscriber.name.map(|n| n.as_ref().to_owned()),
            subscribed_at: subscriber.subscribed_at,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct SubscriberList {
    pub count: usize,
    /// Oldest sign-up first
    pub subscribers: Vec<SubscriberView>,
}

#[derive(thiserror::Error)]
pub enum SubscriptionError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    RegistryError(#[from] RegistryError),
}

impl std::fmt::Debug for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<JsonRejection> for SubscriptionError {
    fn from(rejection: JsonRejection) -> Self {
        SubscriptionError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for SubscriptionError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            SubscriptionError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubscriptionError::RegistryError(RegistryError::EmptyEmail) => StatusCode::BAD_REQUEST,
            SubscriptionError::RegistryError(RegistryError::DuplicateSubscription(_)) => {
                StatusCode::CONFLICT
            }
            SubscriptionError::RegistryError(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
        };
        (status, Json(Outcome::failure(self.to_string()))).into_response()
    }
}

/// Subscribe to the newsletter
#[utoipa::path(
    post,
    path = "/api/subscriptions",
    tag = "subscriptions",
    request_body = SubscribeBody,
    responses(
        (status = 201, description = "Subscribed", body = Outcome),
        (status = 400, description = "Malformed body, invalid name or email", body = Outcome),
        (status = 409, description = "Email is already subscribed", body = Outcome),
    )
)]
#[tracing::instrument(
    name = "Adding a new subscriber through the API",
    skip(state, payload),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe_api(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Outcome>), SubscriptionError> {
    let Json(body) = payload?;
    tracing::Span::current().record("subscriber_email", tracing::field::display(&body.email));
    let new_subscriber = NewSubscriber::parse(body.name, body.email)
        .map_err(SubscriptionError::ValidationError)?;
    let subscriber = state.registry.sign_up(new_subscriber)?;
    Ok((StatusCode::CREATED, Json(Outcome::signed_up(&subscriber))))
}

/// Unsubscribe from the newsletter
#[utoipa::path(
    post,
    path = "/api/subscriptions/unsubscribe",
    tag = "subscriptions",
    request_body = UnsubscribeBody,
    responses(
        (status = 200, description = "Unsubscribed", body = Outcome),
        (status = 400, description = "Malformed body or missing email", body = Outcome),
        (status = 404, description = "No active subscription for this email", body = Outcome),
    )
)]
#[tracing::instrument(
    name = "Removing a subscriber through the API",
    skip(state, payload),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn unsubscribe_api(
    State(state): State<AppState>,
    payload: Result<Json<UnsubscribeBody>, JsonRejection>,
) -> Result<Json<Outcome>, SubscriptionError> {
    let Json(body) = payload?;
    tracing::Span::current().record("subscriber_email", tracing::field::display(&body.email));
    let subscriber = state.registry.opt_out(&body.email)?;
    Ok(Json(Outcome::opted_out(&subscriber)))
}

/// List active subscribers
#[utoipa::path(
    get,
    path = "/api/subscribers",
    tag = "subscriptions",
    responses(
        (status = 200, description = "Active subscribers", body = SubscriberList),
    )
)]
pub async fn list_subscribers_api(State(state): State<AppState>) -> Json<SubscriberList> {
    let subscribers: Vec<SubscriberView> = state
        .registry
        .list_active()
        .into_iter()
        .map(SubscriberView::from)
        .collect();
    Json(SubscriberList {
        count: subscribers.len(),
        subscribers,
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health_check::health_check,
        subscribe_api,
        unsubscribe_api,
        list_subscribers_api,
    ),
    components(schemas(Outcome, SubscribeBody, UnsubscribeBody, SubscriberView, SubscriberList)),
    tags(
        (name = "subscriptions", description = "Newsletter sign-up, opt-out and listing"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
