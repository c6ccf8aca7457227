use crate::flash_messages::{FlashMessageSender, IncomingFlashMessages};
use crate::registry::Outcome;
use crate::routes::constants::UNSUBSCRIBE_PATH;
use crate::routes::views::page;
use crate::startup::AppState;
use crate::utils::{e500, escape_html};
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};

#[derive(serde::Deserialize)]
pub struct Prefill {
    email: Option<String>,
}

pub async fn unsubscribe_form(
    flash_messages: IncomingFlashMessages,
    Query(prefill): Query<Prefill>,
) -> Html<String> {
    let email = escape_html(prefill.email.as_deref().unwrap_or_default());
    let body = format!(
        r#"<h1>Unsubscribe</h1>
        <p>Sorry to see you go. Enter the address you subscribed with.</p>
        <form action="{UNSUBSCRIBE_PATH}" method="post">
            <p>
                <label>Email
                    <input type="email" placeholder="Enter your email" name="email" value="{email}" required>
                </label>
            </p>
            <button type="submit">Unsubscribe</button>
        </form>"#
    );
    page("Unsubscribe", &flash_messages, &body)
}

#[derive(serde::Deserialize)]
pub struct FormData {
    #[serde(default)]
    email: String,
}

#[tracing::instrument(
    name = "Removing a subscriber",
    skip(form, state, flash),
    fields(subscriber_email = %form.email)
)]
pub async fn unsubscribe(
    flash: FlashMessageSender,
    State(state): State<AppState>,
    Form(form): Form<FormData>,
) -> Result<Redirect, StatusCode> {
    let outcome = match state.registry.opt_out(&form.email) {
        Ok(subscriber) => Outcome::opted_out(&subscriber),
        Err(e) => Outcome::from(&e),
    };
    flash.outcome(&outcome).await.map_err(e500)?;
    Ok(Redirect::to(UNSUBSCRIBE_PATH))
}
