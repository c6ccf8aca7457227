use crate::domain::NewSubscriber;
use crate::flash_messages::FlashMessageSender;
use crate::registry::Outcome;
use crate::routes::constants::HOME_PATH;
use crate::startup::AppState;
use crate::utils::e500;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Redirect;

#[derive(serde::Deserialize)]
pub struct FormData {
    // Missing fields are reported as validation failures on the page
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

impl TryFrom<FormData> for NewSubscriber {
    type Error = String;

    fn try_from(value: FormData) -> Result<Self, Self::Error> {
        NewSubscriber::parse(Some(value.name), value.email)
    }
}

#[tracing::instrument(
    name = "Adding a new subscriber",
    skip(form, state, flash),
    fields(
        subscriber_email = %form.email,
        subscriber_name = %form.name
    )
)]
pub async fn subscribe(
    flash: FlashMessageSender,
    State(state): State<AppState>,
    Form(form): Form<FormData>,
) -> Result<Redirect, StatusCode> {
    let outcome = match NewSubscriber::try_from(form) {
        Ok(new_subscriber) => match state.registry.sign_up(new_subscriber) {
            Ok(subscriber) => Outcome::signed_up(&subscriber),
            Err(e) => Outcome::from(&e),
        },
        Err(e) => Outcome::failure(e),
    };
    flash.outcome(&outcome).await.map_err(e500)?;
    Ok(Redirect::to(HOME_PATH))
}
