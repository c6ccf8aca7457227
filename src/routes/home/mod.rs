use crate::flash_messages::IncomingFlashMessages;
use crate::routes::constants::SUBSCRIPTIONS_PATH;
use crate::routes::views::page;
use crate::startup::AppState;
use axum::extract::State;
use axum::response::Html;

pub async fn home(
    flash_messages: IncomingFlashMessages,
    State(state): State<AppState>,
) -> Html<String> {
    let readers = match state.registry.len() {
        0 => "Be the first to subscribe!".to_string(),
        1 => "1 reader is already subscribed.".to_string(),
        n => format!("{} readers are already subscribed.", n),
    };
    let body = format!(
        r#"<h1>Our newsletter</h1>
        <p>{readers}</p>
        <form action="{SUBSCRIPTIONS_PATH}" method="post">
            <p>
                <label>Name (optional)
                    <input type="text" placeholder="Enter your name" name="name">
                </label>
            </p>
            <p>
                <label>Email
                    <input type="email" placeholder="Enter your email" name="email" required>
                </label>
            </p>
            <button type="submit">Subscribe</button>
        </form>"#
    );
    page("Newsletter", &flash_messages, &body)
}
