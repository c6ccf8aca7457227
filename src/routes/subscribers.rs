use crate::flash_messages::IncomingFlashMessages;
use crate::routes::constants::unsubscribe_url;
use crate::routes::views::page;
use crate::startup::AppState;
use crate::utils::escape_html;
use axum::extract::State;
use axum::response::Html;

pub async fn subscribers_page(
    flash_messages: IncomingFlashMessages,
    State(state): State<AppState>,
) -> Html<String> {
    let subscribers = state.registry.list_active();
    if subscribers.is_empty() {
        return page(
            "Subscribers",
            &flash_messages,
            "<h1>Subscribers</h1>\n<p>No active subscribers yet.</p>",
        );
    }

    let mut rows = String::new();
    for subscriber in &subscribers {
        let name = subscriber
            .name
            .as_ref()
            .map(|n| escape_html(n.as_ref()))
            .unwrap_or_else(|| "<i>Anonymous reader</i>".to_string());
        rows.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td><a href="{}">Unsubscribe</a></td></tr>
"#,
            name,
            escape_html(subscriber.email.as_ref()),
            subscriber.subscribed_at.format("%Y-%m-%d %H:%M UTC"),
            escape_html(&unsubscribe_url(subscriber.email.as_ref())),
        ));
    }

    let body = format!(
        r#"<h1>Subscribers</h1>
        <p>{} active subscribers, oldest first.</p>
        <table>
            <thead><tr><th>Name</th><th>Email</th><th>Since</th><th></th></tr></thead>
            <tbody>
{rows}            </tbody>
        </table>"#,
        subscribers.len()
    );
    page("Subscribers", &flash_messages, &body)
}
