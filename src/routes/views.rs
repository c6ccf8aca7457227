use crate::flash_messages::IncomingFlashMessages;
use crate::routes::constants::{HOME_PATH, STATIC_PATH, SUBSCRIBERS_PATH, UNSUBSCRIBE_PATH};
use axum::response::Html;

/// Wraps a page body in the shared layout, with any pending flash messages on top.
pub fn page(title: &str, flash_messages: &IncomingFlashMessages, body: &str) -> Html<String> {
    let flash_html = if flash_messages.is_empty() {
        String::new()
    } else {
        format!(
            "<section class=\"flash-messages\">\n{}</section>",
            flash_messages.to_html()
        )
    };
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8">
        <title>{title}</title>
        <link rel="stylesheet" href="{STATIC_PATH}/css/main.css">
    </head>
    <body>
        <nav>
            <a href="{HOME_PATH}">Sign up</a>
            <a href="{UNSUBSCRIBE_PATH}">Unsubscribe</a>
            <a href="{SUBSCRIBERS_PATH}">Subscribers</a>
        </nav>
        {flash_html}
        {body}
    </body>
</html>"#
    ))
}
