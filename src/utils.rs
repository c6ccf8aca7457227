use axum::http::StatusCode;

// Return an opaque 500 while preserving the error root's cause for logging.
pub fn e500<T>(e: T) -> StatusCode
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    tracing::error!(error.cause_chain = ?e, "Internal server error: {}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Escape text for use inside HTML element content or double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}
