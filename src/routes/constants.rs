//! Paths shared by route handlers and the pages linking to them

pub const HOME_PATH: &str = "/";

/// Sign-up form target
pub const SUBSCRIPTIONS_PATH: &str = "/subscriptions";

/// Opt-out form page and its target
pub const UNSUBSCRIBE_PATH: &str = "/unsubscribe";

/// Public list of active subscribers
pub const SUBSCRIBERS_PATH: &str = "/subscribers";

pub const STATIC_PATH: &str = "/static";

/// Builds a link to the opt-out form with the email already filled in
pub fn unsubscribe_url(email: &str) -> String {
    match serde_urlencoded::to_string([("email", email)]) {
        Ok(query) => format!("{}?{}", UNSUBSCRIBE_PATH, query),
        Err(_) => UNSUBSCRIBE_PATH.to_string(),
    }
}
