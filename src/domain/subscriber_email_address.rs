use validator::ValidateEmail;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SubscriberEmailAddress(String);

impl SubscriberEmailAddress {
    pub fn parse(s: String) -> Result<SubscriberEmailAddress, String> {
        let s = s.trim().to_string();
        if s.is_empty() {
            return Err("An email address is required.".to_string());
        }
        if s.validate_email() {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid subscriber email.", s))
        }
    }

    /// Key used to compare addresses: subscriptions are case-insensitive.
    pub fn key(&self) -> String {
        normalize(&self.0)
    }
}

/// Canonical form of an email as typed by a reader, valid or not.
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AsRef<str> for SubscriberEmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
