use crate::domain::subscriber_email_address::SubscriberEmailAddress;
use crate::domain::subscriber_name::SubscriberName;

#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: SubscriberEmailAddress,
    pub name: Option<SubscriberName>,
}

impl NewSubscriber {
    /// Validate raw user input, as submitted through a form or the JSON API.
    pub fn parse(name: Option<String>, email: String) -> Result<Self, String> {
        let name = SubscriberName::parse_optional(name.unwrap_or_default())?;
        let email = SubscriberEmailAddress::parse(email)?;
        Ok(Self { email, name })
    }
}
