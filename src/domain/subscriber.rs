use crate::domain::{NewSubscriber, SubscriberEmailAddress, SubscriberName};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An active newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: SubscriberEmailAddress,
    pub name: Option<SubscriberName>,
    pub subscribed_at: DateTime<Utc>,
}

impl Subscriber {
    pub fn activate(new_subscriber: NewSubscriber) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: new_subscriber.email,
            name: new_subscriber.name,
            subscribed_at: Utc::now(),
        }
    }
}
