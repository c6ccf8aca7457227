mod new_subscriber;
mod subscriber;
mod subscriber_email_address;
mod subscriber_name;

pub use new_subscriber::NewSubscriber;
pub use subscriber::Subscriber;
pub use subscriber_email_address::{SubscriberEmailAddress, normalize};
pub use subscriber_name::SubscriberName;
