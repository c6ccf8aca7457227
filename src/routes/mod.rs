mod api;
pub mod constants;
pub mod health_check; // Public for OpenAPI annotations
mod home;
mod subscribers;
mod subscriptions;
mod unsubscribe;
mod views;

// Re-export only handlers and API types; form structs share names across modules
pub use api::{
    ApiDoc, SubscribeBody, SubscriberList, SubscriberView, SubscriptionError, UnsubscribeBody,
    list_subscribers_api, openapi_json, subscribe_api, unsubscribe_api,
};
pub use health_check::health_check;
pub use home::home;
pub use subscribers::subscribers_page;
pub use subscriptions::subscribe;
pub use unsubscribe::{unsubscribe, unsubscribe_form};
