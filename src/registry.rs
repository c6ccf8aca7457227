//! In-memory authority over active newsletter subscriptions.

use crate::domain::{NewSubscriber, Subscriber, normalize};
use crate::telemetry::error_chain_fmt;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0} is already subscribed to our newsletter.")]
    DuplicateSubscription(String),
    #[error("Sorry, we couldn't find your subscription for {0}.")]
    NotFound(String),
    #[error("An email address is required.")]
    EmptyEmail,
}

impl std::fmt::Debug for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// What the caller shows to the reader once an operation has completed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, utoipa::ToSchema)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn signed_up(subscriber: &Subscriber) -> Self {
        let message = match &subscriber.name {
            Some(name) => format!("Welcome to our newsletter, {}!", name),
            None => "Welcome to our newsletter!".to_string(),
        };
        Self {
            success: true,
            message,
        }
    }

    pub fn opted_out(subscriber: &Subscriber) -> Self {
        Self {
            success: true,
            message: format!(
                "{} has been successfully removed from our newsletter.",
                subscriber.email
            ),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<&RegistryError> for Outcome {
    fn from(e: &RegistryError) -> Self {
        Outcome::failure(e.to_string())
    }
}

#[derive(Default)]
struct Subscriptions {
    next_position: u64,
    // email key -> position in `active`
    positions: HashMap<String, u64>,
    // ordered by sign-up
    active: BTreeMap<u64, Subscriber>,
}

/// The set of active subscribers, shared by every request handler.
///
/// Email keys are compared case-insensitively. All operations take the same
/// lock, so a listing never observes a half-applied sign-up or opt-out.
#[derive(Default)]
pub struct SubscriberRegistry {
    subscriptions: Mutex<Subscriptions>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Every operation either fully applies or leaves the set untouched, so a
    // poisoned lock still guards a consistent set.
    fn lock(&self) -> MutexGuard<'_, Subscriptions> {
        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[tracing::instrument(
        name = "Signing up a new subscriber",
        skip(self, new_subscriber),
        fields(subscriber_email = %new_subscriber.email)
    )]
    pub fn sign_up(&self, new_subscriber: NewSubscriber) -> Result<Subscriber, RegistryError> {
        let key = new_subscriber.email.key();
        let mut subscriptions = self.lock();

        if subscriptions.positions.contains_key(&key) {
            tracing::info!("Rejected duplicate subscription");
            return Err(RegistryError::DuplicateSubscription(
                new_subscriber.email.as_ref().to_owned(),
            ));
        }

        let subscriber = Subscriber::activate(new_subscriber);
        let position = subscriptions.next_position;
        subscriptions.next_position += 1;
        subscriptions.positions.insert(key, position);
        subscriptions.active.insert(position, subscriber.clone());
        tracing::info!(subscriber_id = %subscriber.id, "New subscriber is active");

        Ok(subscriber)
    }

    #[tracing::instrument(name = "Opting a subscriber out", skip(self))]
    pub fn opt_out(&self, email: &str) -> Result<Subscriber, RegistryError> {
        let key = normalize(email);
        if key.is_empty() {
            return Err(RegistryError::EmptyEmail);
        }

        let mut subscriptions = self.lock();
        let removed = match subscriptions.positions.remove(&key) {
            Some(position) => subscriptions.active.remove(&position),
            None => None,
        };

        match removed {
            Some(subscriber) => {
                tracing::info!(subscriber_id = %subscriber.id, "Subscriber opted out");
                Ok(subscriber)
            }
            None => Err(RegistryError::NotFound(email.trim().to_owned())),
        }
    }

    /// Snapshot of the active subscribers, oldest sign-up first.
    pub fn list_active(&self) -> Vec<Subscriber> {
        self.lock().active.values().cloned().collect()
    }

    pub fn is_active(&self, email: &str) -> bool {
        self.lock().positions.contains_key(&normalize(email))
    }

    pub fn len(&self) -> usize {
        self.lock().active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
