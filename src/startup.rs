use crate::configuration::Settings;
use crate::registry::SubscriberRegistry;
use crate::routes::constants::{
    HOME_PATH, STATIC_PATH, SUBSCRIBERS_PATH, SUBSCRIPTIONS_PATH, UNSUBSCRIBE_PATH,
};
use crate::routes::{
    health_check, home, list_subscribers_api, openapi_json, subscribe, subscribe_api,
    subscribers_page, unsubscribe, unsubscribe_api, unsubscribe_form,
};
use axum::Router;
use axum::routing::{get, post};
use std::net::TcpListener;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Shared with every handler. The registry is the only application state.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SubscriberRegistry>,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    registry: Arc<SubscriberRegistry>,
    router: Router,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let registry = Arc::new(SubscriberRegistry::new());
        let listener = TcpListener::bind(configuration.application.address())?;
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();
        let router = router(Arc::clone(&registry), &configuration);
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            port,
            listener,
            registry,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn registry(&self) -> Arc<SubscriberRegistry> {
        Arc::clone(&self.registry)
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

pub fn router(registry: Arc<SubscriberRegistry>, configuration: &Settings) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(configuration.session.secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            configuration.session.inactivity_timeout_minutes,
        )));

    Router::new()
        .route("/health_check", get(health_check))
        .route(HOME_PATH, get(home))
        .route(SUBSCRIPTIONS_PATH, post(subscribe))
        .route(UNSUBSCRIBE_PATH, get(unsubscribe_form).post(unsubscribe))
        .route(SUBSCRIBERS_PATH, get(subscribers_page))
        .nest(
            "/api",
            Router::new()
                .route("/subscriptions", post(subscribe_api))
                .route("/subscriptions/unsubscribe", post(unsubscribe_api))
                .route("/subscribers", get(list_subscribers_api))
                .route("/openapi.json", get(openapi_json)),
        )
        .nest_service(
            STATIC_PATH,
            ServeDir::new(&configuration.application.static_dir),
        )
        .with_state(AppState { registry })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(session_layer),
        )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for the shutdown signal: {:?}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping the server");
}
