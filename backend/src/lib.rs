use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use dashmap::DashMap;
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

pub mod config;
pub mod handlers {
    pub mod contact_handlers;
}
pub mod models {
    pub mod contact;
}

use config::Config;
use handlers::contact_handlers;
use models::contact::ContactInquiry;

pub type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// How often idle senders are dropped from the contact limiter.
pub const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

pub struct AppState {
    pub inquiries: DashMap<Uuid, ContactInquiry>,
    /// One limiter for every sender, keyed by normalized email.
    pub contact_limiter: KeyedLimiter,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            inquiries: DashMap::new(),
            contact_limiter: RateLimiter::keyed(Quota::per_minute(config.contact_rate_per_minute)),
        }
    }

    /// Forgets senders whose quota has fully refilled. Returns the keys left.
    pub fn prune_limiters(&self) -> usize {
        self.contact_limiter.retain_recent();
        self.contact_limiter.shrink_to_fit();
        self.contact_limiter.len()
    }
}

/// Runs `prune_limiters` every `every` until the task is dropped.
pub async fn prune_limiters_periodically(state: Arc<AppState>, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    loop {
        ticker.tick().await;
        let remaining = state.prune_limiters();
        tracing::debug!("Pruned contact limiter, {} senders tracked", remaining);
    }
}

fn cors(config: &Config) -> CorsLayer {
    let origin = match &config.frontend_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::from(Any),
    };
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(origin)
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE])
}

/// API routes plus the built frontend. Unknown paths get `index.html` so the
/// client router can render them, including its own not-found page.
pub fn app(state: Arc<AppState>, config: &Config) -> Router {
    let index = config.static_dir.join("index.html");
    let site = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/health", get(contact_handlers::health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors(config))
        .with_state(state)
}
