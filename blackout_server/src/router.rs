use std::{env, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use blackout_core::{
    helpers::time::ZonedClock,
    schedule::{
        fallback::InMemoryFallbackStore,
        handler::{DEFAULT_GROUP, ScheduleService},
        upstream::{YASNO_URL, YasnoClient},
    },
};
use log::{info, warn};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    docs::{dto::ApiDoc, handler::api_docs},
    info::handler::info,
    outage::handler::outage,
    state::ServerState,
};

const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

fn env_u64(name: &str, default: u64) -> u64 {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} is not a number ({}), using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

pub async fn router() -> anyhow::Result<Router> {
    let yasno_url = env::var("YASNO_URL").unwrap_or_else(|_| YASNO_URL.to_string());
    let default_group = env::var("DEFAULT_GROUP").unwrap_or_else(|_| DEFAULT_GROUP.to_string());
    let cache_ttl_secs = env_u64("CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS);
    let timeout_secs = env_u64("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS);

    let client = YasnoClient::new(yasno_url, Duration::from_secs(timeout_secs))?;

    info!(
        "Schedule provider {} (default group {}, cache ttl {}s)",
        client.url(),
        default_group,
        cache_ttl_secs
    );
    info!("Planned-schedule fallback is kept in memory only and resets on restart");

    let service = ScheduleService::new(
        Arc::new(client),
        Arc::new(InMemoryFallbackStore::new()),
        Arc::new(ZonedClock::kyiv()),
    );

    let state = Arc::new(ServerState::from((service, default_group, cache_ttl_secs)));

    Ok(app(state))
}

pub fn app(state: Arc<ServerState>) -> Router {
    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route("/", get(info))
        .route("/docs", get(api_docs))
        .route("/api/yasno", get(outage))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
