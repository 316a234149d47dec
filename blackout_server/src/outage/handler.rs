use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH},
    },
    response::{IntoResponse, Response},
};
use blackout_core::schedule::{
    dto::{Answer, ScheduleQuery, TextResponse},
    query::DEFAULT_MODE,
};
use log::{debug, warn};

use crate::{
    error::{ErrorServer, JSON_UTF8},
    outage::dto::ScheduleParams,
    state::ServerState,
};

#[utoipa::path(
    get,
    path = "/api/yasno",
    params(ScheduleParams),
    description = "Answers an outage question for one consumer group",
    responses(
        (status = 200, description = "Answer text", body = TextResponse),
        (status = 304, description = "Not modified since the given ETag"),
        (status = 500, description = "Provider unavailable", body = TextResponse),
    )
)]
pub async fn outage(
    State(server_state): State<Arc<ServerState>>,
    Query(params): Query<ScheduleParams>,
    headers: HeaderMap,
) -> Result<Response, ErrorServer> {
    let query = ScheduleQuery {
        group: params.group_or(server_state.default_group()).to_string(),
        mode: params.mode_or(DEFAULT_MODE).to_string(),
        if_none_match: headers
            .get(IF_NONE_MATCH)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string),
    };

    debug!("Outage query: group={} mode={}", query.group, query.mode);

    let result = match server_state.service().answer(&query).await? {
        Answer::NotModified => return Ok(StatusCode::NOT_MODIFIED.into_response()),
        Answer::Fresh(result) => result,
    };

    let etag = result.etag.clone();
    let mut response = Json(TextResponse::from(result)).into_response();

    let response_headers = response.headers_mut();
    response_headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));

    let cache_control = format!("public, max-age={}", server_state.cache_ttl_secs());
    if let Ok(value) = HeaderValue::from_str(&cache_control) {
        response_headers.insert(CACHE_CONTROL, value);
    }

    if let Some(etag) = etag {
        match HeaderValue::from_str(&etag) {
            Ok(value) => {
                response_headers.insert(ETAG, value);
            }
            Err(e) => warn!("Skipping ETag {}: {}", etag, e),
        }
    }

    Ok(response)
}
