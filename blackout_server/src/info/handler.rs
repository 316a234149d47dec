use axum::Json;
use blackout_core::schedule::query::modes;

use crate::info::dto::Info;

#[utoipa::path(
    get,
    path = "/",
    description = "Service info",
    responses(
        (status = 200, description = "Success", body = Info),
    )
)]
pub async fn info() -> Json<Info> {
    Json(Info {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        modes: modes().map(str::to_string).collect(),
    })
}
