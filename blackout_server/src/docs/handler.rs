use axum::Json;
use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};

use crate::docs::dto::ApiDoc;

pub async fn api_docs() -> Json<OpenApiSpec> {
    Json(ApiDoc::openapi())
}
