use crate::{error::ErrorServer, info, outage};
use blackout_core::schedule::dto::TextResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(info::handler::info, outage::handler::outage,),
    components(schemas(info::dto::Info, TextResponse), responses(ErrorServer))
)]
pub struct ApiDoc;
