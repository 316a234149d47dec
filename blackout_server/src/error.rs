use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use blackout_core::schedule::{dto::TextResponse, error::ScheduleError};
use log::error;
use serde::Serialize;
use utoipa::ToResponse;

pub const FETCH_ERROR: &str = "Ошибка получения данных";
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

#[derive(Debug, Serialize, ToResponse)]
pub struct ErrorServer {
    pub text: String,
    #[serde(skip)]
    pub status: u16,
}

impl std::fmt::Display for ErrorServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<ScheduleError> for ErrorServer {
    fn from(err: ScheduleError) -> Self {
        error!("Schedule query failed: {}", err);
        ErrorServer {
            text: FETCH_ERROR.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR.into(),
        }
    }
}

impl IntoResponse for ErrorServer {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(TextResponse { text: self.text })).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
        response
    }
}
