use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Upstream unavailable: {0}")]
    Upstream(String),
    #[error("Malformed schedule: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ScheduleError {
    fn from(err: reqwest::Error) -> Self {
        ScheduleError::Upstream(err.to_string())
    }
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        ScheduleError::Malformed(err.to_string())
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
