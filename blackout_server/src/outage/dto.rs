use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScheduleParams {
    /// One of `schedule`, `schedule_tomorrow`, `next`, `until_on`, `off_at`. Defaults to `schedule`.
    pub mode: Option<String>,
    /// Consumer group id, e.g. `5.2`.
    pub group: Option<String>,
}

impl ScheduleParams {
    pub fn mode_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(self.mode.as_deref()).unwrap_or(default)
    }

    pub fn group_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(self.group.as_deref()).unwrap_or(default)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
