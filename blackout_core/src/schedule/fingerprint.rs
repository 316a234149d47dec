use super::dto::{DayStatus, GroupSchedule};

/// Quoted ETag over the fields that decide whether an answer can change:
/// `"{updatedOn}_{today.status}_{tomorrow.status}"`.
pub fn fingerprint(group: &GroupSchedule) -> String {
    format!(
        "\"{}_{}_{}\"",
        group.updated_on.as_deref().unwrap_or_default(),
        group.today_status().map(DayStatus::as_str).unwrap_or_default(),
        group.tomorrow_status().map(DayStatus::as_str).unwrap_or_default()
    )
}

/// Checks an `If-None-Match` value against a fingerprint. Accepts `*`, a
/// comma separated list and weak `W/` tags.
pub fn matches(if_none_match: &str, fingerprint: &str) -> bool {
    if_none_match.split(',').map(str::trim).any(|token| {
        token == "*" || token.strip_prefix("W/").unwrap_or(token) == fingerprint
    })
}
