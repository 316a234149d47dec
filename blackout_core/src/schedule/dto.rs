use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    Definite,
    #[serde(other)]
    Tentative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutageSlot {
    pub start: u16, // minutes since midnight, inclusive
    pub end: u16,   // minutes since midnight, exclusive
    #[serde(rename = "type")]
    pub kind: SlotKind,
}

/// Day status as reported by the provider. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DayStatus {
    Normal,
    EmergencyShutdowns,
    StabilizationShutdowns,
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub status: Option<DayStatus>,
    #[serde(default)]
    pub slots: Option<Vec<OutageSlot>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSchedule {
    #[serde(default, rename = "updatedOn")]
    pub updated_on: Option<String>,
    #[serde(default)]
    pub today: Option<DaySchedule>,
    #[serde(default)]
    pub tomorrow: Option<DaySchedule>,
}

/// Last planned schedule seen for a group.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedFallback {
    pub slots: Vec<OutageSlot>,
    pub updated_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub text: String,
    pub etag: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    NotModified,
    Fresh(QueryResult),
}

#[derive(Debug, Clone)]
pub struct ScheduleQuery {
    pub group: String,
    pub mode: String,
    pub if_none_match: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TextResponse {
    pub text: String,
}

impl OutageSlot {
    pub fn definite(start: u16, end: u16) -> Self {
        Self {
            start,
            end,
            kind: SlotKind::Definite,
        }
    }

    pub fn is_definite(&self) -> bool {
        self.kind == SlotKind::Definite
    }

    pub fn contains(&self, minute: u16) -> bool {
        self.start <= minute && minute < self.end
    }
}

impl DayStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DayStatus::Normal => "Normal",
            DayStatus::EmergencyShutdowns => "EmergencyShutdowns",
            DayStatus::StabilizationShutdowns => "StabilizationShutdowns",
            DayStatus::Other(raw) => raw,
        }
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, DayStatus::EmergencyShutdowns)
    }
}

impl From<String> for DayStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Normal" => DayStatus::Normal,
            "EmergencyShutdowns" => DayStatus::EmergencyShutdowns,
            "StabilizationShutdowns" => DayStatus::StabilizationShutdowns,
            _ => DayStatus::Other(raw),
        }
    }
}

impl From<DayStatus> for String {
    fn from(status: DayStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DaySchedule {
    pub fn slots(&self) -> &[OutageSlot] {
        self.slots.as_deref().unwrap_or(&[])
    }
}

impl GroupSchedule {
    pub fn today_status(&self) -> Option<&DayStatus> {
        self.today.as_ref().and_then(|day| day.status.as_ref())
    }

    pub fn tomorrow_status(&self) -> Option<&DayStatus> {
        self.tomorrow.as_ref().and_then(|day| day.status.as_ref())
    }
}

impl From<QueryResult> for TextResponse {
    fn from(result: QueryResult) -> Self {
        TextResponse { text: result.text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_schedule_from_upstream_json() {
        let raw = serde_json::json!({
            "updatedOn": "2025-01-10T08:00:00+00:00",
            "today": {
                "status": "ScheduleApplies",
                "date": "2025-01-10T00:00:00+02:00",
                "slots": [
                    { "start": 0, "end": 120, "type": "NotPlanned" },
                    { "start": 120, "end": 180, "type": "Definite" }
                ]
            },
            "tomorrow": { "status": "WaitingForSchedule" }
        });

        let group: GroupSchedule = serde_json::from_value(raw).unwrap();
        let today = group.today.as_ref().unwrap();

        assert_eq!(group.updated_on.as_deref(), Some("2025-01-10T08:00:00+00:00"));
        assert_eq!(
            today.status,
            Some(DayStatus::Other("ScheduleApplies".to_string()))
        );
        assert_eq!(today.slots()[0].kind, SlotKind::Tentative);
        assert_eq!(today.slots()[1], OutageSlot::definite(120, 180));
        assert!(group.tomorrow.as_ref().unwrap().slots().is_empty());
    }

    #[test]
    fn test_missing_and_null_fields_are_empty() {
        let group: GroupSchedule =
            serde_json::from_value(serde_json::json!({ "today": { "slots": null } })).unwrap();

        assert!(group.updated_on.is_none());
        assert!(group.today_status().is_none());
        assert!(group.today.unwrap().slots().is_empty());
        assert!(group.tomorrow.is_none());
    }

    #[test]
    fn test_day_status_keeps_raw_value() {
        let status: DayStatus = serde_json::from_value(serde_json::json!("EmergencyShutdowns")).unwrap();
        assert!(status.is_emergency());

        let unknown = DayStatus::from("SomethingNew".to_string());
        assert_eq!(unknown.as_str(), "SomethingNew");
        assert_eq!(serde_json::to_value(&unknown).unwrap(), serde_json::json!("SomethingNew"));
    }

    #[test]
    fn test_slot_contains_is_half_open() {
        let slot = OutageSlot::definite(480, 540);
        assert!(!slot.contains(479));
        assert!(slot.contains(480));
        assert!(slot.contains(539));
        assert!(!slot.contains(540));
    }
}
