use super::dto::DayStatus;

pub const EMERGENCY_PREFIX: &str = "Действуют экстренные отключения. ";
pub const STABILIZATION_PREFIX: &str = "Действуют стабилизационные отключения. ";

pub fn status_prefix(status: Option<&DayStatus>) -> &'static str {
    match status {
        Some(DayStatus::EmergencyShutdowns) => EMERGENCY_PREFIX,
        Some(DayStatus::StabilizationShutdowns) => STABILIZATION_PREFIX,
        _ => "",
    }
}

pub fn is_emergency(status: Option<&DayStatus>) -> bool {
    status.is_some_and(DayStatus::is_emergency)
}
