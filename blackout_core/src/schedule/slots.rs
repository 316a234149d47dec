use super::dto::{DaySchedule, OutageSlot};

/// Confirmed outage intervals of a day, in upstream order.
pub fn definite_slots(day: Option<&DaySchedule>) -> Vec<OutageSlot> {
    day.map(|day| {
        day.slots()
            .iter()
            .filter(|slot| slot.is_definite())
            .copied()
            .collect()
    })
    .unwrap_or_default()
}
