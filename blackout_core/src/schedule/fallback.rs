use dashmap::DashMap;
use log::{debug, info};
use std::sync::Arc;

use super::dto::{DayStatus, OutageSlot, PlannedFallback};
use super::status::is_emergency;

/// Keeps the last planned schedule per group so an "emergency, nothing
/// published yet" day can still be answered from the previous plan.
pub trait FallbackStore: Send + Sync {
    fn get(&self, group_id: &str) -> Option<PlannedFallback>;

    /// Replaces any previous entry for the group as a whole.
    fn put(&self, group_id: &str, entry: PlannedFallback);
}

/// Process-lifetime store. Entries are lost on restart and are not shared
/// between instances; there is no eviction.
#[derive(Default)]
pub struct InMemoryFallbackStore {
    entries: DashMap<String, Arc<PlannedFallback>>,
}

impl InMemoryFallbackStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FallbackStore for InMemoryFallbackStore {
    fn get(&self, group_id: &str) -> Option<PlannedFallback> {
        self.entries
            .get(group_id)
            .map(|entry| entry.value().as_ref().clone())
    }

    fn put(&self, group_id: &str, entry: PlannedFallback) {
        self.entries.insert(group_id.to_string(), Arc::new(entry));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSlots {
    pub slots: Vec<OutageSlot>,
    pub is_fallback: bool,
}

pub fn resolve_slots(
    store: &dyn FallbackStore,
    group_id: &str,
    today_status: Option<&DayStatus>,
    today_definites: Vec<OutageSlot>,
    updated_on: Option<&str>,
) -> ResolvedSlots {
    let emergency = is_emergency(today_status);

    if !today_definites.is_empty() && !emergency {
        debug!(
            "Recording planned schedule for group {} ({} slots)",
            group_id,
            today_definites.len()
        );
        store.put(
            group_id,
            PlannedFallback {
                slots: today_definites.clone(),
                updated_on: updated_on.map(str::to_string),
            },
        );
    }

    if emergency && today_definites.is_empty() {
        if let Some(planned) = store.get(group_id) {
            info!(
                "Group {} has no published emergency schedule, using plan from {}",
                group_id,
                planned.updated_on.as_deref().unwrap_or("unknown")
            );
            return ResolvedSlots {
                slots: planned.slots,
                is_fallback: true,
            };
        }
    }

    ResolvedSlots {
        slots: today_definites,
        is_fallback: false,
    }
}
