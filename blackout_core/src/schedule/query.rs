use crate::helpers::time::{format_duration, minutes_to_clock};

use super::dto::{DayStatus, OutageSlot};
use super::status::{is_emergency, status_prefix};

pub const DEFAULT_MODE: &str = "schedule";

pub const FALLBACK_NOTICE: &str = "По последнему плановому графику ";
pub const UNKNOWN_MODE: &str = "Неизвестный режим";

/// Everything a mode needs to render its answer. Built once per request.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    pub slots: Vec<OutageSlot>,
    pub is_fallback: bool,
    pub today_status: Option<DayStatus>,
    pub tomorrow_status: Option<DayStatus>,
    pub tomorrow_slots: Vec<OutageSlot>,
    pub now_minute: u16,
}

pub type ModeHandler = fn(&QueryContext) -> String;

const MODES: &[(&str, ModeHandler)] = &[
    ("schedule", schedule),
    ("schedule_tomorrow", schedule_tomorrow),
    ("next", next),
    ("until_on", until_on),
    ("off_at", off_at),
];

pub fn handler_for(mode: &str) -> Option<ModeHandler> {
    MODES
        .iter()
        .find(|(name, _)| *name == mode)
        .map(|(_, handler)| *handler)
}

pub fn modes() -> impl Iterator<Item = &'static str> {
    MODES.iter().map(|(name, _)| *name)
}

pub fn answer(mode: &str, ctx: &QueryContext) -> String {
    match handler_for(mode) {
        Some(handler) => handler(ctx),
        None => UNKNOWN_MODE.to_string(),
    }
}

impl QueryContext {
    pub fn prefix(&self) -> String {
        let mut prefix = status_prefix(self.today_status.as_ref()).to_string();
        if self.is_fallback {
            prefix.push_str(FALLBACK_NOTICE);
        }
        prefix
    }

    /// Earliest slot starting strictly after now; ties keep input order.
    pub fn upcoming(&self) -> Option<&OutageSlot> {
        self.slots
            .iter()
            .filter(|slot| slot.start > self.now_minute)
            .min_by_key(|slot| slot.start)
    }

    pub fn current(&self) -> Option<&OutageSlot> {
        self.slots.iter().find(|slot| slot.contains(self.now_minute))
    }
}

fn ranges(slots: &[OutageSlot]) -> String {
    slots
        .iter()
        .map(|slot| {
            format!(
                "с {} до {}",
                minutes_to_clock(slot.start),
                minutes_to_clock(slot.end)
            )
        })
        .collect::<Vec<_>>()
        .join(" и ")
}

fn schedule(ctx: &QueryContext) -> String {
    if ctx.slots.is_empty() {
        return format!(
            "{}Плановый график временно недоступен",
            status_prefix(ctx.today_status.as_ref())
        );
    }

    format!("{}сегодня отключения {}", ctx.prefix(), ranges(&ctx.slots))
}

fn schedule_tomorrow(ctx: &QueryContext) -> String {
    let prefix = status_prefix(ctx.tomorrow_status.as_ref());

    if ctx.tomorrow_slots.is_empty() {
        if is_emergency(ctx.tomorrow_status.as_ref()) {
            return format!("{}Завтра плановый график не опубликован", prefix);
        }
        return "Завтра отключений не запланировано".to_string();
    }

    format!("{}Завтра отключения {}", prefix, ranges(&ctx.tomorrow_slots))
}

fn next(ctx: &QueryContext) -> String {
    match ctx.upcoming() {
        Some(slot) => format!(
            "{}ближайшее отключение с {} до {}",
            ctx.prefix(),
            minutes_to_clock(slot.start),
            minutes_to_clock(slot.end)
        ),
        None => format!("{}на сегодня отключений больше не ожидается", ctx.prefix()),
    }
}

fn until_on(ctx: &QueryContext) -> String {
    match ctx.current() {
        Some(slot) => format!(
            "{}свет должны были включить в {}, через {}",
            ctx.prefix(),
            minutes_to_clock(slot.end),
            format_duration(slot.end - ctx.now_minute)
        ),
        None => format!("{}сейчас свет есть", ctx.prefix()),
    }
}

fn off_at(ctx: &QueryContext) -> String {
    match ctx.upcoming() {
        Some(slot) => format!(
            "{}должны были выключить в {}, через {}",
            ctx.prefix(),
            minutes_to_clock(slot.start),
            format_duration(slot.start - ctx.now_minute)
        ),
        None => format!("{}отключений по графику больше не ожидается", ctx.prefix()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::status::EMERGENCY_PREFIX;

    fn ctx(slots: Vec<OutageSlot>, now_minute: u16) -> QueryContext {
        QueryContext {
            slots,
            now_minute,
            today_status: Some(DayStatus::Normal),
            ..QueryContext::default()
        }
    }

    #[test]
    fn test_registry_knows_all_modes() {
        let names: Vec<_> = modes().collect();
        assert_eq!(
            names,
            vec!["schedule", "schedule_tomorrow", "next", "until_on", "off_at"]
        );
        assert!(handler_for("weather").is_none());
        assert_eq!(answer("weather", &ctx(Vec::new(), 0)), UNKNOWN_MODE);
    }

    #[test]
    fn test_unknown_mode_has_no_prefix() {
        let mut context = ctx(Vec::new(), 0);
        context.today_status = Some(DayStatus::EmergencyShutdowns);
        context.is_fallback = true;
        assert_eq!(answer("", &context), "Неизвестный режим");
    }

    #[test]
    fn test_schedule_lists_ranges() {
        let context = ctx(
            vec![OutageSlot::definite(120, 180), OutageSlot::definite(600, 690)],
            0,
        );
        assert_eq!(
            answer("schedule", &context),
            "сегодня отключения с 2:00 до 3:00 и с 10:00 до 11:30"
        );
    }

    #[test]
    fn test_schedule_unavailable() {
        let mut context = ctx(Vec::new(), 0);
        context.today_status = Some(DayStatus::EmergencyShutdowns);
        assert_eq!(
            answer("schedule", &context),
            "Действуют экстренные отключения. Плановый график временно недоступен"
        );
    }

    #[test]
    fn test_schedule_fallback_prefix() {
        let mut context = ctx(vec![OutageSlot::definite(120, 180)], 0);
        context.today_status = Some(DayStatus::EmergencyShutdowns);
        context.is_fallback = true;

        let text = answer("schedule", &context);
        assert!(text.starts_with(&format!("{}{}", EMERGENCY_PREFIX, FALLBACK_NOTICE)));
        assert!(text.contains("2:00"));
        assert!(text.contains("3:00"));
    }

    #[test]
    fn test_schedule_tomorrow_uses_own_status() {
        let mut context = ctx(Vec::new(), 0);
        context.today_status = Some(DayStatus::EmergencyShutdowns);
        context.is_fallback = true;
        context.tomorrow_status = Some(DayStatus::StabilizationShutdowns);
        context.tomorrow_slots = vec![OutageSlot::definite(60, 120)];

        assert_eq!(
            answer("schedule_tomorrow", &context),
            "Действуют стабилизационные отключения. Завтра отключения с 1:00 до 2:00"
        );
    }

    #[test]
    fn test_schedule_tomorrow_empty() {
        let mut context = ctx(Vec::new(), 0);
        context.tomorrow_status = Some(DayStatus::EmergencyShutdowns);
        assert_eq!(
            answer("schedule_tomorrow", &context),
            "Действуют экстренные отключения. Завтра плановый график не опубликован"
        );

        context.tomorrow_status = None;
        assert_eq!(
            answer("schedule_tomorrow", &context),
            "Завтра отключений не запланировано"
        );
    }

    #[test]
    fn test_next_picks_earliest_upcoming() {
        let context = ctx(
            vec![
                OutageSlot::definite(30, 60),
                OutageSlot::definite(500, 520),
                OutageSlot::definite(100, 110),
            ],
            50,
        );

        assert_eq!(context.upcoming(), Some(&OutageSlot::definite(100, 110)));
        assert_eq!(
            answer("next", &context),
            "ближайшее отключение с 1:40 до 1:50"
        );
    }

    #[test]
    fn test_next_tie_keeps_input_order() {
        let context = ctx(
            vec![OutageSlot::definite(200, 260), OutageSlot::definite(200, 230)],
            0,
        );
        assert_eq!(context.upcoming(), Some(&OutageSlot::definite(200, 260)));
    }

    #[test]
    fn test_next_none_left() {
        let context = ctx(vec![OutageSlot::definite(30, 60)], 30);
        assert_eq!(
            answer("next", &context),
            "на сегодня отключений больше не ожидается"
        );
    }

    #[test]
    fn test_until_on() {
        let slots = vec![OutageSlot::definite(480, 540)];

        assert_eq!(
            answer("until_on", &ctx(slots.clone(), 500)),
            "свет должны были включить в 9:00, через 40 мин"
        );
        assert_eq!(answer("until_on", &ctx(slots.clone(), 479)), "сейчас свет есть");
        assert_eq!(answer("until_on", &ctx(slots, 540)), "сейчас свет есть");
    }

    #[test]
    fn test_off_at() {
        let context = ctx(
            vec![OutageSlot::definite(30, 60), OutageSlot::definite(600, 660)],
            450,
        );
        assert_eq!(
            answer("off_at", &context),
            "должны были выключить в 10:00, через 2 ч 30 мин"
        );

        let done = ctx(vec![OutageSlot::definite(30, 60)], 700);
        assert_eq!(
            answer("off_at", &done),
            "отключений по графику больше не ожидается"
        );
    }

    #[test]
    fn test_fallback_prefix_applies_to_boundary_modes() {
        let mut context = ctx(vec![OutageSlot::definite(480, 540)], 500);
        context.today_status = Some(DayStatus::EmergencyShutdowns);
        context.is_fallback = true;

        assert_eq!(
            answer("until_on", &context),
            "Действуют экстренные отключения. По последнему плановому графику свет должны были включить в 9:00, через 40 мин"
        );
    }
}
