use log::{debug, info};
use std::sync::Arc;

use crate::helpers::time::Clock;

use super::dto::{Answer, QueryResult, ScheduleQuery};
use super::error::ScheduleResult;
use super::fallback::{resolve_slots, FallbackStore};
use super::fingerprint::{fingerprint, matches};
use super::query::{answer, QueryContext};
use super::slots::definite_slots;
use super::upstream::ScheduleSource;

pub const DEFAULT_GROUP: &str = "5.2";

#[derive(Clone)]
pub struct ScheduleService {
    source: Arc<dyn ScheduleSource>,
    store: Arc<dyn FallbackStore>,
    clock: Arc<dyn Clock>,
}

impl ScheduleService {
    pub fn new(
        source: Arc<dyn ScheduleSource>,
        store: Arc<dyn FallbackStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            store,
            clock,
        }
    }

    pub async fn answer(&self, query: &ScheduleQuery) -> ScheduleResult<Answer> {
        let feed = self.source.fetch().await?;

        let Some(group) = feed.group(&query.group)? else {
            info!("Group {} not found in provider feed", query.group);
            return Ok(Answer::Fresh(QueryResult {
                text: format!("Группа {} не найдена", query.group),
                etag: None,
            }));
        };

        let etag = fingerprint(&group);

        if let Some(token) = query.if_none_match.as_deref() {
            if matches(token, &etag) {
                debug!("Group {} not modified ({})", query.group, etag);
                return Ok(Answer::NotModified);
            }
        }

        let today_status = group.today_status().cloned();
        let resolved = resolve_slots(
            self.store.as_ref(),
            &query.group,
            today_status.as_ref(),
            definite_slots(group.today.as_ref()),
            group.updated_on.as_deref(),
        );

        let ctx = QueryContext {
            slots: resolved.slots,
            is_fallback: resolved.is_fallback,
            today_status,
            tomorrow_status: group.tomorrow_status().cloned(),
            tomorrow_slots: definite_slots(group.tomorrow.as_ref()),
            now_minute: self.clock.now_minute_of_day(),
        };

        Ok(Answer::Fresh(QueryResult {
            text: answer(&query.mode, &ctx),
            etag: Some(etag),
        }))
    }
}
