use async_trait::async_trait;
use log::debug;
use reqwest::{header::ACCEPT, Client};
use serde::Deserialize;
use serde_json::Value;
use std::{collections::HashMap, time::Duration};

use super::dto::GroupSchedule;
use super::error::{ScheduleError, ScheduleResult};

pub const YASNO_URL: &str =
    "https://app.yasno.ua/api/blackout-service/public/shutdowns/regions/25/dsos/902/planned-outages";

/// Raw provider payload keyed by group id. Groups are decoded on demand so a
/// broken entry only fails queries for that group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ScheduleFeed {
    groups: HashMap<String, Value>,
}

impl ScheduleFeed {
    pub fn group(&self, group_id: &str) -> ScheduleResult<Option<GroupSchedule>> {
        match self.groups.get(group_id) {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => Ok(Some(GroupSchedule::deserialize(raw)?)),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl From<HashMap<String, Value>> for ScheduleFeed {
    fn from(groups: HashMap<String, Value>) -> Self {
        Self { groups }
    }
}

#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn fetch(&self) -> ScheduleResult<ScheduleFeed>;
}

#[derive(Clone)]
pub struct YasnoClient {
    client: Client,
    url: String,
}

impl YasnoClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> ScheduleResult<Self> {
        let client = Client::builder()
            .user_agent("blackout-server/0.1")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ScheduleSource for YasnoClient {
    async fn fetch(&self) -> ScheduleResult<ScheduleFeed> {
        debug!("Fetching schedule from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScheduleError::Upstream(format!(
                "provider responded with {}",
                status
            )));
        }

        let feed = response.json::<ScheduleFeed>().await?;
        debug!("Fetched schedule for {} groups", feed.len());

        Ok(feed)
    }
}
