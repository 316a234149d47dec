use blackout_core::schedule::handler::ScheduleService;

#[derive(Clone)]
pub struct ServerState {
    service: ScheduleService,
    default_group: String,
    cache_ttl_secs: u64,
}

impl From<(ScheduleService, String, u64)> for ServerState {
    fn from(states: (ScheduleService, String, u64)) -> Self {
        let (service, default_group, cache_ttl_secs) = states;
        Self {
            service,
            default_group,
            cache_ttl_secs,
        }
    }
}

impl ServerState {
    pub fn service(&self) -> &ScheduleService {
        &self.service
    }

    pub fn default_group(&self) -> &str {
        &self.default_group
    }

    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }
}
