//! Effects - side effects declared by the reducer

/// Task key shared by every lookup; spawning under it aborts the one in flight
pub const LOOKUP_TASK_KEY: &str = "weather";

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up the weather for a location (one GET request)
    FetchWeather { request_id: u64, location: String },
}

impl Effect {
    /// Key the effect's task runs under
    pub fn task_key(&self) -> &'static str {
        match self {
            Effect::FetchWeather { .. } => LOOKUP_TASK_KEY,
        }
    }
}
