use crate::camera::stream_options::RequestProfile;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApplicationConfig {
    pub log_level: Option<String>, // CLI --debug takes precedence
    pub http_port: u16,
    pub request_timeout_secs: u64,
    pub profile: RequestProfile,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            log_level: Some("info".to_string()),
            http_port: 80,
            request_timeout_secs: 5,
            profile: RequestProfile::FixedH264,
        }
    }
}
