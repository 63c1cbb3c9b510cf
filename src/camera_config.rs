use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CameraConfig {
    pub name: String,
    pub ip: String, // IPv4 only, checked by config_loader
}
