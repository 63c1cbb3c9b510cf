use crate::app_config::ApplicationConfig;
use crate::camera_config::CameraConfig;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::net::Ipv4Addr;
use std::time::Instant;

pub const DEFAULT_CONFIG_PATH: &str = "config/arkcfg.yaml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MasterConfig {
    #[serde(rename = "application", default)]
    pub app_settings: ApplicationConfig,
    pub cameras: Vec<CameraConfig>,
}

impl Default for MasterConfig {
    /// The six-camera pool at 192.168.26.70 through 192.168.26.75.
    fn default() -> Self {
        let cameras = (70..76)
            .map(|octet| CameraConfig {
                name: format!("cam-{}", octet),
                ip: Ipv4Addr::new(192, 168, 26, octet).to_string(),
            })
            .collect();
        MasterConfig {
            app_settings: ApplicationConfig::default(),
            cameras,
        }
    }
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'. 📖", path))?;
    let config = parse_config(&config_str)
        .with_context(|| format!("Invalid configuration in '{}'", path))?;

    info!("✅ Successfully loaded and validated configuration from '{}' in {:?}", path, start_time.elapsed());
    Ok(config)
}

pub fn parse_config(yaml: &str) -> Result<MasterConfig> {
    let config: MasterConfig = serde_yaml::from_str(yaml)
        .context("Failed to parse YAML configuration. 💔")?;
    validate_master_config(&config).context("Master configuration validation failed 👎")?;
    Ok(config)
}

fn validate_master_config(config: &MasterConfig) -> Result<()> {
    debug!("🕵️ Validating master configuration...");
    if config.app_settings.http_port == 0 {
        bail!("❌ Application http_port cannot be 0.");
    }
    if config.app_settings.request_timeout_secs == 0 {
        bail!("❌ Application request_timeout_secs must be at least 1 second.");
    }

    if config.cameras.is_empty() {
        bail!("❌ No cameras defined in the configuration.");
    }

    let mut camera_names = HashSet::new();
    let mut camera_ips = HashSet::new();
    for (idx, camera) in config.cameras.iter().enumerate() {
        debug!("Validating camera #{}: {}", idx + 1, camera.name);
        if camera.name.trim().is_empty() {
            bail!("❌ Camera name cannot be empty for camera #{}.", idx + 1);
        }
        if !camera_names.insert(&camera.name) {
            bail!("❌ Duplicate camera name found: {}", camera.name);
        }
        let ip = camera
            .ip
            .parse::<Ipv4Addr>()
            .map_err(|_| anyhow::anyhow!("❌ Invalid IPv4 address '{}' for camera '{}'.", camera.ip, camera.name))?;
        if !camera_ips.insert(ip) {
            bail!("❌ Duplicate camera address {} (camera '{}').", ip, camera.name);
        }
    }
    debug!("👍 Master configuration validated ({} cameras).", config.cameras.len());
    Ok(())
}
