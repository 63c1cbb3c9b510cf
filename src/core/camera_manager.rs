use crate::config_loader::MasterConfig;
use crate::errors::AppError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::time::Instant;

pub const ALL_CAMERAS_LABEL: &str = "All Cameras";

/// Which cameras an apply targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    All,
    Single(Ipv4Addr),
}

impl FromStr for Target {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_CAMERAS_LABEL) || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Target::All);
        }
        trimmed
            .parse::<Ipv4Addr>()
            .map(Target::Single)
            .map_err(|_| AppError::InvalidTarget(s.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::All => f.write_str(ALL_CAMERAS_LABEL),
            Target::Single(ip) => write!(f, "{}", ip),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownCamera {
    pub name: String,
    pub address: Ipv4Addr,
}

/// The fixed camera pool, in configured order.
pub struct CameraManager {
    cameras: Vec<KnownCamera>,
}

impl CameraManager {
    pub fn new(master_config: &MasterConfig) -> Result<Self> {
        debug!("🛠️ Initializing CameraManager...");
        let start_time = Instant::now();
        let cameras = master_config
            .cameras
            .iter()
            .map(|cam_config| {
                let address = cam_config
                    .ip
                    .parse::<Ipv4Addr>()
                    .with_context(|| format!("Invalid IPv4 address '{}' for camera '{}'", cam_config.ip, cam_config.name))?;
                debug!("  Added camera '{}' ({}) to manager.", cam_config.name, address);
                Ok(KnownCamera { name: cam_config.name.clone(), address })
            })
            .collect::<Result<Vec<_>>>()?;
        info!("✅ CameraManager initialized with {} cameras in {:?}.", cameras.len(), start_time.elapsed());
        Ok(CameraManager { cameras })
    }

    pub fn cameras(&self) -> &[KnownCamera] {
        &self.cameras
    }

    pub fn known_addresses(&self) -> Vec<Ipv4Addr> {
        self.cameras.iter().map(|c| c.address).collect()
    }

    pub fn name_of(&self, address: Ipv4Addr) -> Option<&str> {
        self.cameras.iter().find(|c| c.address == address).map(|c| c.name.as_str())
    }
}

/// Expands a target into the ordered list of addresses to configure.
pub fn resolve_targets(selection: Target, known_addresses: &[Ipv4Addr]) -> Result<Vec<Ipv4Addr>, AppError> {
    let resolved = match selection {
        Target::All => known_addresses.to_vec(),
        Target::Single(address) if known_addresses.contains(&address) => vec![address],
        Target::Single(address) => return Err(AppError::InvalidTarget(address.to_string())),
    };
    debug!("📝 Resolved target '{}' to {:?}", selection, resolved);
    Ok(resolved)
}
