use crate::camera::request_builder::ConfigurationRequest;
use crate::camera::stream_options::{Codec, FrameRate, Resolution};
use crate::core::camera_manager::Target;
use crate::errors::AppError;
use std::net::Ipv4Addr;

/// Everything a user picks for one apply, already translated to typed choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selections {
    pub target: Target,
    pub codec: Codec,
    pub resolution: Resolution,
    pub frame_rate: FrameRate,
}

impl Selections {
    pub fn from_labels(target: &str, codec: &str, resolution: &str, fps: &str) -> Result<Self, AppError> {
        Ok(Selections {
            target: target.parse()?,
            codec: codec.parse()?,
            resolution: Resolution::from_label(resolution)?,
            frame_rate: FrameRate::from_label(fps)?,
        })
    }

    pub fn request_for(&self, address: Ipv4Addr) -> ConfigurationRequest {
        ConfigurationRequest {
            address,
            codec: self.codec,
            resolution: self.resolution,
            frame_rate: self.frame_rate,
        }
    }
}
