use crate::camera::stream_options::{Codec, FrameRate, Resolution};
use crate::config_loader::MasterConfig;
use crate::core::camera_manager::{CameraManager, ALL_CAMERAS_LABEL};
use anyhow::Result;

pub fn handle_list_options_cli() -> Result<()> {
    println!("Codecs:");
    for codec in Codec::all() {
        println!("  {}", codec);
    }
    println!("Resolutions:");
    for res in Resolution::all() {
        println!("  {:<10} (code {})", res, res.code());
    }
    println!("Frame rates:");
    for fps in FrameRate::all() {
        println!("  {:<10} (code {})", fps, fps.code());
    }
    Ok(())
}

pub fn handle_list_cameras_cli(master_config: &MasterConfig, camera_manager: &CameraManager) -> Result<()> {
    println!(
        "Profile: {} (port {}, timeout {}s)",
        master_config.app_settings.profile,
        master_config.app_settings.http_port,
        master_config.app_settings.request_timeout_secs
    );
    println!("  {}", ALL_CAMERAS_LABEL);
    for cam in camera_manager.cameras() {
        println!("  {:<15} {}", cam.address, cam.name);
    }
    Ok(())
}
