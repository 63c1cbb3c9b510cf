use anyhow::{bail, Context, Result};
use arkcfg::cli;
use arkcfg::common::logging_setup;
use arkcfg::config_loader::{self, MasterConfig, DEFAULT_CONFIG_PATH};
use arkcfg::core::camera_manager::CameraManager;
use arkcfg::operations;
use log::{debug, error, info, warn};
use std::path::Path;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    let main_start_time = Instant::now();
    let matches = cli::build_cli().get_matches();

    let explicit_config = matches.get_one::<String>("config").map(|s| s.as_str());
    let config_path = explicit_config.unwrap_or(DEFAULT_CONFIG_PATH);

    let (master_config, used_builtin) = if explicit_config.is_none() && !Path::new(config_path).exists() {
        (MasterConfig::default(), true)
    } else {
        match config_loader::load_config(config_path) {
            Ok(cfg) => (cfg, false),
            Err(e) => {
                logging_setup::initialize_logging(None, &matches);
                error!("❌ Failed to load master configuration from '{}': {:#}. Exiting.", config_path, e);
                return Err(e.context(format!("Failed to load master configuration from '{}'", config_path)));
            }
        }
    };
    logging_setup::initialize_logging(Some(&master_config), &matches);
    if used_builtin {
        warn!("⚠️ No configuration file at '{}'; using the built-in camera pool.", config_path);
    } else {
        info!("✅ Configuration loaded from: {}", config_path);
    }

    let camera_manager = CameraManager::new(&master_config)
        .context("Failed to initialize CameraManager")?;

    if let Some((operation_name, sub_matches)) = matches.subcommand() {
        debug!("🎬 Dispatching to subcommand: {}", operation_name);
        let op_start_time = Instant::now();

        let op_result: Result<()> = match operation_name {
            "apply" => {
                operations::apply_op::handle_apply_cli(&master_config, &camera_manager, sub_matches).await
            }
            "list-options" => operations::options_op::handle_list_options_cli(),
            "list-cameras" => {
                operations::options_op::handle_list_cameras_cli(&master_config, &camera_manager)
            }
            _ => bail!("Subcommand '{}' not implemented.", operation_name),
        };

        if let Err(e) = op_result {
            error!("❌ Operation '{}' failed after {:?}: {:#}", operation_name, op_start_time.elapsed(), e);
            return Err(e);
        }
        debug!("✅ Operation '{}' completed in {:?}.", operation_name, op_start_time.elapsed());
    } else {
        cli::build_cli().print_help().context("Failed to print help")?;
    }

    debug!("🏁 arkcfg finished in {:?}.", main_start_time.elapsed());
    Ok(())
}
