use crate::config_loader::MasterConfig;
use env_logger::Builder;
use log::LevelFilter;

fn level_from_str(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Resolves the log level from the `--debug` flag, then the config file, then `info`.
pub fn resolve_level(config: Option<&MasterConfig>, debug_flag: bool) -> (LevelFilter, Option<String>) {
    if debug_flag {
        return (LevelFilter::Debug, None);
    }
    match config.and_then(|c| c.app_settings.log_level.as_deref()) {
        None => (LevelFilter::Info, None),
        Some(s) => match level_from_str(s) {
            Some(level) => (level, None),
            None => (LevelFilter::Info, Some(s.to_string())),
        },
    }
}

pub fn initialize_logging(config: Option<&MasterConfig>, cli_matches: &clap::ArgMatches) {
    let (level, unrecognized) = resolve_level(config, cli_matches.get_flag("debug"));

    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });

    if let Some(s) = unrecognized {
        log::warn!("Unrecognized log level '{}', defaulting to info.", s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_level(level: &str) -> MasterConfig {
        let mut config = MasterConfig::default();
        config.app_settings.log_level = Some(level.to_string());
        config
    }

    #[test]
    fn debug_flag_wins() {
        let config = config_with_level("error");
        assert_eq!(resolve_level(Some(&config), true).0, LevelFilter::Debug);
    }

    #[test]
    fn config_level_is_used() {
        let config = config_with_level("WARN");
        assert_eq!(resolve_level(Some(&config), false), (LevelFilter::Warn, None));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = config_with_level("loud");
        assert_eq!(resolve_level(Some(&config), false), (LevelFilter::Info, Some("loud".to_string())));
        assert_eq!(resolve_level(None, false), (LevelFilter::Info, None));
    }
}
