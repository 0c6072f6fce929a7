use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded at build time so the web
/// target has it without a filesystem.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// The parsed app config. Parsed on first call; a config that fails to
/// parse falls back to defaults.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_config(CONFIG_TOML))
}

fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => {
            tracing::info!(
                require_url = config.registration.require_url,
                "Loaded registration config"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
            AppConfig::default()
        }
    }
}
