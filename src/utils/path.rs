use std::env;
use std::path::PathBuf;

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "FITNOURISH_CONFIG_DIR";

const APP_DIR: &str = "fitnourish";

/// `$FITNOURISH_CONFIG_DIR`, else the platform config dir joined with
/// `fitnourish`, else `~/.config/fitnourish`.
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| get_home_dir().join(".config"))
        .join(APP_DIR)
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory holding `fitnourish.log`.
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR)
}

pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}
