use std::path::PathBuf;

const APP_DIR: &str = "roster";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/roster, regardless of OS)
///
/// `ROSTER_CONFIG_DIR` overrides the location, which tests rely on.
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("ROSTER_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    get_home_dir().join(".config").join(APP_DIR)
}

/// Get the config file path (~/.config/roster/config.toml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join(APP_DIR)
}
