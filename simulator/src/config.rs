use std::path::PathBuf;

use tictactoe_engine::config::{ConfigManager, EngineConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_engine_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `path` when given, the file next to the executable otherwise.
pub fn get_config_manager(path: Option<PathBuf>) -> ConfigManager<EngineConfig> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}
