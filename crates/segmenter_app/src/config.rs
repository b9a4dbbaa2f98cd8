use std::fs;
use std::path::{Path, PathBuf};

use segmenter_core::ComposePolicy;
use segmenter_engine::MAX_CONCATENATED_LEN;
use segmenter_logging::{seg_info, seg_warn};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILENAME: &str = "smscount.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub compose: ComposePolicy,
    /// Longest message, footer included, in UTF-16 code units.
    pub footer_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            compose: ComposePolicy::default(),
            footer_limit: MAX_CONCATENATED_LEN,
        }
    }
}

/// Load the config from `explicit`, else `./smscount.ron` if present, else defaults.
pub fn load(explicit: Option<&Path>) -> AppConfig {
    match explicit {
        Some(path) => load_from(path),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if path.exists() {
                load_from(&path)
            } else {
                AppConfig::default()
            }
        }
    }
}

fn load_from(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            seg_warn!("Failed to read config from {:?}: {}; using defaults", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            seg_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            seg_warn!("Failed to parse config from {:?}: {}; using defaults", path, err);
            AppConfig::default()
        }
    }
}
