//! Settings resolution: config file first, command-line overrides on top

use std::path::Path;

use ink::Offsets;
use inkreplay_config::ReplayConfig;

/// Effective settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: ReplayConfig,
}

impl Settings {
    pub fn resolve(path: &Path, x_offset: Option<i32>, y_offset: Option<i32>) -> Self {
        let mut config = ReplayConfig::load_from(path);
        if let Some(x) = x_offset {
            config.x_offset = x;
        }
        if let Some(y) = y_offset {
            config.y_offset = y;
        }
        Self { config }
    }

    pub fn offsets(&self) -> Offsets {
        let (x, y) = self.config.offsets();
        Offsets::new(x, y)
    }
}
