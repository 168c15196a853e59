use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Input
    pub image_path: PathBuf,

    // Window
    pub window_title: String,
    pub window_size: (f32, f32),

    // Chart
    pub chart_title: String,
    pub chart_height: f32,
    pub line_color: [u8; 3],

    // Diagnostics
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("multiple_blocks.png"),

            window_title: "Image".to_string(),
            window_size: (1024.0, 900.0),

            chart_title: "Histogram of the Image".to_string(),
            chart_height: 280.0,
            line_color: [0, 0, 255],

            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "greyhist", "GreyHistogram")
        {
            let config_path = proj_dirs.config_dir().join("settings.json");
            if config_path.exists() {
                if let Some(settings) = Self::load_from_file(&config_path) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    pub(crate) fn load_from_file(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                None
            }
        }
    }

    /// The first positional argument, if any, replaces the configured image path.
    pub fn with_path_override(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.image_path = PathBuf::from(path);
        }
        self
    }
}
