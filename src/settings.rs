use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Step ceiling applied when neither the CLI nor the config file sets one
pub const DEFAULT_MAX_STEPS: usize = 100_000;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub density: f64,
    pub max_steps: usize, // 0 disables the ceiling
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            density: 0.5,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub delay: f32,       // seconds per frame (2 fps)
    pub cell_px: u32,     // GIF pixels per cell
    pub color_scheme: u8,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            delay: 0.5,
            cell_px: 16,
            color_scheme: 0,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("paritylife")
            .join("config.toml")
    }
}
