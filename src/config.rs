use crate::error::{Error, Result};
use crate::settings::Settings;
use std::path::PathBuf;
use std::time::Duration;

/// How frames are shown after the trajectory is generated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Print, // every frame to stdout as text
    Play,  // animated playback in the terminal
    None,  // report line only
}

impl DisplayMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "print" | "text" => Some(DisplayMode::Print),
            "play" | "live" | "animate" => Some(DisplayMode::Play),
            "none" | "quiet" => Some(DisplayMode::None),
            _ => None,
        }
    }
}

/// Configuration for a single simulation run
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub size: Option<usize>,
    pub seed: Option<u64>,
    pub density: f64,
    pub max_steps: Option<usize>,
    pub display: DisplayMode,
    pub gif: Option<PathBuf>,
    pub render: RenderConfig,
}

/// Rendering parameters shared by terminal playback and GIF export
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub frame_delay: Duration,
    pub cell_px: u32,       // GIF pixels per cell side
    pub color_scheme: u8,   // 0-9, see colors::shade_color
    pub draw_char: char,
}

/// Seconds per frame as a `Duration`; negative, NaN and infinite values
/// are rejected.
pub fn frame_delay(seconds: f32) -> Result<Duration> {
    Duration::try_from_secs_f32(seconds).map_err(|_| {
        Error::invalid(format!(
            "frame delay must be a finite, non-negative number of seconds, got {}",
            seconds
        ))
    })
}

impl RunConfig {
    /// Defaults come from the settings file; CLI values override them.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            size: None,
            seed: None,
            density: settings.simulation.density,
            max_steps: Some(settings.simulation.max_steps).filter(|&n| n > 0),
            display: DisplayMode::None,
            gif: None,
            render: RenderConfig {
                frame_delay: frame_delay(settings.render.delay)?,
                cell_px: settings.render.cell_px,
                color_scheme: settings.render.color_scheme,
                draw_char: '#',
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::RenderSettings;

    #[test]
    fn display_mode_aliases() {
        assert_eq!(DisplayMode::parse("print"), Some(DisplayMode::Print));
        assert_eq!(DisplayMode::parse("PLAY"), Some(DisplayMode::Play));
        assert_eq!(DisplayMode::parse("quiet"), Some(DisplayMode::None));
        assert_eq!(DisplayMode::parse("heatmap"), None);
    }

    #[test]
    fn run_config_takes_settings_defaults() {
        let settings = Settings::default();
        let config = RunConfig::from_settings(&settings).unwrap();
        assert_eq!(config.density, 0.5);
        assert_eq!(config.max_steps, Some(crate::settings::DEFAULT_MAX_STEPS));
        assert_eq!(config.render.frame_delay, Duration::from_millis(500));
        assert_eq!(config.display, DisplayMode::None);
    }

    #[test]
    fn frame_delay_accepts_zero_and_fractions() {
        assert_eq!(frame_delay(0.0).unwrap(), Duration::ZERO);
        assert_eq!(frame_delay(0.25).unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn frame_delay_rejects_unusable_values() {
        for bad in [-1.0, f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            assert!(
                matches!(frame_delay(bad), Err(Error::InvalidInput(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn negative_delay_in_settings_is_invalid_input() {
        let settings = Settings {
            render: RenderSettings { delay: -1.0, ..RenderSettings::default() },
            ..Settings::default()
        };
        let err = RunConfig::from_settings(&settings).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
