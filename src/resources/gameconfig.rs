//! Game configuration resource.
//!
//! Manages window, clock and scene settings loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration. Controller tunables are read from the same file by
//! [`ControllerConfig`].
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [simulation]
//! fixed_timestep = 0.02
//! level = ./assets/levels/courtyard.json
//!
//! [camera]
//! distance = 5.0
//! sensitivity = 0.003
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::controllerconfig::ControllerConfig;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_FIXED_TIMESTEP: f32 = 0.02;
const DEFAULT_CAMERA_DISTANCE: f32 = 5.0;
const DEFAULT_CAMERA_SENSITIVITY: f32 = 0.003;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Physics step in seconds.
    pub fixed_timestep: f32,
    /// Level description to load; the built-in courtyard when unset.
    pub level_path: Option<PathBuf>,
    /// Orbit distance of the camera from its pivot.
    pub camera_distance: f32,
    /// Radians of camera rotation per pixel of mouse movement.
    pub camera_sensitivity: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            fixed_timestep: DEFAULT_FIXED_TIMESTEP,
            level_path: None,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            camera_sensitivity: DEFAULT_CAMERA_SENSITIVITY,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [simulation] section
        if let Some(step) = config.getfloat("simulation", "fixed_timestep").ok().flatten() {
            if step > 0.0 {
                self.fixed_timestep = step as f32;
            } else {
                log::warn!("Ignoring non-positive fixed_timestep {}", step);
            }
        }
        if let Some(level) = config.get("simulation", "level") {
            self.level_path = Some(PathBuf::from(level));
        }

        // [camera] section
        if let Some(d) = config.getfloat("camera", "distance").ok().flatten() {
            self.camera_distance = d as f32;
        }
        if let Some(s) = config.getfloat("camera", "sensitivity").ok().flatten() {
            self.camera_sensitivity = s as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, fixed_timestep={}, level={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.fixed_timestep,
            self.level_path
        );
    }

    /// Save this configuration plus the controller tunables to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self, controller: &ControllerConfig) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [simulation] section
        config.set(
            "simulation",
            "fixed_timestep",
            Some(self.fixed_timestep.to_string()),
        );
        if let Some(level) = &self.level_path {
            config.set("simulation", "level", Some(level.display().to_string()));
        }

        // [camera] section
        config.set("camera", "distance", Some(self.camera_distance.to_string()));
        config.set(
            "camera",
            "sensitivity",
            Some(self.camera_sensitivity.to_string()),
        );

        controller.write_into(&mut config);

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.window_size(), (1280, 720));
        assert_eq!(c.target_fps, 120);
        assert_eq!(c.fixed_timestep, 0.02);
        assert!(c.level_path.is_none());
    }

    #[test]
    fn test_apply_ini_overrides() {
        let mut ini = Ini::new();
        ini.read(
            "[window]\nwidth = 800\n[simulation]\nfixed_timestep = 0.01\nlevel = lvl.json\n"
                .to_string(),
        )
        .unwrap();
        let mut c = GameConfig::new();
        c.apply_ini(&ini);
        assert_eq!(c.window_width, 800);
        assert_eq!(c.window_height, 720);
        assert_eq!(c.fixed_timestep, 0.01);
        assert_eq!(c.level_path, Some(PathBuf::from("lvl.json")));
    }

    #[test]
    fn test_non_positive_timestep_ignored() {
        let mut ini = Ini::new();
        ini.read("[simulation]\nfixed_timestep = 0\n".to_string())
            .unwrap();
        let mut c = GameConfig::new();
        c.apply_ini(&ini);
        assert_eq!(c.fixed_timestep, 0.02);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut c = GameConfig::with_path("./definitely/not/here.ini");
        assert!(c.load_from_file().is_err());
    }
}
