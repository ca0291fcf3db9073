//! Game settings
//!
//! Settings are split in two halves:
//! - **Static** values (screen size, colors, limits, scaling factors) that can be
//!   overridden from `settings.json`
//! - **Dynamic** values (current speeds and alien points) that start from the
//!   static base values and ramp up every time a wave is cleared
//!
//! # Example
//!
//! ```rust
//! let mut settings = Settings::load_or_default("settings.json")?;
//!
//! // Wave cleared: everything gets faster
//! settings.increase_speed();
//!
//! // New game: back to the base values
//! settings.initialize_dynamic_settings();
//! ```

use log::info;
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default location of the optional settings override file
pub const SETTINGS_PATH: &str = "settings.json";

/// Whether the alien fleet moves at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FleetMotion {
    /// Fleet drifts sideways and drops one step at each screen edge
    Drifting,
    /// Fleet never moves (reduced-scope variant)
    Stationary,
}

/// Errors that can occur while loading settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
            SettingsError::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

impl From<SettingsError> for String {
    fn from(error: SettingsError) -> Self {
        error.to_string()
    }
}

/// All tunable values for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: u32,
    pub screen_height: u32,
    pub bg_color: [u8; 3],
    /// Target loop frequency in frames per second
    pub frame_rate: u32,

    // === Ship ===
    pub ship_speed: f32,
    pub ship_limit: u32,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_width: u32,
    pub bullet_height: u32,
    pub bullet_color: [u8; 3],
    pub bullets_allowed: usize,

    // === Aliens ===
    pub alien_speed: f32,
    pub fleet_drop_speed: i32,
    pub fleet_motion: FleetMotion,
    pub alien_points: u32,
    /// Alien size used when no alien sprite is available
    pub alien_width: u32,
    pub alien_height: u32,
    pub alien_color: [u8; 3],

    // === Difficulty ramp ===
    /// Multiplier applied to all speeds on each wave clear
    pub speedup_scale: f32,
    /// Multiplier applied to alien points on each wave clear
    pub score_scale: f32,

    /// How long the game freezes after the ship is hit
    pub hit_pause_ms: u64,

    // === Dynamic (derived, never read from disk) ===
    #[serde(skip)]
    pub current_ship_speed: f32,
    #[serde(skip)]
    pub current_bullet_speed: f32,
    #[serde(skip)]
    pub current_alien_speed: f32,
    #[serde(skip)]
    pub current_alien_points: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Settings {
            screen_width: 1200,
            screen_height: 800,
            bg_color: [230, 230, 230],
            frame_rate: 60,

            ship_speed: 1.5,
            ship_limit: 3,

            bullet_speed: 2.5,
            bullet_width: 3,
            bullet_height: 15,
            bullet_color: [60, 60, 60],
            bullets_allowed: 3,

            alien_speed: 1.0,
            fleet_drop_speed: 10,
            fleet_motion: FleetMotion::Drifting,
            alien_points: 50,
            alien_width: 60,
            alien_height: 58,
            alien_color: [0, 120, 0],

            speedup_scale: 1.1,
            score_scale: 1.5,

            hit_pause_ms: 500,

            current_ship_speed: 0.0,
            current_bullet_speed: 0.0,
            current_alien_speed: 0.0,
            current_alien_points: 0,
        };
        settings.initialize_dynamic_settings();
        settings
    }
}

impl Settings {
    /// Loads `path` if it exists, otherwise returns the built-in defaults.
    ///
    /// A file that exists but cannot be parsed or fails validation is an error:
    /// the game refuses to start with half-applied settings.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No {} found, using default settings", path.display());
            return Ok(Settings::default());
        }

        let settings = Self::load_from_file(path)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        settings.initialize_dynamic_settings();
        Ok(settings)
    }

    /// Checks the invariants the game loop relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: &str| Err(SettingsError::Invalid(msg.to_string()));

        if self.screen_width == 0 || self.screen_height == 0 {
            return invalid("screen dimensions must be positive");
        }
        if self.frame_rate == 0 {
            return invalid("frame_rate must be at least 1");
        }
        if self.bullets_allowed == 0 {
            return invalid("bullets_allowed must be at least 1");
        }
        if self.ship_limit == 0 {
            return invalid("ship_limit must be at least 1");
        }
        if self.ship_speed <= 0.0 || self.bullet_speed <= 0.0 || self.alien_speed <= 0.0 {
            return invalid("speeds must be positive");
        }
        if self.fleet_drop_speed <= 0 {
            return invalid("fleet_drop_speed must be positive");
        }
        if self.bullet_width == 0 || self.bullet_height == 0 {
            return invalid("bullet size must be positive");
        }
        if self.alien_width == 0 || self.alien_height == 0 {
            return invalid("alien size must be positive");
        }
        if self.speedup_scale <= 1.0 {
            return invalid("speedup_scale must be greater than 1.0");
        }
        if self.score_scale < 1.0 {
            return invalid("score_scale must be at least 1.0");
        }
        Ok(())
    }

    /// Resets the values that change during a game
    pub fn initialize_dynamic_settings(&mut self) {
        self.current_ship_speed = self.ship_speed;
        self.current_bullet_speed = self.bullet_speed;
        self.current_alien_speed = self.alien_speed;
        self.current_alien_points = self.alien_points;
    }

    /// Difficulty ramp, applied once per wave clear
    pub fn increase_speed(&mut self) {
        self.current_ship_speed *= self.speedup_scale;
        self.current_bullet_speed *= self.speedup_scale;
        self.current_alien_speed *= self.speedup_scale;
        self.current_alien_points =
            (self.current_alien_points as f32 * self.score_scale) as u32;
    }

    pub fn fleet_moves(&self) -> bool {
        self.fleet_motion == FleetMotion::Drifting
    }

    pub fn hit_pause(&self) -> Duration {
        Duration::from_millis(self.hit_pause_ms)
    }

    pub fn bg_color(&self) -> Color {
        rgb(self.bg_color)
    }

    pub fn bullet_color(&self) -> Color {
        rgb(self.bullet_color)
    }

    pub fn alien_color(&self) -> Color {
        rgb(self.alien_color)
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::RGB(r, g, b)
}
