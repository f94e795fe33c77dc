//=========================================================================
// Configuration
//=========================================================================
//
// Demo settings loaded from a TOML file, then overridden from the
// command line.
//
// Resolution order:
// ```text
//   Config::default()
//     ← orrery.toml (or --config PATH)
//     ← CLI flags (Arguments::apply)
//     → validate()
// ```
//
// Every field has a default, so an empty or partial file is valid.
//
//=========================================================================

//=== Submodules ==========================================================

mod cli;

pub use cli::Arguments;

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::scene::orbit::{default_bodies, Body};
use crate::error::ConfigError;
use crate::render::{CircleStyle, Rgba};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "orrery.toml";

//=== Config ==============================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub scene: SceneConfig,
    pub showcase: ShowcaseConfig,
    pub orrery: OrreryConfig,
}

//--- [window] ------------------------------------------------------------

/// Window and GL context hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,

    /// MSAA sample count requested from the GL config.
    pub samples: u8,
    pub vsync: bool,

    /// Requested OpenGL core profile version, `[major, minor]`.
    pub gl_version: [u8; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("orrery"),
            width: 1024,
            height: 768,
            resizable: false,
            samples: 4,
            vsync: true,
            gl_version: [3, 2],
        }
    }
}

//--- [animation] ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Starting (and reset) rate, scene seconds per wall second.
    pub rate: f64,

    /// Multiplier applied by one faster/slower step.
    pub rate_factor: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    pub start_paused: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rate: 1.0,
            rate_factor: 2.0,
            min_rate: 0.125,
            max_rate: 32.0,
            start_paused: false,
        }
    }
}

//--- [scene] -------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Name of the scene shown first (`orrery` or `showcase`).
    pub initial: String,
    pub background: Rgba,

    /// Directory image paths are resolved against.
    pub assets: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial: String::from("orrery"),
            background: Rgba::rgb(30, 30, 30),
            assets: PathBuf::from("."),
        }
    }
}

//--- [showcase] ----------------------------------------------------------

/// The image-and-circles scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Image swept around the window center.
    pub image: PathBuf,

    /// Image drawn unscaled at the top-left corner, behind everything.
    pub backdrop: Option<PathBuf>,

    pub image_scale: f32,
    pub sweep_radius: f32,
    pub sweep_degrees_per_second: f32,
    pub marker_radius: f32,
    pub center_radius: f32,
    pub cursor_radius: f32,
    pub circle: CircleStyle,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            image: PathBuf::from("Muehleberg.png"),
            backdrop: Some(PathBuf::from("Architektur.png")),
            image_scale: 0.5,
            sweep_radius: 100.0,
            sweep_degrees_per_second: 60.0,
            marker_radius: 40.0,
            center_radius: 100.0,
            cursor_radius: 12.0,
            circle: CircleStyle::default(),
        }
    }
}

//--- [orrery] ------------------------------------------------------------

/// The orbital scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Optional image drawn centered behind the system.
    pub background_image: Option<PathBuf>,

    /// Uniform scale applied around the window center.
    pub scale: f32,

    pub show_orbits: bool,
    pub orbit_width: f32,

    /// Alpha of the orbit trails, applied to each body's stroke color.
    pub orbit_alpha: u8,

    /// Draw a line through each body showing its spin.
    pub spin_markers: bool,

    pub bodies: Vec<Body>,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            background_image: None,
            scale: 1.0,
            show_orbits: true,
            orbit_width: 1.0,
            orbit_alpha: 96,
            spin_markers: true,
            bodies: default_bodies(),
        }
    }
}

//=== Loading =============================================================

impl Config {
    /// Parses a config from TOML text.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads a config file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        info!(target: "config", "Loaded {}", path.display());
        Ok(config)
    }

    /// Loads `explicit` when given (it must exist), otherwise
    /// [`DEFAULT_CONFIG_FILE`] when present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load_from_file(default)
                } else {
                    debug!(target: "config", "No {}, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    //--- Validation -------------------------------------------------------

    /// Rejects settings the demo cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        let w = &self.window;
        if w.width == 0 || w.height == 0 {
            return invalid(format!("window size must be positive, got {}x{}", w.width, w.height));
        }
        if w.gl_version[0] < 2 {
            return invalid(format!(
                "window.gl_version must be at least 2.0, got {}.{}",
                w.gl_version[0], w.gl_version[1]
            ));
        }

        let a = &self.animation;
        if !(a.min_rate > 0.0) || !(a.max_rate > 0.0) {
            return invalid(format!(
                "animation rate bounds must be positive, got [{}, {}]",
                a.min_rate, a.max_rate
            ));
        }
        if a.min_rate > a.max_rate {
            return invalid(format!(
                "animation.min_rate ({}) exceeds animation.max_rate ({})",
                a.min_rate, a.max_rate
            ));
        }
        if !(a.rate > 0.0) {
            return invalid(format!("animation.rate must be positive, got {}", a.rate));
        }
        if !(a.rate_factor > 1.0) {
            return invalid(format!(
                "animation.rate_factor must be greater than 1, got {}",
                a.rate_factor
            ));
        }

        // Comparisons are written so that NaN fails them.
        let s = &self.showcase;
        if !(s.image_scale > 0.0) {
            return invalid(format!("showcase.image_scale must be positive, got {}", s.image_scale));
        }
        if !s.sweep_degrees_per_second.is_finite() {
            return invalid(format!(
                "showcase.sweep_degrees_per_second must be finite, got {}",
                s.sweep_degrees_per_second
            ));
        }
        for (name, value) in [
            ("sweep_radius", s.sweep_radius),
            ("marker_radius", s.marker_radius),
            ("center_radius", s.center_radius),
            ("cursor_radius", s.cursor_radius),
            ("circle.stroke_width", s.circle.stroke_width),
        ] {
            if !(value >= 0.0) {
                return invalid(format!("showcase.{} must not be negative, got {}", name, value));
            }
        }

        let o = &self.orrery;
        if !(o.scale > 0.0) {
            return invalid(format!("orrery.scale must be positive, got {}", o.scale));
        }
        if !(o.orbit_width >= 0.0) {
            return invalid(format!("orrery.orbit_width must not be negative, got {}", o.orbit_width));
        }
        for body in &o.bodies {
            let [rx, ry] = body.orbit;
            if [body.radius, body.stroke_width, rx, ry].iter().any(|v| !(*v >= 0.0)) {
                return invalid(format!("body '{}' has a negative radius or width", body.name));
            }
            let rates = [
                body.speed,
                body.phase,
                body.precession_speed,
                body.precession_phase,
                body.spin_speed,
            ];
            if rates.iter().any(|v| !v.is_finite()) {
                return invalid(format!("body '{}' has a non-finite angle or speed", body.name));
            }
        }

        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Config {
        Config::from_toml(text, Path::new("test.toml")).unwrap()
    }

    //=====================================================================
    // Parsing Tests
    //=====================================================================

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse(""), Config::default());
    }

    #[test]
    fn defaults_match_the_demo_window() {
        let config = Config::default();
        assert_eq!((config.window.width, config.window.height), (1024, 768));
        assert_eq!(config.window.samples, 4);
        assert_eq!(config.window.gl_version, [3, 2]);
        assert!(!config.window.resizable);
        assert_eq!(config.scene.background, Rgba::rgb(30, 30, 30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = parse(
            r#"
            [window]
            title = "planets"

            [animation]
            rate = 4.0
            "#,
        );

        assert_eq!(config.window.title, "planets");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.animation.rate, 4.0);
        assert_eq!(config.animation.rate_factor, 2.0);
    }

    #[test]
    fn bodies_replace_the_default_system() {
        let config = parse(
            r#"
            [[orrery.bodies]]
            name = "moon"
            radius = 5.0
            orbit = [40.0, 20.0]
            speed = 2.0
            fill = [10, 20, 30, 255]
            "#,
        );

        assert_eq!(config.orrery.bodies.len(), 1);
        let moon = &config.orrery.bodies[0];
        assert_eq!(moon.name, "moon");
        assert_eq!(moon.orbit, [40.0, 20.0]);
        assert_eq!(moon.fill, Rgba::rgb(10, 20, 30));
        assert_eq!(moon.stroke, Rgba::WHITE);
    }

    #[test]
    fn malformed_file_reports_origin() {
        let err = Config::from_toml("[window\n", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    //=====================================================================
    // Validation Tests
    //=====================================================================

    #[test]
    fn rejects_zero_window() {
        let mut config = Config::default();
        config.window.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_rate_bounds() {
        let mut config = Config::default();
        config.animation.min_rate = 8.0;
        config.animation.max_rate = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_growing_rate_factor() {
        let mut config = Config::default();
        config.animation.rate_factor = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_nan_rate() {
        let mut config = Config::default();
        config.animation.rate = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_body_radius() {
        let mut config = Config::default();
        config.orrery.bodies[1].orbit = [-1.0, 10.0];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ember"));
    }

    #[test]
    fn rejects_nan_scale() {
        let config = parse("[showcase]\nimage_scale = nan\n");
        assert!(config.showcase.image_scale.is_nan());
        assert!(config.validate().is_err());

        let config = parse("[orrery]\nscale = nan\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_nan_radii_and_widths() {
        let mut config = Config::default();
        config.orrery.bodies[2].radius = f32::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("azure"));

        let mut config = Config::default();
        config.orrery.bodies[0].orbit = [f32::NAN, 0.0];
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.orrery.orbit_width = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.showcase.circle.stroke_width = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.showcase.marker_radius = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_body_speed() {
        let mut config = Config::default();
        config.orrery.bodies[3].speed = f32::INFINITY;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("jade"));
    }
}
