//! Login screen configuration
//!
//! Every field has a default, so an empty file (or no file) yields the
//! standard screen. Configuration is read from TOML:
//!
//! ```toml
//! [transition]
//! duration_ms = 1000
//! easing = "ease_in_out"
//!
//! [keyboard]
//! lift = -300.0
//! show_easing = "ease"
//! ```

use crate::error::{LoginError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use verdure_animation::Easing;

/// Complete login screen configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

impl LoginConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LoginConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoginError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "Loaded login config");
        Ok(config)
    }

    /// Reject values that would break the screen's invariants
    pub fn validate(&self) -> Result<()> {
        let t = &self.transition;
        require_finite("transition.button_travel", t.button_travel)?;
        require_finite("transition.close_rotation_deg", t.close_rotation_deg)?;
        require_easing("transition.easing", t.easing)?;

        let k = &self.keyboard;
        require_finite("keyboard.lift", k.lift)?;
        require_easing("keyboard.show_easing", k.show_easing)?;
        require_easing("keyboard.hide_easing", k.hide_easing)?;
        Ok(())
    }
}

/// Button/form transition settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TransitionConfig {
    /// Duration of one open or close animation
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u32,
    #[serde(default = "default_transition_easing")]
    pub easing: Easing,
    /// How far the sign-in buttons travel while fading out
    #[serde(default = "default_button_travel")]
    pub button_travel: f32,
    /// Close button rotation when the buttons are visible
    #[serde(default = "default_close_rotation")]
    pub close_rotation_deg: f32,
}

fn default_transition_duration() -> u32 {
    1000
}

fn default_transition_easing() -> Easing {
    Easing::EaseInOut
}

fn default_button_travel() -> f32 {
    100.0
}

fn default_close_rotation() -> f32 {
    180.0
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_transition_duration(),
            easing: default_transition_easing(),
            button_travel: default_button_travel(),
            close_rotation_deg: default_close_rotation(),
        }
    }
}

/// Keyboard-aware shift settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct KeyboardConfig {
    /// Screen offset while the keyboard is shown (negative lifts the screen)
    #[serde(default = "default_lift")]
    pub lift: f32,
    #[serde(default = "default_keyboard_duration")]
    pub show_duration_ms: u32,
    #[serde(default = "default_keyboard_duration")]
    pub hide_duration_ms: u32,
    #[serde(default = "default_show_easing")]
    pub show_easing: Easing,
    #[serde(default = "default_hide_easing")]
    pub hide_easing: Easing,
}

fn default_lift() -> f32 {
    -300.0
}

fn default_keyboard_duration() -> u32 {
    400
}

fn default_show_easing() -> Easing {
    Easing::Ease
}

fn default_hide_easing() -> Easing {
    Easing::EaseInOut
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            lift: default_lift(),
            show_duration_ms: default_keyboard_duration(),
            hide_duration_ms: default_keyboard_duration(),
            show_easing: default_show_easing(),
            hide_easing: default_hide_easing(),
        }
    }
}

fn require_finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LoginError::InvalidConfig {
            field,
            reason: format!("{value} is not a finite number"),
        })
    }
}

fn require_easing(field: &'static str, easing: Easing) -> Result<()> {
    if let Easing::CubicBezier(x1, y1, x2, y2) = easing {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(LoginError::InvalidConfig {
                field,
                reason: "cubic bezier control points must be finite".to_string(),
            });
        }
        // The curve must stay a function of time
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(LoginError::InvalidConfig {
                field,
                reason: format!("cubic bezier x control points must be in 0..=1, got {x1} and {x2}"),
            });
        }
    }
    Ok(())
}
