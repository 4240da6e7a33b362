//! Screen geometry

use crate::error::{PlatformError, Result};
use serde::{Deserialize, Serialize};

/// Screen dimensions in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    /// Create a screen size, rejecting non-positive or non-finite dimensions
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(PlatformError::InvalidScreenSize { width, height });
        }
        Ok(Self { width, height })
    }
}

impl Default for ScreenSize {
    /// A common phone size (375x812)
    fn default() -> Self {
        Self {
            width: 375.0,
            height: 812.0,
        }
    }
}

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Check if a point lies inside (edges inclusive)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Return a copy moved vertically by `dy`
    pub fn offset_y(&self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_size_validation() {
        assert!(ScreenSize::new(375.0, 812.0).is_ok());
        assert!(ScreenSize::new(0.0, 812.0).is_err());
        assert!(ScreenSize::new(375.0, f32::NAN).is_err());
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(110.0, 70.0));
        assert!(!rect.contains(9.9, 30.0));
        assert!(!rect.offset_y(100.0).contains(50.0, 40.0));
    }
}
