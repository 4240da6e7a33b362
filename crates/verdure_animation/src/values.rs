//! Animatable value types and range interpolation
//!
//! Provides the [`Interpolate`] trait for values that can be tweened and
//! [`Interpolation`], which maps an animated driver value from an input range
//! onto an output range.

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Range Interpolation
// ============================================================================

/// A clamped linear mapping from an input range onto an output range
///
/// Driver values outside the input range pin to the nearest output end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    /// Input range (start, end)
    pub input: (f32, f32),
    /// Output range (start, end)
    pub output: (f32, f32),
}

impl Interpolation {
    pub fn new(input: (f32, f32), output: (f32, f32)) -> Self {
        Self { input, output }
    }

    /// Map a driver value onto the output range
    ///
    /// The ends of the input range map to the ends of the output range exactly.
    pub fn map(&self, value: f32) -> f32 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;

        let span = in_end - in_start;
        if span.abs() < f32::EPSILON {
            return out_start;
        }

        let t = (value - in_start) / span;
        if t <= 0.0 {
            return out_start;
        }
        if t >= 1.0 {
            return out_end;
        }

        out_start.lerp(&out_end, t)
    }
}

/// Map `value` from `input` onto `output`, clamping outside the input range
pub fn interpolate(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    Interpolation::new(input, output).map(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_range_endpoints_are_exact() {
        let range = Interpolation::new((0.0, 1.0), (812.0 / 3.0, 0.0));
        assert_eq!(range.map(0.0), 812.0 / 3.0);
        assert_eq!(range.map(1.0), 0.0);
    }

    #[test]
    fn test_range_midpoint() {
        assert!((interpolate(0.5, (0.0, 1.0), (100.0, 0.0)) - 50.0).abs() < 1e-5);
        assert!((interpolate(0.25, (0.0, 1.0), (0.0, 180.0)) - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_outside_range() {
        assert_eq!(interpolate(-1.0, (0.0, 1.0), (-100.0, 0.0)), -100.0);
        assert_eq!(interpolate(2.0, (0.0, 1.0), (-100.0, 0.0)), 0.0);
    }

    #[test]
    fn test_reversed_input_range() {
        let range = Interpolation::new((1.0, 0.0), (0.0, 10.0));
        assert_eq!(range.map(1.0), 0.0);
        assert_eq!(range.map(0.0), 10.0);
        assert_eq!(range.map(-3.0), 10.0);
    }

    #[test]
    fn test_degenerate_input_range() {
        assert_eq!(interpolate(5.0, (1.0, 1.0), (3.0, 7.0)), 3.0);
    }
}
