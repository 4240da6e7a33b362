//! Easing functions
//!
//! Easing functions map linear progress (0.0 to 1.0) onto a curved progress
//! value. Every curve maps 0 to exactly 0 and 1 to exactly 1 so animations
//! settle precisely on their targets.

use serde::{Deserialize, Serialize};

/// Available easing curves
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing
    Linear,
    /// The standard `ease` curve, cubic-bezier(0.25, 0.1, 0.25, 1.0)
    Ease,
    /// cubic-bezier(0.42, 0.0, 1.0, 1.0)
    EaseIn,
    /// cubic-bezier(0.0, 0.0, 0.58, 1.0)
    EaseOut,
    /// cubic-bezier(0.42, 0.0, 0.58, 1.0)
    #[default]
    EaseInOut,
    /// Cubic ease-in
    EaseInCubic,
    /// Cubic ease-out
    EaseOutCubic,
    /// Cubic ease-in-out
    EaseInOutCubic,
    /// Custom cubic bezier with control points (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing curve to a progress value
    ///
    /// Input is clamped to 0.0..=1.0.
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

// =============================================================================
// Cubic Bezier
// =============================================================================

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const SOLVE_EPSILON: f32 = 1e-6;

/// Evaluate a cubic bezier easing curve anchored at (0,0) and (1,1)
///
/// Solves x(u) = t for the curve parameter u, then returns y(u).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let u = solve_curve_x(x1, x2, t);
    sample_curve(y1, y2, u)
}

#[inline]
fn sample_curve(p1: f32, p2: f32, u: f32) -> f32 {
    // B(u) = 3(1-u)^2 u p1 + 3(1-u) u^2 p2 + u^3
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

#[inline]
fn sample_derivative(p1: f32, p2: f32, u: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

fn solve_curve_x(x1: f32, x2: f32, x: f32) -> f32 {
    // Newton-Raphson first, it converges quickly for well-formed curves
    let mut u = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = sample_curve(x1, x2, u) - x;
        if err.abs() < SOLVE_EPSILON {
            return u;
        }
        let d = sample_derivative(x1, x2, u);
        if d.abs() < SOLVE_EPSILON {
            break;
        }
        u -= err / d;
    }

    // Fall back to bisection when the derivative flattens out
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    u = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = sample_curve(x1, x2, u);
        if (value - x).abs() < SOLVE_EPSILON {
            break;
        }
        if value < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) * 0.5;
    }
    u
}
