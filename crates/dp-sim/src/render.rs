//! Screen geometry for a pendulum frame.
//!
//! Pure pixel math with no graphics dependency; a display collaborator turns a
//! [`Frame`] into pixels. Screen y grows downwards, so a hanging rod points to
//! `+y`.

use dp_core::Real;

use crate::state::{PendulumParams, PendulumState};

/// Smallest bob radius drawn, in pixels.
pub const MIN_BOB_RADIUS: Real = 3.0;

/// Fraction of the half-viewport the fully extended pendulum may occupy.
const FIT_MARGIN: Real = 0.9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Drawable area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The pivot sits at the viewport center.
    pub fn center(&self) -> Point {
        Point {
            x: Real::from(self.width) / 2.0,
            y: Real::from(self.height) / 2.0,
        }
    }

    /// Pixels per metre such that the pendulum can never leave the viewport.
    pub fn fit_scale(&self, params: &PendulumParams) -> Real {
        let short_side = Real::from(self.width.min(self.height));
        FIT_MARGIN * 0.5 * short_side / params.reach()
    }
}

/// Everything needed to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub viewport: Viewport,
    pub scale: Real,
    pub pivot: Point,
    pub bob1: Point,
    pub bob2: Point,
    pub radius1: Real,
    pub radius2: Real,
}

impl Frame {
    pub fn compose(state: &PendulumState, viewport: Viewport, scale: Real) -> Self {
        let p = state.params();
        let c = &state.config;
        let pivot = viewport.center();

        let (sin1, cos1) = c.theta1.sin_cos();
        let (sin2, cos2) = c.theta2.sin_cos();

        let x1 = p.length1 * sin1;
        let y1 = p.length1 * cos1;
        let x2 = x1 + p.length2 * sin2;
        let y2 = y1 + p.length2 * cos2;

        Self {
            viewport,
            scale,
            pivot,
            bob1: Point {
                x: pivot.x + scale * x1,
                y: pivot.y + scale * y1,
            },
            bob2: Point {
                x: pivot.x + scale * x2,
                y: pivot.y + scale * y2,
            },
            radius1: bob_radius(p, p.mass1, scale),
            radius2: bob_radius(p, p.mass2, scale),
        }
    }

    /// False once the state has gone non-finite; such frames have no
    /// meaningful bob positions.
    pub fn is_drawable(&self) -> bool {
        self.bob1.is_finite() && self.bob2.is_finite()
    }
}

/// Bob radius grows with its share of the total mass.
fn bob_radius(params: &PendulumParams, mass: Real, scale: Real) -> Real {
    let r = params.reach() * scale * mass / (20.0 * (params.mass1 + params.mass2));
    r.max(MIN_BOB_RADIUS)
}
