//! World-to-screen math for an external renderer
//!
//! The simulation itself draws nothing. A renderer asks a [`View`] where a body or
//! a trajectory lands on screen: optionally rotate about the y axis, then shift
//! the origin to the centre of the [`Viewport`]. Depth is kept as the third
//! component but never used for culling

use std::f64::consts::TAU;

use nalgebra::{Matrix3, Vector2};

use crate::simulation::history::PositionHistory;
use crate::simulation::states::NVec3;

/// Angle added per frame while the view is spinning, radians
pub const DEFAULT_SPIN: f64 = 0.001;

/// Rotation by `theta` about the y axis
pub fn rotate_y(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, 0.0, -s,
        0.0, 1.0, 0.0,
        s, 0.0, c,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl Viewport {
    /// Shift so the world origin sits at the centre of the window
    pub fn to_window(&self, p: &NVec3) -> NVec3 {
        NVec3::new(
            p.x + (self.width / 2.0).floor(),
            p.y + (self.height / 2.0).floor(),
            p.z,
        )
    }

    /// Inclusive bounds test on the x/y window coordinates
    pub fn contains(&self, w: &NVec3) -> bool {
        (0.0..=self.width).contains(&w.x) && (0.0..=self.height).contains(&w.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub viewport: Viewport,
    pub angle: f64, // current y rotation
    pub spin: f64, // per-frame increment
    pub rotating: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            angle: 0.0,
            spin: DEFAULT_SPIN,
            rotating: false,
        }
    }
}

impl View {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn toggle_rotation(&mut self) {
        self.rotating = !self.rotating;
    }

    /// Step the spin angle, wrapping into [0, 2π)
    pub fn advance(&mut self) {
        if self.rotating {
            self.angle = (self.angle + self.spin).rem_euclid(TAU);
        }
    }

    /// Window coordinates of a world point
    pub fn project(&self, p: &NVec3) -> NVec3 {
        if self.rotating {
            self.viewport.to_window(&(rotate_y(self.angle) * p))
        } else {
            self.viewport.to_window(p)
        }
    }

    /// Screen-space x/y of `p`, or `None` if it falls outside the window
    pub fn screen_point(&self, p: &NVec3) -> Option<Vector2<f64>> {
        let w = self.project(p);
        self.viewport.contains(&w).then(|| w.xy())
    }

    /// Polyline for a trajectory, oldest point first
    pub fn project_history(&self, history: &PositionHistory) -> Vec<Vector2<f64>> {
        history.iter().map(|p| self.project(p).xy()).collect()
    }
}
