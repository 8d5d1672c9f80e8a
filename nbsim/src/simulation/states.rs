//! Core state types for the n-body simulation.
//!
//! A `Body` is a point mass in 2D (`NVec2`) carrying an opaque visual id
//! that the physics never reads. Bodies do not know about the universe they
//! live in; the net force acting on them is handed to [`Body::step`].

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub visual_id: String, // opaque sprite/texture name, round-tripped only
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64, visual_id: impl Into<String>) -> Self {
        Self {
            x,
            v,
            m,
            visual_id: visual_id.into(),
        }
    }

    /// Advance this body by `dt` seconds under the already-resolved net `force`
    ///
    /// Semi-implicit Euler: the velocity is kicked first and the position
    /// drifts with the *updated* velocity. `dt` may be negative.
    pub fn step(&mut self, force: NVec2, dt: f64) {
        // v_n+1 = v_n + dt * F / m
        self.v += dt * (force / self.m);

        // x_n+1 = x_n + dt * v_n+1
        self.x += dt * self.v;
    }

    /// Displacement from `a` to `b` (`b.x - a.x`)
    pub fn distance_vector(a: &Body, b: &Body) -> NVec2 {
        b.x - a.x
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// Bodies compare by kinematic state and mass; the visual id is ignored.
/// Two distinct bodies with identical state compare equal, so this is never
/// used to locate a body inside a universe (indices are).
impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.v == other.v && self.m == other.m
    }
}
