//! Physical parameters for the simulation
//!
//! `Parameters` carries the gravitational constant into the force engine so
//! tests and configs can swap it without touching a global.

/// SI gravitational constant (m³ kg⁻¹ s⁻²) as used by saved universes.
pub const G_SI: f64 = 6.67e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
}

impl Default for Parameters {
    fn default() -> Self {
        Self { G: G_SI }
    }
}
