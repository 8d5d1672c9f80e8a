//! Gravitational force engine
//!
//! [`NewtonianGravity`] is the direct O(n^2) pairwise law with no softening.
//! [`ForceField`] wraps it with the universe-wide force table: the table is
//! rebuilt in one pass whenever it is stale and a force is asked for, so every
//! body queried within a step shares a single evaluation.

use tracing::{debug, warn};

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

/// 2D Newtonian gravity, direct summation, no softening
///
/// Coincident bodies give `r = 0` and a non-finite force. That is left to
/// propagate: changing it would change the output of edge-case fixtures.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Add the net force on every body into `out[i]`
    /// - `out` must be as long as `bodies`; it is not zeroed here
    pub fn accumulate_forces(&self, bodies: &[Body], out: &mut [NVec2]) {
        let n = bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &bodies[i];

            for j in (i + 1)..n {
                let bj = &bodies[j];

                // d points from i to j: i is pulled along +d, j along -d
                let d = Body::distance_vector(bi, bj);
                let r2 = d.x * d.x + d.y * d.y;
                let r = r2.sqrt();

                // |F| = G * m_i * m_j / r^2
                let magnitude = self.G * bi.m * bj.m / r2;
                let f = magnitude * (d / r);

                // Newton's third law
                out[i] += f;
                out[j] -= f;
            }
        }
    }

    /// Total gravitational potential energy, each pair counted once
    pub fn potential_energy(&self, bodies: &[Body]) -> f64 {
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().map(move |b| {
                    let r = Body::distance_vector(a, b).norm();
                    -self.G * a.m * b.m / r
                })
            })
            .sum()
    }
}

/// Cached per-body net forces for one universe
///
/// While `valid` is true, `forces[i]` is the exact net force on body `i` of
/// the body slice it was last computed from. Whoever mutates that slice must
/// call [`ForceField::invalidate`].
#[derive(Debug, Clone)]
pub struct ForceField {
    gravity: NewtonianGravity,
    forces: Vec<NVec2>,
    valid: bool,
}

impl ForceField {
    pub fn new(parameters: Parameters) -> Self {
        Self {
            gravity: NewtonianGravity { G: parameters.G },
            forces: Vec::new(),
            valid: false,
        }
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Mark the table stale; the next lookup recomputes everything
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Rebuild the whole table from the current positions and masses
    pub fn recompute(&mut self, bodies: &[Body]) {
        self.forces.clear();
        self.forces.resize(bodies.len(), NVec2::zeros());
        self.gravity.accumulate_forces(bodies, &mut self.forces);
        self.valid = true;

        debug!(bodies = bodies.len(), "recomputed force table");
        if let Some(i) = self.forces.iter().position(|f| !f.x.is_finite() || !f.y.is_finite()) {
            warn!(body = i, "non-finite gravitational force (coincident bodies?)");
        }
    }

    /// Net force on body `index`, recomputing the full table first if stale
    ///
    /// Returns `None` when `index` is out of range.
    pub fn force(&mut self, bodies: &[Body], index: usize) -> Option<NVec2> {
        if !self.valid {
            self.recompute(bodies);
        }
        self.forces.get(index).copied()
    }

    /// The full force table, recomputed first if stale
    pub fn forces(&mut self, bodies: &[Body]) -> &[NVec2] {
        if !self.valid {
            self.recompute(bodies);
        }
        &self.forces
    }
}
