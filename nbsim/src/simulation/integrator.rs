//! Fixed-step time integration
//!
//! One semi-implicit (symplectic) Euler step over a body slice, driven by a
//! [`ForceField`], plus the fixed-step run loop used by the binary.

use tracing::debug;

use super::forces::ForceField;
use super::states::Body;
use super::universe::Universe;
use crate::error::{NbodyError, Result};

/// Advance every body by one semi-implicit Euler step of `dt` seconds
///
/// Forces for the whole step come from one snapshot: the table is
/// invalidated, rebuilt on the first lookup, and reused for the remaining
/// bodies. Once positions have moved the table is stale again.
pub fn semi_implicit_euler(bodies: &mut [Body], field: &mut ForceField, dt: f64) {
    field.invalidate();

    for i in 0..bodies.len() {
        let force = field
            .force(bodies, i)
            .expect("force table is rebuilt to the length of `bodies`");
        bodies[i].step(force, dt);
    }

    field.invalidate();
}

/// Step `universe` with `dt` for `ceil(t_end / |dt|)` steps, returning the
/// number of steps taken
///
/// A negative `dt` runs time backwards for the same duration.
pub fn run(universe: &mut Universe, t_end: f64, dt: f64) -> Result<usize> {
    if !dt.is_finite() || dt == 0.0 {
        return Err(NbodyError::InvalidParameter(format!(
            "time step must be finite and non-zero, got {dt}"
        )));
    }
    if !(t_end >= 0.0 && t_end.is_finite()) {
        return Err(NbodyError::InvalidParameter(format!(
            "total time must be non-negative and finite, got {t_end}"
        )));
    }

    // Counted up front; summing dt would drift and add a step
    let steps = (t_end / dt.abs()).ceil() as usize;
    for _ in 0..steps {
        universe.step(dt);
    }

    debug!(steps, t_end, "run finished");
    Ok(steps)
}
