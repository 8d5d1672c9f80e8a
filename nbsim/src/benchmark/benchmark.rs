use std::time::Instant;

use crate::simulation::forces::ForceField;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};
use crate::simulation::universe::Universe;

/// Deterministic layout of `n` unit-mass bodies, no rand needed
fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0);
            Body::new(x, NVec2::zeros(), 1.0, "bench.gif")
        })
        .collect()
}

fn make_params() -> Parameters {
    Parameters { G: 0.1 }
}

/// Time one full force-table evaluation for a range of n
pub fn bench_forces() {
    let ns = [100, 200, 400, 800, 1600, 3200];

    for n in ns {
        let bodies = make_bodies(n);
        let mut field = ForceField::new(make_params());

        // Warm up
        field.recompute(&bodies);

        let t0 = Instant::now();
        field.recompute(&bodies);
        let dt_table = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force table = {:8.6} s", dt_table);
    }
}

/// Time a cached step against recomputing the table for every body,
/// which is what a step would cost without the shared force table.
/// Output is CSV for pasting into a spreadsheet.
pub fn bench_step() {
    println!("N,cached_ms,uncached_ms");

    for n in (100..=1600).step_by(100) {
        let steps = if n <= 400 { 5 } else { 1 };

        let mut universe = Universe::with_parameters(10.0, make_bodies(n), make_params());
        let t0 = Instant::now();
        for _ in 0..steps {
            universe.step(1.0e-3);
        }
        let ms_cached = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut bodies = make_bodies(n);
        let mut field = ForceField::new(make_params());
        let t1 = Instant::now();
        for _ in 0..steps {
            for i in 0..bodies.len() {
                field.invalidate();
                let force = field.force(&bodies, i).expect("force table sized to bodies");
                bodies[i].step(force, 1.0e-3);
            }
        }
        let ms_uncached = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_cached, ms_uncached);
    }
}
