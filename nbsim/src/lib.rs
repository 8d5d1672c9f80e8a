pub mod error;
pub mod simulation;
pub mod format;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{NbodyError, Result};

pub use simulation::states::{Body, NVec2};
pub use simulation::params::{Parameters, G_SI};
pub use simulation::forces::{ForceField, NewtonianGravity};
pub use simulation::integrator::{semi_implicit_euler, run};
pub use simulation::universe::Universe;

pub use format::text::Scientific;

pub use configuration::config::{SimulationConfig, ParametersConfig, RunConfig};

pub use visualization::viewport::{Sprite, SpriteSource, Viewport};

pub use benchmark::benchmark::{bench_forces, bench_step};
