//! Configuration types for loading simulation settings from YAML.
//!
//! The universe itself always comes from the plain-text format; the YAML file
//! only carries physical constants and, optionally, run-loop settings:
//!
//! - [`ParametersConfig`] – physical constants
//! - [`RunConfig`]        – total time and step size for `nbsim run`
//! - [`SimulationConfig`] – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 6.67e-11      # gravitational constant
//!
//! run:               # optional; command-line values take precedence
//!   t_end: 1.57788e8 # total simulated seconds
//!   dt: 25000.0      # step size in seconds
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::simulation::params::{Parameters, G_SI};

fn default_g() -> f64 {
    G_SI
}

/// Global physical parameters
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self { G: G_SI }
    }
}

/// Fixed-step run settings
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub t_end: f64, // total simulated time (s)
    pub dt: f64, // step size (s)
}

/// Top-level configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SimulationConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub run: Option<RunConfig>,
}

impl SimulationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let cfg: SimulationConfig = serde_yaml::from_reader(reader)?;
        info!(path = %path.display(), G = cfg.parameters.G, "loaded simulation config");
        Ok(cfg)
    }

    /// Runtime parameters for the force engine
    pub fn parameters(&self) -> Parameters {
        Parameters {
            G: self.parameters.G,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = SimulationConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg.parameters().G, G_SI);
        assert!(cfg.run.is_none());
    }

    #[test]
    fn parses_constants_and_run() {
        let yaml = "parameters:\n  G: 1.0\nrun:\n  t_end: 10.0\n  dt: 0.5\n";
        let cfg = SimulationConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.parameters().G, 1.0);
        let run = cfg.run.unwrap();
        assert_eq!(run.t_end, 10.0);
        assert_eq!(run.dt, 0.5);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(SimulationConfig::from_yaml_str("parameters:\n  G: heavy\n").is_err());
    }
}
