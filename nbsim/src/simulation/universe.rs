//! The universe: an ordered set of bodies, a nominal radius and the force
//! table that goes with them.
//!
//! Body order is significant. It is the force-accumulation order, the order
//! bodies are written out in, and an index is how a body is identified.
//! Bodies are only handed out by shared reference, so the only way to change
//! their state is [`Universe::step`], which keeps the force cache honest.

use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use super::forces::ForceField;
use super::integrator::semi_implicit_euler;
use super::params::Parameters;
use super::states::{Body, NVec2};
use crate::error::{NbodyError, Result};
use crate::format::text::{self, Tokens};

#[derive(Debug, Clone)]
pub struct Universe {
    radius: f64, // extent used by renderers for coordinate mapping
    bodies: Vec<Body>,
    field: ForceField,
}

impl Default for Universe {
    fn default() -> Self {
        Self::new(0.0, Vec::new())
    }
}

impl Universe {
    /// Build a universe using the default (SI) gravitational constant
    pub fn new(radius: f64, bodies: Vec<Body>) -> Self {
        Self::with_parameters(radius, bodies, Parameters::default())
    }

    pub fn with_parameters(radius: f64, bodies: Vec<Body>, parameters: Parameters) -> Self {
        debug_assert!(
            radius >= 0.0 && radius.is_finite(),
            "universe radius must be non-negative and finite, got {radius}"
        );
        Self {
            radius,
            bodies,
            field: ForceField::new(parameters),
        }
    }

    /// Swap the physical parameters; cached forces are dropped
    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.field = ForceField::new(parameters);
    }

    pub fn parameters(&self) -> Parameters {
        Parameters {
            G: self.field.gravity().G,
        }
    }

    /// Load a universe from the text file at `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let universe = Self::read_from(file)?;
        info!(path = %path.display(), bodies = universe.num_bodies(), "loaded universe");
        Ok(universe)
    }

    /// Read a universe from a text stream
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// Write the universe in text form
    ///
    /// Fails with `MalformedInput` before writing anything if a visual id
    /// could not be read back as a single token.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for body in &self.bodies {
            text::check_visual_id(&body.visual_id)?;
        }
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }

    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Advance every body by one semi-implicit Euler step of `dt` seconds
    pub fn step(&mut self, dt: f64) {
        semi_implicit_euler(&mut self.bodies, &mut self.field, dt);
    }

    /// Net gravitational force on body `index` at the current positions
    pub fn force_on(&mut self, index: usize) -> Result<NVec2> {
        let count = self.bodies.len();
        self.field
            .force(&self.bodies, index)
            .ok_or(NbodyError::UnknownBody { index, count })
    }

    /// Recompute the whole force table now
    pub fn calculate_forces(&mut self) {
        self.field.recompute(&self.bodies);
    }

    /// Whether the cached forces match the current body state
    pub fn forces_valid(&self) -> bool {
        self.field.is_valid()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(NVec2::zeros(), |acc, p| acc + p)
    }

    /// Kinetic plus gravitational potential energy
    pub fn total_energy(&self) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(|b| b.kinetic_energy()).sum();
        kinetic + self.field.gravity().potential_energy(&self.bodies)
    }
}

impl Index<usize> for Universe {
    type Output = Body;

    fn index(&self, index: usize) -> &Body {
        &self.bodies[index]
    }
}

/// Formatting errors on an unwritable visual id; use
/// [`Universe::write_to`] to get that as a `Result` instead.
impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_universe(f, self.radius, &self.bodies)
    }
}

impl FromStr for Universe {
    type Err = NbodyError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = Tokens::new(s);
        let (radius, bodies) = text::read_universe(&mut tokens)?;

        let trailing = tokens.remaining();
        if trailing > 0 {
            debug!(trailing, "ignoring tokens after the last body");
        }

        Ok(Self::new(radius, bodies))
    }
}
