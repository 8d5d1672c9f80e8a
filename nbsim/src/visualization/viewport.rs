//! Drawing capability and simulation → screen coordinate mapping
//!
//! Nothing here renders. A renderer asks a [`SpriteSource`] for what to draw
//! and uses a [`Viewport`] to place it; textures are looked up by the
//! renderer from the opaque visual id.

use crate::simulation::states::NVec2;
use crate::simulation::universe::Universe;

/// One drawable item: which image and where, in simulation coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite<'a> {
    pub visual_id: &'a str,
    pub position: NVec2,
}

/// Anything that can list sprites inside a square region of half-width `radius`
pub trait SpriteSource {
    fn radius(&self) -> f64;
    fn sprites(&self) -> Vec<Sprite<'_>>;
}

impl SpriteSource for Universe {
    fn radius(&self) -> f64 {
        Universe::radius(self)
    }

    fn sprites(&self) -> Vec<Sprite<'_>> {
        self.bodies()
            .iter()
            .map(|b| Sprite {
                visual_id: &b.visual_id,
                position: b.x,
            })
            .collect()
    }
}

/// Pixel dimensions of the drawing target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map a simulation position to pixel coordinates
    ///
    /// `[-radius, radius]` spans the full width/height, origin at the centre,
    /// y pointing up in simulation space and down on screen.
    pub fn to_screen(&self, position: NVec2, radius: f64) -> NVec2 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        NVec2::new(
            (position.x / radius) * half_w + half_w,
            (position.y / radius) * -half_h + half_h,
        )
    }

    /// Screen placement of every sprite of `source`
    pub fn place<'a, S: SpriteSource>(&self, source: &'a S) -> Vec<(&'a str, NVec2)> {
        let radius = source.radius();
        source
            .sprites()
            .into_iter()
            .map(|s| (s.visual_id, self.to_screen(s.position, radius)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Body;

    #[test]
    fn origin_maps_to_centre() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_screen(NVec2::zeros(), 1.0e11), NVec2::new(400.0, 300.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let vp = Viewport::new(800.0, 800.0);
        let r = 100.0;
        assert_eq!(vp.to_screen(NVec2::new(r, r), r), NVec2::new(800.0, 0.0));
        assert_eq!(vp.to_screen(NVec2::new(-r, -r), r), NVec2::new(0.0, 800.0));
    }

    #[test]
    fn places_universe_bodies_in_order() {
        let universe = Universe::new(
            200.0,
            vec![
                Body::new(NVec2::new(-100.0, 0.0), NVec2::zeros(), 1.0e4, "a.gif"),
                Body::new(NVec2::new(100.0, 50.0), NVec2::zeros(), 5.0e4, "b.gif"),
            ],
        );
        let placed = Viewport::new(400.0, 400.0).place(&universe);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0], ("a.gif", NVec2::new(100.0, 200.0)));
        assert_eq!(placed[1], ("b.gif", NVec2::new(300.0, 150.0)));
    }
}
