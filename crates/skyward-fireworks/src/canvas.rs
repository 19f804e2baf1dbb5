//! Drawing a stage onto a 2D surface.

use glam::DVec2;

use crate::color::Rgb;
use crate::constants::*;
use crate::stage::Stage;

/// How new pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Erase the destination by the source alpha.
    DestinationOut,
    /// Add source color to the destination.
    Lighter,
}

/// A drawing surface the host provides.
pub trait Canvas {
    fn set_blend(&mut self, mode: BlendMode);

    /// Fill the whole surface.
    fn fill_surface(&mut self, color: Rgb, alpha: f64);

    /// Fill a disc, with a soft halo of `glow` pixels around it.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64, glow: f64);
}

/// Fade the previous frame, then draw every live rocket and particle additively.
pub fn render(stage: &Stage, canvas: &mut impl Canvas) {
    canvas.set_blend(BlendMode::DestinationOut);
    canvas.fill_surface(FADE_COLOR, FADE_ALPHA);
    canvas.set_blend(BlendMode::Lighter);

    for show in stage.shows() {
        for rocket in show.rockets() {
            canvas.fill_circle(rocket.position, ROCKET_RADIUS, rocket.color, 1.0, GLOW_BLUR);
            let len = rocket.trail.len() as f64;
            for (i, point) in rocket.trail.iter().enumerate() {
                let alpha = i as f64 / len * TRAIL_MAX_ALPHA;
                canvas.fill_circle(*point, TRAIL_RADIUS, rocket.color, alpha, GLOW_BLUR);
            }
        }
        for p in show.particles() {
            canvas.fill_circle(p.position, p.radius, p.color, p.alpha().max(0.0), GLOW_BLUR);
        }
    }
}
