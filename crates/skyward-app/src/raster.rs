//! Software canvas for the fireworks loop.
//!
//! Pixels are premultiplied RGBA in [0, 1]. The last frame can be written out
//! as a binary PPM (composited over black).

use std::io::Write;
use std::path::Path;

use glam::DVec2;

use skyward_fireworks::color::Rgb;
use skyward_fireworks::{BlendMode, Canvas};

use crate::error::Result;

/// Share of the disc alpha carried by the glow halo at the disc edge.
const HALO_STRENGTH: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct RasterCanvas {
    width: u32,
    height: u32,
    pixels: Vec<[f64; 4]>,
    blend: BlendMode,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
            blend: BlendMode::Lighter,
        }
    }

    /// Resize the drawing buffer. Like a browser canvas, this clears it.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self {
            blend: self.blend,
            ..Self::new(width, height)
        };
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> [f64; 4] {
        self.pixels[(y * self.width + x) as usize]
    }

    fn blend_pixel(&mut self, index: usize, color: [f64; 3], alpha: f64) {
        let dst = &mut self.pixels[index];
        match self.blend {
            BlendMode::DestinationOut => {
                for channel in dst.iter_mut() {
                    *channel *= 1.0 - alpha;
                }
            }
            BlendMode::Lighter => {
                for (c, src) in dst.iter_mut().zip(color) {
                    *c = (*c + src * alpha).min(1.0);
                }
                dst[3] = (dst[3] + alpha).min(1.0);
            }
        }
    }

    /// Write the frame as binary PPM (P6).
    pub fn write_ppm(&self, out: &mut impl Write) -> std::io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let bytes: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|p| [p[0], p[1], p[2]])
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        out.write_all(&bytes)
    }

    pub fn save_ppm(&self, path: &Path) -> Result<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        self.write_ppm(&mut file)?;
        file.flush()?;
        log::info!("Wrote {}x{} frame to {:?}", self.width, self.height, path);
        Ok(())
    }
}

impl Canvas for RasterCanvas {
    fn set_blend(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn fill_surface(&mut self, color: Rgb, alpha: f64) {
        let color = color.to_unit();
        for i in 0..self.pixels.len() {
            self.blend_pixel(i, color, alpha);
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64, glow: f64) {
        if alpha <= 0.0 || self.pixels.is_empty() {
            return;
        }
        let color = color.to_unit();
        let reach = radius + glow.max(0.0) / 2.0;
        let x0 = (center.x - reach).floor().max(0.0) as u32;
        let y0 = (center.y - reach).floor().max(0.0) as u32;
        let x1 = ((center.x + reach).ceil().max(0.0) as u32).min(self.width - 1);
        let y1 = ((center.y + reach).ceil().max(0.0) as u32).min(self.height - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }

        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5).distance(center);
                let coverage = if d <= radius {
                    1.0
                } else if d < reach {
                    let t = 1.0 - (d - radius) / (reach - radius);
                    HALO_STRENGTH * t * t
                } else {
                    continue;
                };
                let index = (y * self.width + x) as usize;
                self.blend_pixel(index, color, alpha * coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn test_lighter_adds_and_saturates() {
        let mut canvas = RasterCanvas::new(4, 4);
        canvas.set_blend(BlendMode::Lighter);
        canvas.fill_surface(Rgb::new(255, 0, 0), 0.6);
        canvas.fill_surface(Rgb::new(255, 0, 0), 0.6);
        let p = canvas.pixel(1, 1);
        assert_eq!(p[0], 1.0);
        assert_eq!(p[1], 0.0);
        assert_eq!(p[3], 1.0);
    }

    #[test]
    fn test_destination_out_fades_by_alpha() {
        let mut canvas = RasterCanvas::new(2, 2);
        canvas.set_blend(BlendMode::Lighter);
        canvas.fill_surface(WHITE, 1.0);
        canvas.set_blend(BlendMode::DestinationOut);
        canvas.fill_surface(Rgb::new(20, 20, 30), 0.25);
        let p = canvas.pixel(0, 0);
        assert!((p[0] - 0.75).abs() < 1e-12);
        assert!((p[3] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_circle_core_and_halo() {
        let mut canvas = RasterCanvas::new(40, 40);
        canvas.fill_circle(DVec2::new(20.0, 20.0), 3.0, WHITE, 1.0, 20.0);
        assert_eq!(canvas.pixel(20, 20)[0], 1.0);
        let halo = canvas.pixel(25, 20)[0];
        assert!(halo > 0.0 && halo < 1.0);
        assert_eq!(canvas.pixel(0, 0)[0], 0.0);
    }

    #[test]
    fn test_circle_off_canvas_is_clipped() {
        let mut canvas = RasterCanvas::new(10, 10);
        canvas.fill_circle(DVec2::new(-50.0, -50.0), 3.0, WHITE, 1.0, 20.0);
        canvas.fill_circle(DVec2::new(9.0, 9.0), 3.0, WHITE, 1.0, 0.0);
        assert_eq!(canvas.pixel(0, 0)[0], 0.0);
        assert_eq!(canvas.pixel(9, 9)[0], 1.0);
    }

    #[test]
    fn test_ppm_header_and_size() {
        let mut canvas = RasterCanvas::new(3, 2);
        canvas.fill_surface(WHITE, 1.0);
        let mut out = Vec::new();
        canvas.write_ppm(&mut out).unwrap();
        let header = b"P6\n3 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(out.len(), header.len() + 3 * 2 * 3);
        assert!(out[header.len()..].iter().all(|&b| b == 255));
    }

    #[test]
    fn test_resize_clears() {
        let mut canvas = RasterCanvas::new(4, 4);
        canvas.fill_surface(WHITE, 1.0);
        canvas.resize(6, 2);
        assert_eq!((canvas.width(), canvas.height()), (6, 2));
        assert_eq!(canvas.pixel(5, 1), [0.0; 4]);
    }
}
