//! Colors and the neon palette.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to [0, 1].
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Every firework color is drawn from here.
pub const NEON_PALETTE: [Rgb; 10] = [
    Rgb::new(0x00, 0xff, 0xf7),
    Rgb::new(0xff, 0x00, 0xc8),
    Rgb::new(0x39, 0xff, 0x14),
    Rgb::new(0xf7, 0xff, 0x00),
    Rgb::new(0xff, 0x2d, 0x00),
    Rgb::new(0x00, 0xff, 0xea),
    Rgb::new(0xff, 0x00, 0xa6),
    Rgb::new(0x00, 0xff, 0x90),
    Rgb::new(0xff, 0xfb, 0x00),
    Rgb::new(0xff, 0x00, 0x7c),
];

/// Uniform pick from the palette.
pub fn random_neon(rng: &mut impl Rng) -> Rgb {
    NEON_PALETTE[rng.gen_range(0..NEON_PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_hex_display() {
        assert_eq!(NEON_PALETTE[0].to_string(), "#00fff7");
        assert_eq!(NEON_PALETTE[9].to_string(), "#ff007c");
    }

    #[test]
    fn test_random_neon_stays_in_palette() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            assert!(NEON_PALETTE.contains(&random_neon(&mut rng)));
        }
    }
}
