//! Fixed circle color palette & helpers.
//! Single source of truth for the UI swatches and the goo shader colors.

use bevy::prelude::*;
use rand::Rng;

/// The 10-entry SRGB palette circles are colored from. Update here only.
pub const PALETTE: [Color; 10] = [
    Color::srgb(1.0, 0.0, 0.4), // #ff0066 pink
    Color::srgb(0.4, 0.0, 1.0), // #6600ff violet
    Color::srgb(0.0, 1.0, 0.6), // #00ff99 spring green
    Color::srgb(1.0, 0.4, 0.0), // #ff6600 orange
    Color::srgb(0.0, 0.8, 1.0), // #00ccff sky
    Color::srgb(1.0, 0.0, 1.0), // #ff00ff magenta
    Color::srgb(1.0, 1.0, 0.0), // #ffff00 yellow
    Color::srgb(0.0, 1.0, 0.4), // #00ff66 green
    Color::srgb(1.0, 0.2, 0.6), // #ff3399 rose
    Color::srgb(0.2, 0.8, 1.0), // #33ccff light blue
];

/// Returns a color for arbitrary index, wrapping around the palette.
#[inline]
pub fn color_for_index(i: usize) -> Color {
    PALETTE[i % PALETTE.len()]
}

/// Uniform random palette index.
#[inline]
pub fn random_palette_index(rng: &mut impl Rng) -> usize {
    rng.gen_range(0..PALETTE.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_behavior() {
        assert_eq!(color_for_index(0), PALETTE[0]);
        assert_eq!(color_for_index(10), PALETTE[0]); // wrap
        assert_eq!(color_for_index(13), PALETTE[3]);
    }

    #[test]
    fn all_colors_distinct() {
        // Protect against accidental duplicates when editing the palette.
        for (i, c1) in PALETTE.iter().enumerate() {
            for (j, c2) in PALETTE.iter().enumerate() {
                if i == j {
                    continue;
                }
                assert!(c1 != c2, "palette contains duplicate colors at {i} and {j}");
            }
        }
    }

    #[test]
    fn sampled_indices_stay_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            assert!(random_palette_index(&mut rng) < PALETTE.len());
        }
    }
}
