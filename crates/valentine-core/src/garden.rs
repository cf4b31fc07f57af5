//! Randomised garden layout and the ambient sparkle field.

use crate::color::rgb_from_hex;
use crate::constants::*;
use crate::decoration::{DecorationConfig, DecorationKind};
use glam::Vec3;
use rand::prelude::*;

/// Scatter `count` flowers and hearts across the ground band in front of the camera.
pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<DecorationConfig> {
    (0..count)
        .map(|id| {
            let is_heart = rng.gen_bool(GARDEN_HEART_PROBABILITY);
            let x = (rng.gen::<f32>() - 0.5) * GARDEN_HALF_WIDTH * 2.0;
            let z = GARDEN_Z_NEAR - rng.gen::<f32>() * GARDEN_Z_DEPTH;
            let y = GARDEN_Y_FLOOR + rng.gen::<f32>() * GARDEN_Y_SPAN;
            let palette: &[u32] = if is_heart {
                &HEART_COLORS
            } else {
                &GARDEN_COLORS
            };
            let color = *palette.choose(rng).unwrap_or(&GARDEN_COLORS[0]);
            let base_scale = GARDEN_SCALE_MIN + rng.gen::<f32>() * GARDEN_SCALE_SPAN;
            let kind = if is_heart {
                DecorationKind::Heart
            } else {
                DecorationKind::Flower {
                    petal_count: rng.gen_range(PETALS_MIN..=PETALS_MAX),
                }
            };
            DecorationConfig {
                id,
                position: Vec3::new(x, y, z),
                color_rgb: rgb_from_hex(color),
                base_scale,
                kind,
                phase_delay: rng.gen::<f32>() * GARDEN_DELAY_MAX,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug)]
struct Sparkle {
    anchor: Vec3,
    phase: f32,
    size: f32,
}

/// Slowly drifting motes that fill the scene volume.
#[derive(Clone, Debug)]
pub struct SparkleField {
    sparkles: Vec<Sparkle>,
}

/// One sparkle's appearance for the current tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleState {
    pub position: Vec3,
    pub size: f32,
    pub opacity: f32,
}

impl SparkleField {
    pub fn new<R: Rng>(count: usize, extent: f32, rng: &mut R) -> Self {
        let sparkles = (0..count)
            .map(|_| Sparkle {
                anchor: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * extent,
                    (rng.gen::<f32>() - 0.5) * extent,
                    (rng.gen::<f32>() - 0.5) * extent,
                ),
                phase: rng.gen::<f32>() * std::f32::consts::TAU,
                size: 0.5 + rng.gen::<f32>(),
            })
            .collect();
        Self { sparkles }
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }

    pub fn states(&self, elapsed_sec: f32) -> impl Iterator<Item = SparkleState> + '_ {
        let t = elapsed_sec * AMBIENT_SPARKLE_SPEED;
        self.sparkles.iter().map(move |s| {
            let drift = Vec3::new(
                (t + s.phase).sin() * 0.2,
                (t * 1.3 + s.phase).cos() * 0.3,
                0.0,
            );
            SparkleState {
                position: s.anchor + drift,
                size: s.size,
                opacity: 0.25 + 0.25 * (t * 4.0 + s.phase).sin().abs(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_layout() {
        let a = generate(50, &mut StdRng::seed_from_u64(7));
        let b = generate(50, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.len(), 50);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.kind, y.kind);
        }
    }

    #[test]
    fn layout_stays_inside_the_ground_band() {
        let layout = generate(GARDEN_SIZE, &mut StdRng::seed_from_u64(1));
        for d in &layout {
            assert!(d.position.x >= -GARDEN_HALF_WIDTH && d.position.x <= GARDEN_HALF_WIDTH);
            assert!(d.position.z <= GARDEN_Z_NEAR && d.position.z >= GARDEN_Z_NEAR - GARDEN_Z_DEPTH);
            assert!(d.position.y >= GARDEN_Y_FLOOR && d.position.y <= GARDEN_Y_FLOOR + GARDEN_Y_SPAN);
            assert!(d.base_scale >= GARDEN_SCALE_MIN);
            assert!(d.base_scale <= GARDEN_SCALE_MIN + GARDEN_SCALE_SPAN);
            if let DecorationKind::Flower { petal_count } = d.kind {
                assert!((PETALS_MIN..=PETALS_MAX).contains(&petal_count));
            }
        }
    }

    #[test]
    fn garden_mixes_hearts_and_flowers() {
        let layout = generate(GARDEN_SIZE, &mut StdRng::seed_from_u64(3));
        let hearts = layout
            .iter()
            .filter(|d| d.kind == DecorationKind::Heart)
            .count();
        // 25% of 300 with generous slack
        assert!(hearts > 40 && hearts < 115, "hearts = {hearts}");
    }

    #[test]
    fn sparkles_fade_but_never_vanish() {
        let field = SparkleField::new(20, AMBIENT_SPARKLE_EXTENT, &mut StdRng::seed_from_u64(9));
        assert_eq!(field.len(), 20);
        for s in field.states(3.3) {
            assert!(s.opacity >= 0.25 && s.opacity <= 0.5);
        }
    }
}
