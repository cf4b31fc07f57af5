//! Screen-space confetti burst fired once on acceptance.
//!
//! Particles live in CSS pixel space with y pointing down. Each tick they move
//! along their launch angle, lose a fixed fraction of their speed and fall by
//! a constant amount; opacity fades linearly over the lifetime.

use crate::constants::*;
use crate::interaction::Celebration;
use glam::Vec2;
use rand::prelude::*;

const PIECE_SIZE_PX: f32 = 10.0;

#[derive(Clone, Debug)]
struct Particle {
    position: Vec2,
    angle: f32,
    velocity: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt: f32,
    color: u32,
    age: u32,
}

/// What the renderer needs for one confetti piece.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub position_px: Vec2,
    pub rotation: f32,
    /// Visible width after the wobble squash, in px.
    pub width_px: f32,
    pub height_px: f32,
    pub color: u32,
    pub opacity: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ConfettiBurst {
    particles: Vec<Particle>,
}

impl ConfettiBurst {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Launch `celebration.particle_count` pieces from the burst origin of a
    /// `viewport_px` sized page.
    pub fn fire<R: Rng>(&mut self, celebration: &Celebration, viewport_px: Vec2, rng: &mut R) {
        let origin = Vec2::new(
            CONFETTI_ORIGIN[0] * viewport_px.x,
            CONFETTI_ORIGIN[1] * viewport_px.y,
        );
        let spread = CONFETTI_SPREAD_DEG.to_radians();
        let base_angle = -CONFETTI_ANGLE_DEG.to_radians();
        let colors = if celebration.colors.is_empty() {
            &CONFETTI_COLORS[..]
        } else {
            celebration.colors
        };
        self.particles.reserve(celebration.particle_count);
        for i in 0..celebration.particle_count {
            self.particles.push(Particle {
                position: origin,
                angle: base_angle + (0.5 * spread - rng.gen::<f32>() * spread),
                velocity: CONFETTI_START_VELOCITY * 0.5 + rng.gen::<f32>() * CONFETTI_START_VELOCITY,
                wobble: rng.gen::<f32>() * 10.0,
                wobble_speed: (rng.gen::<f32>() * 0.1 + 0.05).min(0.11),
                tilt: (rng.gen::<f32>() * 0.5 + 0.25) * std::f32::consts::PI,
                color: colors[i % colors.len()],
                age: 0,
            });
        }
        log::info!(
            "[confetti] fired {} pieces from ({:.0},{:.0})",
            celebration.particle_count,
            origin.x,
            origin.y
        );
    }

    /// Advance every piece one tick and drop the expired ones.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.position.x += p.angle.cos() * p.velocity;
            p.position.y += p.angle.sin() * p.velocity + CONFETTI_GRAVITY;
            p.velocity *= CONFETTI_DECAY;
            p.wobble += p.wobble_speed;
            p.tilt += 0.1;
            p.age += 1;
        }
        self.particles.retain(|p| p.age < CONFETTI_LIFETIME_TICKS);
    }

    pub fn pieces(&self) -> impl Iterator<Item = ConfettiPiece> + '_ {
        self.particles.iter().map(|p| ConfettiPiece {
            position_px: p.position,
            rotation: p.tilt,
            width_px: PIECE_SIZE_PX * p.wobble.cos().abs().max(0.2),
            height_px: PIECE_SIZE_PX,
            color: p.color,
            opacity: 1.0 - p.age as f32 / CONFETTI_LIFETIME_TICKS as f32,
        })
    }
}
