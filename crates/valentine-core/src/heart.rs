//! The big central heart and the small hearts trailing the pointer.

use crate::color::rgb_from_hex;
use crate::config::DeviceClass;
use crate::constants::*;
use crate::interaction::Phase;
use glam::{Vec2, Vec3};

const FLOAT_SPEED: f32 = 1.5;
const FLOAT_INTENSITY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartPose {
    pub position: Vec3,
    /// Euler angles (x, y, z) in radians.
    pub rotation: Vec3,
    pub scale: f32,
    pub color_rgb: Vec3,
}

/// Closeness of the pointer to the heart in [0, 1]; 1 means on top of it.
#[inline]
pub fn pointer_proximity(pointer_world: Vec2, heart: Vec2) -> f32 {
    (1.0 - pointer_world.distance(heart) / MAIN_HEART_PROXIMITY_RANGE).max(0.0)
}

/// Heartbeat factor; beats faster and deeper as the pointer approaches.
#[inline]
pub fn pulse(elapsed_sec: f32, proximity: f32) -> f32 {
    let speed = 1.0 + proximity * 1.5;
    1.0 + (elapsed_sec * speed).sin() * (0.04 + proximity * 0.06)
}

pub fn base_scale(phase: Phase, device: DeviceClass) -> f32 {
    match (phase, device) {
        (Phase::Asking, DeviceClass::Narrow) => MAIN_HEART_SCALE_ASKING_NARROW,
        (Phase::Asking, DeviceClass::Wide) => MAIN_HEART_SCALE_ASKING_WIDE,
        (Phase::Accepted, DeviceClass::Narrow) => MAIN_HEART_SCALE_ACCEPTED_NARROW,
        (Phase::Accepted, DeviceClass::Wide) => MAIN_HEART_SCALE_ACCEPTED_WIDE,
    }
}

#[derive(Clone, Debug, Default)]
pub struct MainHeart {
    spin: f32,
}

impl MainHeart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick and return the displayed pose.
    pub fn update(
        &mut self,
        elapsed_sec: f32,
        pointer_world: Vec2,
        phase: Phase,
        device: DeviceClass,
    ) -> HeartPose {
        self.spin += MAIN_HEART_SPIN_PER_TICK;
        // gentle hover around the origin
        let ft = elapsed_sec * FLOAT_SPEED / 4.0;
        let position = Vec3::new(0.0, ft.sin() / 10.0 * FLOAT_INTENSITY, 0.0);
        let proximity = pointer_proximity(pointer_world, position.truncate());
        let color = match phase {
            Phase::Asking => MAIN_HEART_COLOR_ASKING,
            Phase::Accepted => MAIN_HEART_COLOR_ACCEPTED,
        };
        HeartPose {
            position,
            rotation: Vec3::new(
                ft.cos() / 8.0 * FLOAT_INTENSITY,
                self.spin + ft.sin() / 8.0 * FLOAT_INTENSITY,
                ft.sin() / 20.0 * FLOAT_INTENSITY,
            ),
            scale: base_scale(phase, device) * pulse(elapsed_sec, proximity),
            color_rgb: rgb_from_hex(color),
        }
    }
}

/// Small hearts easing toward the pointer, each a little lazier than the one before.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    positions: [Vec2; CURSOR_HEART_COUNT],
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self {
            positions: [Vec2::ZERO; CURSOR_HEART_COUNT],
        }
    }
}

impl CursorTrail {
    #[inline]
    pub fn follow_factor(index: usize) -> f32 {
        0.1 - index as f32 * 0.005
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn step(&mut self, pointer_world: Vec2) {
        for (i, p) in self.positions.iter_mut().enumerate() {
            *p = p.lerp(pointer_world, Self::follow_factor(i));
        }
    }

    pub fn poses(&self, elapsed_sec: f32) -> impl Iterator<Item = HeartPose> + '_ {
        self.positions.iter().enumerate().map(move |(i, p)| {
            let fi = i as f32;
            HeartPose {
                position: p.extend(CURSOR_HEART_Z),
                rotation: Vec3::new(0.0, 0.0, ((elapsed_sec + fi) * 3.0).sin() * 0.5),
                scale: CURSOR_HEART_SCALE * (1.0 - fi / CURSOR_HEART_COUNT as f32),
                color_rgb: rgb_from_hex(CURSOR_HEART_COLORS[i % CURSOR_HEART_COLORS.len()]),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proximity_falls_off_linearly_and_clamps() {
        assert_eq!(pointer_proximity(Vec2::ZERO, Vec2::ZERO), 1.0);
        assert!((pointer_proximity(Vec2::new(2.5, 0.0), Vec2::ZERO) - 0.5).abs() < 1e-6);
        assert_eq!(pointer_proximity(Vec2::new(9.0, 0.0), Vec2::ZERO), 0.0);
    }

    #[test]
    fn pulse_deepens_near_the_pointer() {
        let far = (0..200)
            .map(|i| (pulse(i as f32 * 0.05, 0.0) - 1.0).abs())
            .fold(0.0f32, f32::max);
        let near = (0..200)
            .map(|i| (pulse(i as f32 * 0.05, 1.0) - 1.0).abs())
            .fold(0.0f32, f32::max);
        assert!(far <= 0.04 + 1e-6);
        assert!(near > 0.09 && near <= 0.1 + 1e-6);
    }

    #[test]
    fn heart_grows_and_darkens_on_acceptance() {
        let mut heart = MainHeart::new();
        let far = Vec2::splat(100.0);
        let asking = heart.update(0.0, far, Phase::Asking, DeviceClass::Wide);
        let accepted = heart.update(0.0, far, Phase::Accepted, DeviceClass::Wide);
        assert!((asking.scale - MAIN_HEART_SCALE_ASKING_WIDE).abs() < 1e-6);
        assert!((accepted.scale - MAIN_HEART_SCALE_ACCEPTED_WIDE).abs() < 1e-6);
        assert_eq!(accepted.color_rgb, rgb_from_hex(MAIN_HEART_COLOR_ACCEPTED));
        assert!(accepted.rotation.y > asking.rotation.y, "spin accumulates");
    }

    #[test]
    fn trail_leader_is_fastest() {
        let mut trail = CursorTrail::default();
        let target = Vec2::new(1.0, 1.0);
        for _ in 0..5 {
            trail.step(target);
        }
        let poses: Vec<_> = trail.poses(0.0).collect();
        assert_eq!(poses.len(), CURSOR_HEART_COUNT);
        let lead = poses[0].position.truncate();
        let tail = poses[CURSOR_HEART_COUNT - 1].position.truncate();
        assert!(lead.distance(target) < tail.distance(target));
        assert!(poses.iter().all(|p| p.position.z == CURSOR_HEART_Z));
        assert!(poses[0].scale > poses[9].scale);
    }
}
