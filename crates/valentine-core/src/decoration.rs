//! Stationary garden decorations that bloom when a butterfly comes close.
//!
//! Each tick a decoration scans the proximity store, flips `is_blooming` on a
//! plain `< radius` threshold, and eases its displayed scale toward
//! `base_scale * multiplier`. There is no hysteresis band: an agent sitting on
//! the boundary can toggle the flag every tick.

use crate::config::ScaleEasing;
use crate::constants::*;
use crate::proximity::ProximityStore;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationKind {
    Flower { petal_count: u8 },
    Heart,
}

/// Immutable layout of one decoration, produced once by the garden generator.
#[derive(Clone, Debug)]
pub struct DecorationConfig {
    pub id: usize,
    pub position: Vec3,
    pub color_rgb: Vec3,
    pub base_scale: f32,
    pub kind: DecorationKind,
    pub phase_delay: f32,
}

/// Per-tick bloom tuning shared by every decoration.
#[derive(Clone, Copy, Debug)]
pub struct BloomParams {
    pub radius: f32,
    pub flower_multiplier: f32,
    pub heart_multiplier: f32,
    pub easing: ScaleEasing,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            radius: BLOOM_RADIUS,
            flower_multiplier: FLOWER_BLOOM_MULTIPLIER,
            heart_multiplier: HEART_BLOOM_MULTIPLIER,
            easing: ScaleEasing::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BloomChange {
    Started,
    Ended,
}

/// Displayed transform for the current tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorationPose {
    pub position: Vec3,
    /// Euler angles (x, y, z) in radians.
    pub rotation: Vec3,
    pub scale: f32,
    /// Accumulated rotation of the petal ring (flowers only).
    pub petal_spin: f32,
}

#[derive(Clone, Debug)]
pub struct Decoration {
    pub config: DecorationConfig,
    is_blooming: bool,
    current_scale: f32,
    petal_spin: f32,
    pose: DecorationPose,
}

impl Decoration {
    pub fn new(config: DecorationConfig) -> Self {
        let pose = DecorationPose {
            position: config.position,
            rotation: Vec3::ZERO,
            scale: config.base_scale,
            petal_spin: 0.0,
        };
        Self {
            current_scale: config.base_scale,
            config,
            is_blooming: false,
            petal_spin: 0.0,
            pose,
        }
    }

    #[inline]
    pub fn is_blooming(&self) -> bool {
        self.is_blooming
    }

    #[inline]
    pub fn current_scale(&self) -> f32 {
        self.current_scale
    }

    #[inline]
    pub fn pose(&self) -> &DecorationPose {
        &self.pose
    }

    pub fn target_scale(&self, params: &BloomParams) -> f32 {
        if !self.is_blooming {
            return self.config.base_scale;
        }
        let multiplier = match self.config.kind {
            DecorationKind::Flower { .. } => params.flower_multiplier,
            DecorationKind::Heart => params.heart_multiplier,
        };
        self.config.base_scale * multiplier
    }

    /// Advance one tick.
    ///
    /// `dt_sec` only matters for time-normalized easing. Returns the bloom
    /// transition that happened this tick, if any.
    pub fn update(
        &mut self,
        elapsed_sec: f32,
        dt_sec: f32,
        store: &ProximityStore,
        params: &BloomParams,
    ) -> Option<BloomChange> {
        let near = store.any_within(self.config.position, params.radius);
        let change = match (near, self.is_blooming) {
            (true, false) => Some(BloomChange::Started),
            (false, true) => Some(BloomChange::Ended),
            _ => None,
        };
        self.is_blooming = near;

        let target = self.target_scale(params);
        self.current_scale += (target - self.current_scale) * params.easing.alpha(dt_sec);

        let t = elapsed_sec + self.config.phase_delay;
        let base = self.config.position;
        let (position, rotation) = match self.config.kind {
            DecorationKind::Flower { .. } => {
                self.petal_spin += if self.is_blooming {
                    PETAL_SPIN_BLOOMING
                } else {
                    PETAL_SPIN_IDLE
                };
                let rot = Vec3::new(
                    (t * 0.3).cos() * FLOWER_SWAY_X,
                    0.0,
                    (t * 0.5).sin() * FLOWER_SWAY_Z,
                );
                (base, rot)
            }
            DecorationKind::Heart => {
                let bob = Vec3::new(base.x, base.y + (t * 0.8).sin() * HEART_BOB_HEIGHT, base.z);
                (bob, Vec3::new(0.0, (t * 0.5).sin() * HEART_SWAY_Y, 0.0))
            }
        };
        self.pose = DecorationPose {
            position,
            rotation,
            scale: self.current_scale,
            petal_spin: self.petal_spin,
        };
        change
    }

    /// Where the bloom sparkle sits, in world space.
    pub fn sparkle_position(&self) -> Vec3 {
        let offset = match self.config.kind {
            DecorationKind::Flower { .. } => FLOWER_SPARKLE_OFFSET,
            DecorationKind::Heart => HEART_SPARKLE_OFFSET,
        };
        self.pose.position + Vec3::Y * offset * self.pose.scale
    }
}
