//! Butterflies: agents whose position is a pure function of elapsed time.

use crate::color::rgb_from_hex;
use crate::constants::{BUTTERFLIES, WING_FLAP_AMPLITUDE, WING_FLAP_FREQUENCY};
use glam::Vec3;

/// Static configuration for one butterfly, fixed at start-up.
///
/// Fields:
/// - `id`: slot index in the proximity store this agent writes to
/// - `base_position`: centre of the looping flight path
/// - `speed`: multiplier applied to elapsed time
/// - `range`: horizontal amplitude (vertical uses half of it)
/// - `phase_delay`: offset added to the scaled time so agents fly out of step
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub id: usize,
    pub base_position: Vec3,
    pub color_rgb: Vec3,
    pub speed: f32,
    pub range: f32,
    pub phase_delay: f32,
}

/// Derived pose for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentPose {
    pub position: Vec3,
    /// Rotation about Y so the body faces the direction of travel.
    pub heading: f32,
    /// Left wing angle about Z; the right wing is always the negation.
    pub wing_flap: f32,
}

impl AgentPose {
    #[inline]
    pub fn right_wing(&self) -> f32 {
        -self.wing_flap
    }
}

impl AgentConfig {
    #[inline]
    pub fn phase(&self, elapsed_sec: f32) -> f32 {
        elapsed_sec * self.speed + self.phase_delay
    }

    /// Compute where this agent is at `elapsed_sec`.
    pub fn pose_at(&self, elapsed_sec: f32) -> AgentPose {
        let t = self.phase(elapsed_sec);
        let p = self.base_position;
        let position = Vec3::new(
            p.x + (t * 0.5).sin() * self.range,
            p.y + (t * 0.8).cos() * (self.range * 0.5),
            p.z + (t * 0.3).sin() * self.range,
        );
        AgentPose {
            position,
            heading: (t * 0.5).cos().atan2((t * 0.3).sin()),
            wing_flap: (t * WING_FLAP_FREQUENCY).sin() * WING_FLAP_AMPLITUDE,
        }
    }
}

/// The fixed flock of four butterflies circling the garden.
pub fn default_butterflies() -> Vec<AgentConfig> {
    BUTTERFLIES
        .iter()
        .enumerate()
        .map(|(id, &(color, base, speed, range, delay))| AgentConfig {
            id,
            base_position: Vec3::from_array(base),
            color_rgb: rgb_from_hex(color),
            speed,
            range,
            phase_delay: delay,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> AgentConfig {
        AgentConfig {
            id: 0,
            base_position: Vec3::new(1.0, 2.0, 3.0),
            color_rgb: Vec3::ONE,
            speed: 1.0,
            range: 2.0,
            phase_delay: 0.0,
        }
    }

    #[test]
    fn at_phase_zero_only_y_is_displaced() {
        let pose = agent().pose_at(0.0);
        assert_eq!(pose.position, Vec3::new(1.0, 3.0, 3.0));
        assert_eq!(pose.wing_flap, 0.0);
    }

    #[test]
    fn pose_is_pure_in_time() {
        let a = agent();
        assert_eq!(a.pose_at(12.5), a.pose_at(12.5));
    }

    #[test]
    fn speed_and_delay_shift_the_phase() {
        let mut a = agent();
        a.speed = 2.0;
        a.phase_delay = 1.0;
        let mut b = agent();
        b.phase_delay = 0.0;
        // 2*t + 1 at t=1 is phase 3, same as speed 1 at t=3
        assert_eq!(a.pose_at(1.0).position, b.pose_at(3.0).position);
    }

    #[test]
    fn motion_stays_within_range_envelope() {
        let a = agent();
        for i in 0..500 {
            let p = a.pose_at(i as f32 * 0.37).position - a.base_position;
            assert!(p.x.abs() <= a.range + 1e-4);
            assert!(p.y.abs() <= a.range * 0.5 + 1e-4);
            assert!(p.z.abs() <= a.range + 1e-4);
        }
    }

    #[test]
    fn wings_flap_in_antiphase() {
        let a = agent();
        for i in 0..50 {
            let pose = a.pose_at(i as f32 * 0.05);
            assert_eq!(pose.wing_flap + pose.right_wing(), 0.0);
            assert!(pose.wing_flap.abs() <= WING_FLAP_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn default_flock_has_distinct_slots() {
        let flock = default_butterflies();
        assert_eq!(flock.len(), 4);
        for (i, a) in flock.iter().enumerate() {
            assert_eq!(a.id, i);
        }
    }
}
