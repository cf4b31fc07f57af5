//! Latest known butterfly positions, written by agents and read by decorations.

use glam::Vec3;
use smallvec::SmallVec;

/// Fixed-size slot buffer, one slot per agent.
///
/// The slot count is set at construction and never changes; writes only
/// overwrite. Slots start at the origin until their agent first reports.
#[derive(Clone, Debug)]
pub struct ProximityStore {
    slots: SmallVec<[Vec3; 4]>,
}

impl ProximityStore {
    pub fn new(agent_count: usize) -> Self {
        Self {
            slots: SmallVec::from_elem(Vec3::ZERO, agent_count),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Overwrite the slot for `agent_id`. Ids outside the store are ignored.
    #[inline]
    pub fn write(&mut self, agent_id: usize, position: Vec3) {
        if let Some(slot) = self.slots.get_mut(agent_id) {
            *slot = position;
        }
    }

    #[inline]
    pub fn get(&self, agent_id: usize) -> Option<Vec3> {
        self.slots.get(agent_id).copied()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.slots
    }

    /// Distance from `point` to the closest tracked agent, `None` when empty.
    pub fn min_distance(&self, point: Vec3) -> Option<f32> {
        self.slots
            .iter()
            .map(|p| p.distance(point))
            .min_by(|a, b| a.total_cmp(b))
    }

    /// True when some agent is strictly closer than `radius`.
    #[inline]
    pub fn any_within(&self, point: Vec3, radius: f32) -> bool {
        self.min_distance(point).is_some_and(|d| d < radius)
    }
}
