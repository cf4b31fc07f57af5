//! Scene configuration and viewport classification.

use crate::constants::*;
use crate::content::REJECTION_MESSAGES;

/// Coarse viewport class. Narrow viewports get a smaller reject envelope,
/// fewer confetti particles, slower "yes" growth and a camera further back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeviceClass {
    Narrow,
    #[default]
    Wide,
}

impl DeviceClass {
    pub fn from_viewport_width(width_px: f64) -> Self {
        if width_px < NARROW_VIEWPORT_MAX_WIDTH_PX {
            DeviceClass::Narrow
        } else {
            DeviceClass::Wide
        }
    }

    #[inline]
    pub fn is_narrow(self) -> bool {
        matches!(self, DeviceClass::Narrow)
    }

    /// Full width of the rectangle the negative control may jump within (px).
    #[inline]
    pub fn reject_bounds(self) -> f32 {
        match self {
            DeviceClass::Narrow => REJECT_BOUNDS_NARROW_PX,
            DeviceClass::Wide => REJECT_BOUNDS_WIDE_PX,
        }
    }

    #[inline]
    pub fn yes_growth_step(self) -> f32 {
        match self {
            DeviceClass::Narrow => YES_GROWTH_STEP_NARROW,
            DeviceClass::Wide => YES_GROWTH_STEP_WIDE,
        }
    }

    #[inline]
    pub fn confetti_count(self) -> usize {
        match self {
            DeviceClass::Narrow => CONFETTI_COUNT_NARROW,
            DeviceClass::Wide => CONFETTI_COUNT_WIDE,
        }
    }

    #[inline]
    pub fn camera_z(self) -> f32 {
        match self {
            DeviceClass::Narrow => CAMERA_Z_NARROW,
            DeviceClass::Wide => CAMERA_Z_WIDE,
        }
    }
}

/// How a decoration's displayed scale approaches its target.
///
/// `PerTick` closes a fixed fraction of the gap every tick, so the visual
/// speed follows the frame rate. `TimeNormalized` rescales the same factor by
/// the elapsed time so that it matches `PerTick` at `reference_hz`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleEasing {
    PerTick { factor: f32 },
    TimeNormalized { factor: f32, reference_hz: f32 },
}

impl Default for ScaleEasing {
    fn default() -> Self {
        ScaleEasing::PerTick {
            factor: SCALE_EASE_PER_TICK,
        }
    }
}

impl ScaleEasing {
    /// Interpolation weight for a tick that advanced the clock by `dt_sec`.
    pub fn alpha(self, dt_sec: f32) -> f32 {
        match self {
            ScaleEasing::PerTick { factor } => factor,
            ScaleEasing::TimeNormalized {
                factor,
                reference_hz,
            } => 1.0 - (1.0 - factor).powf(dt_sec.max(0.0) * reference_hz),
        }
    }

    fn factor(self) -> f32 {
        match self {
            ScaleEasing::PerTick { factor } | ScaleEasing::TimeNormalized { factor, .. } => factor,
        }
    }
}

/// Errors reported by [`SceneConfig::validate`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("rejection message list must contain at least one label")]
    NoRejectionMessages,

    #[error("bloom radius must be positive and finite, got {0}")]
    InvalidBloomRadius(f32),

    #[error("scale easing factor must be in (0, 1], got {0}")]
    InvalidEasingFactor(f32),

    #[error("reference rate for time-normalized easing must be positive, got {0}")]
    InvalidReferenceRate(f32),

    #[error("reveal delay must be non-negative and finite, got {0}")]
    InvalidRevealDelay(f64),
}

/// Tunables for a [`crate::Scene`].
///
/// - `seed` drives every random stream (garden layout, reject offsets, confetti, sparkles)
/// - `rejection_messages[0]` is the resting label of the negative control
/// - `reveal_delay_sec` is the gap between acceptance and the letter appearing
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub seed: u64,
    pub bloom_radius: f32,
    pub flower_bloom_multiplier: f32,
    pub heart_bloom_multiplier: f32,
    pub scale_easing: ScaleEasing,
    pub garden_size: usize,
    pub rejection_messages: Vec<String>,
    pub reveal_delay_sec: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bloom_radius: BLOOM_RADIUS,
            flower_bloom_multiplier: FLOWER_BLOOM_MULTIPLIER,
            heart_bloom_multiplier: HEART_BLOOM_MULTIPLIER,
            scale_easing: ScaleEasing::default(),
            garden_size: GARDEN_SIZE,
            rejection_messages: REJECTION_MESSAGES.iter().map(|m| m.to_string()).collect(),
            reveal_delay_sec: REVEAL_DELAY_SEC,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rejection_messages.is_empty() {
            return Err(ConfigError::NoRejectionMessages);
        }
        if !(self.bloom_radius.is_finite() && self.bloom_radius > 0.0) {
            return Err(ConfigError::InvalidBloomRadius(self.bloom_radius));
        }
        let factor = self.scale_easing.factor();
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ConfigError::InvalidEasingFactor(factor));
        }
        if let ScaleEasing::TimeNormalized { reference_hz, .. } = self.scale_easing {
            if !(reference_hz.is_finite() && reference_hz > 0.0) {
                return Err(ConfigError::InvalidReferenceRate(reference_hz));
            }
        }
        if !(self.reveal_delay_sec.is_finite() && self.reveal_delay_sec >= 0.0) {
            return Err(ConfigError::InvalidRevealDelay(self.reveal_delay_sec));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_width_threshold_is_exclusive() {
        assert_eq!(DeviceClass::from_viewport_width(767.0), DeviceClass::Narrow);
        assert_eq!(DeviceClass::from_viewport_width(768.0), DeviceClass::Wide);
        assert_eq!(DeviceClass::from_viewport_width(1920.0), DeviceClass::Wide);
    }

    #[test]
    fn narrow_devices_get_smaller_envelopes() {
        let n = DeviceClass::Narrow;
        let w = DeviceClass::Wide;
        assert!(n.reject_bounds() < w.reject_bounds());
        assert!(n.yes_growth_step() < w.yes_growth_step());
        assert!(n.confetti_count() < w.confetti_count());
        assert!(n.camera_z() > w.camera_z());
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn empty_messages_are_rejected() {
        let cfg = SceneConfig {
            rejection_messages: Vec::new(),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoRejectionMessages));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let cfg = SceneConfig {
            bloom_radius: 0.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidBloomRadius(0.0)));

        let cfg = SceneConfig {
            scale_easing: ScaleEasing::PerTick { factor: 1.5 },
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidEasingFactor(1.5)));

        let cfg = SceneConfig {
            scale_easing: ScaleEasing::TimeNormalized {
                factor: 0.1,
                reference_hz: 0.0,
            },
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidReferenceRate(0.0)));

        let cfg = SceneConfig {
            reveal_delay_sec: -1.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidRevealDelay(-1.0)));
    }

    #[test]
    fn time_normalized_easing_matches_per_tick_at_reference_rate() {
        let per_tick = ScaleEasing::PerTick { factor: 0.1 }.alpha(1.0 / 30.0);
        let normalized = ScaleEasing::TimeNormalized {
            factor: 0.1,
            reference_hz: EASE_REFERENCE_HZ,
        };
        assert!((normalized.alpha(1.0 / 60.0) - per_tick).abs() < 1e-5);
        // Half the frame rate closes more of the gap per tick
        assert!(normalized.alpha(1.0 / 30.0) > per_tick);
        assert_eq!(normalized.alpha(0.0), 0.0);
    }
}
