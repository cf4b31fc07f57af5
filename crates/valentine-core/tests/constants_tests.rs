// Sanity checks for tuning constants and their relationships.

use valentine_core::constants::*;
use valentine_core::content;

#[test]
#[allow(clippy::assertions_on_constants)]
fn bloom_constants_are_sensible() {
    assert!(BLOOM_RADIUS > 0.0);
    assert!(FLOWER_BLOOM_MULTIPLIER > 1.0);
    assert!(HEART_BLOOM_MULTIPLIER > 1.0);
    assert!(SCALE_EASE_PER_TICK > 0.0 && SCALE_EASE_PER_TICK <= 1.0);
    assert!(PETAL_SPIN_BLOOMING > PETAL_SPIN_IDLE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn narrow_envelopes_are_smaller() {
    assert!(REJECT_BOUNDS_NARROW_PX < REJECT_BOUNDS_WIDE_PX);
    assert!(YES_GROWTH_STEP_NARROW < YES_GROWTH_STEP_WIDE);
    assert!(CONFETTI_COUNT_NARROW < CONFETTI_COUNT_WIDE);
    assert!(YES_GROWTH_MAX >= 3.0 && YES_GROWTH_MAX <= 3.5);
    assert!(YES_GROWTH_BASE < YES_GROWTH_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_delay_in_expected_window() {
    assert!((0.8..=1.0).contains(&REVEAL_DELAY_SEC));
}

#[test]
fn palettes_are_populated() {
    assert_eq!(GARDEN_COLORS.len(), 13);
    assert_eq!(HEART_COLORS.len(), 5);
    assert_eq!(CONFETTI_COLORS, [0xff0000, 0xff69b4, 0xffffff, 0xffd700]);
    assert!(content::REJECTION_MESSAGES.len() > 1);
    assert_eq!(content::WHOLESOME_REASONS.len(), 5);
}

#[test]
fn butterfly_slots_are_distinct() {
    for (i, a) in BUTTERFLIES.iter().enumerate() {
        for b in &BUTTERFLIES[i + 1..] {
            assert_ne!(a.1, b.1, "butterflies share a base position");
        }
    }
}
