// Properties of the ask / reject / accept flow.

use rand::prelude::*;
use valentine_core::constants::*;
use valentine_core::*;

fn state(n: usize, seed: u64) -> InteractionState {
    let messages = (0..n).map(|i| i.to_string()).collect();
    InteractionState::new(messages, StdRng::seed_from_u64(seed))
}

#[test]
fn rejection_index_is_count_mod_len() {
    for len in 1..=8 {
        let mut s = state(len, 1);
        for k in 1..=25 {
            s.reject(RejectTrigger::Click, DeviceClass::Wide);
            assert_eq!(s.rejection_index(), k % len);
            assert_eq!(s.label(), (k % len).to_string());
        }
    }
}

#[test]
fn growth_follows_clamped_linear_formula() {
    for device in [DeviceClass::Narrow, DeviceClass::Wide] {
        let mut s = state(8, 2);
        let mut previous = s.yes_growth();
        for k in 1..=40 {
            let out = s.reject(RejectTrigger::Click, device).unwrap();
            let expected = (YES_GROWTH_BASE + k as f32 * device.yes_growth_step()).min(YES_GROWTH_MAX);
            assert!((out.yes_growth - expected).abs() < 1e-4, "k={k}");
            assert!(out.yes_growth >= previous);
            previous = out.yes_growth;
        }
    }
}

#[test]
fn every_reject_moves_the_control() {
    let mut s = state(8, 3);
    let mut seen = Vec::new();
    for _ in 0..10 {
        seen.push(s.reject(RejectTrigger::Hover, DeviceClass::Wide).unwrap().no_offset);
    }
    seen.dedup();
    assert_eq!(seen.len(), 10);
}

#[test]
fn confirm_is_reachable_once_and_idempotent() {
    let mut s = state(6, 4);
    s.reject(RejectTrigger::Click, DeviceClass::Wide);
    let burst = s.confirm(DeviceClass::Wide);
    assert_eq!(
        burst,
        Some(Celebration {
            particle_count: CONFETTI_COUNT_WIDE,
            colors: &CONFETTI_COLORS,
        })
    );
    let snapshot = (s.rejection_index(), s.yes_growth(), s.no_offset());
    for _ in 0..3 {
        assert_eq!(s.confirm(DeviceClass::Wide), None);
        assert_eq!(s.reject(RejectTrigger::Click, DeviceClass::Wide), None);
    }
    assert_eq!((s.rejection_index(), s.yes_growth(), s.no_offset()), snapshot);
    assert_eq!(s.phase(), Phase::Accepted);
}

#[test]
fn confirm_without_rejects_still_accepts() {
    let mut s = state(3, 5);
    assert!(s.confirm(DeviceClass::Narrow).is_some());
    assert_eq!(s.rejection_index(), 0);
    assert_eq!(s.phase(), Phase::Accepted);
}

#[test]
fn page_text_follows_phase() {
    assert_ne!(content::title(Phase::Asking), content::title(Phase::Accepted));
    assert_ne!(content::subtitle(Phase::Asking), content::subtitle(Phase::Accepted));
    assert!(content::REJECTION_MESSAGES[0].starts_with("No"));
}
