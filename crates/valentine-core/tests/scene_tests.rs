// End-to-end scenarios driven through the public Scene API.

use valentine_core::*;

fn config_with_messages(n: usize) -> SceneConfig {
    SceneConfig {
        rejection_messages: (0..n).map(|i| format!("msg {i}")).collect(),
        ..Default::default()
    }
}

#[test]
fn reject_confirm_reveal_dismiss_scenario() {
    let mut scene = Scene::new(config_with_messages(6), DeviceClass::Wide).unwrap();
    let mut out = Vec::new();
    scene.tick(0.0, &mut out);
    assert_eq!(scene.phase(), Phase::Asking);
    assert_eq!(scene.rejection_index(), 0);

    for _ in 0..3 {
        assert!(scene.reject(RejectTrigger::Click).is_some());
    }
    assert_eq!(scene.rejection_index(), 3);
    assert_eq!(scene.no_label(), "msg 3");

    scene.tick(1.0, &mut out);
    assert!(scene.confirm());
    assert_eq!(scene.phase(), Phase::Accepted);
    assert!(!scene.is_letter_visible());

    let before = scene.tick(1.5, &mut out);
    assert!(!before.letter_revealed);
    assert!(!scene.is_letter_visible());

    let at = scene.tick(1.0 + constants::REVEAL_DELAY_SEC, &mut out);
    assert!(at.letter_revealed);
    assert!(scene.is_letter_visible());

    scene.dismiss_letter();
    assert!(!scene.is_letter_visible());
    assert_eq!(scene.phase(), Phase::Accepted);

    // nothing brings it back
    let later = scene.tick(30.0, &mut out);
    assert!(!later.letter_revealed);
    assert!(!scene.is_letter_visible());
}

#[test]
fn second_confirm_changes_nothing() {
    let mut scene = Scene::new(SceneConfig::default(), DeviceClass::Narrow).unwrap();
    scene.reject(RejectTrigger::Click);
    scene.reject(RejectTrigger::Click);
    assert!(scene.confirm());
    let index = scene.rejection_index();
    let growth = scene.yes_growth();
    let pieces = scene.confetti().count();
    assert_eq!(pieces, constants::CONFETTI_COUNT_NARROW);

    assert!(!scene.confirm());
    assert_eq!(scene.reject(RejectTrigger::Click), None);
    assert_eq!(scene.rejection_index(), index);
    assert_eq!(scene.yes_growth(), growth);
    assert_eq!(scene.confetti().count(), pieces);
}

#[test]
fn dismiss_before_deadline_keeps_letter_hidden() {
    let mut scene = Scene::new(SceneConfig::default(), DeviceClass::Wide).unwrap();
    let mut out = Vec::new();
    scene.tick(0.0, &mut out);
    scene.confirm();
    scene.dismiss_letter();
    let report = scene.tick(5.0, &mut out);
    assert!(!report.letter_revealed);
    assert!(!scene.is_letter_visible());
}

#[test]
fn same_seed_same_garden() {
    let a = Scene::new(SceneConfig::default(), DeviceClass::Wide).unwrap();
    let b = Scene::new(SceneConfig::default(), DeviceClass::Wide).unwrap();
    let c = Scene::new(
        SceneConfig {
            seed: 7,
            ..Default::default()
        },
        DeviceClass::Wide,
    )
    .unwrap();
    let pos = |s: &Scene| -> Vec<glam::Vec3> {
        s.decorations().iter().map(|d| d.config.position).collect()
    };
    assert_eq!(pos(&a), pos(&b));
    assert_ne!(pos(&a), pos(&c));
}

#[test]
fn blooming_matches_proximity_every_tick() {
    let mut scene = Scene::new(SceneConfig::default(), DeviceClass::Wide).unwrap();
    let mut out = Vec::new();
    for i in 0..120 {
        let report = scene.tick(i as f64 * 0.25, &mut out);
        let mut blooming = 0;
        for d in scene.decorations() {
            let near = scene
                .proximity()
                .min_distance(d.config.position)
                .is_some_and(|m| m < constants::BLOOM_RADIUS);
            assert_eq!(d.is_blooming(), near, "decoration {}", d.config.id);
            blooming += near as usize;
        }
        assert_eq!(report.blooming, blooming);
    }
}

#[test]
fn empty_garden_is_allowed() {
    let mut scene = Scene::new(
        SceneConfig {
            garden_size: 0,
            ..Default::default()
        },
        DeviceClass::Wide,
    )
    .unwrap();
    let mut out = Vec::new();
    let report = scene.tick(1.0, &mut out);
    assert_eq!(report.blooming, 0);
    assert!(out
        .iter()
        .all(|e| !matches!(e.kind, EntityKind::Flower { .. } | EntityKind::GardenHeart)));
}

#[test]
fn music_toggle_round_trip() {
    let mut scene = Scene::new(SceneConfig::default(), DeviceClass::Wide).unwrap();
    assert_eq!(scene.toggle_music(), MusicCommand::Play);
    assert!(scene.is_music_playing());
    assert_eq!(scene.toggle_music(), MusicCommand::Pause);
}

#[test]
fn cursor_trail_follows_pointer() {
    let mut scene = Scene::new(SceneConfig::default(), DeviceClass::Wide).unwrap();
    scene.set_pointer(glam::Vec2::new(0.5, 0.5));
    let target = scene.pointer_world().truncate();
    let mut out = Vec::new();
    for i in 0..400 {
        scene.tick(i as f64 / 60.0, &mut out);
    }
    let lead = out
        .iter()
        .find(|e| e.kind == EntityKind::CursorHeart)
        .unwrap();
    assert!(lead.position.truncate().distance(target) < 1e-3);
    assert_eq!(lead.position.z, constants::CURSOR_HEART_Z);
}

#[test]
fn main_heart_swells_after_acceptance() {
    let mut scene = Scene::new(SceneConfig::default(), DeviceClass::Wide).unwrap();
    let mut out = Vec::new();
    scene.tick(0.0, &mut out);
    let asking = out[0].scale;
    scene.confirm();
    scene.tick(0.0, &mut out);
    assert!(out[0].scale > asking * 1.5);
}
