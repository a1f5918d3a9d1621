use std::time::Duration;

use asciiquarium::catalogue::{self, depth, UNDERWATER_ROW};
use asciiquarium::config::{Config, Style};
use asciiquarium::entities::*;
use asciiquarium::scene::Scene;
use asciiquarium::spawn;

use rand::rngs::StdRng;
use rand::SeedableRng;

const SPECIALS: [EntityKind; 5] = [
    EntityKind::Ship,
    EntityKind::Whale,
    EntityKind::Monster,
    EntityKind::BigFish,
    EntityKind::Shark,
];

fn seeded_scene(width: u16, height: u16) -> Scene {
    Scene::new(width, height, &Config::default().with_seed(42))
}

fn special_count(scene: &Scene) -> usize {
    SPECIALS.iter().map(|&k| scene.count_of(k)).sum()
}

// ── populate ──────────────────────────────────────────────────────────────────

#[test]
fn populate_standard_terminal() {
    let mut scene = seeded_scene(80, 24);
    spawn::populate(&mut scene);
    assert_eq!(scene.count_of(EntityKind::Waterline), 4);
    assert_eq!(scene.count_of(EntityKind::Castle), 1);
    assert_eq!(scene.count_of(EntityKind::Seaweed), 80 / 15);
    assert_eq!(scene.count_of(EntityKind::Fish), (24 - 9) * 80 / 350);
    assert_eq!(special_count(&scene), 1);
}

#[test]
fn populate_tiny_terminal_still_has_life() {
    let mut scene = seeded_scene(10, 5);
    spawn::populate(&mut scene);
    assert_eq!(scene.count_of(EntityKind::Seaweed), 1);
    assert_eq!(scene.count_of(EntityKind::Fish), 1);
    scene.tick_at(Duration::from_millis(50));
}

#[test]
fn populate_empty_viewport_does_not_panic() {
    let mut scene = seeded_scene(0, 0);
    spawn::populate(&mut scene);
    let frame = scene.tick_at(Duration::from_millis(50));
    assert!(frame.is_empty());
}

// ── Scenery ───────────────────────────────────────────────────────────────────

#[test]
fn waterline_spans_the_width() {
    let mut scene = seeded_scene(57, 24);
    spawn::waterline(&mut scene);
    for (i, seg) in scene.entities_of_type(EntityKind::Waterline).iter().enumerate() {
        assert_eq!(seg.width(), 57);
        assert_eq!(seg.cell(), (0, 5 + i as i32));
        assert!(seg.is_collidable());
    }
}

#[test]
fn waterline_rows_match_any_width() {
    for width in [1, 33, 34, 35, 200] {
        let mut scene = seeded_scene(width, 24);
        spawn::waterline(&mut scene);
        for seg in scene.entities_of_type(EntityKind::Waterline) {
            assert_eq!(seg.width(), width as usize);
        }
    }
}

#[test]
fn castle_sits_bottom_right() {
    let mut scene = seeded_scene(80, 24);
    let id = spawn::castle(&mut scene);
    let castle = scene.entity(id).unwrap();
    let (x, y) = castle.cell();
    assert_eq!(x + castle.width() as i32, 79);
    assert_eq!(y + castle.height() as i32, 23);
    assert_eq!(castle.z(), depth::CASTLE);
}

#[test]
fn seaweed_shape_and_depth() {
    let mut scene = seeded_scene(80, 24);
    for _ in 0..20 {
        let id = spawn::seaweed(&mut scene);
        let weed = scene.entity(id).unwrap();
        assert!((3..=6).contains(&weed.height()));
        assert_eq!(weed.frame_count(), 2);
        assert_eq!(weed.z(), depth::SEAWEED);
        assert_eq!(weed.cell().1 + weed.height() as i32, 23);
    }
}

// ── Fish ──────────────────────────────────────────────────────────────────────

#[test]
fn fish_spawn_within_ranges() {
    let mut scene = seeded_scene(80, 24);
    for _ in 0..50 {
        let id = spawn::fish(&mut scene);
        let fish = scene.entity(id).unwrap();
        assert!(fish.y >= UNDERWATER_ROW as f64);
        assert!((depth::FISH_START..=depth::FISH_END).contains(&fish.z()));
        assert!((0.25..=1.25).contains(&fish.vx.abs()));
        assert_eq!(fish.vy, 0.0);
        assert!(fish.is_collidable());
        // Enters from the edge it is swimming away from.
        if fish.vx > 0.0 {
            assert_eq!(fish.x, -(fish.width() as f64));
        } else {
            assert_eq!(fish.x, 79.0);
        }
    }
}

#[test]
fn bubble_starts_at_the_mouth() {
    let mut scene = seeded_scene(80, 24);
    let id = spawn::fish(&mut scene);
    let (x, y, z, vx, w, h) = {
        let f = scene.entity(id).unwrap();
        (f.x, f.y, f.z(), f.vx, f.width(), f.height())
    };
    let bubble = spawn::bubble(&mut scene, id).unwrap();
    let bubble = scene.entity(bubble).unwrap();
    let expected_x = if vx > 0.0 { x + w as f64 } else { x - 1.0 };
    assert_eq!(bubble.x, expected_x);
    assert_eq!(bubble.y, y + (h / 2) as f64);
    assert_eq!(bubble.z(), z - 1);
    assert!(bubble.vy < 0.0);
}

#[test]
fn bubble_for_missing_fish_is_skipped() {
    let mut scene = seeded_scene(80, 24);
    assert!(spawn::bubble(&mut scene, EntityId(404)).is_none());
    assert!(scene.is_empty());
}

#[test]
fn splat_plays_once_then_vanishes() {
    let mut scene = seeded_scene(80, 24);
    let splat = spawn::splat(&mut scene, 20.0, 12.0, 10);
    let mut t = 0;
    while scene.entity(splat).is_some() {
        t += 50;
        assert!(t <= 2000, "splat outlived its animation");
        scene.tick_at(Duration::from_millis(t));
    }
}

#[test]
fn color_mask_keeps_eye_white_and_digits_consistent() {
    let mut rng = StdRng::seed_from_u64(7);
    let mask = spawn::rand_color_mask(" 1 4\n11 0", &mut rng);
    let chars: Vec<char> = mask.chars().collect();
    assert_eq!(chars[3], 'W');
    assert_eq!(chars[1], chars[5]);
    assert_eq!(chars[6], chars[5]);
    assert_eq!(chars[8], '0');
    assert!(catalogue::RANDOM_COLORS.contains(&chars[1]));
    assert_eq!(chars[0], ' ');
    assert_eq!(chars[4], '\n');
}

// ── Specials ──────────────────────────────────────────────────────────────────

#[test]
fn teeth_move_with_the_shark() {
    let mut scene = seeded_scene(80, 24);
    let shark = spawn::shark(&mut scene);
    let teeth = scene.entities_of_type(EntityKind::Teeth)[0].id();
    let offset = |scene: &Scene| {
        let s = scene.entity(shark).unwrap();
        let t = scene.entity(teeth).unwrap();
        (t.x - s.x, t.y - s.y)
    };
    let start = offset(&scene);
    for i in 1..5 {
        scene.tick_at(Duration::from_millis(i * 50));
        assert_eq!(offset(&scene), start);
    }
}

#[test]
fn whale_has_spout_animation() {
    let mut scene = seeded_scene(80, 24);
    let id = spawn::whale(&mut scene);
    let whale = scene.entity(id).unwrap();
    assert_eq!(whale.frame_count(), catalogue::WHALE_SPOUT.len());
    assert_eq!(whale.height(), catalogue::SPOUT_ROWS + 4);
    assert_eq!(whale.y, 0.0);
}

#[test]
fn specials_enter_from_off_screen() {
    let mut scene = seeded_scene(80, 24);
    for spawn_fn in [spawn::ship, spawn::whale, spawn::monster, spawn::big_fish] {
        let id = spawn_fn(&mut scene);
        let e = scene.entity(id).unwrap();
        assert!(e.is_offscreen(80, 24) || e.x == 80.0);
        assert!(e.vx != 0.0);
    }
}

#[test]
fn classic_style_uses_original_monster() {
    let config = Config::default().with_style(Style::Classic).with_seed(3);
    let mut scene = Scene::new(80, 24, &config);
    let id = spawn::monster(&mut scene);
    let frames = scene.entity(id).unwrap().frame_count();
    assert_eq!(frames, catalogue::CLASSIC_MONSTER.right.len());
}

#[test]
fn random_special_spawns_exactly_one_special() {
    let mut scene = seeded_scene(80, 24);
    for _ in 0..10 {
        spawn::random_special(&mut scene);
    }
    assert_eq!(special_count(&scene), 10);
}
