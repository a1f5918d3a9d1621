use std::time::Duration;

use asciiquarium::behavior::Behavior;
use asciiquarium::collision::{detect, CollisionRule};
use asciiquarium::config::Config;
use asciiquarium::entities::*;
use asciiquarium::scene::Scene;
use asciiquarium::spawn;

fn seeded_scene() -> Scene {
    Scene::new(80, 24, &Config::default().with_seed(42))
}

fn teeth_at(x: f64, y: f64) -> Entity {
    Entity::builder()
        .kind(EntityKind::Teeth)
        .shape("*")
        .position(x, y, 3)
        .collidable(true)
        .behavior(Behavior::Teeth)
        .build()
}

/// A 4×`rows` fish with its top-left corner at (8, 4).
fn fish_box(rows: usize) -> Entity {
    let block = vec!["####"; rows].join("\n");
    Entity::builder()
        .kind(EntityKind::Fish)
        .shape(&block)
        .position(8.0, 4.0, 10)
        .collidable(true)
        .behavior(Behavior::Fish)
        .build()
}

// ── Detection ─────────────────────────────────────────────────────────────────

#[test]
fn probe_inside_box_records_both_sides_once() {
    let mut scene = seeded_scene();
    let teeth = scene.add(teeth_at(10.0, 5.0));
    let fish = scene.add(fish_box(3));

    assert_eq!(scene.resolve_collisions(), 1);
    assert_eq!(scene.entity(fish).unwrap().collisions(), &[teeth]);
    assert_eq!(scene.entity(teeth).unwrap().collisions(), &[fish]);
}

#[test]
fn probe_on_far_edge_misses() {
    let mut scene = seeded_scene();
    scene.add(teeth_at(12.0, 5.0));
    scene.add(fish_box(3));
    assert_eq!(scene.resolve_collisions(), 0);
}

#[test]
fn fractional_probe_truncates_into_box() {
    let mut scene = seeded_scene();
    scene.add(teeth_at(11.9, 6.9));
    scene.add(fish_box(3));
    assert_eq!(scene.resolve_collisions(), 1);
}

#[test]
fn non_collidable_and_dead_entities_are_ignored() {
    let fish = Entity::builder()
        .kind(EntityKind::Fish)
        .shape("####\n####\n####")
        .position(8.0, 4.0, 10)
        .build();
    let rules = [CollisionRule::new(EntityKind::Teeth, EntityKind::Fish)];
    assert!(detect(&[teeth_at(10.0, 5.0), fish], &rules).is_empty());

    let mut dead = fish_box(3);
    dead.kill();
    assert!(detect(&[teeth_at(10.0, 5.0), dead], &rules).is_empty());
}

#[test]
fn kinds_without_a_rule_never_collide() {
    let rules = [CollisionRule::new(EntityKind::Bubble, EntityKind::Waterline)];
    assert!(detect(&[teeth_at(10.0, 5.0), fish_box(3)], &rules).is_empty());
}

#[test]
fn scene_uses_configured_rules() {
    let config = Config::default()
        .with_seed(42)
        .with_collision_rules(vec![CollisionRule::new(EntityKind::Bubble, EntityKind::Fish)]);
    let mut scene = Scene::new(80, 24, &config);
    let bubble = Entity::builder()
        .kind(EntityKind::Bubble)
        .shape("o")
        .position(9.0, 5.0, 4)
        .collidable(true)
        .behavior(Behavior::Bubble)
        .build();
    let bubble = scene.add(bubble);
    let fish = scene.add(fish_box(3));
    // Not in this rule set, so teeth pass through.
    scene.add(teeth_at(10.0, 5.0));

    assert_eq!(scene.resolve_collisions(), 1);
    assert_eq!(scene.entity(fish).unwrap().collisions(), &[bubble]);
    assert_eq!(scene.entity(bubble).unwrap().collisions(), &[fish]);
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[test]
fn dispatch_leaves_every_list_empty() {
    let mut scene = seeded_scene();
    scene.add(teeth_at(10.0, 5.0));
    // Too tall to be eaten, so it survives dispatch.
    let fish = scene.add(fish_box(6));

    scene.resolve_collisions();
    scene.dispatch_collisions();
    assert!(scene.entities().iter().all(|e| e.collisions().is_empty()));
    assert!(scene.entity(fish).unwrap().is_alive());
}

#[test]
fn small_fish_struck_by_teeth_is_eaten() {
    let mut scene = seeded_scene();
    scene.add(teeth_at(10.0, 5.0));
    let fish = scene.add(fish_box(3));
    let before = scene.len();

    scene.resolve_collisions();
    scene.dispatch_collisions();
    assert!(!scene.entity(fish).unwrap().is_alive());
    // A splat was left behind.
    assert_eq!(scene.len(), before + 1);
}

#[test]
fn bubble_pops_at_the_waterline() {
    let mut scene = seeded_scene();
    spawn::waterline(&mut scene);
    let bubble = Entity::builder()
        .kind(EntityKind::Bubble)
        .shape("o")
        .position(5.0, 9.0, 4)
        .velocity(0.0, -0.5)
        .collidable(true)
        .behavior(Behavior::Bubble)
        .build();
    let bubble = scene.add(bubble);

    scene.tick_at(Duration::from_millis(50));
    assert!(scene.entity(bubble).is_none());
}

#[test]
fn bubble_below_the_surface_keeps_rising() {
    let mut scene = seeded_scene();
    spawn::waterline(&mut scene);
    let bubble = Entity::builder()
        .kind(EntityKind::Bubble)
        .shape("o")
        .position(5.0, 15.0, 4)
        .velocity(0.0, -0.5)
        .collidable(true)
        .behavior(Behavior::Bubble)
        .build();
    let bubble = scene.add(bubble);

    scene.tick_at(Duration::from_millis(50));
    let bubble = scene.entity(bubble).unwrap();
    assert!(bubble.is_alive());
    assert_eq!(bubble.y, 14.5);
}
