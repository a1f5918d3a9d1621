//! Spawn functions for every creature and scenery piece.
//!
//! Each one reads the scene's style, size and RNG, builds an entity from
//! the catalogue, adds it, and returns its id. Death hooks call back into
//! these to keep populations steady.

use std::time::Duration;

use rand::Rng;

use crate::behavior::Behavior;
use crate::catalogue::{
    self, depth, Art, Direction, Sprite, RANDOM_COLORS, UNDERWATER_ROW, WATERLINE_ROW,
};
use crate::config::Style;
use crate::entities::{Entity, EntityId, EntityKind, Frame};
use crate::scene::Scene;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn random_direction(rng: &mut impl Rng) -> Direction {
    if rng.gen_bool(0.5) {
        Direction::Right
    } else {
        Direction::Left
    }
}

fn random_color(rng: &mut impl Rng) -> char {
    RANDOM_COLORS[rng.gen_range(0..RANDOM_COLORS.len())]
}

/// Replace mask placeholder digits with colours: every occurrence of the
/// same digit gets the same random colour, and `4` (the eye) is always
/// bright white.
pub fn rand_color_mask(template: &str, rng: &mut impl Rng) -> String {
    let mut palette = ['W'; 10];
    for (digit, slot) in palette.iter_mut().enumerate().skip(1) {
        if digit != 4 {
            *slot = random_color(rng);
        }
    }
    template
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if d > 0 => palette[d as usize],
            _ => c,
        })
        .collect()
}

/// Starting column for something entering from the edge it faces away from.
fn entry_x(dir: Direction, width: usize, screen_width: u16) -> f64 {
    match dir {
        Direction::Right => -(width as f64),
        Direction::Left => screen_width as f64,
    }
}

/// Random row below the surface that keeps `height` rows on screen.
fn underwater_y(scene: &mut Scene, height: usize) -> f64 {
    let max_y = (scene.height() as i32 - height as i32 - 1).max(UNDERWATER_ROW);
    scene.rng().gen_range(UNDERWATER_ROW..=max_y) as f64
}

fn art_lines(glyphs: &str) -> Vec<&str> {
    let glyphs = glyphs.strip_prefix('\n').unwrap_or(glyphs);
    glyphs.trim_end_matches('\n').split('\n').collect()
}

// ── Initial population ────────────────────────────────────────────────────────

/// Fill an empty scene: waterline, castle, seaweed, fish and one special.
pub fn populate(scene: &mut Scene) {
    waterline(scene);
    castle(scene);
    all_seaweed(scene);
    all_fish(scene);
    random_special(scene);
    log::info!(
        "populated {}x{} scene with {} entities",
        scene.width(),
        scene.height(),
        scene.len()
    );
}

pub fn waterline(scene: &mut Scene) {
    let width = scene.width() as usize;
    for (i, segment) in catalogue::WATERLINE.iter().enumerate() {
        let repeat = width / segment.len() + 2;
        let tiled: String = segment.repeat(repeat).chars().take(width).collect();
        let entity = Entity::builder()
            .name(format!("water_seg_{}", i))
            .kind(EntityKind::Waterline)
            .shape(&tiled)
            .position(0.0, (WATERLINE_ROW + i as i32) as f64, depth::WATER_LINES[i])
            .default_color('c')
            .collidable(true)
            .build();
        scene.add(entity);
    }
}

pub fn castle(scene: &mut Scene) -> EntityId {
    let art = catalogue::CASTLE;
    let frame = Frame::with_mask(art.glyphs, art.mask);
    let x = (scene.width() as i32 - frame.width() as i32 - 1).max(0);
    let y = (scene.height() as i32 - frame.height() as i32 - 1).max(0);
    let entity = Entity::builder()
        .name("castle")
        .kind(EntityKind::Castle)
        .frame(frame)
        .position(x as f64, y as f64, depth::CASTLE)
        .default_color('y')
        .build();
    scene.add(entity)
}

// ── Seaweed ───────────────────────────────────────────────────────────────────

pub fn all_seaweed(scene: &mut Scene) {
    let count = (scene.width() as usize / 15).max(1);
    for _ in 0..count {
        seaweed(scene);
    }
}

/// A swaying strand anchored to the bottom, living 8 to 12 minutes.
pub fn seaweed(scene: &mut Scene) -> EntityId {
    let rng = scene.rng();
    let height = rng.gen_range(3..=6);
    let mut frames = [String::new(), String::new()];
    for i in 0..height {
        let left = i % 2;
        frames[left].push_str(" (\n");
        frames[1 - left].push_str(")\n");
    }
    let interval = Duration::from_secs_f64(rng.gen_range(0.25..=0.30));
    let lifetime = Duration::from_secs(rng.gen_range(480..=720));

    let max_x = (scene.width() as i32 - 3).max(1);
    let x = scene.rng().gen_range(1..=max_x);
    let y = (scene.height() as i32 - height as i32 - 1).max(0);

    let entity = Entity::builder()
        .kind(EntityKind::Seaweed)
        .frames(frames.iter().map(|f| Frame::new(f)))
        .position(x as f64, y as f64, depth::SEAWEED)
        .animation(interval, 1.0)
        .die_at(scene.now() + lifetime)
        .default_color('g')
        .behavior(Behavior::Seaweed)
        .build();
    scene.add(entity)
}

// ── Fish ──────────────────────────────────────────────────────────────────────

pub fn all_fish(scene: &mut Scene) {
    let underwater = (scene.height() as i32 - UNDERWATER_ROW).max(1) as usize;
    let count = (underwater * scene.width() as usize / 350).max(1);
    for _ in 0..count {
        fish(scene);
    }
}

/// A small fish crossing the tank at a random depth and speed.
pub fn fish(scene: &mut Scene) -> EntityId {
    let modern = scene.style() == Style::Modern && scene.rng().gen_range(0..=11) > 8;
    let set: &[Sprite] = if modern {
        &catalogue::MODERN_FISH
    } else {
        &catalogue::CLASSIC_FISH
    };
    let rng = scene.rng();
    let sprite = set[rng.gen_range(0..set.len())];
    let dir = random_direction(rng);
    let art = sprite.facing(dir);
    let mask = rand_color_mask(art.mask, rng);
    let speed = rng.gen_range(0.25..=1.25);
    let z = rng.gen_range(depth::FISH_START..=depth::FISH_END);

    let frame = Frame::with_mask(art.glyphs, &mask);
    let y = underwater_y(scene, frame.height());
    let x = match dir {
        Direction::Right => -(frame.width() as f64),
        Direction::Left => scene.width() as f64 - 1.0,
    };

    let entity = Entity::builder()
        .kind(EntityKind::Fish)
        .frame(frame)
        .transparent('?')
        .auto_transparent(true)
        .position(x, y, z)
        .velocity(dir.sign() * speed, 0.0)
        .die_offscreen(true)
        .collidable(true)
        .default_color('y')
        .behavior(Behavior::Fish)
        .build();
    scene.add(entity)
}

/// A bubble rising from just ahead of a fish's mouth. `None` if the fish
/// is gone.
pub fn bubble(scene: &mut Scene, fish: EntityId) -> Option<EntityId> {
    let fish = scene.entity(fish)?;
    let x = if fish.vx > 0.0 {
        fish.x + fish.width() as f64
    } else {
        fish.x - 1.0
    };
    let y = fish.y + (fish.height() / 2) as f64;
    let z = fish.z() - 1;

    let entity = Entity::builder()
        .kind(EntityKind::Bubble)
        .frames(catalogue::BUBBLE.iter().map(|b| Frame::new(b)))
        .position(x, y, z)
        .velocity(0.0, -0.5)
        .animation(Duration::from_millis(150), 0.5)
        .die_offscreen(true)
        .die_after_frames(15)
        .collidable(true)
        .default_color('C')
        .behavior(Behavior::Bubble)
        .build();
    Some(scene.add(entity))
}

/// Blood splat where something got eaten; plays once and disappears.
pub fn splat(scene: &mut Scene, x: f64, y: f64, z: i32) -> EntityId {
    let frames = catalogue::splat_frames('*');
    let entity = Entity::builder()
        .frames(frames.iter().map(|f| Frame::new(f)))
        .position(x - 4.0, y - 2.0, z - 2)
        .animation(Duration::from_millis(250), 1.0)
        .die_after_frames(frames.len() as u32 - 1)
        .default_color('R')
        .build();
    scene.add(entity)
}

// ── Specials ──────────────────────────────────────────────────────────────────

/// Spawn one of the roaming specials at random.
pub fn random_special(scene: &mut Scene) -> EntityId {
    match scene.rng().gen_range(0..5) {
        0 => ship(scene),
        1 => whale(scene),
        2 => monster(scene),
        3 => big_fish(scene),
        _ => shark(scene),
    }
}

/// A shark plus the invisible-ish teeth entity that does the eating.
pub fn shark(scene: &mut Scene) -> EntityId {
    let dir = random_direction(scene.rng());
    let art = catalogue::SHARK.facing(dir);
    let frame = Frame::with_mask(art.glyphs, art.mask);
    let vx = dir.sign() * 2.0;
    let y = underwater_y(scene, frame.height());
    let x = entry_x(dir, frame.width(), scene.width());

    let (tx, ty) = catalogue::teeth_offset(dir);
    let teeth = Entity::builder()
        .kind(EntityKind::Teeth)
        .shape("*")
        .position(x + tx, y + ty, depth::SHARK + 1)
        .velocity(vx, 0.0)
        .collidable(true)
        .behavior(Behavior::Teeth)
        .build();
    let teeth = scene.add(teeth);

    let shark = Entity::builder()
        .kind(EntityKind::Shark)
        .frame(frame)
        .transparent('?')
        .auto_transparent(true)
        .position(x, y, depth::SHARK)
        .velocity(vx, 0.0)
        .die_offscreen(true)
        .default_color('C')
        .behavior(Behavior::Shark { teeth })
        .build();
    scene.add(shark)
}

pub fn ship(scene: &mut Scene) -> EntityId {
    let dir = random_direction(scene.rng());
    let art = catalogue::SHIP.facing(dir);
    surface_special(scene, EntityKind::Ship, art, dir, depth::WATER_GAP1, 'Y')
}

fn surface_special(
    scene: &mut Scene,
    kind: EntityKind,
    art: Art,
    dir: Direction,
    z: i32,
    color: char,
) -> EntityId {
    let frame = Frame::with_mask(art.glyphs, art.mask);
    let x = entry_x(dir, frame.width(), scene.width());
    let entity = Entity::builder()
        .kind(kind)
        .frame(frame)
        .transparent('?')
        .auto_transparent(true)
        .position(x, 0.0, z)
        .velocity(dir.sign(), 0.0)
        .die_offscreen(true)
        .default_color(color)
        .behavior(Behavior::Special)
        .build();
    scene.add(entity)
}

/// A whale with a water spout cycling above its back.
pub fn whale(scene: &mut Scene) -> EntityId {
    let dir = random_direction(scene.rng());
    let art = catalogue::WHALE.facing(dir);
    let body = art_lines(art.glyphs);
    let pad = " ".repeat(catalogue::spout_offset(dir));

    let frames: Vec<Frame> = catalogue::WHALE_SPOUT
        .iter()
        .map(|spout| {
            let mut lines: Vec<String> =
                spout.split('\n').map(|l| format!("{}{}", pad, l)).collect();
            lines.resize(catalogue::SPOUT_ROWS, String::new());
            lines.extend(body.iter().map(|l| l.to_string()));
            Frame::with_mask(&format!("\n{}", lines.join("\n")), art.mask)
        })
        .collect();
    let width = frames.first().map(Frame::width).unwrap_or(0);
    let x = entry_x(dir, width, scene.width());

    let entity = Entity::builder()
        .kind(EntityKind::Whale)
        .frames(frames)
        .transparent('?')
        .auto_transparent(true)
        .position(x, 0.0, depth::WATER_GAP2)
        .velocity(dir.sign(), 0.0)
        .animation(Duration::from_millis(800), 1.0)
        .die_offscreen(true)
        .default_color('B')
        .behavior(Behavior::Special)
        .build();
    scene.add(entity)
}

/// A sea monster undulating along just under the surface.
pub fn monster(scene: &mut Scene) -> EntityId {
    let sprite = match scene.style() {
        Style::Modern => catalogue::MODERN_MONSTER,
        Style::Classic => catalogue::CLASSIC_MONSTER,
    };
    let dir = random_direction(scene.rng());
    let (shapes, mask) = sprite.facing(dir);
    let frames: Vec<Frame> = shapes.iter().map(|s| Frame::with_mask(s, mask)).collect();
    let width = frames.first().map(Frame::width).unwrap_or(0);
    let x = entry_x(dir, width, scene.width());

    let entity = Entity::builder()
        .kind(EntityKind::Monster)
        .frames(frames)
        .transparent('?')
        .auto_transparent(true)
        .position(x, 2.0, depth::WATER_GAP2)
        .velocity(dir.sign() * 2.0, 0.0)
        .animation(Duration::from_secs(1), 0.25)
        .die_offscreen(true)
        .default_color('G')
        .behavior(Behavior::Special)
        .build();
    scene.add(entity)
}

/// One of the two big fish, body and highlights in two distinct colours.
pub fn big_fish(scene: &mut Scene) -> EntityId {
    let second = scene.style() == Style::Modern && scene.rng().gen_range(0..=2) > 0;
    let (sprite, speed) = if second {
        (catalogue::BIG_FISH_2, 2.5)
    } else {
        (catalogue::BIG_FISH_1, 3.0)
    };
    let rng = scene.rng();
    let dir = random_direction(rng);
    let art = sprite.facing(dir);
    let body = random_color(rng);
    let mut highlight = random_color(rng);
    while highlight == body {
        highlight = random_color(rng);
    }
    let mask = art.mask.replace('1', &body.to_string()).replace('2', &highlight.to_string());

    let frame = Frame::with_mask(art.glyphs, &mask);
    let y = underwater_y(scene, frame.height());
    let x = entry_x(dir, frame.width(), scene.width());

    let entity = Entity::builder()
        .kind(EntityKind::BigFish)
        .frame(frame)
        .transparent('?')
        .auto_transparent(true)
        .position(x, y, depth::SHARK)
        .velocity(dir.sign() * speed, 0.0)
        .die_offscreen(true)
        .default_color('Y')
        .behavior(Behavior::Special)
        .build();
    scene.add(entity)
}
