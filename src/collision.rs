//! Collision resolver.
//!
//! Collision is a strike-point test, not rectangle overlap: each probe
//! entity contributes the single cell at its (truncated) position, and a
//! target is hit when that cell lies inside the target's bounding box.
//! Which kinds probe which is data, supplied as [`CollisionRule`]s.

use crate::entities::{Entity, EntityId, EntityKind};

/// "Entities of kind `probe` strike entities of kind `target`."
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionRule {
    pub probe: EntityKind,
    pub target: EntityKind,
}

impl CollisionRule {
    pub const fn new(probe: EntityKind, target: EntityKind) -> Self {
        Self { probe, target }
    }
}

/// Axis-aligned box in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn of(entity: &Entity) -> Self {
        let (x, y) = entity.cell();
        Self {
            x,
            y,
            width: entity.width() as i32,
            height: entity.height() as i32,
        }
    }

    /// Half-open containment: `x ≤ px < x+w` and `y ≤ py < y+h`.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        self.x <= px && px < self.x + self.width && self.y <= py && py < self.y + self.height
    }
}

/// A recorded hit, by index into the scanned slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub probe: usize,
    pub target: usize,
}

/// Find every probe/target hit among live, collidable entities.
///
/// Cost is `probes × targets` per rule. Dead or non-collidable entities
/// never participate.
pub fn detect(entities: &[Entity], rules: &[CollisionRule]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for rule in rules {
        let probes = participants(entities, rule.probe);
        if probes.is_empty() {
            continue;
        }
        let targets = participants(entities, rule.target);
        for &pi in &probes {
            let (px, py) = entities[pi].cell();
            for &ti in &targets {
                if pi != ti && Rect::of(&entities[ti]).contains(px, py) {
                    hits.push(Hit {
                        probe: pi,
                        target: ti,
                    });
                }
            }
        }
    }
    hits
}

fn participants(entities: &[Entity], kind: EntityKind) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_alive() && e.is_collidable() && e.kind() == Some(kind))
        .map(|(i, _)| i)
        .collect()
}

/// Detect hits and append each side to the other's per-frame collision list.
///
/// Recording is symmetric but conditional: an entity only receives entries
/// if its behavior handles collisions. Returns the number of hits found.
pub fn resolve(entities: &mut [Entity], rules: &[CollisionRule]) -> usize {
    let hits = detect(entities, rules);
    for hit in &hits {
        let probe_id: EntityId = entities[hit.probe].id();
        let target_id: EntityId = entities[hit.target].id();
        if entities[hit.target].behavior.handles_collisions() {
            entities[hit.target].collisions.push(probe_id);
        }
        if entities[hit.probe].behavior.handles_collisions() {
            entities[hit.probe].collisions.push(target_id);
        }
    }
    hits.len()
}
