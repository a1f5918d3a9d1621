//! Per-type behavior: what an entity does every frame, when struck, and
//! when it dies.
//!
//! A closed set of variants dispatched through three hooks. Arguments bound
//! at spawn time (a shark's teeth) travel in the variant payload.

use rand::Rng;

use crate::entities::{EntityId, EntityKind};
use crate::scene::Scene;
use crate::spawn;

/// Fish taller than this shrug off a shark bite.
const EDIBLE_HEIGHT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Behavior {
    /// No hooks at all: scenery, splats.
    #[default]
    Inert,
    /// Blows bubbles, can be eaten, respawns a fish on death.
    Fish,
    /// Pops when it reaches the waterline.
    Bubble,
    /// Respawns seaweed on death.
    Seaweed,
    /// A shark's strike point.
    Teeth,
    /// Takes its teeth down with it and spawns a random special.
    Shark { teeth: EntityId },
    /// Ship, whale, monster or big fish: replaced by a random special.
    Special,
}

impl Behavior {
    pub fn has_update_hook(&self) -> bool {
        matches!(self, Behavior::Fish)
    }

    /// Whether hits are recorded for this entity at all.
    pub fn handles_collisions(&self) -> bool {
        matches!(self, Behavior::Fish | Behavior::Bubble | Behavior::Teeth)
    }

    /// Runs every frame the entity survives its own update.
    pub fn on_update(&self, id: EntityId, scene: &mut Scene) {
        if let Behavior::Fish = self {
            if scene.rng().gen_range(0..=100) > 97 {
                spawn::bubble(scene, id);
            }
        }
    }

    /// Runs once per frame for a live entity whose collision list is
    /// non-empty. Ids that no longer resolve are skipped.
    pub fn on_collide(&self, id: EntityId, others: &[EntityId], scene: &mut Scene) {
        match self {
            Behavior::Fish => {
                if !struck_by(scene, others, EntityKind::Teeth) {
                    return;
                }
                let Some(fish) = scene.entity(id) else {
                    return;
                };
                if fish.height() > EDIBLE_HEIGHT {
                    return;
                }
                let (x, y, z) = (fish.x, fish.y, fish.z());
                log::debug!("{} eaten", fish.name());
                spawn::splat(scene, x, y, z);
                scene.kill(id);
            }
            Behavior::Bubble => {
                if struck_by(scene, others, EntityKind::Waterline) {
                    scene.kill(id);
                }
            }
            Behavior::Teeth => {
                log::debug!("teeth {} struck {} target(s)", id, others.len());
            }
            _ => {}
        }
    }

    /// Runs exactly once, while the dying entity is still in the scene.
    pub fn on_death(&self, _id: EntityId, scene: &mut Scene) {
        match *self {
            Behavior::Fish => {
                spawn::fish(scene);
            }
            Behavior::Seaweed => {
                spawn::seaweed(scene);
            }
            Behavior::Shark { teeth } => {
                scene.kill(teeth);
                spawn::random_special(scene);
            }
            Behavior::Special => {
                spawn::random_special(scene);
            }
            Behavior::Inert | Behavior::Bubble | Behavior::Teeth => {}
        }
    }
}

fn struck_by(scene: &Scene, others: &[EntityId], kind: EntityKind) -> bool {
    others
        .iter()
        .filter_map(|&other| scene.entity(other))
        .any(|e| e.kind() == Some(kind))
}
