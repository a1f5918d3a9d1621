//! The scene: owner of the live entity set and the per-frame cycle.
//!
//! One [`Scene::tick_at`] runs, strictly in this order:
//!
//! 1. update every entity (expiry, animation, movement, offscreen exit,
//!    per-type update hook),
//! 2. resolve collisions among the survivors,
//! 3. dispatch collision hooks, clearing every per-frame collision list,
//! 4. reap dead entities, firing each death hook exactly once before removal,
//! 5. composite the live set into the frame buffer.
//!
//! Steps 1-4 are skipped while paused. Everything runs on the caller's
//! thread; callbacks mutate the scene directly through `&mut Scene`.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{self, CollisionRule};
use crate::compositor;
use crate::config::{Config, Style};
use crate::entities::{Entity, EntityId, EntityKind};
use crate::fb::FrameBuffer;

/// Frame driver state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

pub struct Scene {
    width: u16,
    height: u16,
    entities: Vec<Entity>,
    next_id: u64,
    state: RunState,
    needs_redraw: bool,
    started: Instant,
    now: Duration,
    style: Style,
    rules: Vec<CollisionRule>,
    rng: StdRng,
    fb: FrameBuffer,
}

impl Scene {
    pub fn new(width: u16, height: u16, config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            width,
            height,
            entities: Vec::new(),
            next_id: 1,
            state: RunState::Running,
            needs_redraw: true,
            started: Instant::now(),
            now: Duration::ZERO,
            style: config.style,
            rules: config.collision_rules.clone(),
            rng,
            fb: FrameBuffer::new(width, height),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Scene time of the most recent tick.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// The most recently composited frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    // ── Entity collection ─────────────────────────────────────────────────────

    /// Add an entity, assigning it a fresh id. Its animation clock starts now.
    pub fn add(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        entity.stamp(id, self.now);
        log::debug!("spawned {} at ({:.1}, {:.1})", entity.name(), entity.x, entity.y);
        self.entities.push(entity);
        self.needs_redraw = true;
        id
    }

    /// Remove an entity, keeping the order of the rest. Unknown ids are
    /// ignored.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        self.needs_redraw = true;
        Some(self.entities.remove(index))
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    /// Kill an entity by id. Returns false if it is no longer in the scene.
    pub fn kill(&mut self, id: EntityId) -> bool {
        match self.entity_mut(id) {
            Some(entity) => {
                entity.kill();
                true
            }
            None => false,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_of_type(&self, kind: EntityKind) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|e| e.kind() == Some(kind))
            .collect()
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind() == Some(kind)).count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id() == id)
    }

    fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(Entity::id).collect()
    }

    // ── Frame driver ──────────────────────────────────────────────────────────

    pub fn pause(&mut self) {
        if self.state != RunState::Paused {
            log::info!("paused");
            self.state = RunState::Paused;
            self.needs_redraw = true;
        }
    }

    pub fn resume(&mut self) {
        if self.state != RunState::Running {
            log::info!("resumed");
            self.state = RunState::Running;
            self.needs_redraw = true;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
    }

    /// Drop every entity and return to `Running`. The caller repopulates.
    pub fn reset(&mut self) {
        self.entities.clear();
        self.state = RunState::Running;
        self.needs_redraw = true;
    }

    /// Adopt a new viewport size. Clears the scene like [`Scene::reset`].
    pub fn resize(&mut self, width: u16, height: u16) {
        log::info!("viewport resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.fb.resize(width, height);
        self.reset();
    }

    /// Run one frame against the scene's own wall clock.
    pub fn tick(&mut self) -> &FrameBuffer {
        let now = self.started.elapsed();
        self.tick_at(now)
    }

    /// Run one frame at scene time `now` and return the composited buffer.
    pub fn tick_at(&mut self, now: Duration) -> &FrameBuffer {
        self.now = now;
        if self.state == RunState::Running {
            self.update_entities();
            self.resolve_collisions();
            self.dispatch_collisions();
            self.reap_dead();
        }
        self.composite()
    }

    // ── Frame phases ──────────────────────────────────────────────────────────

    /// Phase 1: update every entity present at the start of the phase.
    ///
    /// Entities spawned by update hooks join the collection immediately but
    /// are first updated on the next frame.
    pub fn update_entities(&mut self) {
        let (now, width, height) = (self.now, self.width, self.height);
        for id in self.ids() {
            let Some(entity) = self.entity_mut(id) else {
                continue;
            };
            entity.update(now, width, height);
            if !entity.is_alive() || !entity.behavior.has_update_hook() {
                continue;
            }
            let behavior = entity.behavior;
            behavior.on_update(id, self);
        }
    }

    /// Phase 2: record this frame's hits. Returns how many were found.
    pub fn resolve_collisions(&mut self) -> usize {
        collision::resolve(&mut self.entities, &self.rules)
    }

    /// Phase 3: run collision hooks for live entities that were hit, then
    /// leave every collision list empty.
    pub fn dispatch_collisions(&mut self) {
        for id in self.ids() {
            let Some(entity) = self.entity_mut(id) else {
                continue;
            };
            if entity.collisions.is_empty() {
                continue;
            }
            let others = std::mem::take(&mut entity.collisions);
            if !entity.is_alive() {
                continue;
            }
            let behavior = entity.behavior;
            behavior.on_collide(id, &others, self);
        }
        for entity in &mut self.entities {
            entity.collisions.clear();
        }
    }

    /// Phase 4: fire death hooks for entities that are dead now, removing
    /// each one right after its hook returns.
    ///
    /// Anything a hook kills is reaped on the next frame.
    pub fn reap_dead(&mut self) {
        let dead: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|e| !e.is_alive())
            .map(Entity::id)
            .collect();
        for id in dead {
            let Some(entity) = self.entity(id) else {
                continue;
            };
            log::debug!("{} died", entity.name());
            let behavior = entity.behavior;
            behavior.on_death(id, self);
            self.remove(id);
        }
    }

    /// Phase 5: draw the live set into the frame buffer.
    pub fn composite(&mut self) -> &FrameBuffer {
        compositor::composite(&mut self.fb, &self.entities);
        self.needs_redraw = false;
        &self.fb
    }
}
