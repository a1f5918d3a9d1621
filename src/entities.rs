/// Entity model: the animated, positioned glyph blocks the scene drives.
///
/// An [`Entity`] carries its own lifecycle checks (expiry, offscreen exit)
/// and animation state. Anything that needs the rest of the scene (spawning,
/// killing others) goes through its [`Behavior`].
use std::fmt;
use std::time::Duration;

use crate::behavior::Behavior;
use crate::fb::Attr;

// ── Identity ──────────────────────────────────────────────────────────────────

/// Handle to an entity inside a [`crate::scene::Scene`].
///
/// Ids are never reused within a scene, so a stale id simply stops resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Type tag used for population queries and collision rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Fish,
    Bubble,
    Shark,
    Teeth,
    Seaweed,
    Waterline,
    Castle,
    Ship,
    Whale,
    Monster,
    BigFish,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Fish => "fish",
            EntityKind::Bubble => "bubble",
            EntityKind::Shark => "shark",
            EntityKind::Teeth => "teeth",
            EntityKind::Seaweed => "seaweed",
            EntityKind::Waterline => "waterline",
            EntityKind::Castle => "castle",
            EntityKind::Ship => "ship",
            EntityKind::Whale => "whale",
            EntityKind::Monster => "monster",
            EntityKind::BigFish => "big_fish",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Frames ────────────────────────────────────────────────────────────────────

/// One animation frame: a glyph block plus an optional attribute mask.
///
/// Dimensions come from the glyph block alone. The mask is advisory: rows or
/// columns it lacks fall back to the entity's default attribute, and anything
/// it has beyond the glyph bounds is never consulted.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    glyphs: Vec<Vec<char>>,
    mask: Vec<Vec<char>>,
    width: usize,
}

impl Frame {
    /// Parse a glyph block. A single leading newline is dropped so blocks
    /// can be written as raw string literals starting on their own line;
    /// trailing newlines are dropped too.
    pub fn new(glyphs: &str) -> Self {
        let glyphs = split_block(glyphs);
        let width = glyphs.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            glyphs,
            mask: Vec::new(),
            width,
        }
    }

    pub fn with_mask(glyphs: &str, mask: &str) -> Self {
        Self {
            mask: split_block(mask),
            ..Self::new(glyphs)
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.glyphs.len()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.glyphs
    }

    /// Mask character at `(row, col)`, if the mask reaches that far.
    pub fn mask_at(&self, row: usize, col: usize) -> Option<char> {
        self.mask.get(row).and_then(|line| line.get(col)).copied()
    }
}

fn split_block(block: &str) -> Vec<Vec<char>> {
    let block = block.strip_prefix('\n').unwrap_or(block);
    let block = block.trim_end_matches('\n');
    if block.is_empty() {
        return Vec::new();
    }
    block.split('\n').map(|line| line.chars().collect()).collect()
}

// ── Entity ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Entity {
    pub(crate) id: EntityId,
    name: Option<String>,
    kind: Option<EntityKind>,

    /// Horizontal position in (fractional) columns.
    pub x: f64,
    /// Vertical position in (fractional) rows.
    pub y: f64,
    /// Draw depth. Smaller is closer to the viewer.
    z: i32,
    /// Columns added to `x` every update.
    pub vx: f64,
    /// Rows added to `y` every update.
    pub vy: f64,

    frames: Vec<Frame>,
    current_frame: usize,
    width: usize,
    height: usize,
    anim_interval: Duration,
    anim_speed: f64,
    last_frame_change: Duration,
    frames_shown: u32,

    default_attr: Attr,
    transparent: char,
    auto_transparent: bool,

    die_offscreen: bool,
    die_at: Option<Duration>,
    die_after_frames: Option<u32>,
    alive: bool,

    collidable: bool,
    pub(crate) behavior: Behavior,
    pub(crate) collisions: Vec<EntityId>,
}

impl Entity {
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The configured name, or `<kind>_<id>` when none was given.
    pub fn name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => {
                let kind = self.kind.map(|k| k.as_str()).unwrap_or("entity");
                format!("{}_{}", kind, self.id.0)
            }
        }
    }

    pub fn kind(&self) -> Option<EntityKind> {
        self.kind
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self) -> &Frame {
        &self.frames[self.current_frame]
    }

    pub fn frames_shown(&self) -> u32 {
        self.frames_shown
    }

    pub fn default_attr(&self) -> Attr {
        self.default_attr
    }

    pub fn transparent_char(&self) -> char {
        self.transparent
    }

    pub fn is_auto_transparent(&self) -> bool {
        self.auto_transparent
    }

    /// Whether `ch` is skipped when drawing this entity.
    pub fn is_transparent(&self, ch: char) -> bool {
        ch == self.transparent || (self.auto_transparent && ch == ' ')
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_collidable(&self) -> bool {
        self.collidable
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Entities recorded as colliding with this one during the current frame.
    pub fn collisions(&self) -> &[EntityId] {
        &self.collisions
    }

    /// Mark the entity dead. There is no way back.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Integer cell the top-left corner falls in (truncated toward zero).
    pub fn cell(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    /// True when the bounding box has no overlap with `[0, w) × [0, h)`.
    pub fn is_offscreen(&self, screen_width: u16, screen_height: u16) -> bool {
        let (w, h) = (self.width as f64, self.height as f64);
        self.x + w <= 0.0
            || self.x >= screen_width as f64
            || self.y + h <= 0.0
            || self.y >= screen_height as f64
    }

    pub(crate) fn stamp(&mut self, id: EntityId, now: Duration) {
        self.id = id;
        self.last_frame_change = now;
    }

    /// Advance one frame: expiry checks, animation, movement, offscreen exit.
    ///
    /// The per-type update hook is not run here; the scene invokes it after
    /// this returns, and only if the entity is still alive.
    pub fn update(&mut self, now: Duration, screen_width: u16, screen_height: u16) {
        if !self.alive {
            return;
        }

        if self.die_at.is_some_and(|t| now >= t) {
            self.kill();
            return;
        }
        if self.die_after_frames.is_some_and(|n| self.frames_shown >= n) {
            self.kill();
            return;
        }

        if self.frames.len() > 1 && !self.anim_interval.is_zero() && self.anim_speed > 0.0 {
            let elapsed = now.saturating_sub(self.last_frame_change).as_secs_f64();
            if elapsed >= self.anim_interval.as_secs_f64() / self.anim_speed {
                self.set_frame((self.current_frame + 1) % self.frames.len());
                self.last_frame_change = now;
                self.frames_shown += 1;
            }
        }

        // Frame-step integration: one velocity step per update, whatever
        // the wall-clock gap between updates.
        self.x += self.vx;
        self.y += self.vy;

        if self.die_offscreen && self.is_offscreen(screen_width, screen_height) {
            self.kill();
        }
    }

    fn set_frame(&mut self, index: usize) {
        self.current_frame = index;
        let frame = &self.frames[index];
        self.width = frame.width();
        self.height = frame.height();
    }
}

// ── Configuration bundle ──────────────────────────────────────────────────────

/// Builder for [`Entity`]; every option has a sensible default.
#[derive(Clone, Debug)]
pub struct EntityBuilder {
    name: Option<String>,
    kind: Option<EntityKind>,
    position: (f64, f64, i32),
    velocity: (f64, f64),
    frames: Vec<Frame>,
    anim_interval: Duration,
    anim_speed: f64,
    default_attr: Attr,
    transparent: char,
    auto_transparent: bool,
    die_offscreen: bool,
    die_at: Option<Duration>,
    die_after_frames: Option<u32>,
    behavior: Behavior,
    collidable: bool,
}

impl Default for EntityBuilder {
    fn default() -> Self {
        Self {
            name: None,
            kind: None,
            position: (0.0, 0.0, 0),
            velocity: (0.0, 0.0),
            frames: Vec::new(),
            anim_interval: Duration::ZERO,
            anim_speed: 1.0,
            default_attr: Attr::from_code('c'),
            transparent: ' ',
            auto_transparent: false,
            die_offscreen: false,
            die_at: None,
            die_after_frames: None,
            behavior: Behavior::Inert,
            collidable: false,
        }
    }
}

impl EntityBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: EntityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn position(mut self, x: f64, y: f64, z: i32) -> Self {
        self.position = (x, y, z);
        self
    }

    pub fn velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = (vx, vy);
        self
    }

    /// Append one frame.
    pub fn frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Append frames in order.
    pub fn frames(mut self, frames: impl IntoIterator<Item = Frame>) -> Self {
        self.frames.extend(frames);
        self
    }

    /// Convenience for a single unmasked frame.
    pub fn shape(self, glyphs: &str) -> Self {
        self.frame(Frame::new(glyphs))
    }

    /// Base time between frame changes and its speed multiplier; the
    /// interval actually waited is `interval / speed`.
    pub fn animation(mut self, interval: Duration, speed: f64) -> Self {
        self.anim_interval = interval;
        self.anim_speed = speed;
        self
    }

    /// Attribute used wherever no mask character applies, as a colour code.
    pub fn default_color(mut self, code: char) -> Self {
        self.default_attr = Attr::from_code(code);
        self
    }

    pub fn transparent(mut self, ch: char) -> Self {
        self.transparent = ch;
        self
    }

    pub fn auto_transparent(mut self, on: bool) -> Self {
        self.auto_transparent = on;
        self
    }

    pub fn die_offscreen(mut self, on: bool) -> Self {
        self.die_offscreen = on;
        self
    }

    /// Absolute scene time at which the entity expires.
    pub fn die_at(mut self, at: Duration) -> Self {
        self.die_at = Some(at);
        self
    }

    /// Expire once this many frame changes have been shown. Zero means no
    /// limit.
    pub fn die_after_frames(mut self, frames: u32) -> Self {
        self.die_after_frames = (frames > 0).then_some(frames);
        self
    }

    pub fn behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn collidable(mut self, on: bool) -> Self {
        self.collidable = on;
        self
    }

    pub fn build(self) -> Entity {
        let mut frames = self.frames;
        if frames.is_empty() {
            frames.push(Frame::new(""));
        }
        let (x, y, z) = self.position;
        let (vx, vy) = self.velocity;
        let mut entity = Entity {
            id: EntityId::default(),
            name: self.name,
            kind: self.kind,
            x,
            y,
            z,
            vx,
            vy,
            frames,
            current_frame: 0,
            width: 0,
            height: 0,
            anim_interval: self.anim_interval,
            anim_speed: self.anim_speed,
            last_frame_change: Duration::ZERO,
            frames_shown: 0,
            default_attr: self.default_attr,
            transparent: self.transparent,
            auto_transparent: self.auto_transparent,
            die_offscreen: self.die_offscreen,
            die_at: self.die_at,
            die_after_frames: self.die_after_frames,
            alive: true,
            collidable: self.collidable,
            behavior: self.behavior,
            collisions: Vec::new(),
        };
        entity.set_frame(0);
        entity
    }
}
