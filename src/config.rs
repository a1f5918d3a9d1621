//! Configuration threaded into the scene and every spawn function.

use crate::catalogue;
use crate::collision::CollisionRule;

/// Which art set the catalogue hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    /// Newer fish, big fish and sea monster art mixed in with the old.
    #[default]
    Modern,
    /// Only the classic art set.
    Classic,
}

/// Scene configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Art set used by spawn functions.
    pub style: Style,
    /// Seed for the scene RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Target frame rate (1-120).
    pub fps: u32,
    /// Which kinds probe which for collisions.
    pub collision_rules: Vec<CollisionRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::default(),
            seed: None,
            fps: 20,
            collision_rules: catalogue::COLLISION_RULES.to_vec(),
        }
    }
}

impl Config {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the target frame rate (clamped to 1-120).
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.clamp(1, 120);
        self
    }

    pub fn with_collision_rules(mut self, rules: Vec<CollisionRule>) -> Self {
        self.collision_rules = rules;
        self
    }

    /// Time budget for a single frame.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.fps.max(1)
    }
}
