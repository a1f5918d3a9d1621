//! Animated ASCII aquarium.
//!
//! The engine lives in [`scene`]: it owns the live entity set and runs the
//! per-frame update → collide → dispatch → composite cycle. Everything else
//! is either the entity model it drives, the content it spawns, or the
//! terminal sink it hands finished frames to.

pub mod behavior;
pub mod catalogue;
pub mod collision;
pub mod compositor;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod fb;
pub mod scene;
pub mod spawn;
