//! Deterministic per-frame simulation core for Elemental, a platformer about
//! shape-shifting between chemical elements.
//!
//! The core owns physics, tile collision and the element/hazard rules. It
//! consumes typed input intents and emits typed events; rendering, audio,
//! menus and level-file parsing live with the host.

pub mod entity;
pub mod simulation;
pub mod world;

pub use entity::{InputIntent, Player};
pub use simulation::{DeathCause, SimEvent, Simulation};
pub use world::World;
