//! Gravity sandbox
//!
//! Right-click places a sun, left-drag slings a projectile. Every frame each
//! sun pulls on every projectile with an inverse-square force; projectiles
//! never pull on anything.

pub mod bodies;
pub mod config;
pub mod input;
pub mod pacing;
pub mod physics;
pub mod renderer;
pub mod vector;
pub mod world;

pub use bodies::{Attractor, Mover};
pub use config::SandboxConfig;
pub use input::{Command, DragController, InputError};
pub use physics::{AngleMode, PhysicsError, PhysicsParams, SingularityPolicy};
pub use world::World;
