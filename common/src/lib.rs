//! Common utilities for the sandbox binaries
//!
//! This crate provides shared graphics setup and the screen-space camera
//! used by the gravity sandbox.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;
