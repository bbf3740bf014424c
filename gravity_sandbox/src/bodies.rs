//! Point-mass bodies: immobile suns and mobile projectiles

use glam::Vec2;

pub const DEFAULT_ATTRACTOR_MASS: f32 = 1000.0;
pub const DEFAULT_ATTRACTOR_RADIUS: f32 = 15.0;
pub const DEFAULT_MOVER_MASS: f32 = 1.0;
pub const DEFAULT_MOVER_RADIUS: f32 = 5.0;

/// An immobile body that pulls on every mover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    pub position: Vec2,
    pub mass: f32,
    pub radius: f32,
}

impl Attractor {
    pub fn new(position: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            position,
            mass,
            radius,
        }
    }

    /// A sun with the default mass and radius
    pub fn at(position: Vec2) -> Self {
        Self::new(position, DEFAULT_ATTRACTOR_MASS, DEFAULT_ATTRACTOR_RADIUS)
    }
}

/// A projectile moved by the attractors' pull
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub radius: f32,
}

impl Mover {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius,
        }
    }

    /// A projectile with the default mass and radius
    pub fn launched(position: Vec2, velocity: Vec2) -> Self {
        Self::new(position, velocity, DEFAULT_MOVER_MASS, DEFAULT_MOVER_RADIUS)
    }

    /// Add an increment to the velocity
    pub fn accelerate(&mut self, delta: Vec2) {
        self.velocity += delta;
    }

    /// Advance the position by one frame's worth of velocity
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }
}
