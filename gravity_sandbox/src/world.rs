//! Session registry of every sun and projectile

use glam::Vec2;

use crate::bodies::{
    Attractor, Mover, DEFAULT_ATTRACTOR_MASS, DEFAULT_ATTRACTOR_RADIUS, DEFAULT_MOVER_MASS,
    DEFAULT_MOVER_RADIUS,
};
use crate::config::SandboxConfig;
use crate::input::Command;
use crate::physics::{self, PhysicsError, PhysicsParams};

/// Mass and radius given to newly spawned bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTemplate {
    pub mass: f32,
    pub radius: f32,
}

/// Owns all bodies in spawn order. Bodies are never removed.
#[derive(Debug, Clone)]
pub struct World {
    attractors: Vec<Attractor>,
    movers: Vec<Mover>,
    params: PhysicsParams,
    attractor_template: BodyTemplate,
    mover_template: BodyTemplate,
}

impl World {
    pub fn new() -> Self {
        Self {
            attractors: Vec::new(),
            movers: Vec::new(),
            params: PhysicsParams::default(),
            attractor_template: BodyTemplate {
                mass: DEFAULT_ATTRACTOR_MASS,
                radius: DEFAULT_ATTRACTOR_RADIUS,
            },
            mover_template: BodyTemplate {
                mass: DEFAULT_MOVER_MASS,
                radius: DEFAULT_MOVER_RADIUS,
            },
        }
    }

    pub fn from_config(config: &SandboxConfig) -> Self {
        Self {
            params: config.physics(),
            attractor_template: BodyTemplate {
                mass: config.attractor_mass,
                radius: config.attractor_radius,
            },
            mover_template: BodyTemplate {
                mass: config.mover_mass,
                radius: config.mover_radius,
            },
            ..Self::new()
        }
    }

    pub fn with_params(mut self, params: PhysicsParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn attractors(&self) -> &[Attractor] {
        &self.attractors
    }

    pub fn movers(&self) -> &[Mover] {
        &self.movers
    }

    /// Place an immobile sun at `position`
    pub fn spawn_attractor(&mut self, position: Vec2) -> &Attractor {
        let BodyTemplate { mass, radius } = self.attractor_template;
        log::debug!("sun #{} at {position}", self.attractors.len());
        self.attractors.push(Attractor::new(position, mass, radius));
        &self.attractors[self.attractors.len() - 1]
    }

    /// Launch a projectile from `position` with `velocity`
    pub fn spawn_mover(&mut self, position: Vec2, velocity: Vec2) -> &Mover {
        let BodyTemplate { mass, radius } = self.mover_template;
        log::debug!("projectile #{} at {position} v={velocity}", self.movers.len());
        self.movers.push(Mover::new(position, velocity, mass, radius));
        &self.movers[self.movers.len() - 1]
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SpawnAttractor { position } => {
                self.spawn_attractor(position);
            }
            Command::SpawnMover { position, velocity } => {
                self.spawn_mover(position, velocity);
            }
        }
    }

    /// Run one physics step over all attractor/mover pairs
    pub fn step(&mut self) -> Result<(), PhysicsError> {
        physics::step(&self.attractors, &mut self.movers, &self.params)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let world = World::new();
        assert!(world.attractors().is_empty());
        assert!(world.movers().is_empty());
    }

    #[test]
    fn spawns_keep_insertion_order() {
        let mut world = World::new();
        world.spawn_attractor(Vec2::new(1.0, 1.0));
        world.spawn_attractor(Vec2::new(2.0, 2.0));
        world.spawn_mover(Vec2::new(3.0, 3.0), Vec2::ZERO);

        let xs: Vec<f32> = world.attractors().iter().map(|a| a.position.x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
        assert_eq!(world.movers()[0].position, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn config_templates_apply_to_spawns() {
        let config = SandboxConfig {
            attractor_mass: 50.0,
            attractor_radius: 4.0,
            mover_radius: 2.0,
            ..Default::default()
        };
        let mut world = World::from_config(&config);
        let sun = *world.spawn_attractor(Vec2::ZERO);
        let p = *world.spawn_mover(Vec2::ONE, Vec2::ZERO);
        assert_eq!((sun.mass, sun.radius), (50.0, 4.0));
        assert_eq!((p.mass, p.radius), (1.0, 2.0));
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut world = World::new();
        world.apply(Command::SpawnAttractor {
            position: Vec2::new(10.0, 10.0),
        });
        world.apply(Command::SpawnMover {
            position: Vec2::new(20.0, 20.0),
            velocity: Vec2::new(-1.0, 0.5),
        });
        assert_eq!(world.attractors().len(), 1);
        assert_eq!(world.movers()[0].velocity, Vec2::new(-1.0, 0.5));
    }
}
