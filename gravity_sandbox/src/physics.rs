//! Inverse-square pull of attractors on movers

use glam::Vec2;
use thiserror::Error;

use crate::bodies::{Attractor, Mover};
use crate::vector::{angle_between, component_along, distance, legacy_angle_between};

/// Gravitational constant (tuned for pixel space at one step per frame)
pub const G: f32 = 9.81;

/// How the direction from a mover to an attractor is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// `atan2`, valid in every quadrant
    #[default]
    FourQuadrant,
    /// Slope arctangent with a half-turn fix for `dx < 0`; undefined when
    /// the bodies share an x coordinate
    Legacy,
}

/// What happens when a mover sits exactly on an attractor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SingularityPolicy {
    /// Abort the step with [`PhysicsError::Singularity`]
    #[default]
    Fault,
    /// Clamp the separation to at least this distance; coincident bodies
    /// exert no pull
    Soften(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    pub gravitational_constant: f32,
    pub angle_mode: AngleMode,
    pub singularity: SingularityPolicy,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            angle_mode: AngleMode::default(),
            singularity: SingularityPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhysicsError {
    #[error("mover {mover} coincides with attractor {attractor}")]
    Singularity { attractor: usize, mover: usize },

    #[error("mover {mover} is vertically aligned with attractor {attractor}; slope is undefined")]
    VerticalAlignment { attractor: usize, mover: usize },
}

/// Newton's law of gravitation: `G·m1·m2 / r²`
pub fn gravitational_force(g: f32, m1: f32, m2: f32, r: f32) -> f32 {
    g * m1 * m2 / (r * r)
}

/// Velocity increment one attractor applies to one mover in a single step.
///
/// Mover mass is not divided out: the force is used directly as the
/// increment.
pub fn pull(
    attractor: &Attractor,
    mover: &Mover,
    params: &PhysicsParams,
) -> Result<Vec2, PullFault> {
    let mut r = distance(attractor.position, mover.position);
    if r == 0.0 {
        match params.singularity {
            SingularityPolicy::Fault => return Err(PullFault::Singularity),
            SingularityPolicy::Soften(_) => return Ok(Vec2::ZERO),
        }
    }
    if let SingularityPolicy::Soften(eps) = params.singularity {
        r = r.max(eps);
    }

    let force = gravitational_force(params.gravitational_constant, attractor.mass, mover.mass, r);
    let angle = match params.angle_mode {
        AngleMode::FourQuadrant => angle_between(attractor.position, mover.position),
        AngleMode::Legacy => legacy_angle_between(attractor.position, mover.position)
            .ok_or(PullFault::VerticalAlignment)?,
    };

    Ok(component_along(force, angle))
}

/// Pair-level fault, tagged with indices by [`step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullFault {
    Singularity,
    VerticalAlignment,
}

impl PullFault {
    fn at(self, attractor: usize, mover: usize) -> PhysicsError {
        match self {
            PullFault::Singularity => PhysicsError::Singularity { attractor, mover },
            PullFault::VerticalAlignment => PhysicsError::VerticalAlignment { attractor, mover },
        }
    }
}

/// Advance every mover by one frame.
///
/// Velocity increments from all attractors are summed against the positions
/// at the start of the step, then each mover moves once by its new velocity.
/// On a fault nothing is mutated.
pub fn step(
    attractors: &[Attractor],
    movers: &mut [Mover],
    params: &PhysicsParams,
) -> Result<(), PhysicsError> {
    let mut deltas = vec![Vec2::ZERO; movers.len()];

    for (i, attractor) in attractors.iter().enumerate() {
        for (j, mover) in movers.iter().enumerate() {
            deltas[j] += pull(attractor, mover, params).map_err(|fault| fault.at(i, j))?;
        }
    }

    for (mover, delta) in movers.iter_mut().zip(deltas) {
        mover.accelerate(delta);
        mover.advance();
    }

    Ok(())
}
