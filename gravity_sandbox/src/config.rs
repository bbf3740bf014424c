//! Fixed session configuration

use crate::bodies::{
    DEFAULT_ATTRACTOR_MASS, DEFAULT_ATTRACTOR_RADIUS, DEFAULT_MOVER_MASS, DEFAULT_MOVER_RADIUS,
};
use crate::physics::{AngleMode, PhysicsParams, SingularityPolicy, G};

/// Converts drag length in pixels into launch speed
pub const VELOCITY_REDUCTION_FACTOR: f32 = 0.15;

pub const FPS: u32 = 30;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    /// Linear-space RGBA, as expected when writing to an sRGB surface
    pub fn to_linear(self) -> [f32; 4] {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [channel(self.0), channel(self.1), channel(self.2), 1.0]
    }

    /// Gamma-encoded RGBA, for surfaces without sRGB encoding
    pub fn to_unorm(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            1.0,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SandboxConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub fps: u32,

    pub background: Rgb8,
    pub attractor_color: Rgb8,
    pub mover_color: Rgb8,

    pub gravitational_constant: f32,
    pub velocity_reduction: f32,
    pub attractor_mass: f32,
    pub attractor_radius: f32,
    pub mover_mass: f32,
    pub mover_radius: f32,

    pub angle_mode: AngleMode,
    pub singularity: SingularityPolicy,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            title: "Gravity Simulator",
            width: 800,
            height: 600,
            fps: FPS,
            background: Rgb8(46, 52, 64),
            attractor_color: Rgb8(255, 255, 0),
            mover_color: Rgb8(0, 0, 255),
            gravitational_constant: G,
            velocity_reduction: VELOCITY_REDUCTION_FACTOR,
            attractor_mass: DEFAULT_ATTRACTOR_MASS,
            attractor_radius: DEFAULT_ATTRACTOR_RADIUS,
            mover_mass: DEFAULT_MOVER_MASS,
            mover_radius: DEFAULT_MOVER_RADIUS,
            angle_mode: AngleMode::FourQuadrant,
            singularity: SingularityPolicy::Fault,
        }
    }
}

impl SandboxConfig {
    pub fn physics(&self) -> PhysicsParams {
        PhysicsParams {
            gravitational_constant: self.gravitational_constant,
            angle_mode: self.angle_mode,
            singularity: self.singularity,
        }
    }
}
