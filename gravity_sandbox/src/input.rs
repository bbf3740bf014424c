//! Pointer input: turns mouse events into world commands.
//!
//! - Right press spawns a sun under the cursor.
//! - Left drag-and-release launches a projectile from the release point,
//!   slingshot style: velocity is the drag vector reversed, scaled by the
//!   reduction factor.

use glam::Vec2;
use thiserror::Error;
use winit::event::{ElementState, MouseButton};

use crate::config::VELOCITY_REDUCTION_FACTOR;

/// A world mutation requested by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SpawnAttractor { position: Vec2 },
    SpawnMover { position: Vec2, velocity: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("primary button released without a drag in progress")]
    InvalidState,
}

/// Tracks the cursor and an in-progress launch drag.
#[derive(Debug, Clone)]
pub struct DragController {
    cursor: Vec2,
    drag_start: Option<Vec2>,
    reduction: f32,
}

impl DragController {
    pub fn new(reduction: f32) -> Self {
        Self {
            cursor: Vec2::ZERO,
            drag_start: None,
            reduction,
        }
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn drag_start(&self) -> Option<Vec2> {
        self.drag_start
    }

    pub fn cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
    }

    /// Process a button event at the current cursor position.
    pub fn mouse_input(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Result<Option<Command>, InputError> {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => {
                self.drag_start = Some(self.cursor);
                Ok(None)
            }
            (MouseButton::Right, ElementState::Pressed) => Ok(Some(Command::SpawnAttractor {
                position: self.cursor,
            })),
            (MouseButton::Left, ElementState::Released) => self.release().map(Some),
            _ => Ok(None),
        }
    }

    fn release(&mut self) -> Result<Command, InputError> {
        let start = self.drag_start.take().ok_or(InputError::InvalidState)?;
        let end = self.cursor;
        Ok(Command::SpawnMover {
            position: end,
            velocity: launch_velocity(start, end, self.reduction),
        })
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(VELOCITY_REDUCTION_FACTOR)
    }
}

/// Slingshot launch: pulling back from the release point fires forward.
pub fn launch_velocity(start: Vec2, end: Vec2, reduction: f32) -> Vec2 {
    (start - end) * reduction
}
