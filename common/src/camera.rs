//! Screen-space camera for 2D simulations

use glam::{Mat4, Vec2, Vec4};

/// Orthographic camera mapping window pixels to clip space.
///
/// The origin sits at the top-left corner with y growing downwards, matching
/// the cursor coordinates winit reports.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub width: f32,
    pub height: f32,
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, -1.0, 1.0)
    }

    /// Project a pixel position into normalized device coordinates
    pub fn to_ndc(&self, point: Vec2) -> Vec2 {
        let clip = self.view_projection() * Vec4::new(point.x, point.y, 0.0, 1.0);
        Vec2::new(clip.x, clip.y)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera_2d(camera: &Camera2D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}
