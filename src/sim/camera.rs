// camera.rs - Perspective camera with pointer parallax
//
// Position is eased toward a pointer-derived target every frame while
// the camera keeps looking at the scene origin.

use glam::{Mat4, Vec3};

const FOV_Y_DEG: f32 = 75.0;
const DISTANCE: f32 = 50.0;

// Parallax tuning: offset scale applied to the normalized pointer, and
// the per-frame easing fraction.
const TARGET_SCALE: f32 = 0.05;
const EASE: f32 = 0.05;

pub struct Camera {
    pub x: f32,
    pub y: f32,
    aspect: f32,
}

impl Camera {
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 1000.0;

    pub fn new(aspect: f32) -> Self {
        Self { x: 0.0, y: 0.0, aspect }
    }

    /// Ease the position toward the pointer-derived offset.
    pub fn ease_toward(&mut self, mouse_x: f32, mouse_y: f32) {
        self.x += (mouse_x * TARGET_SCALE - self.x) * EASE;
        self.y += (-mouse_y * TARGET_SCALE - self.y) * EASE;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, DISTANCE)
    }

    /// View-projection matrix, looking at the origin.
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(FOV_Y_DEG.to_radians(), self.aspect, Self::NEAR, Self::FAR);
        let view = Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}
