// sim/ - Hero scene simulation
//
// Tick-driven world behind the hero canvas. Pure state, no DOM access;
// the dom module and the JS host drive it and read the output buffers.

mod camera;
mod particle;
mod shape;

pub use camera::Camera;
pub use particle::{ParticleCloud, PARTICLE_COUNT};
pub use shape::{Shape, Shapes, SHAPE_COUNT};

use crate::render::Encoder;

/// Hero scene world
pub struct HeroWorld {
    // Viewport
    w: u32,
    h: u32,
    half_w: f32,
    half_h: f32,

    // Pointer offset, normalized to [-1, 1]
    mouse_x: f32,
    mouse_y: f32,

    // Scene
    cloud: ParticleCloud,
    shapes: Shapes,
    camera: Camera,

    // Output
    encoder: Encoder,
}

impl HeroWorld {
    pub fn new(w: u32, h: u32) -> Self {
        let w = w.max(1);
        let h = h.max(1);
        let mut rng = 0xDEADBEEF;
        let cloud = ParticleCloud::generate(&mut rng);
        let shapes = Shapes::generate(&mut rng);

        Self {
            w,
            h,
            half_w: w as f32 / 2.0,
            half_h: h as f32 / 2.0,
            mouse_x: 0.0,
            mouse_y: 0.0,
            cloud,
            shapes,
            camera: Camera::new(w as f32 / h as f32),
            encoder: Encoder::new(w as f32, h as f32),
        }
    }

    /// Advance one display frame and re-encode the output buffers.
    pub fn tick(&mut self, now_ms: f64) {
        self.cloud.rotate();
        self.shapes.animate(now_ms);
        self.camera.ease_toward(self.mouse_x, self.mouse_y);

        let view_proj = self.camera.view_proj();
        self.encoder.clear();
        self.encoder.encode_cloud(&self.cloud, &view_proj);
        self.encoder.encode_shapes(&self.shapes, &view_proj);
    }

    /// Update the normalized pointer offset from client coordinates.
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        self.mouse_x = (client_x - self.half_w) / self.half_w;
        self.mouse_y = (client_y - self.half_h) / self.half_h;
    }

    /// Viewport resize: refresh half-dimensions and the projection.
    pub fn resize(&mut self, w: u32, h: u32) {
        let w = w.max(1);
        let h = h.max(1);
        self.w = w;
        self.h = h;
        self.half_w = w as f32 / 2.0;
        self.half_h = h as f32 / 2.0;
        self.camera.set_aspect(w as f32 / h as f32);
        self.encoder.resize(w as f32, h as f32);
    }

    // Random number generator (xorshift32)
    #[inline(always)]
    pub fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }

    // Accessors for WASM
    pub fn point_ptr(&self) -> *const f32 { self.encoder.point_ptr() }
    pub fn point_count(&self) -> usize { self.encoder.point_count() }
    pub fn line_ptr(&self) -> *const f32 { self.encoder.line_ptr() }
    pub fn line_count(&self) -> usize { self.encoder.line_count() }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }

    // In-process accessors
    pub fn points(&self) -> &[f32] { self.encoder.points() }
    pub fn lines(&self) -> &[f32] { self.encoder.lines() }
    pub fn half_width(&self) -> f32 { self.half_w }
    pub fn half_height(&self) -> f32 { self.half_h }
    pub fn mouse(&self) -> (f32, f32) { (self.mouse_x, self.mouse_y) }
    pub fn camera(&self) -> &Camera { &self.camera }
    pub fn cloud(&self) -> &ParticleCloud { &self.cloud }
    pub fn shapes(&self) -> &Shapes { &self.shapes }
}
