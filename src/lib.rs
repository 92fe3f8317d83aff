use wasm_bindgen::prelude::*;

// ============================================================================
// STARFIELD ENGINE - Portfolio hero scene and page effects
// ============================================================================

pub mod page;
pub mod render;
pub mod sim;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

use sim::HeroWorld;

/// Hero scene handle for a JS host that owns the frame loop. The host
/// calls `tick` once per display frame, then draws from the output
/// buffers via the ptr/count accessors.
#[wasm_bindgen]
pub struct Hero {
    world: HeroWorld,
}

#[wasm_bindgen]
impl Hero {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            world: HeroWorld::new(w, h),
        }
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.world.tick(now_ms);
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        self.world.pointer_moved(client_x, client_y);
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.world.resize(w, h);
    }

    pub fn point_ptr(&self) -> *const f32 { self.world.point_ptr() }
    pub fn point_count(&self) -> usize { self.world.point_count() }
    pub fn line_ptr(&self) -> *const f32 { self.world.line_ptr() }
    pub fn line_count(&self) -> usize { self.world.line_count() }
    pub fn width(&self) -> u32 { self.world.width() }
    pub fn height(&self) -> u32 { self.world.height() }
}

/// Wire the whole page: hero canvas, scroll effects, flourishes.
/// Tolerates pages missing any of the target elements.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn boot() {
    dom::boot();
}
