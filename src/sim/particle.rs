// particle.rs - Hero particle cloud
//
// Fixed-size point cloud generated once at init. Positions and colors
// never change afterwards; only the cloud orientation advances.

use super::HeroWorld;

pub const PARTICLE_COUNT: usize = 2000;

// Spawn volume (world units, centered on the origin)
const SPREAD_X: f32 = 200.0;
const SPREAD_Y: f32 = 200.0;
const SPREAD_Z: f32 = 100.0;

// Per-frame rotation increments
const SPIN_Y: f32 = 0.0005;
const SPIN_X: f32 = 0.0002;

pub struct ParticleCloud {
    // Position (SoA)
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,

    // Color, normalized [0, 1]
    pub r: Vec<f32>,
    pub g: Vec<f32>,
    pub b: Vec<f32>,

    // Orientation of the whole cloud
    pub rot_x: f32,
    pub rot_y: f32,
}

impl ParticleCloud {
    /// Fill the cloud. Called exactly once, at world construction.
    pub fn generate(rng: &mut u32) -> Self {
        let mut x = Vec::with_capacity(PARTICLE_COUNT);
        let mut y = Vec::with_capacity(PARTICLE_COUNT);
        let mut z = Vec::with_capacity(PARTICLE_COUNT);

        for _ in 0..PARTICLE_COUNT {
            x.push((HeroWorld::rand(rng) - 0.5) * SPREAD_X);
            y.push((HeroWorld::rand(rng) - 0.5) * SPREAD_Y);
            z.push((HeroWorld::rand(rng) - 0.5) * SPREAD_Z);
        }

        // White cloud
        Self {
            x,
            y,
            z,
            r: vec![1.0; PARTICLE_COUNT],
            g: vec![1.0; PARTICLE_COUNT],
            b: vec![1.0; PARTICLE_COUNT],
            rot_x: 0.0,
            rot_y: 0.0,
        }
    }

    /// Slow continuous drift of the whole cloud.
    pub fn rotate(&mut self) {
        self.rot_y += SPIN_Y;
        self.rot_x += SPIN_X;
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }
}
