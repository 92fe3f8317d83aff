// shape.rs - Decorative wireframe meshes
//
// Torus, octahedron and icosahedron rendered as line lists. Each shape
// carries its own rotation and float speeds, assigned at generation.

use glam::Vec3;

use super::HeroWorld;

pub const SHAPE_COUNT: usize = 3;

// Placement volume (world units, centered on the origin)
const PLACE_X: f32 = 50.0;
const PLACE_Y: f32 = 50.0;
const PLACE_Z: f32 = 30.0;

// Animation speed ranges
const ROT_SPEED_BASE: f32 = 0.001;
const ROT_SPEED_SPAN: f32 = 0.002;
const FLOAT_SPEED_BASE: f32 = 0.0005;
const FLOAT_SPEED_SPAN: f32 = 0.001;

// Vertical float applied per frame, scaled by the sine phase
const FLOAT_STEP: f32 = 0.01;

pub struct Shape {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(u16, u16)>,
    pub position: Vec3,

    // Animated state
    pub rot_x: f32,
    pub rot_y: f32,
    pub y_drift: f32,

    // Per-shape speeds, fixed at generation
    pub rot_speed: f32,
    pub float_speed: f32,
}

pub struct Shapes {
    pub items: Vec<Shape>,
}

impl Shapes {
    pub fn generate(rng: &mut u32) -> Self {
        let meshes = [torus(10.0, 3.0, 24, 8), octahedron(8.0), icosahedron(7.0)];

        let items = meshes
            .into_iter()
            .map(|(vertices, edges)| {
                let position = Vec3::new(
                    (HeroWorld::rand(rng) - 0.5) * PLACE_X,
                    (HeroWorld::rand(rng) - 0.5) * PLACE_Y,
                    (HeroWorld::rand(rng) - 0.5) * PLACE_Z,
                );
                Shape {
                    vertices,
                    edges,
                    position,
                    rot_x: 0.0,
                    rot_y: 0.0,
                    y_drift: 0.0,
                    rot_speed: ROT_SPEED_BASE + HeroWorld::rand(rng) * ROT_SPEED_SPAN,
                    float_speed: FLOAT_SPEED_BASE + HeroWorld::rand(rng) * FLOAT_SPEED_SPAN,
                }
            })
            .collect();

        Self { items }
    }

    /// Advance rotation and vertical float for every shape.
    pub fn animate(&mut self, now_ms: f64) {
        for shape in &mut self.items {
            shape.rot_x += shape.rot_speed;
            shape.rot_y += shape.rot_speed;
            shape.y_drift += (now_ms * shape.float_speed as f64).sin() as f32 * FLOAT_STEP;
        }
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

/// Torus in the XY plane. `tubular` segments around the ring,
/// `radial` around the tube; lines run in both directions.
fn torus(ring: f32, tube: f32, tubular: usize, radial: usize) -> (Vec<Vec3>, Vec<(u16, u16)>) {
    let mut vertices = Vec::with_capacity(tubular * radial);
    let mut edges = Vec::with_capacity(tubular * radial * 2);

    for j in 0..tubular {
        let u = j as f32 / tubular as f32 * std::f32::consts::TAU;
        for i in 0..radial {
            let v = i as f32 / radial as f32 * std::f32::consts::TAU;
            vertices.push(Vec3::new(
                (ring + tube * v.cos()) * u.cos(),
                (ring + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            ));
        }
    }

    for j in 0..tubular {
        for i in 0..radial {
            let here = (j * radial + i) as u16;
            let around_tube = (j * radial + (i + 1) % radial) as u16;
            let around_ring = (((j + 1) % tubular) * radial + i) as u16;
            edges.push((here, around_tube));
            edges.push((here, around_ring));
        }
    }

    (vertices, edges)
}

/// Octahedron: six axis vertices, an edge between every non-antipodal pair.
fn octahedron(radius: f32) -> (Vec<Vec3>, Vec<(u16, u16)>) {
    let vertices = vec![
        Vec3::new(radius, 0.0, 0.0),
        Vec3::new(-radius, 0.0, 0.0),
        Vec3::new(0.0, radius, 0.0),
        Vec3::new(0.0, -radius, 0.0),
        Vec3::new(0.0, 0.0, radius),
        Vec3::new(0.0, 0.0, -radius),
    ];
    let edges = shortest_edges(&vertices);
    (vertices, edges)
}

/// Icosahedron from the three golden-ratio rectangles.
fn icosahedron(radius: f32) -> (Vec<Vec3>, Vec<(u16, u16)>) {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let scale = radius / (1.0 + phi * phi).sqrt();

    let mut vertices = Vec::with_capacity(12);
    for &s0 in &[1.0f32, -1.0] {
        for &s1 in &[1.0f32, -1.0] {
            vertices.push(Vec3::new(0.0, s0 * scale, s1 * phi * scale));
            vertices.push(Vec3::new(s0 * scale, s1 * phi * scale, 0.0));
            vertices.push(Vec3::new(s0 * phi * scale, 0.0, s1 * scale));
        }
    }
    let edges = shortest_edges(&vertices);
    (vertices, edges)
}

/// Edges of a regular polyhedron: every vertex pair at the minimal
/// pairwise distance.
fn shortest_edges(vertices: &[Vec3]) -> Vec<(u16, u16)> {
    let mut min_d2 = f32::MAX;
    for i in 0..vertices.len() {
        for j in i + 1..vertices.len() {
            let d2 = vertices[i].distance_squared(vertices[j]);
            if d2 > 1e-6 && d2 < min_d2 {
                min_d2 = d2;
            }
        }
    }

    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in i + 1..vertices.len() {
            if vertices[i].distance_squared(vertices[j]) <= min_d2 * 1.01 {
                edges.push((i as u16, j as u16));
            }
        }
    }
    edges
}
