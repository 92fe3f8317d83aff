// render.rs - Encode projected scene geometry to output buffers
//
// Point records, stride 7: x, y, size, r, g, b, alpha
// Line records, stride 4: x0, y0, x1, y1 (drawn at LINE_ALPHA)
//
// Coordinates are canvas pixels. Buffers are rebuilt every tick; the
// host draws points additively and strokes the line list in one pass.

use glam::{EulerRot, Mat4, Quat, Vec3, Vec4};

use crate::sim::{Camera, ParticleCloud, Shapes};

pub const POINT_STRIDE: usize = 7;
pub const LINE_STRIDE: usize = 4;

// Material parameters
const POINT_SIZE: f32 = 0.5;
const POINT_ALPHA: f32 = 0.8;
pub const LINE_ALPHA: f32 = 0.1;

pub struct Encoder {
    points: Vec<f32>,
    lines: Vec<f32>,
    w: f32,
    h: f32,
}

impl Encoder {
    pub fn new(w: f32, h: f32) -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            w,
            h,
        }
    }

    pub fn resize(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
    }

    pub fn point_ptr(&self) -> *const f32 { self.points.as_ptr() }
    pub fn point_count(&self) -> usize { self.points.len() / POINT_STRIDE }
    pub fn line_ptr(&self) -> *const f32 { self.lines.as_ptr() }
    pub fn line_count(&self) -> usize { self.lines.len() / LINE_STRIDE }

    pub fn points(&self) -> &[f32] { &self.points }
    pub fn lines(&self) -> &[f32] { &self.lines }

    /// Project the particle cloud, one record per point in front of the
    /// near plane.
    pub fn encode_cloud(&mut self, cloud: &ParticleCloud, view_proj: &Mat4) {
        let model = Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, cloud.rot_x, cloud.rot_y, 0.0));
        let mvp = *view_proj * model;

        for i in 0..cloud.len() {
            let clip = mvp * Vec4::new(cloud.x[i], cloud.y[i], cloud.z[i], 1.0);
            if clip.w < Camera::NEAR {
                continue;
            }

            let (sx, sy) = self.to_screen(clip);
            // Perspective point size: world size scaled by depth
            let size = POINT_SIZE * (self.h * 0.5) / clip.w;

            self.points.extend_from_slice(&[
                sx,
                sy,
                size,
                cloud.r[i],
                cloud.g[i],
                cloud.b[i],
                POINT_ALPHA,
            ]);
        }
    }

    /// Project the wireframe shapes. A segment is dropped when either
    /// endpoint sits behind the near plane.
    pub fn encode_shapes(&mut self, shapes: &Shapes, view_proj: &Mat4) {
        for shape in &shapes.items {
            let rotation = Quat::from_euler(EulerRot::XYZ, shape.rot_x, shape.rot_y, 0.0);
            let translation = shape.position + Vec3::Y * shape.y_drift;
            let model = Mat4::from_translation(translation) * Mat4::from_quat(rotation);
            let mvp = *view_proj * model;

            let projected: Vec<Option<(f32, f32)>> = shape
                .vertices
                .iter()
                .map(|v| {
                    let clip = mvp * Vec4::new(v.x, v.y, v.z, 1.0);
                    if clip.w < Camera::NEAR {
                        return None;
                    }
                    Some(self.to_screen(clip))
                })
                .collect();

            for &(a, b) in &shape.edges {
                if let (Some((x0, y0)), Some((x1, y1))) =
                    (projected[a as usize], projected[b as usize])
                {
                    self.lines.extend_from_slice(&[x0, y0, x1, y1]);
                }
            }
        }
    }

    /// Perspective divide and viewport transform.
    #[inline]
    fn to_screen(&self, clip: Vec4) -> (f32, f32) {
        let inv_w = 1.0 / clip.w;
        let sx = (clip.x * inv_w + 1.0) * 0.5 * self.w;
        let sy = (1.0 - clip.y * inv_w) * 0.5 * self.h;
        (sx, sy)
    }
}
