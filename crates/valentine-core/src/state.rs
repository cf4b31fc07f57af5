//! Visual-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! consumes them to build camera matrices, map the pointer into the scene and
//! pack per-entity data for the GPU.

use crate::color::rgba_from_hex;
use crate::confetti::ConfettiPiece;
use crate::config::DeviceClass;
use crate::constants::CAMERA_FOV_DEG;
use crate::scene::{EntityKind, EntityTransform};
use glam::{Mat4, Vec2, Vec3};

// Shape ids understood by the fragment shader.
pub const SHAPE_HEART: f32 = 0.0;
pub const SHAPE_FLOWER: f32 = 1.0;
pub const SHAPE_BUTTERFLY: f32 = 2.0;
pub const SHAPE_SPARKLE: f32 = 3.0;
pub const SHAPE_CONFETTI: f32 = 4.0;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera looking at the origin from +Z, pulled back further on narrow screens.
    pub fn for_device(device: DeviceClass, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, device.camera_z()),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Visible world-space width and height on the plane through `target` (the origin).
    pub fn viewport_at_origin(&self) -> Vec2 {
        let distance = self.eye.distance(self.target);
        let height = 2.0 * distance * (self.fovy_radians * 0.5).tan();
        Vec2::new(height * self.aspect, height)
    }

    /// Map a pointer in normalized device coordinates (-1..1, y up) onto the
    /// target plane.
    pub fn pointer_to_world(&self, ndc: Vec2) -> Vec3 {
        let vp = self.viewport_at_origin();
        Vec3::new(ndc.x * vp.x * 0.5, ndc.y * vp.y * 0.5, self.target.z)
    }

    /// Camera-space right and up axes in world space, for billboards.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        (right, up)
    }

    /// Distance along the view direction; larger is further away.
    #[inline]
    pub fn depth_of(&self, point: Vec3) -> f32 {
        let forward = (self.target - self.eye).normalize();
        (point - self.eye).dot(forward)
    }

    /// Painter's order for alpha-blended billboards: furthest first.
    pub fn sort_back_to_front(&self, sprites: &mut [SpriteInstance]) {
        sprites.sort_by(|a, b| {
            let da = self.depth_of(Vec3::new(a.pos_size[0], a.pos_size[1], a.pos_size[2]));
            let db = self.depth_of(Vec3::new(b.pos_size[0], b.pos_size[1], b.pos_size[2]));
            db.total_cmp(&da)
        });
    }
}

/// GPU instance record for one billboard.
///
/// - `pos_size`: world position and half-size, or for overlay pieces pixel
///   position and half extents
/// - `color`: straight RGBA
/// - `params`: shape id, rotation about the view axis, bloom glow, shape-specific extra
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub pos_size: [f32; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

impl SpriteInstance {
    pub fn from_entity(e: &EntityTransform) -> Self {
        let (shape, half, rotation, extra) = match e.kind {
            EntityKind::MainHeart | EntityKind::CursorHeart => {
                (SHAPE_HEART, e.scale * 1.2, e.rotation.z, 0.0)
            }
            EntityKind::GardenHeart => (SHAPE_HEART, e.scale * 0.6, e.rotation.z, 0.0),
            EntityKind::Flower {
                petal_count,
                petal_spin,
            } => (
                SHAPE_FLOWER,
                e.scale * 0.6,
                e.rotation.z + petal_spin,
                petal_count as f32,
            ),
            EntityKind::Butterfly { wing_flap } => (SHAPE_BUTTERFLY, e.scale * 0.35, 0.0, wing_flap),
            EntityKind::BloomSparkle => (SHAPE_SPARKLE, e.scale * 0.15, 0.0, 0.0),
            EntityKind::AmbientSparkle => (SHAPE_SPARKLE, e.scale * 0.04, 0.0, 0.0),
        };
        Self {
            pos_size: e.position.extend(half).to_array(),
            color: e.color.to_array(),
            params: [shape, rotation, e.glow, extra],
        }
    }

    /// Screen-space piece for the overlay pass.
    pub fn from_confetti(p: &ConfettiPiece) -> Self {
        Self {
            pos_size: [
                p.position_px.x,
                p.position_px.y,
                p.width_px * 0.5,
                p.height_px * 0.5,
            ],
            color: rgba_from_hex(p.color, p.opacity).to_array(),
            params: [SHAPE_CONFETTI, p.rotation, 0.0, 0.0],
        }
    }
}
