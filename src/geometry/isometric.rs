//! 3D -> 2D isometric projection and box construction
//!
//! Fixed-angle (30 degree convention) linear projection used for
//! pseudo-3D technical illustration. The transform is lossy: it is a 2D
//! shadow of 3D space, so two distinct 3D points may map to the same 2D
//! point. That is expected, not a bug.

use nalgebra::{Vector2, Vector3};
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Isometric projection settings: axis angle, per-axis scales, 2D origin
///
/// Screen convention is y-up (matches the viewer's world space):
/// +x recedes to the lower right, +z to the lower left, +y straight up.
#[derive(Debug, Clone)]
pub struct IsoProjection {
    pub origin: NVec2, // 2D offset added after projection
    pub angle: f64, // axis angle in radians, 30 degrees by convention
    pub scale: NVec3, // per-axis scale factors
}

impl Default for IsoProjection {
    fn default() -> Self {
        Self {
            origin: NVec2::zeros(),
            angle: 30.0_f64.to_radians(),
            scale: NVec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl IsoProjection {
    pub fn new(origin: NVec2, scale: NVec3) -> Self {
        Self {
            origin,
            scale,
            ..Self::default()
        }
    }

    /// Project a 3D point onto the 2D drawing plane
    ///
    /// x' = (x sx - z sz) cos(angle)
    /// y' = y sy - (x sx + z sz) sin(angle)
    pub fn project(&self, p: NVec3) -> NVec2 {
        let (sin, cos) = self.angle.sin_cos();
        let x = p.x * self.scale.x;
        let y = p.y * self.scale.y;
        let z = p.z * self.scale.z;
        NVec2::new(
            self.origin.x + (x - z) * cos,
            self.origin.y + y - (x + z) * sin,
        )
    }
}

/// Named faces of a [`Box3`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Top,
    Front,
    Right,
    Bottom,
    Back,
    Left,
}

impl Face {
    /// Ordered corner indices outlining this face
    ///
    /// Corners 0..=3 are the bottom ring (-y), 4..=7 the top ring (+y),
    /// both wound -x-z, +x-z, +x+z, -x+z.
    pub fn vertex_indices(self) -> [usize; 4] {
        match self {
            Face::Top => [4, 5, 6, 7],
            Face::Bottom => [0, 1, 2, 3],
            Face::Right => [1, 2, 6, 5],
            Face::Left => [0, 3, 7, 4],
            Face::Front => [2, 3, 7, 6],
            Face::Back => [0, 1, 5, 4],
        }
    }
}

/// Fixed back-to-front order for the three viewer-facing faces
///
/// There is no depth buffer: face order is the sole occlusion mechanism,
/// so this constant must never be reordered or derived from input data.
pub const FACE_DRAW_ORDER: [Face; 3] = [Face::Right, Face::Front, Face::Top];

/// Axis-aligned box: 8 corner points plus their 2D projections
///
/// Constructed fresh per draw call; owns no external resources.
#[derive(Debug, Clone)]
pub struct Box3 {
    pub corners: [NVec3; 8],
    pub projected: [NVec2; 8],
}

impl Box3 {
    /// Build a box from its center and full extents, projecting all corners
    ///
    /// `width` spans x, `height` spans y, `depth` spans z.
    pub fn new(center: NVec3, width: f64, depth: f64, height: f64, proj: &IsoProjection) -> Self {
        let hw = width / 2.0;
        let hd = depth / 2.0;
        let hh = height / 2.0;

        let corners = [
            center + NVec3::new(-hw, -hh, -hd),
            center + NVec3::new(hw, -hh, -hd),
            center + NVec3::new(hw, -hh, hd),
            center + NVec3::new(-hw, -hh, hd),
            center + NVec3::new(-hw, hh, -hd),
            center + NVec3::new(hw, hh, -hd),
            center + NVec3::new(hw, hh, hd),
            center + NVec3::new(-hw, hh, hd),
        ];

        let mut projected = [NVec2::zeros(); 8];
        for (out, corner) in projected.iter_mut().zip(corners.iter()) {
            *out = proj.project(*corner);
        }

        Self { corners, projected }
    }

    /// Projected outline of one face, in winding order
    pub fn face_outline(&self, face: Face) -> [NVec2; 4] {
        let idx = face.vertex_indices();
        [
            self.projected[idx[0]],
            self.projected[idx[1]],
            self.projected[idx[2]],
            self.projected[idx[3]],
        ]
    }
}
