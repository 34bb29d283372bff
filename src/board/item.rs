//! A single image placed on the board and its anchored transform setters.
//!
//! An item maps a local point `p` (pixels, top-left origin) to the scene as
//!
//! ```text
//! scene = pos + F · R(rotation) · scale · p
//! ```
//!
//! where `F = diag(flip, 1)` mirrors horizontally. Every anchored setter goes
//! through [`BoardItem::anchored`]: the scene anchor is mapped into local
//! space with the *old* transform, the change is applied, and `pos` is
//! solved so the same local point lands back on the anchor.

use bevy::math::{DMat2, DVec2};

use crate::error::{BoardError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct BoardItem {
    pub filename: Option<String>,
    width: f64,
    height: f64,
    pos: DVec2,
    scale: f64,
    rotation: f64,
    flip: f64,
    z: f64,
}

/// Linear part of the item transform: scale, then rotate, then mirror.
pub fn local_to_scene_matrix(scale: f64, rotation: f64, flip: f64) -> DMat2 {
    DMat2::from_diagonal(DVec2::new(flip, 1.0))
        * DMat2::from_angle(rotation.to_radians())
        * DMat2::from_diagonal(DVec2::splat(scale))
}

/// Position that keeps `local_anchor` on `scene_anchor` under `linear`.
pub fn anchored_position(scene_anchor: DVec2, local_anchor: DVec2, linear: DMat2) -> DVec2 {
    scene_anchor - linear * local_anchor
}

fn ensure_finite_point(point: DVec2, what: &str) -> Result<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(BoardError::InvalidParameter(format!(
            "{what} must be finite, got {point}"
        )))
    }
}

impl BoardItem {
    pub fn new(width: f64, height: f64, filename: Option<String>) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(BoardError::InvalidParameter(format!(
                "item size must be positive, got {width} x {height}"
            )));
        }

        Ok(Self {
            filename,
            width,
            height,
            pos: DVec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            flip: 1.0,
            z: 0.0,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rotation in degrees as stored; may lie outside [0, 360).
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotation folded into [0, 360) for display.
    pub fn rotation_display(&self) -> f64 {
        self.rotation.rem_euclid(360.0)
    }

    /// `1.0` or `-1.0`.
    pub fn flip(&self) -> f64 {
        self.flip
    }

    pub fn is_flipped(&self) -> bool {
        self.flip < 0.0
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    pub fn set_pos(&mut self, pos: DVec2) -> Result<()> {
        ensure_finite_point(pos, "position")?;
        self.pos = pos;
        Ok(())
    }

    pub fn linear(&self) -> DMat2 {
        local_to_scene_matrix(self.scale, self.rotation, self.flip)
    }

    pub fn map_to_scene(&self, local: DVec2) -> DVec2 {
        self.pos + self.linear() * local
    }

    pub fn map_from_scene(&self, scene: DVec2) -> DVec2 {
        self.linear().inverse() * (scene - self.pos)
    }

    /// Geometric center in local coordinates.
    pub fn local_center(&self) -> DVec2 {
        DVec2::new(self.width, self.height) / 2.0
    }

    /// Geometric center in scene coordinates.
    pub fn center(&self) -> DVec2 {
        self.map_to_scene(self.local_center())
    }

    /// Places the item so its center lands on `center`.
    pub fn set_pos_center(&mut self, center: DVec2) -> Result<()> {
        ensure_finite_point(center, "center")?;
        self.pos = anchored_position(center, self.local_center(), self.linear());
        Ok(())
    }

    /// Scene-space corners in local order: top-left, top-right,
    /// bottom-right, bottom-left.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            DVec2::ZERO,
            DVec2::new(self.width, 0.0),
            DVec2::new(self.width, self.height),
            DVec2::new(0.0, self.height),
        ]
        .map(|corner| self.map_to_scene(corner))
    }

    /// Axis-aligned scene bounds as `(min, max)`.
    pub fn scene_bounds(&self) -> (DVec2, DVec2) {
        let corners = self.corners();
        let min = corners.iter().copied().fold(corners[0], DVec2::min);
        let max = corners.iter().copied().fold(corners[0], DVec2::max);
        (min, max)
    }

    fn anchored(&mut self, anchor: DVec2, change: impl FnOnce(&mut Self)) {
        let local_anchor = self.map_from_scene(anchor);
        change(self);
        self.pos = anchored_position(anchor, local_anchor, self.linear());
    }

    /// Sets the absolute scale, keeping the scene point `anchor` fixed.
    pub fn set_scale(&mut self, factor: f64, anchor: DVec2) -> Result<()> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(BoardError::InvalidParameter(format!(
                "scale must be positive, got {factor}"
            )));
        }
        ensure_finite_point(anchor, "anchor")?;

        self.anchored(anchor, |item| item.scale = factor);
        Ok(())
    }

    /// Sets the absolute rotation in degrees, keeping `anchor` fixed.
    ///
    /// No flip compensation happens here; callers turning a visual delta
    /// into an absolute angle multiply the delta by [`Self::flip`].
    pub fn set_rotation(&mut self, angle: f64, anchor: DVec2) -> Result<()> {
        if !angle.is_finite() {
            return Err(BoardError::InvalidParameter(format!(
                "rotation must be finite, got {angle}"
            )));
        }
        ensure_finite_point(anchor, "anchor")?;

        self.anchored(anchor, |item| item.rotation = angle);
        Ok(())
    }

    /// Mirrors the item around `anchor`, horizontally unless `vertical`.
    ///
    /// A vertical mirror is a horizontal one plus a half turn. The half turn
    /// goes +180 from an unflipped state and -180 from a flipped one, so two
    /// vertical flips give back the exact rotation value.
    pub fn do_flip(&mut self, anchor: DVec2, vertical: bool) -> Result<()> {
        ensure_finite_point(anchor, "anchor")?;

        self.anchored(anchor, |item| {
            if vertical {
                item.rotation += 180.0 * item.flip;
            }
            item.flip = -item.flip;
        });
        Ok(())
    }

    pub fn move_by(&mut self, delta: DVec2) {
        self.pos += delta;
    }
}
