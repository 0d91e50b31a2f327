use bytemuck::{Pod, Zeroable};

use super::{Rect, Vec2};

/// 2×3 affine transform in logical pixels.
///
/// Layout is column-major `[a, b, c, d, tx, ty]`, mapping a point as:
///
/// ```text
/// x' = a * x + c * y + tx
/// y' = b * x + d * y + ty
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Transform2D {
    pub m: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D { m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0] };

    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self { m: [1.0, 0.0, 0.0, 1.0, tx, ty] }
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self { m: [sx, 0.0, 0.0, sy, 0.0, 0.0] }
    }

    /// Counter-clockwise rotation in radians (clockwise on screen, since +Y is down).
    #[inline]
    pub fn rotate(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self { m: [c, s, -s, c, 0.0, 0.0] }
    }

    /// Returns `self` followed by `next` (i.e. `next * self`).
    #[inline]
    pub fn then(self, next: Transform2D) -> Transform2D {
        let [a0, b0, c0, d0, x0, y0] = self.m;
        let [a1, b1, c1, d1, x1, y1] = next.m;
        Transform2D {
            m: [
                a1 * a0 + c1 * b0,
                b1 * a0 + d1 * b0,
                a1 * c0 + c1 * d0,
                b1 * c0 + d1 * d0,
                a1 * x0 + c1 * y0 + x1,
                b1 * x0 + d1 * y0 + y1,
            ],
        }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        let [a, b, c, d, tx, ty] = self.m;
        Vec2::new(a * p.x + c * p.y + tx, b * p.x + d * p.y + ty)
    }

    /// Axis-aligned bounds of `rect` after transformation.
    pub fn map_rect(self, rect: Rect) -> Rect {
        let r = rect.normalized();
        let corners = [
            r.min(),
            Vec2::new(r.max().x, r.origin.y),
            r.max(),
            Vec2::new(r.origin.x, r.max().y),
        ];
        let first = self.apply(corners[0]);
        let (min, max) = corners[1..]
            .iter()
            .map(|&c| self.apply(c))
            .fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Rect::from_origin_size(min, max - min)
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.0, -4.0);
        assert_eq!(Transform2D::IDENTITY.apply(p), p);
        assert!(Transform2D::default().is_identity());
    }

    #[test]
    fn then_applies_in_order() {
        // Scale first, then translate.
        let t = Transform2D::scale(2.0, 3.0).then(Transform2D::translate(10.0, 20.0));
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 23.0));

        // Translate first, then scale.
        let t = Transform2D::translate(10.0, 20.0).then(Transform2D::scale(2.0, 3.0));
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(22.0, 63.0));
    }

    #[test]
    fn map_rect_with_translation() {
        let t = Transform2D::translate(5.0, 6.0);
        assert_eq!(
            t.map_rect(Rect::new(0.0, 0.0, 10.0, 4.0)),
            Rect::new(5.0, 6.0, 10.0, 4.0)
        );
    }

    #[test]
    fn map_rect_with_negative_scale_stays_normalized() {
        let t = Transform2D::scale(-1.0, 1.0);
        let mapped = t.map_rect(Rect::new(2.0, 0.0, 3.0, 1.0));
        assert_eq!(mapped, Rect::new(-5.0, 0.0, 3.0, 1.0));
    }
}
