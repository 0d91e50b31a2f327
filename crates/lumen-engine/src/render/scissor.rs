use crate::coords::{Rect, Viewport};

/// Physical-pixel scissor bounds, clamped to the framebuffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ScissorRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Converts a baked logical-pixel clip to physical scissor bounds.
///
/// Returns `None` if the clipped area is empty (the backend should skip the
/// draw). [`Rect::UNBOUNDED`] yields the full framebuffer.
pub fn clip_to_scissor(clip: Rect, viewport: Viewport, scale: f32) -> Option<ScissorRect> {
    let (phys_vw, phys_vh) = viewport.physical_size(scale);

    if clip.is_unbounded() {
        return Some(ScissorRect { x: 0, y: 0, width: phys_vw, height: phys_vh });
    }

    let r = clip.normalized();
    let x = ((r.origin.x * scale).max(0.0) as u32).min(phys_vw);
    let y = ((r.origin.y * scale).max(0.0) as u32).min(phys_vh);
    let x2 = (((r.origin.x + r.size.x) * scale).max(0.0).ceil() as u32).min(phys_vw);
    let y2 = (((r.origin.y + r.size.y) * scale).max(0.0).ceil() as u32).min(phys_vh);

    let (width, height) = (x2.saturating_sub(x), y2.saturating_sub(y));
    if width == 0 || height == 0 { None } else { Some(ScissorRect { x, y, width, height }) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn unbounded_covers_framebuffer() {
        let s = clip_to_scissor(Rect::UNBOUNDED, VP, 2.0).unwrap();
        assert_eq!(s, ScissorRect { x: 0, y: 0, width: 1600, height: 1200 });
    }

    #[test]
    fn scales_to_physical() {
        let s = clip_to_scissor(Rect::new(10.0, 20.0, 30.0, 40.0), VP, 1.5).unwrap();
        assert_eq!(s, ScissorRect { x: 15, y: 30, width: 45, height: 60 });
    }

    #[test]
    fn clamps_to_viewport() {
        let s = clip_to_scissor(Rect::new(-50.0, 500.0, 1000.0, 500.0), VP, 1.0).unwrap();
        assert_eq!(s, ScissorRect { x: 0, y: 500, width: 800, height: 100 });
    }

    #[test]
    fn culled_clip_has_no_scissor() {
        assert_eq!(clip_to_scissor(Rect::ZERO, VP, 1.0), None);
        assert_eq!(clip_to_scissor(Rect::new(900.0, 0.0, 10.0, 10.0), VP, 1.0), None);
    }
}
