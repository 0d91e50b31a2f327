//! Paint model shared between the scene and backends.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, gradients) and their fixed-size GPU form
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

use std::sync::atomic::{AtomicBool, Ordering};

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, PathFill, SpreadMode};

static WARNED_MULTI_STOP: AtomicBool = AtomicBool::new(false);

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
            // Conservative: gradients count as opaque only if every stop is.
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
        }
    }

    /// Resolves this paint into the two-stop [`PathFill`] stored on path primitives.
    ///
    /// Gradients with fewer than two stops degrade to a solid fill of the first
    /// stop (or transparent). Gradients with more than two stops keep only the
    /// first and last stop; this is reported once per process at `debug` level.
    pub fn resolve(&self) -> PathFill {
        match self {
            Paint::Solid(c) => PathFill::solid(*c),
            Paint::LinearGradient(g) => {
                let (Some(first), Some(last)) = (g.stops.first(), g.stops.last()) else {
                    return PathFill::solid(Color::transparent());
                };
                if g.stops.len() < 2 {
                    return PathFill::solid(first.color);
                }
                if g.stops.len() > 2 && !WARNED_MULTI_STOP.swap(true, Ordering::Relaxed) {
                    log::debug!("only 2-stop gradients supported; using first and last stop");
                }
                PathFill {
                    color0: first.color,
                    color1: last.color,
                    start: g.start,
                    end: g.end,
                    spread: g.spread.code(),
                    _pad: 0,
                }
            }
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn solid_resolves_to_solid_fill() {
        let fill = Paint::solid(Color::black()).resolve();
        assert!(fill.is_solid());
        assert_eq!(fill.color0, Color::black());
    }

    #[test]
    fn single_stop_gradient_degrades_to_solid() {
        let g = LinearGradient::new(
            Vec2::zero(),
            Vec2::new(1.0, 0.0),
            vec![ColorStop::new(0.0, Color::white())],
            SpreadMode::Pad,
        );
        let fill = Paint::LinearGradient(g).resolve();
        assert!(fill.is_solid());
        assert_eq!(fill.color0, Color::white());
    }

    #[test]
    fn multi_stop_gradient_keeps_first_and_last() {
        let mid = Color::from_premul(0.5, 0.0, 0.0, 0.5);
        let g = LinearGradient::new(
            Vec2::zero(),
            Vec2::new(0.0, 8.0),
            vec![
                ColorStop::new(0.0, Color::black()),
                ColorStop::new(0.5, mid),
                ColorStop::new(1.0, Color::white()),
            ],
            SpreadMode::Reflect,
        );
        let fill = Paint::LinearGradient(g).resolve();
        assert_eq!(fill.color0, Color::black());
        assert_eq!(fill.color1, Color::white());
        assert_eq!(fill.end, Vec2::new(0.0, 8.0));
        assert_eq!(fill.spread, SpreadMode::Reflect.code());
    }

    #[test]
    fn empty_gradient_is_transparent() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(1.0, 1.0), Vec::new(), SpreadMode::Pad);
        assert_eq!(Paint::LinearGradient(g).resolve().color0, Color::transparent());
    }

    #[test]
    fn opacity_check() {
        assert!(Paint::from(Color::black()).is_opaque());
        assert!(!Paint::from(Color::transparent()).is_opaque());
    }
}
