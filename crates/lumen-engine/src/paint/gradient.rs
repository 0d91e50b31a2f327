use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

impl SpreadMode {
    /// Stable integer code written into [`PathFill::spread`].
    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            SpreadMode::Pad => 0,
            SpreadMode::Repeat => 1,
            SpreadMode::Reflect => 2,
        }
    }
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// `start` and `end` live in the same space as the geometry they fill
/// (mesh space for paths, before the instance transform).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Two-stop gradient from `from` at `start` to `to` at `end`.
    pub fn two_stop(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(
            start,
            end,
            vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
            SpreadMode::Pad,
        )
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

/// Fixed-size fill carried by path-like primitives.
///
/// Solid fills have `color0 == color1` and a zero-length axis; shaders treat a
/// degenerate axis as a uniform `color0` fill.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PathFill {
    pub color0: Color,
    pub color1: Color,
    pub start: Vec2,
    pub end: Vec2,
    pub spread: u32,
    pub _pad: u32,
}

impl PathFill {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self {
            color0: color,
            color1: color,
            start: Vec2::zero(),
            end: Vec2::zero(),
            spread: SpreadMode::Pad.code(),
            _pad: 0,
        }
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stop_is_valid() {
        let g = LinearGradient::two_stop(
            Vec2::zero(),
            Vec2::new(10.0, 0.0),
            Color::black(),
            Color::white(),
        );
        assert!(g.is_valid());
    }

    #[test]
    fn zero_length_axis_is_invalid() {
        let g = LinearGradient::two_stop(Vec2::zero(), Vec2::zero(), Color::black(), Color::white());
        assert!(!g.is_valid());
    }

    #[test]
    fn solid_fill_is_degenerate() {
        let f = PathFill::solid(Color::white());
        assert!(f.is_solid());
        assert_eq!(f.color0, f.color1);
    }
}
