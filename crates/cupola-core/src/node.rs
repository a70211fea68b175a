//! # Intrinsic sizing and layout protocol
//!
//! Every node that takes part in the Cupertino surfaces implements two
//! traits:
//!
//! - [`Intrinsics`] answers "how tall would you be at this width?" (and the
//!   transposed question) without laying anything out. All four queries take
//!   `&self`, so they cannot mutate the node and may be called any number of
//!   times per frame.
//! - [`LayoutNode`] adds the mutating layout pass plus painting and hit
//!   testing against the size produced by the last layout.
//!
//! Intrinsic queries return `0.0` when the node would render nothing, and a
//! finite value otherwise. An infinite proposal (e.g. `max_intrinsic_width(
//! f32::INFINITY)`) must never be echoed back as an infinite answer; use
//! [`finite_or_zero`] on anything computed from child answers.

use crate::{BoxConstraints, Canvas, Error, Rect, Result, Size, Vec2};

/// Which intrinsic bound to query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntrinsicSize {
    Min,
    Max,
}

pub trait Intrinsics {
    fn min_intrinsic_width(&self, height: f32) -> f32;
    fn max_intrinsic_width(&self, height: f32) -> f32;
    fn min_intrinsic_height(&self, width: f32) -> f32;
    fn max_intrinsic_height(&self, width: f32) -> f32;

    fn intrinsic_height(&self, kind: IntrinsicSize, width: f32) -> f32 {
        match kind {
            IntrinsicSize::Min => self.min_intrinsic_height(width),
            IntrinsicSize::Max => self.max_intrinsic_height(width),
        }
    }
}

pub trait LayoutNode: Intrinsics {
    /// Lays the node out and returns (and remembers) its size.
    fn layout(&mut self, constraints: BoxConstraints) -> Size;

    /// Size from the most recent `layout`; `Size::ZERO` before the first one.
    fn size(&self) -> Size;

    /// Paints at `offset` in the canvas' current coordinate space.
    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2);

    /// Whether this node claims a point given in its own coordinates.
    fn hit_test(&self, position: Vec2) -> bool {
        Rect::from_size(self.size()).contains(position)
    }
}

impl<T: Intrinsics + ?Sized> Intrinsics for Box<T> {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        (**self).min_intrinsic_width(height)
    }
    fn max_intrinsic_width(&self, height: f32) -> f32 {
        (**self).max_intrinsic_width(height)
    }
    fn min_intrinsic_height(&self, width: f32) -> f32 {
        (**self).min_intrinsic_height(width)
    }
    fn max_intrinsic_height(&self, width: f32) -> f32 {
        (**self).max_intrinsic_height(width)
    }
}

impl<T: LayoutNode + ?Sized> LayoutNode for Box<T> {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        (**self).layout(constraints)
    }
    fn size(&self) -> Size {
        (**self).size()
    }
    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        (**self).paint(canvas, offset)
    }
    fn hit_test(&self, position: Vec2) -> bool {
        (**self).hit_test(position)
    }
}

/// Collapses NaN and infinities to `0.0`; finite values pass through.
#[inline]
pub fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// One physical pixel expressed in logical units.
pub fn hairline_thickness(device_pixel_ratio: f32) -> Result<f32> {
    if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
        return Err(Error::InvalidDevicePixelRatio(device_pixel_ratio));
    }
    Ok(1.0 / device_pixel_ratio)
}
