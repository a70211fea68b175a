//! Box constraints handed from parent to child during layout.

use crate::Size;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl BoxConstraints {
    /// Creates constraints with exact width and height.
    pub fn tight(size: Size) -> Self {
        Self {
            min_width: size.width,
            max_width: size.width,
            min_height: size.height,
            max_height: size.height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(size: Size) -> Self {
        Self {
            min_width: 0.0,
            max_width: size.width,
            min_height: 0.0,
            max_height: size.height,
        }
    }

    /// Exact width, any height.
    pub fn tight_for_width(width: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: 0.0,
            max_height: f32::INFINITY,
        }
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Min <= max on both axes and no negative or NaN bounds.
    pub fn is_normalized(&self) -> bool {
        self.min_width >= 0.0
            && self.min_height >= 0.0
            && self.min_width <= self.max_width
            && self.min_height <= self.max_height
    }

    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }

    pub fn tighten_width(self, width: f32) -> Self {
        let width = width.clamp(self.min_width, self.max_width);
        Self {
            min_width: width,
            max_width: width,
            ..self
        }
    }

    pub fn copy_with_height(self, min_height: f32, max_height: f32) -> Self {
        Self {
            min_height,
            max_height,
            ..self
        }
    }

    /// Shrinks the height bounds as if `amount` of padding sat above the child.
    pub fn deflate_top(self, amount: f32) -> Self {
        self.deflate_vertical(amount)
    }

    /// Shrinks the height bounds as if `amount` of padding sat below the child.
    pub fn deflate_bottom(self, amount: f32) -> Self {
        self.deflate_vertical(amount)
    }

    fn deflate_vertical(self, amount: f32) -> Self {
        let amount = amount.max(0.0);
        let max_height = (self.max_height - amount).max(0.0);
        Self {
            min_height: (self.min_height - amount).max(0.0).min(max_height),
            max_height,
            ..self
        }
    }
}
