//! Opaque leaf boxes.
//!
//! Button labels, icons and message text are rendered elsewhere; to the
//! action engine they are just boxes that answer intrinsic queries. These
//! leaves cover the shapes that matter for layout: fixed boxes and boxes
//! whose height grows as the width shrinks (wrapped text).

use cupola_core::*;

/// Box with fixed intrinsic bounds. A zero-height leaf is a valid
/// placeholder button.
#[derive(Clone, Debug, PartialEq)]
pub struct SizedLeaf {
    min: Size,
    max: Size,
    fill: Option<Color>,
    size: Size,
}

impl SizedLeaf {
    pub fn new(width: f32, height: f32) -> Self {
        let s = Size::new(width, height);
        Self::with_range(s, s)
    }

    pub fn with_range(min: Size, max: Size) -> Self {
        Self {
            min,
            max,
            fill: None,
            size: Size::ZERO,
        }
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }
}

impl Intrinsics for SizedLeaf {
    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.min.width
    }
    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.max.width
    }
    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.min.height
    }
    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.max.height
    }
}

impl LayoutNode for SizedLeaf {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        self.size = constraints.constrain(self.max);
        self.size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        if let Some(color) = self.fill {
            canvas.draw_rect(Rect::from_origin_size(offset, self.size), color);
        }
    }
}

/// Stand-in for wrapped text: `natural_width` of content broken into lines of
/// `line_height`, never shorter than `min_height`, with vertical `padding` on
/// both sides.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowLeaf {
    natural_width: f32,
    longest_word: f32,
    line_height: f32,
    min_height: f32,
    padding: f32,
    size: Size,
}

impl FlowLeaf {
    pub fn new(natural_width: f32, line_height: f32) -> Self {
        Self {
            natural_width,
            longest_word: natural_width,
            line_height,
            min_height: 0.0,
            padding: 0.0,
            size: Size::ZERO,
        }
    }

    pub fn longest_word(mut self, width: f32) -> Self {
        self.longest_word = width.min(self.natural_width);
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    fn height_for(&self, width: f32) -> f32 {
        if self.natural_width <= 0.0 {
            return self.min_height;
        }
        let lines = if width.is_finite() && width > 0.0 {
            (self.natural_width / width).ceil().max(1.0)
        } else {
            1.0
        };
        (lines * self.line_height + 2.0 * self.padding).max(self.min_height)
    }
}

impl Intrinsics for FlowLeaf {
    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.longest_word
    }
    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.natural_width
    }
    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.height_for(width)
    }
    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.height_for(width)
    }
}

impl LayoutNode for FlowLeaf {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            self.natural_width
        };
        self.size = constraints.constrain(Size::new(width, self.height_for(width)));
        self.size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&self, _canvas: &mut dyn Canvas, _offset: Vec2) {}
}

/// Renders nothing and reports zero in every direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EmptyNode;

impl Intrinsics for EmptyNode {
    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        0.0
    }
    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        0.0
    }
    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        0.0
    }
    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        0.0
    }
}

impl LayoutNode for EmptyNode {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        constraints.constrain(Size::ZERO)
    }

    fn size(&self) -> Size {
        Size::ZERO
    }

    fn paint(&self, _canvas: &mut dyn Canvas, _offset: Vec2) {}

    fn hit_test(&self, _position: Vec2) -> bool {
        false
    }
}
