//! Content above, actions below, one hairline between them.
//!
//! The hairline exists only while both sections report a non-zero max
//! intrinsic height at the current width, so a sheet with only actions (or
//! only a message) never shows a stray line.

use cupola_core::*;

/// How the two sections share a height that may be too small for both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionLayoutMode {
    /// Content gets whatever the actions' minimum height leaves over.
    #[default]
    Regular,
    /// Large text: when both do not fit, actions take the bottom half first
    /// and content gets the rest.
    Accessibility,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Content,
    Actions,
}

#[derive(Debug)]
pub struct SectionPair<C, A> {
    content: C,
    actions: A,
    divider_thickness: f32,
    divider_color: Color,
    mode: SectionLayoutMode,
    content_rect: Rect,
    actions_rect: Rect,
    divider_rect: Option<Rect>,
    size: Size,
}

impl<C: LayoutNode, A: LayoutNode> SectionPair<C, A> {
    pub fn new(content: C, actions: A, divider_thickness: f32) -> Self {
        Self {
            content,
            actions,
            divider_thickness: finite_or_zero(divider_thickness).max(0.0),
            divider_color: Color::TRANSPARENT,
            mode: SectionLayoutMode::Regular,
            content_rect: Rect::ZERO,
            actions_rect: Rect::ZERO,
            divider_rect: None,
            size: Size::ZERO,
        }
    }

    pub fn divider_color(mut self, color: Color) -> Self {
        self.divider_color = color;
        self
    }

    pub fn set_divider_color(&mut self, color: Color) -> Invalidation {
        if self.divider_color == color {
            return Invalidation::empty();
        }
        self.divider_color = color;
        Invalidation::PAINT
    }

    pub fn mode(mut self, mode: SectionLayoutMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_mode(&mut self, mode: SectionLayoutMode) -> Invalidation {
        if self.mode == mode {
            return Invalidation::empty();
        }
        self.mode = mode;
        Invalidation::LAYOUT
    }

    pub fn set_divider_thickness(&mut self, thickness: f32) -> Invalidation {
        let thickness = finite_or_zero(thickness).max(0.0);
        if self.divider_thickness == thickness {
            return Invalidation::empty();
        }
        self.divider_thickness = thickness;
        Invalidation::LAYOUT
    }

    pub fn layout_mode(&self) -> SectionLayoutMode {
        self.mode
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut A {
        &mut self.actions
    }

    pub fn content_rect(&self) -> Rect {
        self.content_rect
    }

    pub fn actions_rect(&self) -> Rect {
        self.actions_rect
    }

    /// Hairline between the sections from the last layout, if drawn.
    pub fn divider_rect(&self) -> Option<Rect> {
        self.divider_rect
    }

    /// Both sections have something to show at `width`.
    pub fn has_divider(&self, width: f32) -> bool {
        finite_or_zero(self.content.max_intrinsic_height(width)) > 0.0
            && finite_or_zero(self.actions.max_intrinsic_height(width)) > 0.0
    }

    fn divider_for(&self, width: f32) -> f32 {
        if self.has_divider(width) {
            self.divider_thickness
        } else {
            0.0
        }
    }

    fn stacked_height(&self, kind: IntrinsicSize, width: f32) -> f32 {
        let content = finite_or_zero(self.content.intrinsic_height(kind, width));
        let actions = finite_or_zero(self.actions.intrinsic_height(kind, width));
        finite_or_zero(content + self.divider_for(width) + actions)
    }

    /// Which section (if any) claims `position`, content first.
    pub fn hit_test_section(&self, position: Vec2) -> Option<Section> {
        if self.content_rect.contains(position)
            && self.content.hit_test(position - self.content_rect.origin())
        {
            return Some(Section::Content);
        }
        if self.actions_rect.contains(position)
            && self.actions.hit_test(position - self.actions_rect.origin())
        {
            return Some(Section::Actions);
        }
        None
    }

    fn layout_regular(&mut self, constraints: BoxConstraints, divider: f32) -> (Size, Size) {
        let width = constraints.max_width;
        let min_actions = finite_or_zero(self.actions.min_intrinsic_height(width));
        let content = self
            .content
            .layout(constraints.deflate_bottom(min_actions + divider));
        let actions = self
            .actions
            .layout(constraints.deflate_top(content.height + divider));
        (content, actions)
    }

    fn layout_accessibility(&mut self, constraints: BoxConstraints, divider: f32) -> (Size, Size) {
        let width = constraints.max_width;
        let max_content = finite_or_zero(self.content.max_intrinsic_height(width));
        let max_actions = finite_or_zero(self.actions.max_intrinsic_height(width));
        if max_content + divider + max_actions > constraints.max_height {
            let actions = self
                .actions
                .layout(constraints.deflate_top(constraints.max_height / 2.0));
            let content = self
                .content
                .layout(constraints.deflate_bottom(actions.height + divider));
            (content, actions)
        } else {
            let content = self.content.layout(constraints);
            let actions = self
                .actions
                .layout(constraints.deflate_top(content.height + divider));
            (content, actions)
        }
    }
}

impl<C: LayoutNode, A: LayoutNode> Intrinsics for SectionPair<C, A> {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        finite_or_zero(self.content.min_intrinsic_width(height))
            .max(finite_or_zero(self.actions.min_intrinsic_width(height)))
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        finite_or_zero(self.content.max_intrinsic_width(height))
            .max(finite_or_zero(self.actions.max_intrinsic_width(height)))
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.stacked_height(IntrinsicSize::Min, width)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.stacked_height(IntrinsicSize::Max, width)
    }
}

impl<C: LayoutNode, A: LayoutNode> LayoutNode for SectionPair<C, A> {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            self.max_intrinsic_width(f32::INFINITY)
        };
        let constraints = constraints.tighten_width(width);
        let divider = self.divider_for(width);

        let (content, actions) = match self.mode {
            SectionLayoutMode::Regular => self.layout_regular(constraints, divider),
            SectionLayoutMode::Accessibility => self.layout_accessibility(constraints, divider),
        };

        let actions_top = content.height + divider;
        self.content_rect = Rect::from_ltwh(0.0, 0.0, content.width, content.height);
        self.actions_rect = Rect::from_ltwh(0.0, actions_top, actions.width, actions.height);
        self.divider_rect =
            (divider > 0.0).then(|| Rect::from_ltwh(0.0, content.height, width, divider));
        self.size = constraints.constrain(Size::new(width, actions_top + actions.height));
        log::trace!(
            "section pair {:?}: content {:?}, actions {:?}, divider {divider}",
            self.mode,
            content,
            actions
        );
        self.size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        self.content
            .paint(canvas, offset + self.content_rect.origin());
        if let Some(divider) = self.divider_rect {
            canvas.draw_rect(divider.translate(offset), self.divider_color);
        }
        self.actions
            .paint(canvas, offset + self.actions_rect.origin());
    }

    fn hit_test(&self, position: Vec2) -> bool {
        self.hit_test_section(position).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmptyNode, SizedLeaf};

    #[test]
    fn divider_only_when_both_sections_have_height() {
        let pair = SectionPair::new(SizedLeaf::new(100.0, 40.0), SizedLeaf::new(100.0, 56.0), 1.0);
        assert!(pair.has_divider(300.0));
        assert_eq!(pair.max_intrinsic_height(300.0), 97.0);

        let pair = SectionPair::new(EmptyNode, SizedLeaf::new(100.0, 56.0), 1.0);
        assert!(!pair.has_divider(300.0));
        assert_eq!(pair.max_intrinsic_height(300.0), 56.0);

        let pair = SectionPair::new(SizedLeaf::new(100.0, 40.0), SizedLeaf::new(100.0, 0.0), 1.0);
        assert!(!pair.has_divider(300.0));
    }

    #[test]
    fn regular_layout_reserves_actions_minimum() {
        let content = SizedLeaf::with_range(Size::new(0.0, 0.0), Size::new(300.0, 500.0));
        let actions = SizedLeaf::with_range(Size::new(0.0, 56.0), Size::new(300.0, 113.0));
        let mut pair = SectionPair::new(content, actions, 1.0);
        let size = pair.layout(BoxConstraints::loose(Size::new(300.0, 400.0)));
        // Content takes 400 - 56 - 1; actions get the remaining 56.
        assert_eq!(pair.content_rect(), Rect::from_ltwh(0.0, 0.0, 300.0, 343.0));
        assert_eq!(pair.divider_rect(), Some(Rect::from_ltwh(0.0, 343.0, 300.0, 1.0)));
        assert_eq!(pair.actions_rect(), Rect::from_ltwh(0.0, 344.0, 300.0, 56.0));
        assert_eq!(size, Size::new(300.0, 400.0));
    }

    #[test]
    fn accessibility_layout_gives_actions_bottom_half() {
        let content = SizedLeaf::new(300.0, 500.0);
        let actions = SizedLeaf::new(300.0, 400.0);
        let mut pair =
            SectionPair::new(content, actions, 1.0).mode(SectionLayoutMode::Accessibility);
        pair.layout(BoxConstraints::loose(Size::new(300.0, 600.0)));
        assert_eq!(pair.actions_rect().h, 300.0);
        assert_eq!(pair.content_rect().h, 299.0);
        assert_eq!(pair.actions_rect().y, 300.0);
    }

    #[test]
    fn accessibility_layout_when_everything_fits() {
        let mut pair = SectionPair::new(SizedLeaf::new(300.0, 100.0), SizedLeaf::new(300.0, 90.0), 1.0)
            .mode(SectionLayoutMode::Accessibility);
        let size = pair.layout(BoxConstraints::loose(Size::new(300.0, 600.0)));
        assert_eq!(pair.actions_rect(), Rect::from_ltwh(0.0, 101.0, 300.0, 90.0));
        assert_eq!(size.height, 191.0);
    }

    #[test]
    fn hit_test_prefers_content() {
        let mut pair = SectionPair::new(SizedLeaf::new(300.0, 40.0), SizedLeaf::new(300.0, 56.0), 1.0);
        pair.layout(BoxConstraints::loose(Size::new(300.0, 400.0)));
        assert_eq!(pair.hit_test_section(Vec2::new(5.0, 5.0)), Some(Section::Content));
        assert_eq!(pair.hit_test_section(Vec2::new(5.0, 50.0)), Some(Section::Actions));
        assert_eq!(pair.hit_test_section(Vec2::new(5.0, 40.5)), None);
    }
}
