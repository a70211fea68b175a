//! # Action sheet surface
//!
//! A bottom-anchored card: an optional content block (title, message) over
//! a scrollable [`ButtonGroup`], both clipped to a rounded rect, and an
//! optional detached cancel button underneath.
//!
//! ```text
//!  ┌──────────────────────┐  <- edge padding
//!  │ content (scrolls)    │
//!  ├──────────────────────┤  <- hairline, only if both sections show
//!  │ action 0             │
//!  ├──────────────────────┤
//!  │ action 1             │
//!  └──────────────────────┘
//!            gap
//!  ┌──────────────────────┐
//!  │ cancel               │
//!  └──────────────────────┘  <- edge padding
//! ```

use cupola_core::*;

use crate::{
    ActionNode, ActionPalette, ButtonGroup, EmptyNode, ScrollRegion, Section, SectionPair,
    StackPolicy,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn of(viewport: Size) -> Self {
        if viewport.width > viewport.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// What a pointer position on the sheet resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetHit {
    Content,
    Action(usize),
    Cancel,
}

/// The detached button under an action sheet. Paints its own rounded
/// background, swapping to the pressed colour while held.
#[derive(Debug)]
pub struct CancelButton {
    action: ActionNode,
    pressed: bool,
    palette: ActionPalette,
    corner_radius: f32,
    size: Size,
}

impl CancelButton {
    pub fn new(action: ActionNode, corner_radius: f32) -> Self {
        Self {
            action,
            pressed: false,
            palette: ActionPalette::CANCEL_BUTTON,
            corner_radius,
            size: Size::ZERO,
        }
    }

    pub fn with_palette(mut self, palette: ActionPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn action(&self) -> &ActionNode {
        &self.action
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn set_pressed(&mut self, pressed: bool) -> Invalidation {
        if self.pressed == pressed {
            return Invalidation::empty();
        }
        self.pressed = pressed;
        Invalidation::PAINT
    }

    pub fn fill_color(&self) -> Color {
        if self.pressed {
            self.palette.pressed
        } else {
            self.palette.background
        }
    }
}

impl Intrinsics for CancelButton {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.action.min_intrinsic_width(height)
    }
    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.action.max_intrinsic_width(height)
    }
    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.action.min_intrinsic_height(width)
    }
    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.action.max_intrinsic_height(width)
    }
}

impl LayoutNode for CancelButton {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        self.size = self.action.layout(constraints);
        self.size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        canvas.draw_rrect(
            Rect::from_origin_size(offset, self.size),
            self.corner_radius,
            self.fill_color(),
        );
        self.action.paint(canvas, offset);
    }

    fn hit_test(&self, position: Vec2) -> bool {
        Rect::from_size(self.size).contains(position)
    }
}

pub type SheetSections = SectionPair<ScrollRegion<Box<dyn LayoutNode>>, ScrollRegion<ButtonGroup>>;

pub struct ActionSheetSurface {
    metrics: SheetMetrics,
    sections: SheetSections,
    cancel: Option<CancelButton>,
    content_background: Color,
    has_content: bool,
    viewport: Size,
    sections_rect: Rect,
    cancel_rect: Option<Rect>,
}

impl std::fmt::Debug for ActionSheetSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSheetSurface")
            .field("actions", &self.group().len())
            .field("has_cancel", &self.cancel.is_some())
            .field("viewport", &self.viewport)
            .field("sections_rect", &self.sections_rect)
            .field("cancel_rect", &self.cancel_rect)
            .finish()
    }
}

impl ActionSheetSurface {
    /// `divider_thickness` is in logical pixels, see
    /// [`CupertinoConfig::sheet_divider_thickness`].
    pub fn new(
        metrics: SheetMetrics,
        divider_thickness: f32,
        content: Option<Box<dyn LayoutNode>>,
        actions: Vec<ActionNode>,
        cancel: Option<ActionNode>,
    ) -> Self {
        let palette = ActionPalette::ACTION_SHEET;
        let has_content = content.is_some();
        let content = content.unwrap_or_else(|| Box::new(EmptyNode));
        let actions = actions
            .into_iter()
            .map(|a| a.min_height(metrics.button_height));
        let group = ButtonGroup::new(StackPolicy::action_sheet(cancel.is_some()), divider_thickness)
            .with_palette(palette)
            .with_actions(actions);
        let sections = SectionPair::new(
            ScrollRegion::new(content),
            ScrollRegion::new(group),
            divider_thickness,
        )
        .divider_color(palette.divider);
        let cancel = cancel.map(|c| {
            CancelButton::new(c.min_height(metrics.button_height), metrics.cancel_corner_radius)
        });
        Self {
            metrics,
            sections,
            cancel,
            content_background: palette.background,
            has_content,
            viewport: Size::ZERO,
            sections_rect: Rect::ZERO,
            cancel_rect: None,
        }
    }

    pub fn from_config(
        config: &CupertinoConfig,
        content: Option<Box<dyn LayoutNode>>,
        actions: Vec<ActionNode>,
        cancel: Option<ActionNode>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            config.sheet.clone(),
            config.sheet_divider_thickness()?,
            content,
            actions,
            cancel,
        ))
    }

    pub fn metrics(&self) -> &SheetMetrics {
        &self.metrics
    }

    pub fn sections(&self) -> &SheetSections {
        &self.sections
    }

    pub fn group(&self) -> &ButtonGroup {
        self.sections.actions().child()
    }

    pub fn group_mut(&mut self) -> &mut ButtonGroup {
        self.sections.actions_mut().child_mut()
    }

    pub fn cancel_button(&self) -> Option<&CancelButton> {
        self.cancel.as_ref()
    }

    /// Frame of the rounded card (content + actions) in surface coordinates.
    pub fn sections_rect(&self) -> Rect {
        self.sections_rect
    }

    pub fn cancel_rect(&self) -> Option<Rect> {
        self.cancel_rect
    }

    /// Card width for `viewport`: the short side in landscape, minus the
    /// horizontal edge padding on both sides.
    pub fn sheet_width(&self, viewport: Size) -> f32 {
        let side = match Orientation::of(viewport) {
            Orientation::Portrait => viewport.width,
            Orientation::Landscape => viewport.height,
        };
        let width = side - 2.0 * self.metrics.edge_horizontal_padding;
        width
            .min(viewport.width - 2.0 * self.metrics.edge_horizontal_padding)
            .max(0.0)
    }

    fn cancel_gap(&self) -> f32 {
        if self.has_content || !self.group().is_empty() {
            self.metrics.cancel_button_padding
        } else {
            0.0
        }
    }

    /// Actions: position in the group's coordinates, or `None` if the
    /// point is not over the actions section.
    fn group_position(&self, position: Vec2) -> Option<Vec2> {
        let local = position - self.sections_rect.origin();
        let actions_rect = self.sections.actions_rect();
        if !actions_rect.contains(local) {
            return None;
        }
        let in_region = local - actions_rect.origin();
        Some(self.sections.actions().child_position(in_region))
    }

    /// Resolves a surface position to the part of the sheet under it.
    pub fn hit_test_sheet(&self, position: Vec2) -> Option<SheetHit> {
        if let (Some(rect), Some(cancel)) = (self.cancel_rect, &self.cancel)
            && rect.contains(position)
        {
            return cancel
                .hit_test(position - rect.origin())
                .then_some(SheetHit::Cancel);
        }
        if !self.sections_rect.contains(position) {
            return None;
        }
        let local = position - self.sections_rect.origin();
        match self.sections.hit_test_section(local)? {
            Section::Content => Some(SheetHit::Content),
            Section::Actions => {
                let at = self.group_position(position)?;
                self.group().hit_test_action(at).map(SheetHit::Action)
            }
        }
    }

    /// Presses whatever is under `position` and releases everything else.
    pub fn press_at(&mut self, position: Vec2) -> (Option<SheetHit>, Invalidation) {
        let hit = self.hit_test_sheet(position);
        let mut inv = Invalidation::empty();
        let group = self.group_mut();
        for i in 0..group.len() {
            inv |= group.set_pressed(i, hit == Some(SheetHit::Action(i)));
        }
        if let Some(cancel) = &mut self.cancel {
            inv |= cancel.set_pressed(hit == Some(SheetHit::Cancel));
        }
        (hit, inv)
    }

    pub fn release_all(&mut self) -> Invalidation {
        let mut inv = self.group_mut().release_all();
        if let Some(cancel) = &mut self.cancel {
            inv |= cancel.set_pressed(false);
        }
        inv
    }

    pub fn scroll_actions_by(&mut self, delta: f32) -> f32 {
        self.sections.actions_mut().scroll_by(delta)
    }

    pub fn scroll_content_by(&mut self, delta: f32) -> f32 {
        self.sections.content_mut().scroll_by(delta)
    }
}

impl Intrinsics for ActionSheetSurface {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.max_intrinsic_width(height)
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        let cancel = self
            .cancel
            .as_ref()
            .map_or(0.0, |c| finite_or_zero(c.max_intrinsic_width(height)));
        finite_or_zero(self.sections.max_intrinsic_width(height)).max(cancel)
            + 2.0 * self.metrics.edge_horizontal_padding
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.height_for(IntrinsicSize::Min, width)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.height_for(IntrinsicSize::Max, width)
    }
}

impl ActionSheetSurface {
    fn height_for(&self, kind: IntrinsicSize, width: f32) -> f32 {
        let inner = (width - 2.0 * self.metrics.edge_horizontal_padding).max(0.0);
        let cancel = self.cancel.as_ref().map_or(0.0, |c| {
            self.cancel_gap() + finite_or_zero(c.intrinsic_height(kind, inner))
        });
        finite_or_zero(
            self.sections.intrinsic_height(kind, inner)
                + cancel
                + 2.0 * self.metrics.edge_vertical_padding,
        )
    }
}

impl LayoutNode for ActionSheetSurface {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let viewport = Size::new(
            if constraints.has_bounded_width() {
                constraints.max_width
            } else {
                self.max_intrinsic_width(f32::INFINITY)
            },
            if constraints.has_bounded_height() {
                constraints.max_height
            } else {
                f32::INFINITY
            },
        );
        let width = self.sheet_width(viewport);
        let available = (viewport.height - 2.0 * self.metrics.edge_vertical_padding).max(0.0);

        let gap = self.cancel_gap();
        let cancel_size = self.cancel.as_mut().map(|c| {
            c.layout(BoxConstraints::tight_for_width(width).copy_with_height(0.0, available))
        });
        let cancel_total = cancel_size.map_or(0.0, |s| gap + s.height);

        let sections_max = (available - cancel_total).max(0.0);
        let sections = self.sections.layout(BoxConstraints {
            min_width: width,
            max_width: width,
            min_height: 0.0,
            max_height: sections_max,
        });

        let viewport_height = if viewport.height.is_finite() {
            viewport.height
        } else {
            sections.height + cancel_total + 2.0 * self.metrics.edge_vertical_padding
        };
        let x = (viewport.width - width) / 2.0;
        let bottom = viewport_height - self.metrics.edge_vertical_padding;
        let top = bottom - cancel_total - sections.height;

        self.sections_rect = Rect::from_ltwh(x, top, width, sections.height);
        self.cancel_rect =
            cancel_size.map(|s| Rect::from_ltwh(x, bottom - s.height, s.width, s.height));
        self.viewport = Size::new(viewport.width, viewport_height);
        log::debug!(
            "action sheet {:?}: card {:?}, cancel {:?}",
            Orientation::of(self.viewport),
            self.sections_rect,
            self.cancel_rect
        );
        self.viewport
    }

    fn size(&self) -> Size {
        self.viewport
    }

    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        let card = self.sections_rect.translate(offset);
        canvas.push_clip(card, self.metrics.corner_radius);
        let content = self.sections.content_rect().translate(card.origin());
        canvas.draw_rect(content, self.content_background);
        self.sections.paint(canvas, card.origin());
        canvas.pop_clip();

        if let (Some(cancel), Some(rect)) = (&self.cancel, self.cancel_rect) {
            cancel.paint(canvas, offset + rect.origin());
        }
    }

    fn hit_test(&self, position: Vec2) -> bool {
        self.hit_test_sheet(position).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SizedLeaf;

    fn action() -> ActionNode {
        ActionNode::new(SizedLeaf::new(80.0, 20.0))
    }

    fn sheet(with_content: bool, actions: usize, cancel: bool) -> ActionSheetSurface {
        let content: Option<Box<dyn LayoutNode>> =
            with_content.then(|| Box::new(SizedLeaf::new(200.0, 60.0)) as Box<dyn LayoutNode>);
        ActionSheetSurface::new(
            SheetMetrics::default(),
            1.0,
            content,
            (0..actions).map(|_| action()).collect(),
            cancel.then(action),
        )
    }

    #[test]
    fn width_follows_orientation() {
        let s = sheet(false, 1, false);
        assert_eq!(s.sheet_width(Size::new(375.0, 812.0)), 359.0);
        assert_eq!(s.sheet_width(Size::new(812.0, 375.0)), 359.0);
    }

    #[test]
    fn bottom_aligned_with_cancel_gap() {
        let mut s = sheet(true, 2, true);
        s.layout(BoxConstraints::loose(Size::new(375.0, 812.0)));
        let cancel = s.cancel_rect().unwrap();
        assert_eq!(cancel, Rect::from_ltwh(8.0, 812.0 - 10.0 - 56.0, 359.0, 56.0));
        let card = s.sections_rect();
        // content 60 + divider 1 + two actions (56 + 1 + 56)
        assert_eq!(card.h, 174.0);
        assert_eq!(card.bottom(), cancel.y - 8.0);
    }

    #[test]
    fn cancel_alone_has_no_gap() {
        let mut s = sheet(false, 0, true);
        s.layout(BoxConstraints::loose(Size::new(375.0, 812.0)));
        assert_eq!(s.sections_rect().h, 0.0);
        assert_eq!(s.sections_rect().y, s.cancel_rect().unwrap().y);
    }

    #[test]
    fn hits_resolve_to_parts() {
        let mut s = sheet(true, 2, true);
        s.layout(BoxConstraints::loose(Size::new(375.0, 812.0)));
        let card = s.sections_rect();
        assert_eq!(
            s.hit_test_sheet(Vec2::new(20.0, card.y + 10.0)),
            Some(SheetHit::Content)
        );
        assert_eq!(
            s.hit_test_sheet(Vec2::new(20.0, card.y + 61.0 + 10.0)),
            Some(SheetHit::Action(0))
        );
        assert_eq!(
            s.hit_test_sheet(Vec2::new(20.0, card.y + 61.0 + 57.0 + 10.0)),
            Some(SheetHit::Action(1))
        );
        let cancel = s.cancel_rect().unwrap();
        assert_eq!(
            s.hit_test_sheet(Vec2::new(20.0, cancel.y + 1.0)),
            Some(SheetHit::Cancel)
        );
        assert_eq!(s.hit_test_sheet(Vec2::new(20.0, 5.0)), None);
    }

    #[test]
    fn press_and_release() {
        let mut s = sheet(true, 2, true);
        s.layout(BoxConstraints::loose(Size::new(375.0, 812.0)));
        let cancel = s.cancel_rect().unwrap();
        let (hit, inv) = s.press_at(Vec2::new(20.0, cancel.y + 1.0));
        assert_eq!(hit, Some(SheetHit::Cancel));
        assert_eq!(inv, Invalidation::PAINT);
        assert_eq!(
            s.cancel_button().unwrap().fill_color(),
            ActionPalette::CANCEL_BUTTON.pressed
        );
        assert_eq!(s.release_all(), Invalidation::PAINT);
        assert!(!s.cancel_button().unwrap().is_pressed());
    }

    #[test]
    fn paint_is_balanced_and_clipped() {
        let mut s = sheet(true, 3, true);
        s.layout(BoxConstraints::loose(Size::new(375.0, 812.0)));
        let mut scene = Scene::default();
        s.paint(&mut scene, Vec2::ZERO);
        assert!(scene.is_balanced());
        assert!(matches!(
            scene.nodes[0],
            SceneNode::PushClip { radius, .. } if radius == 12.0
        ));
    }
}
