//! # Alert dialog surface
//!
//! A centred card of fixed width: content on top, actions below. Two short
//! actions share a row; anything else stacks. When the text scale factor
//! goes past the regular range the card widens and the sections switch to
//! the accessibility layout.

use cupola_core::*;

use crate::{
    ActionNode, ActionPalette, ButtonGroup, EmptyNode, ScrollRegion, Section,
    SectionLayoutMode, SectionPair, StackPolicy,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogHit {
    Content,
    Action(usize),
}

pub type DialogSections =
    SectionPair<ScrollRegion<Box<dyn LayoutNode>>, ScrollRegion<ButtonGroup>>;

pub struct AlertDialogSurface {
    metrics: DialogMetrics,
    text_scale_factor: f32,
    sections: DialogSections,
    surface_color: Color,
    viewport: Size,
    frame: Rect,
}

impl std::fmt::Debug for AlertDialogSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertDialogSurface")
            .field("actions", &self.group().len())
            .field("text_scale_factor", &self.text_scale_factor)
            .field("frame", &self.frame)
            .finish()
    }
}

impl AlertDialogSurface {
    pub fn new(
        metrics: DialogMetrics,
        divider_thickness: f32,
        text_scale_factor: f32,
        content: Option<Box<dyn LayoutNode>>,
        actions: Vec<ActionNode>,
    ) -> Self {
        let palette = ActionPalette::DIALOG_LIGHT;
        let content = content.unwrap_or_else(|| Box::new(EmptyNode));
        let group = ButtonGroup::new(StackPolicy::alert_dialog(), divider_thickness)
            .with_palette(palette)
            .with_actions(
                actions
                    .into_iter()
                    .map(|a| a.min_height(metrics.min_button_height)),
            );
        let sections = SectionPair::new(
            ScrollRegion::new(content),
            ScrollRegion::new(group),
            divider_thickness,
        )
        .divider_color(palette.divider);
        let mut dialog = Self {
            metrics,
            text_scale_factor,
            sections,
            surface_color: palette.background,
            viewport: Size::ZERO,
            frame: Rect::ZERO,
        };
        let mode = dialog.section_mode();
        let _ = dialog.sections.set_mode(mode);
        dialog
    }

    pub fn from_config(
        config: &CupertinoConfig,
        content: Option<Box<dyn LayoutNode>>,
        actions: Vec<ActionNode>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            config.dialog.clone(),
            config.dialog_divider_thickness()?,
            config.text_scale_factor,
            content,
            actions,
        ))
    }

    /// Switches every paint (surface, pressed, dividers) to `palette`.
    pub fn set_palette(&mut self, palette: ActionPalette) -> Invalidation {
        let mut inv = self.group_mut().set_palette(palette);
        inv |= self.sections.set_divider_color(palette.divider);
        if self.surface_color != palette.background {
            self.surface_color = palette.background;
            inv |= Invalidation::PAINT;
        }
        inv
    }

    pub fn metrics(&self) -> &DialogMetrics {
        &self.metrics
    }

    pub fn sections(&self) -> &DialogSections {
        &self.sections
    }

    pub fn group(&self) -> &ButtonGroup {
        self.sections.actions().child()
    }

    pub fn group_mut(&mut self) -> &mut ButtonGroup {
        self.sections.actions_mut().child_mut()
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn is_accessibility_mode(&self) -> bool {
        self.text_scale_factor > self.metrics.max_regular_text_scale
    }

    pub fn dialog_width(&self) -> f32 {
        if self.is_accessibility_mode() {
            self.metrics.accessibility_width
        } else {
            self.metrics.width
        }
    }

    fn section_mode(&self) -> SectionLayoutMode {
        if self.is_accessibility_mode() {
            SectionLayoutMode::Accessibility
        } else {
            SectionLayoutMode::Regular
        }
    }

    pub fn set_text_scale_factor(&mut self, factor: f32) -> Result<Invalidation> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidTextScale(factor));
        }
        if factor == self.text_scale_factor {
            return Ok(Invalidation::empty());
        }
        let was = self.is_accessibility_mode();
        self.text_scale_factor = factor;
        let mode = self.section_mode();
        let _ = self.sections.set_mode(mode);
        if was != self.is_accessibility_mode() {
            log::debug!("alert dialog accessibility mode: {}", !was);
        }
        // Labels change size with the text scale either way.
        Ok(Invalidation::LAYOUT)
    }

    pub fn hit_test_dialog(&self, position: Vec2) -> Option<DialogHit> {
        if !self.frame.contains(position) {
            return None;
        }
        let local = position - self.frame.origin();
        match self.sections.hit_test_section(local)? {
            Section::Content => Some(DialogHit::Content),
            Section::Actions => {
                let actions_rect = self.sections.actions_rect();
                let in_region = local - actions_rect.origin();
                let at = self.sections.actions().child_position(in_region);
                self.group().hit_test_action(at).map(DialogHit::Action)
            }
        }
    }

    pub fn press_at(&mut self, position: Vec2) -> (Option<DialogHit>, Invalidation) {
        let hit = self.hit_test_dialog(position);
        let group = self.group_mut();
        let mut inv = Invalidation::empty();
        for i in 0..group.len() {
            inv |= group.set_pressed(i, hit == Some(DialogHit::Action(i)));
        }
        (hit, inv)
    }

    pub fn release_all(&mut self) -> Invalidation {
        self.group_mut().release_all()
    }

    pub fn scroll_actions_by(&mut self, delta: f32) -> f32 {
        self.sections.actions_mut().scroll_by(delta)
    }

    pub fn scroll_content_by(&mut self, delta: f32) -> f32 {
        self.sections.content_mut().scroll_by(delta)
    }

    fn vertical_reserve(&self) -> f32 {
        2.0 * (self.metrics.inset_vertical + self.metrics.edge_padding)
    }
}

impl Intrinsics for AlertDialogSurface {
    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.dialog_width() + 2.0 * self.metrics.inset_horizontal
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.dialog_width() + 2.0 * self.metrics.inset_horizontal
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        finite_or_zero(self.sections.min_intrinsic_height(self.dialog_width()))
            + self.vertical_reserve()
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        finite_or_zero(self.sections.max_intrinsic_height(self.dialog_width()))
            + self.vertical_reserve()
    }
}

impl LayoutNode for AlertDialogSurface {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let available_width = if constraints.has_bounded_width() {
            (constraints.max_width - 2.0 * self.metrics.inset_horizontal).max(0.0)
        } else {
            self.dialog_width()
        };
        let width = self.dialog_width().min(available_width);
        let available_height = if constraints.has_bounded_height() {
            (constraints.max_height - self.vertical_reserve()).max(0.0)
        } else {
            f32::INFINITY
        };

        let card = self.sections.layout(BoxConstraints {
            min_width: width,
            max_width: width,
            min_height: 0.0,
            max_height: available_height,
        });

        let viewport = Size::new(
            if constraints.has_bounded_width() {
                constraints.max_width
            } else {
                width + 2.0 * self.metrics.inset_horizontal
            },
            if constraints.has_bounded_height() {
                constraints.max_height
            } else {
                card.height + self.vertical_reserve()
            },
        );
        self.frame = Rect::from_ltwh(
            (viewport.width - card.width) / 2.0,
            (viewport.height - card.height) / 2.0,
            card.width,
            card.height,
        );
        self.viewport = viewport;
        log::debug!(
            "alert dialog {:?} frame {:?} ({} actions)",
            self.group().arrangement(),
            self.frame,
            self.group().len()
        );
        viewport
    }

    fn size(&self) -> Size {
        self.viewport
    }

    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        let frame = self.frame.translate(offset);
        canvas.push_clip(frame, self.metrics.corner_radius);
        let content = self.sections.content_rect().translate(frame.origin());
        canvas.draw_rect(content, self.surface_color);
        self.sections.paint(canvas, frame.origin());
        canvas.pop_clip();
    }

    fn hit_test(&self, position: Vec2) -> bool {
        self.hit_test_dialog(position).is_some()
    }
}
