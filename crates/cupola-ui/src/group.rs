//! # ButtonGroup
//!
//! The layout unit of an action sheet or alert dialog: an ordered list of
//! actions that arranges itself per [`StackPolicy`], draws one shared
//! background with hairlines between actions, and routes pointer positions
//! back to an action index.
//!
//! Press state lives in a [`PressedMask`] owned by the group (or passed in
//! through [`ButtonGroup::paint_with_mask`]). Changing it only ever asks for
//! a repaint.
//!
//! ```
//! use cupola_core::*;
//! use cupola_ui::*;
//!
//! let mut group = ButtonGroup::new(StackPolicy::action_sheet(false), 1.0);
//! for _ in 0..3 {
//!     group.push_action(ActionNode::new(SizedLeaf::new(80.0, 56.0)));
//! }
//! assert_eq!(group.max_intrinsic_height(300.0), 170.0);
//! assert_eq!(group.min_intrinsic_height(300.0), 85.0);
//!
//! group.layout(BoxConstraints::tight_for_width(300.0));
//! assert_eq!(group.set_pressed(1, true), Invalidation::PAINT);
//! assert!(group.divider_slots().iter().all(|d| !d.visible));
//! ```

use cupola_core::*;
use smallvec::SmallVec;

use crate::{
    ActionNode, ActionPalette, ActionRegions, Arrangement, DividerSlot, GroupLayout, PressedMask,
    StackPolicy, composite, divider_slots, hit_test_actions, layout_actions, paint_regions,
};

#[derive(Debug)]
pub struct ButtonGroup {
    children: Vec<ActionNode>,
    policy: StackPolicy,
    divider_thickness: f32,
    palette: ActionPalette,
    pressed: PressedMask,
    layout: Option<GroupLayout>,
    dirty: Invalidation,
}

fn sanitize_thickness(thickness: f32) -> f32 {
    debug_assert!(
        thickness.is_finite() && thickness >= 0.0,
        "divider thickness must be finite and non-negative, got {thickness}"
    );
    if thickness.is_finite() && thickness >= 0.0 {
        thickness
    } else {
        log::warn!("ignoring invalid divider thickness {thickness}, using 0");
        0.0
    }
}

impl ButtonGroup {
    pub fn new(policy: StackPolicy, divider_thickness: f32) -> Self {
        Self {
            children: Vec::new(),
            policy,
            divider_thickness: sanitize_thickness(divider_thickness),
            palette: ActionPalette::default(),
            pressed: PressedMask::default(),
            layout: None,
            dirty: Invalidation::LAYOUT,
        }
    }

    pub fn with_palette(mut self, palette: ActionPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = ActionNode>) -> Self {
        self.set_actions(actions);
        self
    }

    fn mark(&mut self, inv: Invalidation) -> Invalidation {
        self.dirty |= inv;
        inv
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn actions(&self) -> &[ActionNode] {
        &self.children
    }

    pub fn action(&self, index: usize) -> Option<&ActionNode> {
        self.children.get(index)
    }

    pub fn policy(&self) -> StackPolicy {
        self.policy
    }

    pub fn divider_thickness(&self) -> f32 {
        self.divider_thickness
    }

    pub fn palette(&self) -> &ActionPalette {
        &self.palette
    }

    pub fn pressed(&self) -> &PressedMask {
        &self.pressed
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed.is_pressed(index)
    }

    /// Pending work accumulated since the last layout.
    pub fn invalidation(&self) -> Invalidation {
        self.dirty
    }

    pub fn last_layout(&self) -> Option<&GroupLayout> {
        self.layout.as_ref()
    }

    pub fn arrangement(&self) -> Option<Arrangement> {
        self.layout.as_ref().map(|l| l.arrangement)
    }

    /// Rect of action `index` in group coordinates from the last layout.
    pub fn action_rect(&self, index: usize) -> Option<Rect> {
        self.layout.as_ref()?.slot(index)
    }

    pub fn push_action(&mut self, action: ActionNode) -> Invalidation {
        self.children.push(action);
        self.pressed.resize(self.children.len());
        self.mark(Invalidation::LAYOUT)
    }

    pub fn insert_action(&mut self, index: usize, action: ActionNode) -> Invalidation {
        let index = index.min(self.children.len());
        self.children.insert(index, action);
        self.pressed.insert(index);
        self.mark(Invalidation::LAYOUT)
    }

    pub fn remove_action(&mut self, index: usize) -> Invalidation {
        if index >= self.children.len() {
            log::warn!(
                "remove_action({index}) out of range for {} actions",
                self.children.len()
            );
            return Invalidation::empty();
        }
        self.children.remove(index);
        self.pressed.remove(index);
        self.mark(Invalidation::LAYOUT)
    }

    /// Replaces the whole list; all presses are released.
    pub fn set_actions(&mut self, actions: impl IntoIterator<Item = ActionNode>) -> Invalidation {
        self.children = actions.into_iter().collect();
        self.pressed = PressedMask::new(self.children.len());
        self.mark(Invalidation::LAYOUT)
    }

    /// Mutates an action's content. Its intrinsic size may have changed, so
    /// this always asks for a relayout.
    pub fn update_action(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut ActionNode),
    ) -> Invalidation {
        match self.children.get_mut(index) {
            Some(action) => {
                f(action);
                self.mark(Invalidation::LAYOUT)
            }
            None => Invalidation::empty(),
        }
    }

    pub fn set_pressed(&mut self, index: usize, pressed: bool) -> Invalidation {
        if index >= self.children.len() {
            log::warn!("set_pressed({index}) out of range for {} actions", self.children.len());
            return Invalidation::empty();
        }
        if self.pressed.set(index, pressed) {
            log::trace!("action {index} pressed={pressed}");
            self.mark(Invalidation::PAINT)
        } else {
            Invalidation::empty()
        }
    }

    pub fn release_all(&mut self) -> Invalidation {
        if self.pressed.clear() {
            self.mark(Invalidation::PAINT)
        } else {
            Invalidation::empty()
        }
    }

    pub fn set_divider_thickness(&mut self, thickness: f32) -> Invalidation {
        let thickness = sanitize_thickness(thickness);
        if thickness == self.divider_thickness {
            return Invalidation::empty();
        }
        self.divider_thickness = thickness;
        self.mark(Invalidation::LAYOUT)
    }

    /// One physical pixel at `device_pixel_ratio`.
    pub fn set_divider_thickness_for_ratio(&mut self, device_pixel_ratio: f32) -> Result<Invalidation> {
        let thickness = hairline_thickness(device_pixel_ratio)?;
        Ok(self.set_divider_thickness(thickness))
    }

    pub fn set_has_cancel_action(&mut self, has_cancel_action: bool) -> Invalidation {
        if self.policy.has_cancel_action == has_cancel_action {
            return Invalidation::empty();
        }
        self.policy.has_cancel_action = has_cancel_action;
        self.mark(Invalidation::LAYOUT)
    }

    pub fn set_policy(&mut self, policy: StackPolicy) -> Invalidation {
        if self.policy == policy {
            return Invalidation::empty();
        }
        self.policy = policy;
        self.mark(Invalidation::LAYOUT)
    }

    pub fn set_palette(&mut self, palette: ActionPalette) -> Invalidation {
        if self.palette == palette {
            return Invalidation::empty();
        }
        self.palette = palette;
        self.mark(Invalidation::PAINT)
    }

    pub fn divider_slots(&self) -> SmallVec<[DividerSlot; 8]> {
        match &self.layout {
            Some(layout) => divider_slots(layout, &self.pressed),
            None => SmallVec::new(),
        }
    }

    /// Fill regions for the current press state, `None` before layout.
    pub fn regions(&self) -> Option<ActionRegions> {
        self.layout.as_ref().map(|l| composite(l, &self.pressed))
    }

    /// Paints with an externally owned press mask instead of the group's own.
    pub fn paint_with_mask(&self, canvas: &mut dyn Canvas, offset: Vec2, pressed: &PressedMask) {
        debug_assert!(self.layout.is_some(), "ButtonGroup painted before layout");
        let Some(layout) = &self.layout else {
            log::warn!("ButtonGroup painted before layout; skipping");
            return;
        };
        debug_assert_eq!(
            layout.len(),
            self.children.len(),
            "ButtonGroup painted with a stale layout"
        );
        if layout.len() != self.children.len() {
            log::warn!(
                "ButtonGroup layout has {} slots for {} actions; skipping paint",
                layout.len(),
                self.children.len()
            );
            return;
        }

        let regions = composite(layout, pressed);
        paint_regions(canvas, &regions, &self.palette, offset);

        for (child, slot) in self.children.iter().zip(&layout.slots) {
            child.paint(canvas, offset + slot.origin());
        }
    }

    /// Index of the action under `position` (group coordinates).
    pub fn hit_test_action(&self, position: Vec2) -> Option<usize> {
        let layout = self.layout.as_ref()?;
        if layout.len() != self.children.len() {
            log::warn!("hit test against a stale ButtonGroup layout");
            return None;
        }
        hit_test_actions(&self.children, &layout.slots, position)
    }

    /// Presses whatever action is under `position`, releasing the others.
    pub fn press_at(&mut self, position: Vec2) -> (Option<usize>, Invalidation) {
        let hit = self.hit_test_action(position);
        let mut inv = Invalidation::empty();
        for i in 0..self.children.len() {
            inv |= self.set_pressed(i, Some(i) == hit);
        }
        (hit, inv)
    }
}

impl Intrinsics for ButtonGroup {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.children
            .iter()
            .map(|c| finite_or_zero(c.min_intrinsic_width(height)))
            .fold(0.0, f32::max)
    }

    /// Widest action, or the width at which two actions pair up when the
    /// policy allows a row.
    fn max_intrinsic_width(&self, height: f32) -> f32 {
        let widths = self
            .children
            .iter()
            .map(|c| finite_or_zero(c.max_intrinsic_width(height)));
        match self.children.len() {
            2 if self.policy.allow_paired_row => widths.sum::<f32>() + self.divider_thickness,
            _ => widths.fold(0.0, f32::max),
        }
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.policy
            .min_intrinsic_height(&self.children, width, self.divider_thickness)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.policy
            .max_intrinsic_height(&self.children, width, self.divider_thickness)
    }
}

impl LayoutNode for ButtonGroup {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let layout = layout_actions(
            &mut self.children,
            &self.policy,
            constraints,
            self.divider_thickness,
        );
        let size = layout.size;
        if self.arrangement() != Some(layout.arrangement) {
            log::debug!(
                "button group switched to {:?} with {} actions",
                layout.arrangement,
                self.children.len()
            );
        }
        self.layout = Some(layout);
        self.dirty = Invalidation::empty();
        size
    }

    fn size(&self) -> Size {
        self.layout.as_ref().map(|l| l.size).unwrap_or(Size::ZERO)
    }

    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        self.paint_with_mask(canvas, offset, &self.pressed);
    }

    fn hit_test(&self, position: Vec2) -> bool {
        self.hit_test_action(position).is_some()
    }
}
