use cupola_core::*;

/// One interactive button in an action group.
///
/// The content node (label, icon, padding) belongs to the caller; the group
/// only lays it out, positions it and paints it. Press state is not stored
/// here, see [`crate::PressedMask`].
pub struct ActionNode {
    content: Box<dyn LayoutNode>,
    label: Option<String>,
    min_height: f32,
}

impl ActionNode {
    pub fn new(content: impl LayoutNode + 'static) -> Self {
        Self::from_boxed(Box::new(content))
    }

    pub fn from_boxed(content: Box<dyn LayoutNode>) -> Self {
        Self {
            content,
            label: None,
            min_height: 0.0,
        }
    }

    /// Debug label shown by devtools dumps.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Floor for the button's height, e.g. the platform's touch target.
    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = finite_or_zero(height).max(0.0);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn content(&self) -> &dyn LayoutNode {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> &mut dyn LayoutNode {
        self.content.as_mut()
    }
}

impl std::fmt::Debug for ActionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionNode")
            .field("label", &self.label)
            .field("min_height", &self.min_height)
            .field("size", &self.content.size())
            .finish()
    }
}

impl Intrinsics for ActionNode {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.content.min_intrinsic_width(height)
    }
    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.content.max_intrinsic_width(height)
    }
    fn min_intrinsic_height(&self, width: f32) -> f32 {
        finite_or_zero(self.content.min_intrinsic_height(width)).max(self.min_height)
    }
    fn max_intrinsic_height(&self, width: f32) -> f32 {
        finite_or_zero(self.content.max_intrinsic_height(width)).max(self.min_height)
    }
}

impl LayoutNode for ActionNode {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let floor = self.min_height.clamp(constraints.min_height, constraints.max_height);
        self.content
            .layout(constraints.copy_with_height(floor, constraints.max_height))
    }
    fn size(&self) -> Size {
        self.content.size()
    }
    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        self.content.paint(canvas, offset)
    }
    fn hit_test(&self, position: Vec2) -> bool {
        self.content.hit_test(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SizedLeaf;

    #[test]
    fn min_height_raises_short_content() {
        let mut action = ActionNode::new(SizedLeaf::new(60.0, 20.0)).min_height(45.0);
        assert_eq!(action.min_intrinsic_height(270.0), 45.0);
        assert_eq!(action.max_intrinsic_height(270.0), 45.0);
        let size = action.layout(BoxConstraints::tight_for_width(270.0));
        assert_eq!(size, Size::new(270.0, 45.0));
    }

    #[test]
    fn min_height_leaves_tall_content_alone() {
        let mut action = ActionNode::new(SizedLeaf::new(60.0, 80.0)).min_height(45.0);
        assert_eq!(action.max_intrinsic_height(270.0), 80.0);
        assert_eq!(action.layout(BoxConstraints::tight_for_width(270.0)).height, 80.0);
    }
}
