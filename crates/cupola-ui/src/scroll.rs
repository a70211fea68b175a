use cupola_core::*;

/// Vertical viewport over a single child.
///
/// The child is laid out with unbounded height; the region itself takes
/// whatever height the incoming constraints allow and clips the rest.
/// Intrinsic queries go straight to the child.
#[derive(Debug)]
pub struct ScrollRegion<N> {
    child: N,
    offset: f32,
    viewport: Size,
}

impl<N: LayoutNode> ScrollRegion<N> {
    pub fn new(child: N) -> Self {
        Self {
            child,
            offset: 0.0,
            viewport: Size::ZERO,
        }
    }

    pub fn child(&self) -> &N {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut N {
        &mut self.child
    }

    pub fn scroll_offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn max_scroll_offset(&self) -> f32 {
        (self.child.size().height - self.viewport.height).max(0.0)
    }

    pub fn can_scroll(&self) -> bool {
        self.max_scroll_offset() > 0.0
    }

    pub fn scroll_to(&mut self, offset: f32) -> Invalidation {
        let clamped = finite_or_zero(offset).clamp(0.0, self.max_scroll_offset());
        if clamped == self.offset {
            return Invalidation::empty();
        }
        self.offset = clamped;
        Invalidation::PAINT
    }

    /// Moves by `delta` and returns the part that could not be applied.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        let target = self.offset + finite_or_zero(delta);
        let _ = self.scroll_to(target);
        target - self.offset
    }

    /// Converts a viewport position into the child's coordinates.
    pub fn child_position(&self, position: Vec2) -> Vec2 {
        position + Vec2::new(0.0, self.offset)
    }
}

impl<N: LayoutNode> Intrinsics for ScrollRegion<N> {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.child.min_intrinsic_width(height)
    }
    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.child.max_intrinsic_width(height)
    }
    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.child.min_intrinsic_height(width)
    }
    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.child.max_intrinsic_height(width)
    }
}

impl<N: LayoutNode> LayoutNode for ScrollRegion<N> {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let child_constraints = constraints.copy_with_height(0.0, f32::INFINITY);
        let content = self.child.layout(child_constraints);
        self.viewport = constraints.constrain(content);
        self.offset = self.offset.clamp(0.0, self.max_scroll_offset());
        self.viewport
    }

    fn size(&self) -> Size {
        self.viewport
    }

    fn paint(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        canvas.push_clip(Rect::from_origin_size(offset, self.viewport), 0.0);
        canvas.push_translate(offset - Vec2::new(0.0, self.offset));
        self.child.paint(canvas, Vec2::ZERO);
        canvas.pop_translate();
        canvas.pop_clip();
    }

    fn hit_test(&self, position: Vec2) -> bool {
        Rect::from_size(self.viewport).contains(position)
            && self.child.hit_test(self.child_position(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SizedLeaf;

    fn region() -> ScrollRegion<SizedLeaf> {
        let mut region = ScrollRegion::new(SizedLeaf::new(100.0, 300.0));
        region.layout(BoxConstraints::loose(Size::new(100.0, 200.0)));
        region
    }

    #[test]
    fn viewport_is_clamped_but_content_is_not() {
        let region = region();
        assert_eq!(region.size(), Size::new(100.0, 200.0));
        assert_eq!(region.child().size(), Size::new(100.0, 300.0));
        assert_eq!(region.max_scroll_offset(), 100.0);
    }

    #[test]
    fn scroll_by_returns_leftover() {
        let mut region = region();
        assert_eq!(region.scroll_by(60.0), 0.0);
        assert_eq!(region.scroll_by(60.0), 20.0);
        assert_eq!(region.scroll_offset(), 100.0);
        assert_eq!(region.scroll_by(-150.0), -50.0);
        assert_eq!(region.scroll_offset(), 0.0);
    }

    #[test]
    fn relayout_reclamps_offset() {
        let mut region = region();
        region.scroll_to(100.0);
        region.layout(BoxConstraints::loose(Size::new(100.0, 280.0)));
        assert_eq!(region.scroll_offset(), 20.0);
    }

    #[test]
    fn paint_clips_and_shifts_content() {
        let mut region = ScrollRegion::new(SizedLeaf::new(100.0, 300.0).fill(Color::WHITE));
        region.layout(BoxConstraints::loose(Size::new(100.0, 200.0)));
        region.scroll_to(40.0);
        let mut scene = Scene::default();
        region.paint(&mut scene, Vec2::new(0.0, 10.0));
        assert!(scene.is_balanced());
        assert_eq!(
            scene.nodes[1],
            SceneNode::PushTranslate {
                offset: Vec2::new(0.0, -30.0)
            }
        );

        let flat = scene.flattened();
        assert_eq!(
            flat[0],
            SceneNode::PushClip {
                rect: Rect::from_ltwh(0.0, 10.0, 100.0, 200.0),
                radius: 0.0
            }
        );
        match &flat[1] {
            SceneNode::Rect { rect, .. } => assert_eq!(rect.y, -30.0),
            other => panic!("unexpected node {other:?}"),
        }
        assert_eq!(flat[2], SceneNode::PopClip);
    }

    #[test]
    fn hit_test_is_limited_to_viewport() {
        let mut region = region();
        region.scroll_to(50.0);
        assert!(region.hit_test(Vec2::new(5.0, 5.0)));
        assert_eq!(region.child_position(Vec2::new(5.0, 5.0)), Vec2::new(5.0, 55.0));
        assert!(!region.hit_test(Vec2::new(5.0, 250.0)));
    }
}
