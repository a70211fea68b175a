pub use crate::{
    BoxConstraints, Canvas, Color, CupertinoConfig, FillRule, IntrinsicSize, Intrinsics,
    Invalidation, LayoutNode, Path, Rect, Scene, SceneNode, Size, Vec2, finite_or_zero,
};
