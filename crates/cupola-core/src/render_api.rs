use crate::{Color, Path, Rect, Vec2};

/// 2-D drawing surface that layout nodes paint into.
///
/// Coordinates are relative to the innermost `push_translate`.
pub trait Canvas {
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_rrect(&mut self, rect: Rect, radius: f32, color: Color);
    fn draw_border(&mut self, rect: Rect, width: f32, color: Color);
    fn draw_path(&mut self, path: &Path, color: Color);
    fn push_translate(&mut self, offset: Vec2);
    fn pop_translate(&mut self);
    fn push_clip(&mut self, rect: Rect, radius: f32);
    fn pop_clip(&mut self);
}
