use crate::{Canvas, Color, Path, Rect, Vec2};

/// Renderable scene: an ordered display list recorded through [`Canvas`].
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
    translate_depth: usize,
    clip_depth: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Path {
        path: Path,
        color: Color,
    },
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
    PushTranslate {
        offset: Vec2,
    },
    PopTranslate,
}

impl Scene {
    pub fn new(clear_color: Color) -> Self {
        Self {
            clear_color,
            ..Default::default()
        }
    }

    /// True when every push has been matched by a pop.
    pub fn is_balanced(&self) -> bool {
        self.translate_depth == 0 && self.clip_depth == 0
    }

    /// Resolves translations into absolute coordinates and drops the
    /// translate markers. Clip markers are kept (with absolute rects).
    pub fn flattened(&self) -> Vec<SceneNode> {
        let mut stack: Vec<Vec2> = vec![Vec2::ZERO];
        let mut out = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let at = stack.last().copied().unwrap_or_default();
            match node {
                SceneNode::PushTranslate { offset } => stack.push(at + *offset),
                SceneNode::PopTranslate => {
                    if stack.len() > 1 {
                        stack.pop();
                    }
                }
                SceneNode::Rect {
                    rect,
                    color,
                    radius,
                } => out.push(SceneNode::Rect {
                    rect: rect.translate(at),
                    color: *color,
                    radius: *radius,
                }),
                SceneNode::Border {
                    rect,
                    color,
                    width,
                    radius,
                } => out.push(SceneNode::Border {
                    rect: rect.translate(at),
                    color: *color,
                    width: *width,
                    radius: *radius,
                }),
                SceneNode::Path { path, color } => out.push(SceneNode::Path {
                    path: path.translate(at),
                    color: *color,
                }),
                SceneNode::PushClip { rect, radius } => out.push(SceneNode::PushClip {
                    rect: rect.translate(at),
                    radius: *radius,
                }),
                SceneNode::PopClip => out.push(SceneNode::PopClip),
            }
        }
        out
    }
}

impl Canvas for Scene {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.draw_rrect(rect, 0.0, color);
    }

    fn draw_rrect(&mut self, rect: Rect, radius: f32, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.nodes.push(SceneNode::Rect {
            rect,
            color,
            radius,
        });
    }

    fn draw_border(&mut self, rect: Rect, width: f32, color: Color) {
        self.nodes.push(SceneNode::Border {
            rect,
            color,
            width,
            radius: 0.0,
        });
    }

    fn draw_path(&mut self, path: &Path, color: Color) {
        if path.is_empty() {
            return;
        }
        self.nodes.push(SceneNode::Path {
            path: path.clone(),
            color,
        });
    }

    fn push_translate(&mut self, offset: Vec2) {
        self.translate_depth += 1;
        self.nodes.push(SceneNode::PushTranslate { offset });
    }

    fn pop_translate(&mut self) {
        debug_assert!(self.translate_depth > 0, "pop_translate without push");
        self.translate_depth = self.translate_depth.saturating_sub(1);
        self.nodes.push(SceneNode::PopTranslate);
    }

    fn push_clip(&mut self, rect: Rect, radius: f32) {
        self.clip_depth += 1;
        self.nodes.push(SceneNode::PushClip { rect, radius });
    }

    fn pop_clip(&mut self) {
        debug_assert!(self.clip_depth > 0, "pop_clip without push");
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.nodes.push(SceneNode::PopClip);
    }
}
