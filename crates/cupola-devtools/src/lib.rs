use std::fmt::Write as _;

use web_time::Instant;

use cupola_core::{BoxConstraints, Canvas, Color, LayoutNode, Rect, Scene, Size, Vec2};
use cupola_ui::ButtonGroup;

/// One line per action and per divider slot, in child order.
pub fn describe_group(group: &ButtonGroup) -> String {
    let mut out = String::new();
    let Some(layout) = group.last_layout() else {
        let _ = writeln!(out, "group: {} actions, not laid out", group.len());
        return out;
    };
    let _ = writeln!(
        out,
        "group: {:?} {}x{} d={} ({} actions)",
        layout.arrangement,
        layout.size.width,
        layout.size.height,
        layout.divider_thickness,
        group.len()
    );
    for (i, rect) in layout.slots.iter().enumerate() {
        let label = group.action(i).and_then(|a| a.label()).unwrap_or("-");
        let _ = writeln!(
            out,
            "  action {i} [{label}] at ({}, {}) {}x{}{}",
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            if group.is_pressed(i) { " pressed" } else { "" }
        );
    }
    for slot in group.divider_slots() {
        let _ = writeln!(
            out,
            "  divider before {} at ({}, {}) {}x{} {}",
            slot.after,
            slot.rect.x,
            slot.rect.y,
            slot.rect.w,
            slot.rect.h,
            if slot.visible { "visible" } else { "suppressed" }
        );
    }
    out
}

/// Outlines the actions and divider slots of a laid-out group.
pub struct Overlay {
    pub action_color: Color,
    pub pressed_color: Color,
    pub divider_color: Color,
    pub suppressed_color: Color,
    pub width: f32,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            action_color: Color::from_hex("#44AAFF"),
            pressed_color: Color::from_hex("#FFAA44"),
            divider_color: Color::from_hex("#44FF88"),
            suppressed_color: Color::from_hex("#FF4466"),
            width: 1.0,
        }
    }
}

impl Overlay {
    /// `origin` is where the group was painted.
    pub fn draw(&self, canvas: &mut dyn Canvas, group: &ButtonGroup, origin: Vec2) {
        let Some(layout) = group.last_layout() else {
            return;
        };
        for (i, rect) in layout.slots.iter().enumerate() {
            let color = if group.is_pressed(i) {
                self.pressed_color
            } else {
                self.action_color
            };
            canvas.draw_border(rect.translate(origin), self.width, color);
        }
        for slot in group.divider_slots() {
            let color = if slot.visible {
                self.divider_color
            } else {
                self.suppressed_color
            };
            canvas.draw_border(slot.rect.translate(origin), self.width, color);
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub layout_ms: f32,
    pub scene_nodes: usize,
}

/// Runs `node.layout` and reports how long it took.
pub fn timed_layout<N: LayoutNode + ?Sized>(
    node: &mut N,
    constraints: BoxConstraints,
) -> (Size, f32) {
    let start = Instant::now();
    let size = node.layout(constraints);
    (size, start.elapsed().as_secs_f32() * 1000.0)
}

pub struct Hud {
    pub inspector_enabled: bool,
    pub hovered: Option<Rect>,
    pub overlay: Overlay,
    pub metrics: Option<Metrics>,
    frame_count: u64,
    last_frame: Option<Instant>,
    fps_smooth: f32,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            inspector_enabled: false,
            hovered: None,
            overlay: Overlay::default(),
            metrics: None,
            frame_count: 0,
            last_frame: None,
            fps_smooth: 0.0,
        }
    }

    pub fn toggle_inspector(&mut self) {
        self.inspector_enabled = !self.inspector_enabled;
    }

    pub fn set_hovered(&mut self, r: Option<Rect>) {
        self.hovered = r;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f32 {
        self.fps_smooth
    }

    fn tick(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        if let Some(prev) = self.last_frame.replace(now) {
            let dt = (now - prev).as_secs_f32();
            if dt > 0.0 {
                let fps = 1.0 / dt;
                // simple EMA
                let a = 0.2;
                self.fps_smooth = if self.fps_smooth == 0.0 {
                    fps
                } else {
                    (1.0 - a) * self.fps_smooth + a * fps
                };
            }
        }
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("frame: {}", self.frame_count),
            format!("fps: {:.1}", self.fps_smooth),
        ];
        if let Some(m) = &self.metrics {
            lines.push(format!("layout: {:.2} ms", m.layout_ms));
            lines.push(format!("nodes: {}", m.scene_nodes));
        }
        lines.join("  |  ")
    }

    pub fn overlay(&mut self, scene: &mut Scene, group: &ButtonGroup, origin: Vec2) {
        self.tick();
        self.overlay.draw(scene, group, origin);
        if let Some(r) = self.hovered {
            scene.draw_border(r, 2.0, Color::from_hex("#44AAFF"));
        }
        log::trace!("{}", self.summary());
    }
}

pub struct Inspector {
    pub hud: Hud,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self { hud: Hud::new() }
    }

    /// Records scene metrics and, when enabled, draws the overlay for
    /// `group` painted at `origin`.
    pub fn frame(&mut self, scene: &mut Scene, group: &ButtonGroup, origin: Vec2) {
        let layout_ms = self.hud.metrics.as_ref().map_or(0.0, |m| m.layout_ms);
        self.hud.metrics = Some(Metrics {
            layout_ms,
            scene_nodes: scene.flattened().len(),
        });
        if self.hud.inspector_enabled {
            self.hud.overlay(scene, group, origin);
        }
    }

    pub fn record_layout(&mut self, layout_ms: f32) {
        let scene_nodes = self.hud.metrics.as_ref().map_or(0, |m| m.scene_nodes);
        self.hud.metrics = Some(Metrics {
            layout_ms,
            scene_nodes,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupola_core::SceneNode;
    use cupola_ui::{ActionGroup, ActionNode, SizedLeaf, StackPolicy};

    fn group() -> ButtonGroup {
        let mut g = ActionGroup(
            StackPolicy::action_sheet(false),
            1.0,
            vec![
                ActionNode::new(SizedLeaf::new(80.0, 56.0)).labeled("Copy"),
                ActionNode::new(SizedLeaf::new(80.0, 56.0)).labeled("Share"),
                ActionNode::new(SizedLeaf::new(80.0, 56.0)),
            ],
        );
        g.layout(BoxConstraints::tight_for_width(300.0));
        g
    }

    #[test]
    fn describe_lists_actions_and_dividers() {
        let mut g = group();
        g.set_pressed(2, true);
        let text = describe_group(&g);
        assert!(text.starts_with("group: Stacked 300x170 d=1 (3 actions)"));
        assert!(text.contains("action 0 [Copy] at (0, 0) 300x56\n"));
        assert!(text.contains("action 2 [-] at (0, 114) 300x56 pressed"));
        assert!(text.contains("divider before 1 at (0, 56) 300x1 visible"));
        assert!(text.contains("divider before 2 at (0, 113) 300x1 suppressed"));
    }

    #[test]
    fn describe_before_layout() {
        let g = ActionGroup(StackPolicy::alert_dialog(), 1.0, vec![]);
        assert_eq!(describe_group(&g), "group: 0 actions, not laid out\n");
    }

    #[test]
    fn inspector_draws_only_when_enabled() {
        let g = group();
        let mut inspector = Inspector::new();
        let mut scene = Scene::default();
        inspector.frame(&mut scene, &g, Vec2::ZERO);
        assert!(scene.nodes.is_empty());
        assert_eq!(inspector.hud.metrics.as_ref().unwrap().scene_nodes, 0);

        inspector.hud.toggle_inspector();
        inspector.frame(&mut scene, &g, Vec2::new(8.0, 0.0));
        let borders = scene
            .nodes
            .iter()
            .filter(|n| matches!(n, SceneNode::Border { .. }))
            .count();
        // three actions and two divider slots
        assert_eq!(borders, 5);
        assert_eq!(inspector.hud.frame_count(), 1);
    }

    #[test]
    fn timed_layout_reports_size() {
        let mut g = group();
        let (size, ms) = timed_layout(&mut g, BoxConstraints::tight_for_width(200.0));
        assert_eq!(size, Size::new(200.0, 170.0));
        assert!(ms >= 0.0);
    }
}
