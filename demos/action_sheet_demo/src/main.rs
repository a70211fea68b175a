use anyhow::Context;
use cupola_core::prelude::*;
use cupola_devtools::{Inspector, describe_group, timed_layout};
use cupola_ui::*;

const PHONE: Size = Size::new(375.0, 812.0);

fn load_config() -> anyhow::Result<CupertinoConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            CupertinoConfig::from_json_str(&json).with_context(|| format!("parsing config {path}"))
        }
        None => Ok(CupertinoConfig::default()),
    }
}

fn button(label: &str) -> ActionNode {
    // Roughly 8px per glyph at 17pt.
    let width = label.chars().count() as f32 * 8.0;
    ActionNode::new(FlowLeaf::new(width, 22.0).padding(10.0)).labeled(label)
}

/// Replacement dialog action. The dialog floors its own actions when it is
/// built, so swapped-in ones need the floor too.
fn dialog_button(config: &CupertinoConfig, label: &str) -> ActionNode {
    button(label).min_height(config.dialog.min_button_height)
}

fn message() -> Box<dyn LayoutNode> {
    Box::new(FlowLeaf::new(620.0, 18.0).padding(14.0))
}

fn run_sheet(config: &CupertinoConfig, inspector: &mut Inspector) -> anyhow::Result<()> {
    let mut sheet = ActionSheet(
        config,
        Some(message()),
        vec![button("Save to Files"), button("Duplicate"), button("Delete")],
        Some(button("Cancel")),
    )?;
    let (_, layout_ms) = timed_layout(&mut sheet, BoxConstraints::loose(PHONE));
    inspector.record_layout(layout_ms);

    let card = sheet.sections_rect();
    let actions = sheet.sections().actions_rect();
    let pointer = Vec2::new(card.x + 40.0, card.y + actions.y + 60.0);
    let (hit, inv) = sheet.press_at(pointer);
    log::info!("pointer down at {pointer:?} -> {hit:?} ({inv:?})");

    let origin = card.origin() + actions.origin();
    let mut scene = Scene::new(Color::from_hex("#221628"));
    sheet.paint(&mut scene, Vec2::ZERO);
    inspector.frame(&mut scene, sheet.group(), origin);

    println!("{}", describe_group(sheet.group()));
    println!("sheet scene: {} nodes", scene.nodes.len());

    let inv = sheet.release_all();
    log::info!("pointer up -> {inv:?}");
    Ok(())
}

fn run_dialog(config: &CupertinoConfig, inspector: &mut Inspector) -> anyhow::Result<()> {
    let mut dialog = AlertDialog(config, Some(message()), vec![button("Cancel"), button("OK")])?;
    let (_, layout_ms) = timed_layout(&mut dialog, BoxConstraints::loose(PHONE));
    inspector.record_layout(layout_ms);
    println!("{}", describe_group(dialog.group()));

    // Growing the text pushes the labels past the row width.
    let inv = dialog.set_text_scale_factor(2.0)?;
    log::info!("text scale 2.0 -> {inv:?}");
    dialog.group_mut().update_action(1, |a| {
        *a = dialog_button(config, "Continue anyway");
    });
    dialog.layout(BoxConstraints::loose(PHONE));
    println!("{}", describe_group(dialog.group()));

    let mut scene = Scene::default();
    dialog.paint(&mut scene, Vec2::ZERO);
    let frame = dialog.frame();
    let origin = frame.origin() + dialog.sections().actions_rect().origin();
    inspector.frame(&mut scene, dialog.group(), origin);
    println!("dialog scene: {} nodes", scene.nodes.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = load_config()?;
    let mut inspector = Inspector::new();
    inspector.hud.toggle_inspector();

    run_sheet(&config, &mut inspector)?;
    run_dialog(&config, &mut inspector)?;
    println!("{}", inspector.hud.summary());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapped_dialog_action_keeps_button_floor() {
        let config = CupertinoConfig::default();
        let mut dialog = AlertDialog(&config, None, vec![button("Cancel"), button("OK")]).unwrap();
        dialog.group_mut().update_action(1, |a| {
            *a = dialog_button(&config, "Continue anyway");
        });
        let action = dialog.group().action(1).unwrap();
        assert_eq!(action.max_intrinsic_height(270.0), 45.0);
        assert_eq!(action.label(), Some("Continue anyway"));
    }
}
