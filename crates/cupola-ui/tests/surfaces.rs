use cupola_core::*;
use cupola_ui::*;

const PHONE: Size = Size::new(375.0, 812.0);

fn label(w: f32) -> ActionNode {
    ActionNode::new(SizedLeaf::new(w, 20.0))
}

fn message() -> Option<Box<dyn LayoutNode>> {
    Some(Box::new(FlowLeaf::new(500.0, 18.0).padding(14.0)))
}

#[test]
fn sheet_from_json_config_uses_device_hairline() {
    let config = CupertinoConfig::from_json_str(r#"{ "device_pixel_ratio": 2.0 }"#).unwrap();
    let mut sheet = ActionSheet(&config, message(), vec![label(80.0), label(90.0)], None).unwrap();
    sheet.layout(BoxConstraints::loose(PHONE));

    assert_eq!(sheet.group().divider_thickness(), 0.5);
    let divider = sheet.sections().divider_rect().unwrap();
    assert_eq!(divider.h, 0.5);
    assert!(sheet.cancel_rect().is_none());
    assert_eq!(
        sheet.sections_rect().bottom(),
        PHONE.height - config.sheet.edge_vertical_padding
    );
}

#[test]
fn sheet_rejects_bad_config() {
    let config = CupertinoConfig {
        device_pixel_ratio: 0.0,
        ..Default::default()
    };
    let err = ActionSheet(&config, None, vec![label(80.0)], None).unwrap_err();
    assert!(matches!(err, Error::InvalidDevicePixelRatio(_)));
}

#[test]
fn sheet_without_content_has_no_section_divider() {
    let config = CupertinoConfig::default();
    let mut sheet = ActionSheet(&config, None, vec![label(80.0), label(80.0)], None).unwrap();
    sheet.layout(BoxConstraints::loose(PHONE));
    assert_eq!(sheet.sections().divider_rect(), None);
    assert_eq!(sheet.sections_rect().h, 56.0 + 1.0 + 56.0);
}

#[test]
fn long_sheet_scrolls_its_actions() {
    let config = CupertinoConfig::default();
    let actions = (0..20).map(|_| label(80.0)).collect();
    let mut sheet =
        ActionSheet(&config, message(), actions, Some(label(80.0))).unwrap();
    sheet.layout(BoxConstraints::loose(PHONE));

    let card = sheet.sections_rect();
    let cancel = sheet.cancel_rect().unwrap();
    assert!(card.y >= config.sheet.edge_vertical_padding);
    assert_eq!(card.bottom() + config.sheet.cancel_button_padding, cancel.y);

    let first_action_y = card.y + sheet.sections().actions_rect().y + 10.0;
    assert_eq!(
        sheet.hit_test_sheet(Vec2::new(100.0, first_action_y)),
        Some(SheetHit::Action(0))
    );
    assert_eq!(sheet.scroll_actions_by(57.0), 0.0);
    assert_eq!(
        sheet.hit_test_sheet(Vec2::new(100.0, first_action_y)),
        Some(SheetHit::Action(1))
    );
}

#[test]
fn dialog_pressed_row_paints_one_pressed_rect() {
    let config = CupertinoConfig::default();
    let mut dialog = AlertDialog(&config, message(), vec![label(60.0), label(70.0)]).unwrap();
    dialog.layout(BoxConstraints::loose(PHONE));
    assert_eq!(dialog.group().arrangement(), Some(Arrangement::Paired));

    let frame = dialog.frame();
    let row = dialog.sections().actions_rect();
    let (hit, inv) = dialog.press_at(Vec2::new(frame.x + 10.0, frame.y + row.y + 5.0));
    assert_eq!(hit, Some(DialogHit::Action(0)));
    assert_eq!(inv, Invalidation::PAINT);

    let mut scene = Scene::default();
    dialog.paint(&mut scene, Vec2::ZERO);
    assert!(scene.is_balanced());
    let pressed: Vec<&Path> = scene
        .nodes
        .iter()
        .filter_map(|n| match n {
            SceneNode::Path { path, color } if *color == ActionPalette::DIALOG_LIGHT.pressed => {
                Some(path)
            }
            _ => None,
        })
        .collect();
    assert_eq!(pressed.len(), 1);
    assert_eq!(pressed[0].len(), 1);
}

#[test]
fn dialog_accessibility_from_text_scale() {
    let config = CupertinoConfig {
        text_scale_factor: 2.0,
        ..Default::default()
    };
    let mut dialog = AlertDialog(&config, message(), vec![label(60.0), label(70.0)]).unwrap();
    dialog.layout(BoxConstraints::loose(Size::new(414.0, 896.0)));
    assert_eq!(dialog.frame().w, config.dialog.accessibility_width);

    // Narrow screens cap the card at the inset viewport.
    dialog.layout(BoxConstraints::loose(PHONE));
    assert_eq!(dialog.frame().w, PHONE.width - 2.0 * config.dialog.inset_horizontal);
    assert_eq!(dialog.sections().layout_mode(), SectionLayoutMode::Accessibility);
}

#[test]
fn dialog_without_actions_has_no_divider() {
    let config = CupertinoConfig::default();
    let mut dialog = AlertDialog(&config, message(), vec![]).unwrap();
    dialog.layout(BoxConstraints::loose(PHONE));
    assert_eq!(dialog.sections().divider_rect(), None);
    assert_eq!(dialog.hit_test_dialog(Vec2::new(187.0, 406.0)), Some(DialogHit::Content));
}
