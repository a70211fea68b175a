//! Paint compositor for an action group.
//!
//! All three fill regions are built from the last [`GroupLayout`] and the
//! current [`PressedMask`] before anything is drawn:
//!
//! 1. background: the group bounds with every pressed rect and every
//!    visible divider cut out (even-odd),
//! 2. pressed: the rects of pressed actions,
//! 3. dividers: hairlines whose neighbours are both idle.
//!
//! A suppressed divider is neither cut out of the background nor drawn, so
//! it takes the background colour and a pressed highlight reads as one
//! continuous block with the space around it.

use cupola_core::*;
use smallvec::SmallVec;

use crate::{ActionPalette, Arrangement, GroupLayout, PressedMask};

/// Hairline between action `after - 1` and action `after`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerSlot {
    pub after: usize,
    pub rect: Rect,
    pub visible: bool,
}

/// Divider slots in group coordinates, one per adjacent pair.
pub fn divider_slots(layout: &GroupLayout, pressed: &PressedMask) -> SmallVec<[DividerSlot; 8]> {
    let d = layout.divider_thickness;
    let mut out = SmallVec::new();
    match layout.arrangement {
        Arrangement::Paired => {
            if let Some(first) = layout.slot(0) {
                out.push(DividerSlot {
                    after: 1,
                    rect: Rect::from_ltwh(first.w, 0.0, d, layout.size.height),
                    visible: !pressed.any(),
                });
            }
        }
        Arrangement::Stacked => {
            for (i, slot) in layout.slots.iter().enumerate().skip(1) {
                out.push(DividerSlot {
                    after: i,
                    rect: Rect::from_ltwh(0.0, slot.y - d, layout.size.width, d),
                    visible: !pressed.is_pressed(i - 1) && !pressed.is_pressed(i),
                });
            }
        }
    }
    out
}

/// The three fill regions of one paint, in group coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionRegions {
    pub background: Path,
    pub pressed: Path,
    pub dividers: Path,
}

pub fn composite(layout: &GroupLayout, pressed: &PressedMask) -> ActionRegions {
    let mut background = Path::with_fill_rule(FillRule::EvenOdd);
    let mut pressed_region = Path::new();
    let mut dividers = Path::new();

    background.add_rect(Rect::from_size(layout.size));

    for i in pressed.pressed_indices() {
        if let Some(rect) = layout.slot(i) {
            background.add_rect(rect);
            pressed_region.add_rect(rect);
        }
    }

    for slot in divider_slots(layout, pressed) {
        if slot.visible {
            background.add_rect(slot.rect);
            dividers.add_rect(slot.rect);
        }
    }

    ActionRegions {
        background,
        pressed: pressed_region,
        dividers,
    }
}

/// Draws the regions at `offset` in background, pressed, divider order.
pub fn paint_regions(
    canvas: &mut dyn Canvas,
    regions: &ActionRegions,
    palette: &ActionPalette,
    offset: Vec2,
) {
    canvas.draw_path(&regions.background.translate(offset), palette.background);
    canvas.draw_path(&regions.pressed.translate(offset), palette.pressed);
    canvas.draw_path(&regions.dividers.translate(offset), palette.divider);
}
