//! Layout pass for an action group.
//!
//! Places every action and records where it went. The resulting
//! [`GroupLayout`] is what paint and hit testing read; nothing there looks
//! at the children's sizes again.

use cupola_core::*;
use smallvec::SmallVec;

use crate::{Arrangement, StackPolicy};

/// Outcome of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupLayout {
    pub arrangement: Arrangement,
    pub size: Size,
    pub divider_thickness: f32,
    /// Rect of each action in group coordinates, in child order.
    pub slots: SmallVec<[Rect; 8]>,
}

impl GroupLayout {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).copied()
    }
}

/// Lays out `children` under `policy` and returns their placement.
///
/// Width is the constraint's max width when bounded. Unbounded, it is the
/// natural width of the arrangement: both actions plus the divider for a
/// pair, the widest action otherwise. Paired actions each get
/// `(width - d) / 2`; stacked ones get the full width. The height is the
/// sum of what was placed and is not clamped to `constraints`: the parent
/// is expected to give at least the minimum intrinsic height, or to scroll.
pub fn layout_actions<N: LayoutNode>(
    children: &mut [N],
    policy: &StackPolicy,
    constraints: BoxConstraints,
    divider: f32,
) -> GroupLayout {
    debug_assert!(
        constraints.is_normalized(),
        "action group given malformed constraints {constraints:?}"
    );
    let (width, arrangement) = if constraints.has_bounded_width() {
        let width = constraints.max_width;
        (width, policy.arrangement(children, width, divider))
    } else {
        let widths = children
            .iter()
            .map(|c| finite_or_zero(c.max_intrinsic_width(f32::INFINITY)));
        match policy.arrangement(children, f32::INFINITY, divider) {
            Arrangement::Paired => (
                (widths.sum::<f32>() + divider).max(constraints.min_width),
                Arrangement::Paired,
            ),
            Arrangement::Stacked => (
                widths.fold(constraints.min_width, f32::max),
                Arrangement::Stacked,
            ),
        }
    };

    let mut slots = SmallVec::new();

    let size = match arrangement {
        Arrangement::Paired => {
            let per_button = ((width - divider) / 2.0).max(0.0);
            let child_constraints = BoxConstraints::tight_for_width(per_button);
            let mut x = 0.0;
            let mut height: f32 = 0.0;
            for child in children.iter_mut() {
                let s = child.layout(child_constraints);
                slots.push(Rect::from_ltwh(x, 0.0, s.width, s.height));
                x += s.width + divider;
                height = height.max(s.height);
            }
            Size::new(width, height)
        }
        Arrangement::Stacked => {
            let child_constraints = BoxConstraints::tight_for_width(width);
            let mut y = 0.0;
            for (i, child) in children.iter_mut().enumerate() {
                if i > 0 {
                    y += divider;
                }
                let s = child.layout(child_constraints);
                slots.push(Rect::from_ltwh(0.0, y, s.width, s.height));
                y += s.height;
            }
            Size::new(width, y)
        }
    };

    if constraints.has_bounded_height() && size.height > constraints.max_height {
        log::debug!(
            "action group overflows its constraints: {} > {} ({} actions)",
            size.height,
            constraints.max_height,
            children.len()
        );
    }
    log::trace!("action group laid out {arrangement:?} at {size:?}");

    GroupLayout {
        arrangement,
        size,
        divider_thickness: divider,
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SizedLeaf;

    #[test]
    fn stacked_offsets_skip_trailing_divider() {
        let mut kids = vec![
            SizedLeaf::new(80.0, 56.0),
            SizedLeaf::new(80.0, 44.0),
            SizedLeaf::new(80.0, 56.0),
        ];
        let layout = layout_actions(
            &mut kids,
            &StackPolicy::action_sheet(false),
            BoxConstraints::tight_for_width(300.0),
            1.0,
        );
        assert_eq!(layout.arrangement, Arrangement::Stacked);
        assert_eq!(layout.size, Size::new(300.0, 158.0));
        assert_eq!(layout.slots[0], Rect::from_ltwh(0.0, 0.0, 300.0, 56.0));
        assert_eq!(layout.slots[1], Rect::from_ltwh(0.0, 57.0, 300.0, 44.0));
        assert_eq!(layout.slots[2], Rect::from_ltwh(0.0, 102.0, 300.0, 56.0));
    }

    #[test]
    fn paired_halves_the_width() {
        let mut kids = vec![SizedLeaf::new(60.0, 45.0), SizedLeaf::new(60.0, 40.0)];
        let layout = layout_actions(
            &mut kids,
            &StackPolicy::alert_dialog(),
            BoxConstraints::tight_for_width(271.0),
            1.0,
        );
        assert_eq!(layout.arrangement, Arrangement::Paired);
        assert_eq!(layout.slots[0], Rect::from_ltwh(0.0, 0.0, 135.0, 45.0));
        assert_eq!(layout.slots[1], Rect::from_ltwh(136.0, 0.0, 135.0, 40.0));
        assert_eq!(layout.size, Size::new(271.0, 45.0));
    }

    #[test]
    fn unbounded_width_uses_widest_child() {
        let mut kids = vec![SizedLeaf::new(80.0, 56.0), SizedLeaf::new(120.0, 56.0)];
        let constraints = BoxConstraints {
            min_width: 0.0,
            max_width: f32::INFINITY,
            min_height: 0.0,
            max_height: f32::INFINITY,
        };
        let layout = layout_actions(&mut kids, &StackPolicy::action_sheet(false), constraints, 1.0);
        assert_eq!(layout.size.width, 120.0);
        assert_eq!(layout.slots[0].w, 120.0);
    }

    #[test]
    fn unbounded_width_fits_a_pair_side_by_side() {
        let mut kids = vec![SizedLeaf::new(60.0, 45.0), SizedLeaf::new(70.0, 40.0)];
        let layout = layout_actions(
            &mut kids,
            &StackPolicy::alert_dialog(),
            BoxConstraints::loose(Size::new(f32::INFINITY, f32::INFINITY)),
            1.0,
        );
        assert_eq!(layout.arrangement, Arrangement::Paired);
        assert_eq!(layout.size, Size::new(131.0, 45.0));
        assert_eq!(layout.slots[1], Rect::from_ltwh(66.0, 0.0, 65.0, 40.0));
    }

    #[test]
    fn empty_group_has_zero_height() {
        let mut kids: Vec<SizedLeaf> = vec![];
        let layout = layout_actions(
            &mut kids,
            &StackPolicy::action_sheet(true),
            BoxConstraints::tight_for_width(300.0),
            1.0,
        );
        assert!(layout.is_empty());
        assert_eq!(layout.size, Size::new(300.0, 0.0));
    }
}
