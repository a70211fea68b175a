//! # Button stack sizing policy
//!
//! Pure functions deciding how an action group is arranged and how tall it
//! wants to be. Nothing here lays out or mutates children; every answer is
//! derived from the children's intrinsic queries.
//!
//! Two arrangements exist:
//!
//! - **Paired**: exactly two actions side by side, separated by a vertical
//!   hairline. Only policies with `allow_paired_row` consider it, and only
//!   when both actions fit at their natural widths.
//! - **Stacked**: every action full width, top to bottom, hairlines between.
//!
//! Height formulas (`d` = divider thickness, `N` = action count):
//!
//! | case | min height | max height |
//! |---|---|---|
//! | `N = 0` | `0` | `0` |
//! | `N = 1`, single-row policy | child min | child max |
//! | `N = 1`, otherwise | child max + `d` | child max + `d` |
//! | paired | max of children's min at half width | max of children's max at half width |
//! | stacked, cancel present, `N` in 2..=3 | Σ min + `(N-1)·d` | Σ max + `(N-1)·d` |
//! | stacked, otherwise | `min₀ + d + 0.5·min₁` | Σ max + `(N-1)·d` |
//!
//! The stacked minimum deliberately shows only half of the second action so
//! a scrolling container reveals that more actions follow. The factor is
//! applied to the second action whatever `N` is.

use cupola_core::{IntrinsicSize, Intrinsics, finite_or_zero};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrangement {
    Paired,
    Stacked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StackPolicy {
    /// Two short actions may share one row. Also makes a lone action a
    /// one-button row that reserves no divider.
    pub allow_paired_row: bool,
    /// A separate cancel action follows the group, so with two or three
    /// actions none of them may be clipped.
    pub has_cancel_action: bool,
}

fn height_of<N: Intrinsics>(child: &N, kind: IntrinsicSize, width: f32) -> f32 {
    finite_or_zero(child.intrinsic_height(kind, width))
}

fn natural_width<N: Intrinsics>(child: &N) -> f32 {
    finite_or_zero(child.max_intrinsic_width(f32::INFINITY))
}

impl StackPolicy {
    pub const fn action_sheet(has_cancel_action: bool) -> Self {
        Self {
            allow_paired_row: false,
            has_cancel_action,
        }
    }

    pub const fn alert_dialog() -> Self {
        Self {
            allow_paired_row: true,
            has_cancel_action: false,
        }
    }

    /// Two actions, paired rows allowed, and both natural widths plus the
    /// divider fit in `width` (inclusive).
    pub fn is_paired_row<N: Intrinsics>(&self, children: &[N], width: f32, divider: f32) -> bool {
        match children {
            [first, second] if self.allow_paired_row => {
                natural_width(first) + divider + natural_width(second) <= width
            }
            _ => false,
        }
    }

    pub fn arrangement<N: Intrinsics>(
        &self,
        children: &[N],
        width: f32,
        divider: f32,
    ) -> Arrangement {
        if self.is_paired_row(children, width, divider) {
            Arrangement::Paired
        } else {
            Arrangement::Stacked
        }
    }

    pub fn min_intrinsic_height<N: Intrinsics>(
        &self,
        children: &[N],
        width: f32,
        divider: f32,
    ) -> f32 {
        let height = match children {
            [] => 0.0,
            [only] => self.single_height(only, IntrinsicSize::Min, width, divider),
            [first, second] if self.is_paired_row(children, width, divider) => {
                paired_height(first, second, IntrinsicSize::Min, width, divider)
            }
            [_, _] | [_, _, _] if self.has_cancel_action => {
                stacked_sum(children, IntrinsicSize::Min, width, divider)
            }
            [first, second, ..] => {
                height_of(first, IntrinsicSize::Min, width)
                    + divider
                    + 0.5 * height_of(second, IntrinsicSize::Min, width)
            }
        };
        finite_or_zero(height)
    }

    pub fn max_intrinsic_height<N: Intrinsics>(
        &self,
        children: &[N],
        width: f32,
        divider: f32,
    ) -> f32 {
        let height = match children {
            [] => 0.0,
            [only] => self.single_height(only, IntrinsicSize::Max, width, divider),
            [first, second] if self.is_paired_row(children, width, divider) => {
                paired_height(first, second, IntrinsicSize::Max, width, divider)
            }
            _ => stacked_sum(children, IntrinsicSize::Max, width, divider),
        };
        finite_or_zero(height)
    }

    pub fn intrinsic_height<N: Intrinsics>(
        &self,
        kind: IntrinsicSize,
        children: &[N],
        width: f32,
        divider: f32,
    ) -> f32 {
        match kind {
            IntrinsicSize::Min => self.min_intrinsic_height(children, width, divider),
            IntrinsicSize::Max => self.max_intrinsic_height(children, width, divider),
        }
    }

    fn single_height<N: Intrinsics>(
        &self,
        only: &N,
        kind: IntrinsicSize,
        width: f32,
        divider: f32,
    ) -> f32 {
        if self.allow_paired_row {
            height_of(only, kind, width)
        } else {
            // A lone sheet action still reserves the hairline that separates
            // it from the content above.
            height_of(only, IntrinsicSize::Max, width) + divider
        }
    }
}

fn paired_height<N: Intrinsics>(
    first: &N,
    second: &N,
    kind: IntrinsicSize,
    width: f32,
    divider: f32,
) -> f32 {
    let per_button = (width - divider) / 2.0;
    height_of(first, kind, per_button).max(height_of(second, kind, per_button))
}

fn stacked_sum<N: Intrinsics>(
    children: &[N],
    kind: IntrinsicSize,
    width: f32,
    divider: f32,
) -> f32 {
    let dividers = children.len().saturating_sub(1) as f32 * divider;
    children
        .iter()
        .fold(dividers, |acc, child| acc + height_of(child, kind, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlowLeaf, SizedLeaf};
    use cupola_core::Size;

    fn buttons(heights: &[f32]) -> Vec<SizedLeaf> {
        heights.iter().map(|h| SizedLeaf::new(80.0, *h)).collect()
    }

    #[test]
    fn empty_group_is_zero() {
        let policy = StackPolicy::action_sheet(false);
        let none: Vec<SizedLeaf> = vec![];
        assert_eq!(policy.min_intrinsic_height(&none, 300.0, 1.0), 0.0);
        assert_eq!(policy.max_intrinsic_height(&none, 300.0, 1.0), 0.0);
    }

    #[test]
    fn single_sheet_action_reserves_divider() {
        let policy = StackPolicy::action_sheet(false);
        let one = vec![SizedLeaf::with_range(
            Size::new(40.0, 30.0),
            Size::new(80.0, 56.0),
        )];
        assert_eq!(policy.min_intrinsic_height(&one, 300.0, 1.0), 57.0);
        assert_eq!(policy.max_intrinsic_height(&one, 300.0, 1.0), 57.0);
    }

    #[test]
    fn single_dialog_action_is_a_row() {
        let policy = StackPolicy::alert_dialog();
        let one = vec![SizedLeaf::with_range(
            Size::new(40.0, 30.0),
            Size::new(80.0, 45.0),
        )];
        assert_eq!(policy.min_intrinsic_height(&one, 270.0, 1.0), 30.0);
        assert_eq!(policy.max_intrinsic_height(&one, 270.0, 1.0), 45.0);
    }

    #[test]
    fn three_stacked_example() {
        let policy = StackPolicy::action_sheet(false);
        let three = buttons(&[56.0, 56.0, 56.0]);
        assert_eq!(policy.max_intrinsic_height(&three, 300.0, 1.0), 170.0);
        assert_eq!(policy.min_intrinsic_height(&three, 300.0, 1.0), 85.0);
    }

    #[test]
    fn peek_uses_second_child_even_with_many() {
        let policy = StackPolicy::action_sheet(false);
        let five = buttons(&[40.0, 56.0, 100.0, 100.0, 100.0]);
        assert_eq!(policy.min_intrinsic_height(&five, 300.0, 2.0), 40.0 + 2.0 + 28.0);
    }

    #[test]
    fn cancel_requires_full_heights_for_two_or_three() {
        let policy = StackPolicy::action_sheet(true);
        assert_eq!(
            policy.min_intrinsic_height(&buttons(&[56.0, 56.0]), 300.0, 1.0),
            113.0
        );
        assert_eq!(
            policy.min_intrinsic_height(&buttons(&[56.0, 56.0, 56.0]), 300.0, 1.0),
            170.0
        );
        // Four actions fall back to the peek rule.
        assert_eq!(
            policy.min_intrinsic_height(&buttons(&[56.0, 56.0, 56.0, 56.0]), 300.0, 1.0),
            85.0
        );
    }

    #[test]
    fn paired_row_boundary_is_inclusive() {
        let policy = StackPolicy::alert_dialog();
        let two = vec![SizedLeaf::new(100.0, 45.0), SizedLeaf::new(69.0, 45.0)];
        assert_eq!(policy.arrangement(&two, 170.0, 1.0), Arrangement::Paired);
        assert_eq!(policy.arrangement(&two, 169.999, 1.0), Arrangement::Stacked);
    }

    #[test]
    fn sheet_never_pairs() {
        let policy = StackPolicy::action_sheet(false);
        let two = vec![SizedLeaf::new(10.0, 56.0), SizedLeaf::new(10.0, 56.0)];
        assert_eq!(policy.arrangement(&two, 1000.0, 1.0), Arrangement::Stacked);
    }

    #[test]
    fn paired_heights_query_half_width() {
        let policy = StackPolicy::alert_dialog();
        // Natural widths fit side by side in 270, but at (270 - 1) / 2 each
        // the longer label wraps onto a second line.
        let two = vec![
            FlowLeaf::new(140.0, 20.0).padding(12.0),
            FlowLeaf::new(60.0, 20.0).padding(12.0),
        ];
        assert_eq!(policy.arrangement(&two, 270.0, 1.0), Arrangement::Paired);
        assert_eq!(policy.max_intrinsic_height(&two, 270.0, 1.0), 64.0);
        assert_eq!(policy.min_intrinsic_height(&two, 270.0, 1.0), 64.0);
    }

    #[test]
    fn non_finite_child_answers_collapse() {
        let policy = StackPolicy::action_sheet(false);
        let weird = vec![
            SizedLeaf::new(10.0, f32::INFINITY),
            SizedLeaf::new(10.0, 56.0),
        ];
        assert_eq!(policy.max_intrinsic_height(&weird, 300.0, 1.0), 57.0);
        assert!(policy.min_intrinsic_height(&weird, 300.0, 1.0).is_finite());
    }

    #[test]
    fn queries_are_repeatable() {
        let policy = StackPolicy::action_sheet(false);
        let three = buttons(&[56.0, 44.0, 56.0]);
        let a = policy.min_intrinsic_height(&three, 300.0, 0.5);
        let b = policy.min_intrinsic_height(&three, 300.0, 0.5);
        assert_eq!(a, b);
        assert_eq!(
            policy.max_intrinsic_height(&three, 300.0, 0.5),
            policy.max_intrinsic_height(&three, 300.0, 0.5)
        );
    }
}
