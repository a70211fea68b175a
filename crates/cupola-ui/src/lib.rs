#![allow(non_snake_case)]
//! Cupertino action sheets, alert dialogs and the adaptive button stack
//! they share.
//!
//! The engine lives in [`ButtonGroup`]: sizing decisions in [`policy`],
//! placement in [`layout`], drawing in [`compositor`] and pointer routing in
//! [`hit_test`]. The surfaces wrap a group in a [`SectionPair`] under some
//! content and position the result on screen.
//!
//! ```
//! use cupola_core::*;
//! use cupola_ui::*;
//!
//! let config = CupertinoConfig::default();
//! let mut sheet = ActionSheet(
//!     &config,
//!     Some(Box::new(SizedLeaf::new(200.0, 60.0))),
//!     vec![
//!         ActionNode::new(SizedLeaf::new(80.0, 20.0)).labeled("Save"),
//!         ActionNode::new(SizedLeaf::new(80.0, 20.0)).labeled("Delete"),
//!     ],
//!     Some(ActionNode::new(SizedLeaf::new(80.0, 20.0)).labeled("Cancel")),
//! )
//! .unwrap();
//! sheet.layout(BoxConstraints::loose(Size::new(375.0, 812.0)));
//!
//! let mut scene = Scene::default();
//! sheet.paint(&mut scene, Vec2::ZERO);
//! assert!(scene.is_balanced());
//! ```

pub mod action;
pub mod compositor;
pub mod dialog;
pub mod group;
pub mod layout;
pub mod leaf;
pub mod palette;
pub mod policy;
pub mod pressed;
pub mod scroll;
pub mod section;
pub mod sheet;

pub use action::*;
pub use compositor::*;
pub use dialog::*;
pub use group::*;
pub use hit_test::*;
pub use layout::*;
pub use leaf::*;
pub use palette::*;
pub use policy::*;
pub use pressed::*;
pub use scroll::*;
pub use section::*;
pub use sheet::*;

use cupola_core::{CupertinoConfig, LayoutNode, Result};

/// Action sheet with the metrics and hairline of `config`. The sheet's
/// buttons are at least `config.sheet.button_height` tall.
pub fn ActionSheet(
    config: &CupertinoConfig,
    content: Option<Box<dyn LayoutNode>>,
    actions: Vec<ActionNode>,
    cancel: Option<ActionNode>,
) -> Result<ActionSheetSurface> {
    ActionSheetSurface::from_config(config, content, actions, cancel)
}

/// Alert dialog with the metrics, hairline and text scale of `config`.
pub fn AlertDialog(
    config: &CupertinoConfig,
    content: Option<Box<dyn LayoutNode>>,
    actions: Vec<ActionNode>,
) -> Result<AlertDialogSurface> {
    AlertDialogSurface::from_config(config, content, actions)
}

/// Bare button group for embedding in other surfaces.
pub fn ActionGroup(policy: StackPolicy, divider_thickness: f32, actions: Vec<ActionNode>) -> ButtonGroup {
    ButtonGroup::new(policy, divider_thickness).with_actions(actions)
}
