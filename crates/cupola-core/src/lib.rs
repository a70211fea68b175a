//! # Geometry, scenes and the layout protocol
//!
//! `cupola-core` holds everything the Cupertino components need that is not
//! specific to any one component:
//!
//! - `Vec2` / `Size` / `Rect` geometry and resolved RGBA `Color`s.
//! - `Path`, a rect list with a fill rule, used to merge many rectangles
//!   into a single fill.
//! - The `Canvas` trait and `Scene`, a recording canvas that produces a
//!   display list of `SceneNode`s.
//! - `BoxConstraints` and the `Intrinsics` / `LayoutNode` traits.
//! - `Invalidation` flags returned by mutating setters.
//! - `CupertinoConfig` metrics, loaded from JSON with serde.
//!
//! ```rust
//! use cupola_core::*;
//!
//! let mut scene = Scene::default();
//! scene.push_translate(Vec2::new(10.0, 10.0));
//! scene.draw_rect(Rect::from_ltwh(0.0, 0.0, 4.0, 4.0), Color::BLACK);
//! scene.pop_translate();
//!
//! assert!(scene.is_balanced());
//! assert_eq!(
//!     scene.flattened(),
//!     vec![SceneNode::Rect {
//!         rect: Rect::from_ltwh(10.0, 10.0, 4.0, 4.0),
//!         color: Color::BLACK,
//!         radius: 0.0,
//!     }]
//! );
//! ```

pub mod color;
pub mod config;
pub mod constraints;
pub mod error;
pub mod geometry;
pub mod invalidation;
pub mod node;
pub mod path;
pub mod prelude;
pub mod render_api;
pub mod scene;

pub use color::*;
pub use config::*;
pub use constraints::*;
pub use error::*;
pub use geometry::*;
pub use invalidation::*;
pub use node::*;
pub use path::*;
pub use render_api::*;
pub use scene::*;
