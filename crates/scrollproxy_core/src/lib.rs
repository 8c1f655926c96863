//! Scrollproxy Core
//!
//! Geometry primitives shared by the scroll proxy crates:
//!
//! - **Point / Size / Rect**: 2D geometry in a scroll container's content space
//! - **EdgeInsets**: safe-area and content insets applied by a scroll container
//!
//! # Example
//!
//! ```rust
//! use scrollproxy_core::{EdgeInsets, Rect, Size};
//!
//! let region = Rect::new(10.0, 20.0, 100.0, 40.0);
//! assert_eq!(region.max_y(), 60.0);
//!
//! let insets = EdgeInsets::new(8.0, 0.0, 8.0, 0.0);
//! let visible = Size::new(320.0, 480.0).inset_by(insets);
//! assert_eq!(visible, Size::new(320.0, 464.0));
//! ```

pub mod geometry;

pub use geometry::{EdgeInsets, Point, Rect, Size};
