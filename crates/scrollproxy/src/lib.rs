//! Scroll proxy and programmatic scroll-to-region API
//!
//! This crate lets UI code scroll a container to a named region without holding
//! the container itself:
//!
//! - `ScrollProxy` - register region frames, scroll by alignment, observe the offset
//! - `GeometryRegistry` - O(1) lookup of region frames by ID
//! - `compute_visible_rect` - pure alignment and clamping math
//! - `ScrollDriver` - exclusive binding to the host's scroll container
//! - `ScrollContainer` - the interface a host scroll view implements
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use scrollproxy::prelude::*;
//!
//! let proxy: ScrollProxy<&str> = ScrollProxy::new();
//!
//! // The host's geometry reporter registers region frames
//! proxy.register("item-42", Rect::new(0.0, 840.0, 320.0, 20.0));
//!
//! // The host's attachment step binds the concrete scroll view
//! let container = Rc::new(HeadlessScrollContainer::new(
//!     Size::new(320.0, 480.0),
//!     Size::new(320.0, 2000.0),
//! ));
//! proxy.bind(&container);
//!
//! // Later: scroll to the region
//! proxy.scroll_to("item-42").unwrap();
//! assert_eq!(proxy.offset(), Point::new(0.0, 840.0));
//!
//! proxy.scroll_to_edge(Alignment::Bottom);
//! assert_eq!(proxy.offset(), Point::new(0.0, 1520.0));
//! ```

pub mod alignment;
pub mod config;
pub mod container;
pub mod driver;
pub mod error;
pub mod headless;
pub mod id;
pub mod proxy;
pub mod registry;

use serde::{Deserialize, Serialize};

pub use alignment::{compute_visible_rect, Alignment, ContainerState};
pub use config::ScrollProxyConfig;
pub use container::{ListenerOwner, ScrollContainer, ScrollListener, ScrollListenerSlot};
pub use driver::{OffsetCallback, ScrollDriver, SubscriptionId};
pub use error::{Result, ScrollProxyError};
pub use headless::{HeadlessScrollContainer, ScrollCommand};
pub use id::{CoordinateSpace, ProxyId};
pub use proxy::{GeometryReport, ScrollProxy};
pub use registry::GeometryRegistry;

pub use scrollproxy_core::{EdgeInsets, Point, Rect, Size};

/// Commonly used types
pub mod prelude {
    pub use crate::{
        Alignment, ContainerState, EdgeInsets, GeometryReport, HeadlessScrollContainer, Point,
        Rect, ScrollBehavior, ScrollContainer, ScrollOptions, ScrollProxy, ScrollProxyConfig,
        ScrollProxyError, Size,
    };
}

/// Options for a single scroll-to-region request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    /// Where the region lands in the viewport
    pub alignment: Alignment,
    /// How to animate the scroll
    pub behavior: ScrollBehavior,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            alignment: Alignment::Top,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

impl ScrollOptions {
    pub fn aligned(alignment: Alignment) -> Self {
        Self {
            alignment,
            ..Default::default()
        }
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

/// Scroll animation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Instant scroll (no animation)
    Auto,
    /// Smooth animated scroll
    #[default]
    Smooth,
}

impl ScrollBehavior {
    pub fn is_animated(&self) -> bool {
        *self == ScrollBehavior::Smooth
    }
}

impl From<bool> for ScrollBehavior {
    /// `true` means animated
    fn from(animated: bool) -> Self {
        if animated {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        }
    }
}
