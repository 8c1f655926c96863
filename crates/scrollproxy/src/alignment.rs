//! Alignment resolution
//!
//! Converts "make this rectangle visible at this alignment" into the visible
//! rectangle a scroll container should show. The computation is pure: it only
//! reads the target, the alignment and a [`ContainerState`] snapshot, so it can
//! be tested without a live container.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use scrollproxy_core::{EdgeInsets, Point, Rect, Size};

use crate::error::ScrollProxyError;

/// Edge, corner or center of the viewport a target is aligned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Center,
    Leading,
    Trailing,
    #[default]
    Top,
    Bottom,
    TopLeading,
    TopTrailing,
    BottomLeading,
    BottomTrailing,
}

impl Alignment {
    /// Every supported alignment
    pub const ALL: [Alignment; 9] = [
        Alignment::Center,
        Alignment::Leading,
        Alignment::Trailing,
        Alignment::Top,
        Alignment::Bottom,
        Alignment::TopLeading,
        Alignment::TopTrailing,
        Alignment::BottomLeading,
        Alignment::BottomTrailing,
    ];

    /// Canonical name, as used in config files
    pub fn name(&self) -> &'static str {
        match self {
            Alignment::Center => "center",
            Alignment::Leading => "leading",
            Alignment::Trailing => "trailing",
            Alignment::Top => "top",
            Alignment::Bottom => "bottom",
            Alignment::TopLeading => "topLeading",
            Alignment::TopTrailing => "topTrailing",
            Alignment::BottomLeading => "bottomLeading",
            Alignment::BottomTrailing => "bottomTrailing",
        }
    }

    fn horizontal(&self) -> AxisAlignment {
        match self {
            Alignment::Leading | Alignment::TopLeading | Alignment::BottomLeading => {
                AxisAlignment::Start
            }
            Alignment::Trailing | Alignment::TopTrailing | Alignment::BottomTrailing => {
                AxisAlignment::End
            }
            Alignment::Center | Alignment::Top | Alignment::Bottom => AxisAlignment::Middle,
        }
    }

    fn vertical(&self) -> AxisAlignment {
        match self {
            Alignment::Top | Alignment::TopLeading | Alignment::TopTrailing => {
                AxisAlignment::Start
            }
            Alignment::Bottom | Alignment::BottomLeading | Alignment::BottomTrailing => {
                AxisAlignment::End
            }
            Alignment::Center | Alignment::Leading | Alignment::Trailing => AxisAlignment::Middle,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the canonical names only, the same ones config files accept
impl FromStr for Alignment {
    type Err = ScrollProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alignment::ALL
            .into_iter()
            .find(|alignment| alignment.name() == s)
            .ok_or_else(|| ScrollProxyError::UnknownAlignment(s.to_string()))
    }
}

/// Placement along a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisAlignment {
    Start,
    Middle,
    End,
}

impl AxisAlignment {
    /// Unclamped viewport origin on one axis
    fn origin(self, min: f32, mid: f32, max: f32, visible: f32) -> f32 {
        match self {
            AxisAlignment::Start => min,
            AxisAlignment::Middle => mid - visible / 2.0,
            AxisAlignment::End => max - visible,
        }
    }
}

/// Snapshot of a scroll container's geometry
///
/// Queried from the container for each computation and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerState {
    /// Size of the container's viewport, insets included
    pub visible_size: Size,
    /// Total scrollable content size
    pub content_size: Size,
    /// Insets the container applies around its content
    pub insets: EdgeInsets,
    /// Raw content offset as reported by the container
    pub content_offset: Point,
}

impl ContainerState {
    pub fn new(visible_size: Size, content_size: Size) -> Self {
        Self {
            visible_size,
            content_size,
            ..Default::default()
        }
    }

    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_content_offset(mut self, content_offset: Point) -> Self {
        self.content_offset = content_offset;
        self
    }

    /// Viewport size with the insets removed
    pub fn effective_visible_size(&self) -> Size {
        self.visible_size.inset_by(self.insets)
    }

    /// Largest origin that keeps the viewport within the content (may be negative)
    pub fn max_origin(&self) -> Point {
        let visible = self.effective_visible_size();
        Point::new(
            self.content_size.width - visible.width,
            self.content_size.height - visible.height,
        )
    }

    /// Content offset adjusted for the leading and top insets
    pub fn adjusted_offset(&self) -> Point {
        self.content_offset.offset(self.insets.left, self.insets.top)
    }

    /// Rectangle covering the whole content
    pub fn content_rect(&self) -> Rect {
        self.content_size.to_rect()
    }
}

/// Compute the visible rectangle that shows `target` at `alignment`
///
/// The origin is clamped independently on each axis to
/// `0..=content_size - visible_size`, so the result never asks the container to
/// scroll before the start or past the end of its content. When the content is
/// smaller than the viewport the origin is 0.
pub fn compute_visible_rect(target: Rect, alignment: Alignment, state: &ContainerState) -> Rect {
    let visible = state.effective_visible_size();
    let max_origin = state.max_origin();

    let x = alignment.horizontal().origin(
        target.min_x(),
        target.mid_x(),
        target.max_x(),
        visible.width,
    );
    let y = alignment.vertical().origin(
        target.min_y(),
        target.mid_y(),
        target.max_y(),
        visible.height,
    );

    let origin = Point::new(
        x.min(max_origin.x).max(0.0),
        y.min(max_origin.y).max(0.0),
    );
    Rect::from_origin_size(origin, visible)
}
