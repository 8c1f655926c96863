//! In-memory scroll container
//!
//! [`HeadlessScrollContainer`] behaves like a native scroll view without any
//! rendering: it keeps a content offset, reveals rectangles with the minimal
//! scroll needed and notifies its listener whenever the offset moves. Hosts
//! rendering offscreen can drive it directly, and it backs the test suite.

use std::cell::{Cell, RefCell};

use scrollproxy_core::{EdgeInsets, Point, Rect, Size};

use crate::alignment::ContainerState;
use crate::container::{
    ListenerOwner, ScrollContainer, ScrollListener, ScrollListenerSlot,
};
use crate::id::ProxyId;

/// A scroll command received by a [`HeadlessScrollContainer`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub rect: Rect,
    pub animated: bool,
}

/// Scroll container that lives entirely in memory
#[derive(Debug, Default)]
pub struct HeadlessScrollContainer {
    state: Cell<ContainerState>,
    listener: ScrollListenerSlot,
    commands: RefCell<Vec<ScrollCommand>>,
    listener_installs: Cell<usize>,
}

impl HeadlessScrollContainer {
    /// Create a container scrolled to the top-leading edge
    pub fn new(visible_size: Size, content_size: Size) -> Self {
        Self {
            state: Cell::new(ContainerState::new(visible_size, content_size)),
            ..Default::default()
        }
    }

    /// Apply insets, moving the raw offset so content starts below them
    pub fn with_insets(self, insets: EdgeInsets) -> Self {
        let state = self
            .state
            .get()
            .with_insets(insets)
            .with_content_offset(Point::new(-insets.left, -insets.top));
        self.state.set(state);
        self
    }

    /// Change the content size (e.g., after a layout pass)
    pub fn set_content_size(&self, content_size: Size) {
        self.update_state(|state| state.content_size = content_size);
    }

    /// Change the viewport size
    pub fn set_visible_size(&self, visible_size: Size) {
        self.update_state(|state| state.visible_size = visible_size);
    }

    /// Move the raw content offset and notify the listener, as a user drag would
    pub fn set_content_offset(&self, offset: Point) {
        self.set_content_offset_silently(offset);
        self.listener.notify(&self.state.get());
    }

    /// Move the raw content offset without notifying anyone
    pub fn set_content_offset_silently(&self, offset: Point) {
        self.update_state(|state| state.content_offset = offset);
    }

    /// Every scroll command received so far, oldest first
    pub fn commands(&self) -> Vec<ScrollCommand> {
        self.commands.borrow().clone()
    }

    /// The most recent scroll command
    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.commands.borrow().last().copied()
    }

    /// How many times a listener was installed
    pub fn listener_installs(&self) -> usize {
        self.listener_installs.get()
    }

    fn update_state(&self, f: impl FnOnce(&mut ContainerState)) {
        let mut state = self.state.get();
        f(&mut state);
        self.state.set(state);
    }
}

impl ScrollContainer for HeadlessScrollContainer {
    fn state(&self) -> ContainerState {
        self.state.get()
    }

    fn scroll_rect_to_visible(&self, rect: Rect, animated: bool) {
        self.commands.borrow_mut().push(ScrollCommand { rect, animated });

        let state = self.state.get();
        let visible = state.effective_visible_size();
        let insets = state.insets;
        let offset = Point::new(
            reveal_axis(
                state.content_offset.x,
                insets.left,
                visible.width,
                state.content_size.width,
                rect.min_x(),
                rect.max_x(),
            ),
            reveal_axis(
                state.content_offset.y,
                insets.top,
                visible.height,
                state.content_size.height,
                rect.min_y(),
                rect.max_y(),
            ),
        );

        if offset != state.content_offset {
            self.set_content_offset(offset);
        }
    }

    fn scroll_listener_owner(&self) -> Option<ListenerOwner> {
        self.listener.owner()
    }

    fn set_scroll_listener(&self, owner: ProxyId, listener: ScrollListener) {
        self.listener_installs.set(self.listener_installs.get() + 1);
        self.listener.set(owner, listener);
    }

    fn remove_scroll_listener(&self, owner: ProxyId) {
        self.listener.remove(owner);
    }
}

/// New raw offset on one axis after the minimal scroll revealing `min..max`
///
/// `visible` excludes the insets, so the offset stays within
/// `-inset_start..=content - visible - inset_start`.
fn reveal_axis(
    offset: f32,
    inset_start: f32,
    visible: f32,
    content: f32,
    min: f32,
    max: f32,
) -> f32 {
    let start = offset + inset_start;
    let end = start + visible;

    let new_start = if max - min > visible || min < start {
        min
    } else if max > end {
        max - visible
    } else {
        start
    };

    let lower = -inset_start;
    let upper = content - visible - inset_start;
    (new_start - inset_start).min(upper).max(lower)
}
