//! Host-side scroll container interface
//!
//! The host framework owns the concrete scroll view. The proxy only needs to
//! read its geometry, ask it to reveal a rectangle and occupy its scroll
//! listener slot, which is what [`ScrollContainer`] describes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use scrollproxy_core::Rect;

use crate::alignment::ContainerState;
use crate::id::ProxyId;

/// Callback a container invokes after every content offset change
pub type ScrollListener = Rc<dyn Fn(&ContainerState)>;

/// Who currently occupies a container's scroll listener slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerOwner {
    /// A scroll proxy installed its listener
    Proxy(ProxyId),
    /// Something outside the proxy system, such as a host delegate
    Foreign,
}

impl ListenerOwner {
    /// Whether the slot is held by the proxy `id`
    pub fn is_proxy(&self, id: ProxyId) -> bool {
        *self == ListenerOwner::Proxy(id)
    }
}

impl fmt::Display for ListenerOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenerOwner::Proxy(id) => write!(f, "scroll proxy {id}"),
            ListenerOwner::Foreign => f.write_str("a foreign delegate"),
        }
    }
}

/// A concrete scroll container a proxy can drive
///
/// Methods take `&self`: containers are shared UI objects and are expected to
/// use interior mutability, like the views of most retained-mode toolkits.
pub trait ScrollContainer {
    /// Current geometry of the container
    fn state(&self) -> ContainerState;

    /// Scroll so that `rect` (in content coordinates) becomes visible
    ///
    /// `animated` is a hint; the core never waits for the scroll to finish.
    fn scroll_rect_to_visible(&self, rect: Rect, animated: bool);

    /// Owner of the scroll listener slot, if it is occupied
    ///
    /// Containers that already route scroll events to a delegate of their own
    /// report [`ListenerOwner::Foreign`], which makes binding fail.
    fn scroll_listener_owner(&self) -> Option<ListenerOwner>;

    /// Install `listener` as the only scroll listener, owned by `owner`
    fn set_scroll_listener(&self, owner: ProxyId, listener: ScrollListener);

    /// Clear the listener slot if it is held by `owner`
    fn remove_scroll_listener(&self, owner: ProxyId);
}

/// Single-occupant scroll listener storage for [`ScrollContainer`] implementors
#[derive(Default)]
pub struct ScrollListenerSlot {
    slot: RefCell<Option<(ProxyId, ScrollListener)>>,
}

impl fmt::Debug for ScrollListenerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollListenerSlot")
            .field("owner", &self.owner())
            .finish()
    }
}

impl ScrollListenerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current owner of the slot
    pub fn owner(&self) -> Option<ListenerOwner> {
        self.slot
            .borrow()
            .as_ref()
            .map(|(owner, _)| ListenerOwner::Proxy(*owner))
    }

    /// Replace the slot's occupant
    pub fn set(&self, owner: ProxyId, listener: ScrollListener) {
        *self.slot.borrow_mut() = Some((owner, listener));
    }

    /// Clear the slot if `owner` holds it; returns whether it was cleared
    pub fn remove(&self, owner: ProxyId) -> bool {
        let mut slot = self.slot.borrow_mut();
        if slot.as_ref().is_some_and(|(current, _)| *current == owner) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Invoke the installed listener, if any
    ///
    /// The slot is not borrowed while the listener runs, so the listener may
    /// itself replace or clear the slot.
    pub fn notify(&self, state: &ContainerState) -> bool {
        let listener = self.slot.borrow().as_ref().map(|(_, l)| Rc::clone(l));
        match listener {
            Some(listener) => {
                listener(state);
                true
            }
            None => false,
        }
    }
}
