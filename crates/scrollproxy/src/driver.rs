//! ScrollDriver - exclusive binding to a concrete scroll container
//!
//! The driver keeps a non-owning handle to the bound container, forwards scroll
//! commands to it and occupies its scroll listener slot. Offsets reported
//! through that slot are published to subscribers.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use scrollproxy_core::{Point, Rect};
use slotmap::{new_key_type, SlotMap};

use crate::alignment::ContainerState;
use crate::container::{ListenerOwner, ScrollContainer, ScrollListener};
use crate::error::{Result, ScrollProxyError};
use crate::id::ProxyId;

new_key_type! {
    /// Handle returned when subscribing to offset changes
    pub struct SubscriptionId;
}

/// Callback receiving every published offset
pub type OffsetCallback = Rc<dyn Fn(Point)>;

/// Current offset plus the callbacks observing it
#[derive(Default)]
struct OffsetChannel {
    offset: Cell<Point>,
    subscribers: RefCell<SlotMap<SubscriptionId, OffsetCallback>>,
}

impl OffsetChannel {
    fn publish(&self, offset: Point) {
        self.offset.set(offset);
        // Snapshot so callbacks can subscribe or unsubscribe while running
        let callbacks: Vec<OffsetCallback> =
            self.subscribers.borrow().values().cloned().collect();
        for callback in callbacks {
            callback(offset);
        }
    }
}

/// Binding between one proxy and at most one scroll container
pub struct ScrollDriver {
    owner: ProxyId,
    container: RefCell<Option<Weak<dyn ScrollContainer>>>,
    channel: Rc<OffsetChannel>,
}

impl std::fmt::Debug for ScrollDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollDriver")
            .field("owner", &self.owner)
            .field("bound", &self.is_bound())
            .field("offset", &self.offset())
            .finish()
    }
}

impl ScrollDriver {
    /// Create an unbound driver acting on behalf of `owner`
    pub fn new(owner: ProxyId) -> Self {
        Self {
            owner,
            container: RefCell::new(None),
            channel: Rc::new(OffsetChannel::default()),
        }
    }

    /// Identity used to claim container listener slots
    pub fn owner(&self) -> ProxyId {
        self.owner
    }

    /// The bound container, if it is still alive
    pub fn container(&self) -> Option<Rc<dyn ScrollContainer>> {
        self.container.borrow().as_ref()?.upgrade()
    }

    /// Check if a live container is bound
    pub fn is_bound(&self) -> bool {
        self.container().is_some()
    }

    /// Geometry of the bound container, queried now
    pub fn container_state(&self) -> Option<ContainerState> {
        self.container().map(|container| container.state())
    }

    /// Bind to `container`, panicking on an ownership conflict
    ///
    /// Binding the container that is already bound is a no-op. Binding a
    /// container whose listener slot belongs to another owner, or a different
    /// container while the current one is still alive, is a programming error:
    /// two drivers would race for the same scroll events.
    #[track_caller]
    pub fn bind<C: ScrollContainer + 'static>(&self, container: &Rc<C>) {
        if let Err(err) = self.try_bind(container) {
            panic!("{err}");
        }
    }

    /// Bind to `container`, reporting ownership conflicts as errors
    ///
    /// Returns `Ok(true)` when a listener was installed and `Ok(false)` when the
    /// container was already bound to this driver.
    pub fn try_bind<C: ScrollContainer + 'static>(&self, container: &Rc<C>) -> Result<bool> {
        let container: Rc<dyn ScrollContainer> = container.clone();

        if let Some(current) = self.container() {
            if !same_container(&current, &container) {
                return Err(ScrollProxyError::AlreadyBound { proxy: self.owner });
            }
        }

        match container.scroll_listener_owner() {
            Some(owner) if !owner.is_proxy(self.owner) => {
                return Err(ScrollProxyError::ForeignListener { owner });
            }
            Some(_) if self.is_bound() => return Ok(false),
            _ => {}
        }

        container.set_scroll_listener(self.owner, self.listener());
        *self.container.borrow_mut() = Some(Rc::downgrade(&container));
        tracing::debug!(proxy = %self.owner, "scroll driver bound to container");
        Ok(true)
    }

    /// Release the bound container and its listener slot
    pub fn unbind(&self) {
        let Some(weak) = self.container.borrow_mut().take() else {
            return;
        };
        if let Some(container) = weak.upgrade() {
            if container
                .scroll_listener_owner()
                .is_some_and(|owner| owner.is_proxy(self.owner))
            {
                container.remove_scroll_listener(self.owner);
            }
            tracing::debug!(proxy = %self.owner, "scroll driver unbound");
        }
    }

    /// Ask the bound container to reveal `rect`
    ///
    /// Returns `false` without doing anything when no live container is bound;
    /// scrolling before attachment is an expected startup race.
    pub fn apply_visible_rect(&self, rect: Rect, animated: bool) -> bool {
        let Some(container) = self.container() else {
            tracing::trace!(proxy = %self.owner, "scroll ignored, no container bound");
            return false;
        };
        tracing::debug!(proxy = %self.owner, ?rect, animated, "scrolling rect to visible");
        container.scroll_rect_to_visible(rect, animated);
        true
    }

    /// Last published offset, (0, 0) until the first scroll event
    pub fn offset(&self) -> Point {
        self.channel.offset.get()
    }

    /// Publish the offset for a scroll event described by `state`
    pub fn handle_scroll(&self, state: &ContainerState) {
        self.channel.publish(state.adjusted_offset());
    }

    /// Re-read the container's offset and publish it
    ///
    /// Hosts that cannot guarantee scroll notifications can poll with this.
    /// Returns `None` when unbound.
    pub fn sync_offset(&self) -> Option<Point> {
        let state = self.container_state()?;
        self.handle_scroll(&state);
        Some(state.adjusted_offset())
    }

    /// Register a callback for every published offset
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Point) + 'static,
    {
        self.channel
            .subscribers
            .borrow_mut()
            .insert(Rc::new(callback))
    }

    /// Remove a subscription; returns whether it existed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.channel.subscribers.borrow_mut().remove(id).is_some()
    }

    /// Number of active offset subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.channel.subscribers.borrow().len()
    }

    fn listener(&self) -> ScrollListener {
        let channel = Rc::downgrade(&self.channel);
        Rc::new(move |state: &ContainerState| {
            if let Some(channel) = channel.upgrade() {
                channel.publish(state.adjusted_offset());
            }
        })
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        self.unbind();
    }
}

fn same_container(a: &Rc<dyn ScrollContainer>, b: &Rc<dyn ScrollContainer>) -> bool {
    // Compare data pointers only, vtables may differ between codegen units
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}
