//! ScrollProxy - programmatic scroll control for one scroll container

use std::borrow::Borrow;
use std::cell::RefCell;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use scrollproxy_core::{Point, Rect};

use crate::alignment::{compute_visible_rect, Alignment};
use crate::config::ScrollProxyConfig;
use crate::container::ScrollContainer;
use crate::driver::{ScrollDriver, SubscriptionId};
use crate::error::{Result, ScrollProxyError};
use crate::id::{CoordinateSpace, ProxyId};
use crate::registry::GeometryRegistry;
use crate::{ScrollBehavior, ScrollOptions};

/// A region frame measured by the host's geometry reporter
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryReport<Id> {
    /// Space the frame was measured in
    pub space: CoordinateSpace,
    /// Region the frame belongs to
    pub id: Id,
    /// Frame of the region
    pub rect: Rect,
}

struct ProxyInner<Id> {
    id: ProxyId,
    config: ScrollProxyConfig,
    registry: RefCell<GeometryRegistry<Id>>,
    driver: ScrollDriver,
}

/// Handle for scrolling a container to registered regions
///
/// Create one proxy per scroll container and keep it alive for the container's
/// lifetime. Clones share the same registry, binding and offset.
///
/// # Example
///
/// ```rust,ignore
/// let proxy = ScrollProxy::<u64>::new();
///
/// // Geometry reporter, on every layout pass:
/// proxy.register(row.id, row_frame_in(proxy.space()));
///
/// // Attachment step, once the native scroll view exists:
/// proxy.bind(&scroll_view);
///
/// // Later:
/// proxy.scroll_to_with(&42, ScrollOptions::aligned(Alignment::Center))?;
/// proxy.on_scroll(|offset| header.set_collapsed(offset.y > 40.0));
/// ```
pub struct ScrollProxy<Id> {
    inner: Rc<ProxyInner<Id>>,
}

impl<Id> Clone for ScrollProxy<Id> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<Id> Debug for ScrollProxy<Id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollProxy")
            .field("id", &self.inner.id)
            .field("bound", &self.inner.driver.is_bound())
            .field("offset", &self.inner.driver.offset())
            .finish()
    }
}

impl<Id: Eq + Hash + Debug> Default for ScrollProxy<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Eq + Hash + Debug> ScrollProxy<Id> {
    /// Create an unbound proxy with the standard config
    pub fn new() -> Self {
        Self::with_config(ScrollProxyConfig::standard())
    }

    /// Create an unbound proxy with `config`
    pub fn with_config(config: ScrollProxyConfig) -> Self {
        let id = ProxyId::new();
        Self {
            inner: Rc::new(ProxyInner {
                id,
                config,
                registry: RefCell::new(GeometryRegistry::new(CoordinateSpace::of(id))),
                driver: ScrollDriver::new(id),
            }),
        }
    }

    /// Unique id of this proxy
    pub fn id(&self) -> ProxyId {
        self.inner.id
    }

    /// The private coordinate space region frames must be measured in
    pub fn space(&self) -> CoordinateSpace {
        CoordinateSpace::of(self.inner.id)
    }

    pub fn config(&self) -> &ScrollProxyConfig {
        &self.inner.config
    }

    // =========================================================================
    // Region geometry (called by the host's geometry reporter)
    // =========================================================================

    /// Record the frame of region `id`, in this proxy's coordinate space
    ///
    /// Returns `false` if the same frame was already recorded.
    pub fn register(&self, id: Id, rect: Rect) -> bool {
        let changed = self.inner.registry.borrow_mut().update(id, rect);
        if changed {
            tracing::trace!(proxy = %self.inner.id, ?rect, "region frame updated");
        }
        changed
    }

    /// Record a frame from a tagged geometry report
    ///
    /// Reports measured in another proxy's space are ignored.
    pub fn report(&self, report: GeometryReport<Id>) -> bool {
        if report.space != self.space() {
            tracing::trace!(
                proxy = %self.inner.id,
                space = %report.space,
                id = ?report.id,
                "ignoring geometry report from a foreign coordinate space"
            );
            return false;
        }
        self.register(report.id, report.rect)
    }

    /// Forget the frame of region `id` (e.g., when its view is removed)
    pub fn unregister<Q>(&self, id: &Q) -> Option<Rect>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.registry.borrow_mut().remove(id)
    }

    /// Last recorded frame of region `id`
    pub fn frame<Q>(&self, id: &Q) -> Option<Rect>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.registry.borrow().lookup(id)
    }

    /// Number of regions with a recorded frame
    pub fn region_count(&self) -> usize {
        self.inner.registry.borrow().len()
    }

    // =========================================================================
    // Container binding (called by the host's attachment step)
    // =========================================================================

    /// Bind the concrete scroll container
    ///
    /// Binding the same container again is a no-op.
    ///
    /// # Panics
    ///
    /// If the container's scroll listener belongs to another proxy, or if this
    /// proxy is still bound to a different live container.
    #[track_caller]
    pub fn bind<C: ScrollContainer + 'static>(&self, container: &Rc<C>) {
        self.inner.driver.bind(container);
    }

    /// Bind the concrete scroll container, reporting conflicts as errors
    pub fn try_bind<C: ScrollContainer + 'static>(&self, container: &Rc<C>) -> Result<bool> {
        self.inner.driver.try_bind(container)
    }

    /// Release the bound container
    pub fn unbind(&self) {
        self.inner.driver.unbind();
    }

    /// Check if a live container is bound
    pub fn is_bound(&self) -> bool {
        self.inner.driver.is_bound()
    }

    // =========================================================================
    // Scroll commands
    // =========================================================================

    /// Scroll to an edge or corner of the content, with the default behavior
    pub fn scroll_to_edge(&self, alignment: Alignment) -> bool {
        self.scroll_to_edge_with(alignment, self.inner.config.behavior)
    }

    /// Scroll to an edge or corner of the content
    ///
    /// Returns whether a scroll command was issued (`false` when unbound).
    pub fn scroll_to_edge_with(&self, alignment: Alignment, behavior: ScrollBehavior) -> bool {
        let Some(state) = self.inner.driver.container_state() else {
            return false;
        };
        let visible = compute_visible_rect(state.content_rect(), alignment, &state);
        self.inner
            .driver
            .apply_visible_rect(visible, behavior.is_animated())
    }

    /// Scroll to region `id` with the configured default options
    pub fn scroll_to<Q>(&self, id: &Q) -> Result<bool>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.scroll_to_with(id, self.inner.config.scroll_options())
    }

    /// Scroll to region `id`
    ///
    /// Returns `Ok(false)` without scrolling when no container is bound. An
    /// unregistered `id` is logged and returned as
    /// [`ScrollProxyError::RegionNotFound`]; nothing scrolls in that case.
    pub fn scroll_to_with<Q>(&self, id: &Q, options: ScrollOptions) -> Result<bool>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some(state) = self.inner.driver.container_state() else {
            return Ok(false);
        };
        let Some(frame) = self.frame(id) else {
            if self.inner.config.warn_on_missing_region {
                tracing::warn!(
                    "ID ({:?}) not found, make sure to register the region with the scroll proxy",
                    id
                );
            }
            return Err(ScrollProxyError::RegionNotFound(format!("{id:?}")));
        };

        let visible = compute_visible_rect(frame, options.alignment, &state);
        Ok(self
            .inner
            .driver
            .apply_visible_rect(visible, options.behavior.is_animated()))
    }

    /// The visible rect `scroll_to` would request for `target`, without scrolling
    pub fn visible_rect_for(&self, target: Rect, alignment: Alignment) -> Option<Rect> {
        let state = self.inner.driver.container_state()?;
        Some(compute_visible_rect(target, alignment, &state))
    }

    // =========================================================================
    // Offset
    // =========================================================================

    /// Current scroll offset, adjusted for insets
    pub fn offset(&self) -> Point {
        self.inner.driver.offset()
    }

    /// Call `callback` with the offset after every scroll event
    pub fn on_scroll<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Point) + 'static,
    {
        self.inner.driver.subscribe(callback)
    }

    /// Remove a callback added with `on_scroll`
    pub fn remove_scroll_listener(&self, id: SubscriptionId) -> bool {
        self.inner.driver.unsubscribe(id)
    }

    /// Re-read the offset from the container and publish it
    pub fn sync_offset(&self) -> Option<Point> {
        self.inner.driver.sync_offset()
    }
}
