//! End-to-end scroll proxy scenarios against in-memory containers

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scrollproxy::prelude::*;
use scrollproxy::{
    compute_visible_rect, ListenerOwner, ProxyId, ScrollListener, ScrollListenerSlot,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Minimal host scroll view: fixed geometry, records requested rects
struct RecordingScrollView {
    state: Cell<ContainerState>,
    listener: ScrollListenerSlot,
    requests: RefCell<Vec<Rect>>,
    /// Scroll events already go to a delegate of the host's own
    host_delegate: Cell<bool>,
}

impl RecordingScrollView {
    fn new(state: ContainerState) -> Rc<Self> {
        Rc::new(Self {
            state: Cell::new(state),
            listener: ScrollListenerSlot::new(),
            requests: RefCell::new(Vec::new()),
            host_delegate: Cell::new(false),
        })
    }

    fn user_scroll(&self, content_offset: Point) {
        let state = self.state.get().with_content_offset(content_offset);
        self.state.set(state);
        self.listener.notify(&state);
    }
}

impl ScrollContainer for RecordingScrollView {
    fn state(&self) -> ContainerState {
        self.state.get()
    }

    fn scroll_rect_to_visible(&self, rect: Rect, _animated: bool) {
        self.requests.borrow_mut().push(rect);
    }

    fn scroll_listener_owner(&self) -> Option<ListenerOwner> {
        if self.host_delegate.get() {
            return Some(ListenerOwner::Foreign);
        }
        self.listener.owner()
    }

    fn set_scroll_listener(&self, owner: ProxyId, listener: ScrollListener) {
        self.listener.set(owner, listener);
    }

    fn remove_scroll_listener(&self, owner: ProxyId) {
        self.listener.remove(owner);
    }
}

fn square(viewport: f32, content: f32) -> ContainerState {
    ContainerState::new(Size::new(viewport, viewport), Size::new(content, content))
}

#[test]
fn bottom_trailing_target_near_content_end() {
    init_tracing();
    let view = RecordingScrollView::new(square(100.0, 500.0));
    let proxy: ScrollProxy<&str> = ScrollProxy::new();
    proxy.bind(&view);
    proxy.register("corner", Rect::new(400.0, 400.0, 50.0, 50.0));

    proxy
        .scroll_to_with("corner", ScrollOptions::aligned(Alignment::BottomTrailing))
        .expect("registered region");

    let requested = view.requests.borrow()[0];
    assert_eq!(requested, Rect::new(350.0, 350.0, 100.0, 100.0));
    // Never past the end of the content
    assert!(requested.max_x() <= 500.0 && requested.max_y() <= 500.0);
}

#[test]
fn center_on_small_target_clamps_to_origin() {
    let state = square(100.0, 200.0);

    let rect = compute_visible_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Alignment::Center, &state);

    assert_eq!(rect, Rect::new(0.0, 0.0, 100.0, 100.0));
}

#[test]
fn content_smaller_than_viewport_never_scrolls() {
    let state = square(300.0, 120.0);

    for alignment in Alignment::ALL {
        let rect = compute_visible_rect(Rect::new(60.0, 60.0, 50.0, 50.0), alignment, &state);
        assert_eq!(rect.origin, Point::ZERO, "{alignment}");
    }
}

#[test]
fn latest_registration_wins() {
    let view = RecordingScrollView::new(square(100.0, 1000.0));
    let proxy: ScrollProxy<u32> = ScrollProxy::new();
    proxy.bind(&view);

    proxy.register(3, Rect::new(0.0, 100.0, 100.0, 20.0));
    proxy.register(3, Rect::new(0.0, 600.0, 100.0, 20.0));
    proxy
        .scroll_to_with(&3, ScrollOptions::aligned(Alignment::TopLeading))
        .expect("registered region");

    assert_eq!(proxy.frame(&3), Some(Rect::new(0.0, 600.0, 100.0, 20.0)));
    assert_eq!(view.requests.borrow()[0].origin, Point::new(0.0, 600.0));
}

#[test]
fn rebinding_same_container_keeps_single_listener() -> anyhow::Result<()> {
    let view = RecordingScrollView::new(square(100.0, 1000.0));
    let proxy: ScrollProxy<u32> = ScrollProxy::new();
    let calls = Rc::new(Cell::new(0));
    let calls_clone = calls.clone();
    proxy.on_scroll(move |_| calls_clone.set(calls_clone.get() + 1));

    assert!(proxy.try_bind(&view)?);
    assert!(!proxy.try_bind(&view)?);
    proxy.bind(&view);
    view.user_scroll(Point::new(0.0, 50.0));

    assert_eq!(calls.get(), 1);
    assert_eq!(
        view.scroll_listener_owner(),
        Some(ListenerOwner::Proxy(proxy.id()))
    );
    Ok(())
}

#[test]
#[should_panic(expected = "already bound to a different scroll container")]
fn binding_a_second_container_panics() {
    let a = RecordingScrollView::new(square(100.0, 1000.0));
    let b = RecordingScrollView::new(square(100.0, 1000.0));
    let proxy: ScrollProxy<u32> = ScrollProxy::new();

    proxy.bind(&a);
    proxy.bind(&b);
}

#[test]
#[should_panic(expected = "already has a scroll listener")]
fn two_proxies_on_one_container_panics() {
    let view = RecordingScrollView::new(square(100.0, 1000.0));
    let first: ScrollProxy<u32> = ScrollProxy::new();
    let second: ScrollProxy<u32> = ScrollProxy::new();

    first.bind(&view);
    second.bind(&view);
}

#[test]
fn host_delegate_blocks_binding() {
    let view = RecordingScrollView::new(square(100.0, 1000.0));
    view.host_delegate.set(true);
    let proxy: ScrollProxy<u32> = ScrollProxy::new();

    assert_eq!(
        proxy.try_bind(&view),
        Err(ScrollProxyError::ForeignListener {
            owner: ListenerOwner::Foreign
        })
    );
    assert!(!proxy.is_bound());
    assert_eq!(view.scroll_listener_owner(), Some(ListenerOwner::Foreign));
}

#[test]
#[should_panic(expected = "owned by a foreign delegate")]
fn binding_over_host_delegate_panics() {
    let view = RecordingScrollView::new(square(100.0, 1000.0));
    view.host_delegate.set(true);
    let proxy: ScrollProxy<u32> = ScrollProxy::new();

    proxy.bind(&view);
}

#[test]
fn unregistered_region_is_reported_not_scrolled() {
    init_tracing();
    let container = Rc::new(HeadlessScrollContainer::new(
        Size::new(100.0, 100.0),
        Size::new(100.0, 1000.0),
    ));
    let proxy: ScrollProxy<String> = ScrollProxy::new();
    proxy.bind(&container);
    container.set_content_offset(Point::new(0.0, 120.0));

    let err = proxy.scroll_to("ghost").expect_err("not registered");

    assert!(matches!(err, ScrollProxyError::RegionNotFound(_)));
    assert!(container.commands().is_empty());
    assert_eq!(proxy.offset(), Point::new(0.0, 120.0));
}

#[test]
fn offset_follows_scrolls_with_insets() {
    let container = Rc::new(
        HeadlessScrollContainer::new(Size::new(100.0, 144.0), Size::new(100.0, 2000.0))
            .with_insets(EdgeInsets::new(44.0, 0.0, 0.0, 0.0)),
    );
    let proxy: ScrollProxy<&str> = ScrollProxy::with_config(ScrollProxyConfig::instant());
    let offsets = Rc::new(RefCell::new(Vec::new()));
    let offsets_clone = offsets.clone();
    proxy.on_scroll(move |offset| offsets_clone.borrow_mut().push(offset));
    proxy.bind(&container);
    proxy.register("section", Rect::new(0.0, 900.0, 100.0, 300.0));

    assert_eq!(proxy.scroll_to("section"), Ok(true));
    assert_eq!(proxy.offset(), Point::new(0.0, 900.0));
    assert!(!container.last_command().expect("command issued").animated);

    assert!(proxy.scroll_to_edge(Alignment::Top));
    assert_eq!(proxy.offset(), Point::ZERO);
    assert_eq!(
        *offsets.borrow(),
        vec![Point::new(0.0, 900.0), Point::ZERO]
    );
}

#[test]
fn scrolls_use_latest_container_geometry() {
    let container = Rc::new(HeadlessScrollContainer::new(
        Size::new(100.0, 100.0),
        Size::new(100.0, 300.0),
    ));
    let proxy: ScrollProxy<&str> = ScrollProxy::with_config(ScrollProxyConfig::instant());
    proxy.bind(&container);
    proxy.register("footer", Rect::new(0.0, 800.0, 100.0, 50.0));

    // Content ends at 300, so the region can only be approached
    assert_eq!(proxy.scroll_to("footer"), Ok(true));
    assert_eq!(proxy.offset(), Point::new(0.0, 200.0));

    // Layout grows the content; the same command now reaches the region
    container.set_content_size(Size::new(100.0, 2000.0));
    assert_eq!(proxy.scroll_to("footer"), Ok(true));
    assert_eq!(proxy.offset(), Point::new(0.0, 800.0));

    // A taller viewport moves the bottom edge target
    container.set_visible_size(Size::new(100.0, 400.0));
    assert!(proxy.scroll_to_edge(Alignment::Bottom));
    assert_eq!(proxy.offset(), Point::new(0.0, 1600.0));

    let requested: Vec<Rect> = container
        .commands()
        .iter()
        .map(|command| command.rect)
        .collect();
    assert_eq!(
        requested,
        vec![
            Rect::new(0.0, 200.0, 100.0, 100.0),
            Rect::new(0.0, 800.0, 100.0, 100.0),
            Rect::new(0.0, 1600.0, 100.0, 400.0),
        ]
    );
    let content = container.state().content_rect();
    assert!(requested.iter().all(|rect| content.contains_rect(rect)));
}

#[test]
fn container_teardown_turns_commands_into_noops() {
    let proxy: ScrollProxy<&str> = ScrollProxy::new();
    proxy.register("row", Rect::new(0.0, 300.0, 100.0, 10.0));
    {
        let view = RecordingScrollView::new(square(100.0, 1000.0));
        proxy.bind(&view);
        assert!(proxy.is_bound());
    }

    assert!(!proxy.is_bound());
    assert_eq!(proxy.scroll_to("row"), Ok(false));
    assert!(!proxy.scroll_to_edge(Alignment::Bottom));
}

#[test]
fn nested_proxies_keep_separate_spaces() {
    let outer: ScrollProxy<&str> = ScrollProxy::new();
    let inner: ScrollProxy<&str> = ScrollProxy::new();
    let rect = Rect::new(0.0, 40.0, 80.0, 20.0);

    let report = GeometryReport {
        space: inner.space(),
        id: "cell",
        rect,
    };
    assert!(!outer.report(report.clone()));
    assert!(inner.report(report));

    assert_eq!(outer.frame("cell"), None);
    assert_eq!(inner.frame("cell"), Some(rect));
    assert_ne!(outer.space().name(), inner.space().name());
}

#[test]
fn config_loaded_from_toml_drives_defaults() -> anyhow::Result<()> {
    let config = ScrollProxyConfig::from_toml_str(
        r#"
        default_alignment = "center"
        behavior = "auto"
        warn_on_missing_region = false
        "#,
    )?;
    let view = RecordingScrollView::new(square(100.0, 1000.0));
    let proxy: ScrollProxy<&str> = ScrollProxy::with_config(config);
    proxy.bind(&view);
    proxy.register("middle", Rect::new(0.0, 500.0, 100.0, 100.0));

    proxy.scroll_to("middle")?;

    assert_eq!(view.requests.borrow()[0].origin, Point::new(0.0, 500.0));
    Ok(())
}
