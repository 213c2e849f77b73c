//! Main window module
//!
//! A winit window hosting the wry web view. Closing the window hides it; the
//! process keeps running behind its status item.

mod handlers;
mod lifetime;

pub use handlers::{allow_frame_navigation, allow_navigation, ViewEvents};
pub use lifetime::ViewLifetime;

use crate::core::config::Config;
use crate::core::events::{AppEvent, EventSender};
use crate::navigation::NavigationPolicy;
use crate::unread::script::{self, TITLE_QUERY_JS};
use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use winit::{
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

/// What the event loop does with an event for the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    /// Hide the window; the event loop keeps running
    Hide,
    Ignore,
}

/// Close requests hide the window. Nothing here ever exits the app; only the
/// status menu's Quit does.
pub fn window_action(event: &WindowEvent) -> WindowAction {
    match event {
        WindowEvent::CloseRequested => WindowAction::Hide,
        _ => WindowAction::Ignore,
    }
}

/// Main window and its embedded view
pub struct MainWindow {
    // Dropped before the window it is attached to
    webview: WebView,
    window: Window,
    lifetime: ViewLifetime,
    events: ViewEvents,
}

impl MainWindow {
    /// Create the window and start loading the configured page
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &Config,
        policy: NavigationPolicy,
        event_tx: EventSender,
    ) -> Result<Self> {
        info!("Creating main window");

        let size = LogicalSize::new(config.window.width, config.window.height);
        let window_attrs = WindowAttributes::default()
            .with_title(config.window.title.clone())
            .with_inner_size(size)
            .with_min_inner_size(size);

        let window = event_loop
            .create_window(window_attrs)
            .context("Failed to create main window")?;

        let lifetime = ViewLifetime::new();
        let events = ViewEvents::new(event_tx, lifetime.clone());
        let webview = build_webview(&window, config, policy, events.clone())?;

        info!("Main window created, loading {}", config.web.url);

        Ok(Self {
            webview,
            window,
            lifetime,
            events,
        })
    }

    pub fn is_our_window(&self, id: WindowId) -> bool {
        self.window.id() == id
    }

    pub fn hide(&self) {
        self.window.set_visible(false);
        debug!("Main window hidden");
    }

    pub fn show(&self) {
        self.window.set_visible(true);
        self.window.focus_window();
        debug!("Main window shown");
    }

    pub fn load_url(&self, url: &str) {
        if let Err(e) = self.webview.load_url(url) {
            warn!("Failed to load {}: {}", url, e);
        }
    }

    /// Read the page title; the result arrives as `AppEvent::TitleObserved`
    pub fn request_title(&self) {
        let events = self.events.clone();
        let result = self
            .webview
            .evaluate_script_with_callback(TITLE_QUERY_JS, move |raw| {
                events.on_title(script::decode_title_result(&raw));
            });
        if let Err(e) = result {
            debug!("Title read failed: {}", e);
        }
    }

    /// Stop callbacks from reaching the event loop
    pub fn teardown(&self) {
        self.lifetime.invalidate();
    }
}

impl Drop for MainWindow {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn build_webview(
    window: &Window,
    config: &Config,
    policy: NavigationPolicy,
    events: ViewEvents,
) -> Result<WebView> {
    let nav_policy = policy.clone();
    let frame_policy = policy;
    let ipc_events = events.clone();
    let load_events = events;

    let mut builder = WebViewBuilder::new()
        .with_url(config.web.url.clone())
        .with_devtools(config.web.devtools);

    for js in script::initialization_scripts(config.unread.source) {
        builder = builder.with_initialization_script(js);
    }

    builder
        .with_ipc_handler(move |request| {
            ipc_events.on_ipc(request.body());
        })
        .with_navigation_handler(move |url| allow_navigation(&nav_policy, &url))
        .with_new_window_req_handler(move |url| allow_frame_navigation(&frame_policy, &url))
        .with_on_page_load_handler(move |event, url| match event {
            PageLoadEvent::Started => {
                load_events.dispatch(AppEvent::PageLoadStarted(url));
            }
            PageLoadEvent::Finished => {
                load_events.dispatch(AppEvent::PageLoaded(url));
            }
        })
        .build(window)
        .context("Failed to create web view")
}
