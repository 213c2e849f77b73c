// Hide console window on Windows release builds
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

//! Messenger Bar - Entry Point
//!
//! Loads configuration, creates the status item and the main window, and runs
//! the event loop that owns every piece of UI state.

use anyhow::Result;
use messenger_bar::{
    core::{
        config::{Config, UnreadSource},
        events::{AppEvent, EventSender},
    },
    navigation::{
        open_in_system_browser, AllowedHostSet, NavigationDecision, NavigationPolicy,
        NavigationTrigger,
    },
    notify::DesktopNotifier,
    surface::OsSurface,
    tray::{StatusAction, StatusItem},
    unread::{TitlePoller, UnreadDispatcher},
    window::{window_action, MainWindow, WindowAction},
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

/// Main application handler for winit event loop
struct App {
    /// Configuration
    config: Config,
    /// Event sender for inter-module communication (wakes event loop)
    event_tx: EventSender,
    /// Event receiver for inter-module communication
    event_rx: Option<mpsc::UnboundedReceiver<AppEvent>>,
    /// Status-bar item
    status_item: Option<StatusItem>,
    /// Main window with the embedded view
    main_window: Option<MainWindow>,
    /// Link handling rules
    policy: NavigationPolicy,
    /// Unread tracking and surface updates
    dispatcher: UnreadDispatcher,
    /// Local notification backend
    notifier: DesktopNotifier,
    /// Title poller (poll source only, started after the first page load)
    poller: Option<TitlePoller>,
}

impl App {
    fn new(config: Config, event_tx: EventSender, event_rx: mpsc::UnboundedReceiver<AppEvent>) -> Self {
        let policy = NavigationPolicy::new(AllowedHostSet::new(&config.web.allowed_hosts));
        let dispatcher = UnreadDispatcher::new(&config.status, &config.notifications);
        Self {
            config,
            event_tx,
            event_rx: Some(event_rx),
            status_item: None,
            main_window: None,
            policy,
            dispatcher,
            notifier: DesktopNotifier::new(),
            poller: None,
        }
    }

    fn handle_event(&mut self, event: AppEvent, event_loop: &ActiveEventLoop) {
        match event {
            AppEvent::StatusAction(action) => self.handle_status_action(action, event_loop),

            AppEvent::PageLoadStarted(url) => {
                debug!("Page load started: {}", url);
            }

            AppEvent::PageLoaded(url) => {
                debug!("Page loaded: {}", url);
                self.dispatcher.page_loaded(&self.notifier);
                self.start_poller_if_needed();
            }

            AppEvent::UnreadObserved(count) => {
                let mut surface = OsSurface::new(self.status_item.as_ref());
                self.dispatcher.observe(count, &mut surface, &self.notifier);
            }

            AppEvent::PollTitle => {
                if let Some(ref window) = self.main_window {
                    window.request_title();
                }
            }

            AppEvent::TitleObserved(title) => {
                let mut surface = OsSurface::new(self.status_item.as_ref());
                self.dispatcher.observe_title(&title, &mut surface, &self.notifier);
            }

            AppEvent::LinkActivated(url) => {
                match self.policy.decide(&url, NavigationTrigger::LinkActivated) {
                    NavigationDecision::RedirectToSystemBrowser => open_in_system_browser(&url),
                    NavigationDecision::AllowInView => self.load_in_view(&url),
                }
            }
        }
    }

    fn handle_status_action(&mut self, action: StatusAction, event_loop: &ActiveEventLoop) {
        info!("Status action: {:?}", action);
        match action {
            StatusAction::ShowWindow => self.reveal_window(),
            StatusAction::Quit => event_loop.exit(),
        }
    }

    /// Bring the main window to the front, promoting the app first so the
    /// window can become key.
    fn reveal_window(&self) {
        #[cfg(target_os = "macos")]
        messenger_bar::macos::activate_as_regular();

        if let Some(ref window) = self.main_window {
            window.show();
            return;
        }

        #[cfg(target_os = "macos")]
        if messenger_bar::macos::order_front_any_window() {
            return;
        }

        debug!("No window to reveal");
    }

    fn load_in_view(&self, url: &str) {
        if let Some(ref window) = self.main_window {
            window.load_url(url);
        }
    }

    fn start_poller_if_needed(&mut self) {
        if self.config.unread.source != UnreadSource::Poll || self.poller.is_some() {
            return;
        }

        let event_tx = self.event_tx.clone();
        let interval = Duration::from_millis(self.config.unread.poll_interval_ms);
        match TitlePoller::start(interval, move || event_tx.send(AppEvent::PollTitle).is_ok()) {
            Ok(poller) => self.poller = Some(poller),
            Err(e) => error!("Failed to start title poller: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Status item must be created after the event loop has started
        if self.status_item.is_none() {
            match StatusItem::new(
                self.event_tx.clone(),
                &self.config.window.title,
                &self.config.status.base_icon,
            ) {
                Ok(item) => {
                    self.status_item = Some(item);
                    let mut surface = OsSurface::new(self.status_item.as_ref());
                    self.dispatcher.refresh(&mut surface);
                    info!("Status item initialized");
                }
                Err(e) => {
                    error!("Failed to initialize status item: {}", e);
                }
            }
        }

        if self.main_window.is_none() {
            match MainWindow::create(
                event_loop,
                &self.config,
                self.policy.clone(),
                self.event_tx.clone(),
            ) {
                Ok(window) => {
                    self.main_window = Some(window);
                }
                Err(e) => {
                    error!("Failed to create main window: {}", e);
                }
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(ref window) = self.main_window else {
            return;
        };
        if !window.is_our_window(window_id) {
            return;
        }

        if window_action(&event) == WindowAction::Hide {
            window.hide();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Collect events first, then process them
        let events: Vec<AppEvent> = if let Some(ref mut rx) = self.event_rx {
            let mut events = Vec::new();
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
            events
        } else {
            Vec::new()
        };

        for event in events {
            self.handle_event(event, event_loop);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!("Application exiting");

        if let Some(mut poller) = self.poller.take() {
            poller.cancel();
        }

        if let Some(window) = self.main_window.take() {
            window.teardown();
        }

        let mut surface = OsSurface::new(self.status_item.as_ref());
        self.dispatcher.clear(&mut surface);
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Messenger Bar");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded");
    if config.unread.source == UnreadSource::Poll {
        info!("Polling page title every {} ms", config.unread.poll_interval_ms);
    }

    // Create event channel
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    // Create event loop
    #[allow(unused_mut)]
    let mut builder = EventLoop::builder();
    #[cfg(target_os = "macos")]
    {
        use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};
        let policy = if config.app.show_in_dock {
            ActivationPolicy::Regular
        } else {
            ActivationPolicy::Accessory
        };
        builder.with_activation_policy(policy);
    }
    let event_loop = builder.build()?;

    // Create EventSender that wraps the channel + event loop proxy for wake-up
    let proxy = event_loop.create_proxy();
    let event_sender = EventSender::new(event_tx, proxy);

    if !config.app.show_in_dock {
        info!("Running without a Dock icon");
    }

    // Create application
    let mut app = App::new(config, event_sender, event_rx);

    // Run event loop
    event_loop.run_app(&mut app)?;

    Ok(())
}
