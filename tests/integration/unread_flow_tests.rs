//! Page message -> tracker -> surfaces/notifications

use messenger_bar::core::config::{NotificationConfig, StatusConfig};
use messenger_bar::notify::{NotificationRequest, Notifier};
use messenger_bar::surface::{SurfaceUpdate, UnreadSurface};
use messenger_bar::{BridgeMessage, UnreadCount, UnreadDispatcher};
use std::cell::RefCell;

#[derive(Default)]
struct FakeSurface {
    last: Option<SurfaceUpdate>,
    applied: usize,
}

impl UnreadSurface for FakeSurface {
    fn apply(&mut self, update: &SurfaceUpdate) {
        self.last = Some(update.clone());
        self.applied += 1;
    }
}

#[derive(Default)]
struct FakeNotifier {
    sent: RefCell<Vec<NotificationRequest>>,
}

impl Notifier for FakeNotifier {
    fn request_permission(&self) {}

    fn submit(&self, request: NotificationRequest) {
        self.sent.borrow_mut().push(request);
    }
}

/// Decode like the web view handler does; undecodable messages are dropped
fn feed(body: &str, dispatcher: &mut UnreadDispatcher, surface: &mut FakeSurface, notifier: &FakeNotifier) {
    if let Ok(BridgeMessage::UnreadCount(payload)) = BridgeMessage::parse(body) {
        if let Ok(count) = payload.count() {
            dispatcher.observe(count, surface, notifier);
        }
    }
}

/// Dispatcher after the first completed page load
fn setup() -> (UnreadDispatcher, FakeSurface, FakeNotifier) {
    let notifier = FakeNotifier::default();
    let mut dispatcher = UnreadDispatcher::new(&StatusConfig::default(), &NotificationConfig::default());
    dispatcher.page_loaded(&notifier);
    (dispatcher, FakeSurface::default(), notifier)
}

#[test]
fn test_message_sequence() {
    let (mut dispatcher, mut surface, notifier) = setup();

    feed(r#"{"name":"unreadCount","unread":1,"title":"(1) Messenger"}"#, &mut dispatcher, &mut surface, &notifier);
    feed(r#"{"name":"unreadCount","unread":"3"}"#, &mut dispatcher, &mut surface, &notifier);
    feed(r#"{"name":"unreadCount","title":"Messenger (2)"}"#, &mut dispatcher, &mut surface, &notifier);

    assert_eq!(dispatcher.current(), UnreadCount::new(2));
    assert_eq!(surface.applied, 3);
    assert_eq!(surface.last.as_ref().unwrap().status_title, "💬 2");
    assert_eq!(surface.last.as_ref().unwrap().badge.as_deref(), Some("2"));

    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].body, "You have 3 unread messages.");
}

#[test]
fn test_bad_payloads_never_notify() {
    let (mut dispatcher, mut surface, notifier) = setup();

    feed(r#"{"name":"unreadCount","unread":4}"#, &mut dispatcher, &mut surface, &notifier);
    feed(r#"{"name":"unreadCount","unread":"many"}"#, &mut dispatcher, &mut surface, &notifier);
    feed("not json", &mut dispatcher, &mut surface, &notifier);
    assert_eq!(dispatcher.current(), UnreadCount::new(4));

    feed(r#"{"name":"unreadCount","unread":-7}"#, &mut dispatcher, &mut surface, &notifier);
    assert_eq!(dispatcher.current(), UnreadCount::ZERO);
    assert_eq!(surface.last.as_ref().unwrap().badge, None);

    assert_eq!(notifier.sent.borrow().len(), 1);
}

#[test]
fn test_count_pushed_before_load_is_announced_on_load() {
    let notifier = FakeNotifier::default();
    let mut dispatcher = UnreadDispatcher::new(&StatusConfig::default(), &NotificationConfig::default());
    let mut surface = FakeSurface::default();

    feed(r#"{"name":"unreadCount","unread":5,"title":"(5) Messenger"}"#, &mut dispatcher, &mut surface, &notifier);
    assert_eq!(surface.last.as_ref().unwrap().badge.as_deref(), Some("5"));
    assert!(notifier.sent.borrow().is_empty());

    dispatcher.page_loaded(&notifier);
    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, "You have 5 unread messages.");
}
