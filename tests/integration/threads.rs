// =====
// TESTS: 8
// =====
//
// Thread collection, prompt ownership and submission routing.

use hoth::app::{COMMAND_STUB_NOTICE, Message, MessageKind, PromptEvent, User};
use pretty_assertions::assert_eq;

use crate::helpers::{record_prompt_events, test_app};

#[test]
fn opening_another_thread_detaches_once_first() {
    let mut app = test_app();
    let a = app.active_id().unwrap();
    let b = app.create_thread(Some("b".to_owned()));
    let log = record_prompt_events(&mut app);

    app.open_thread(b);

    assert_eq!(*log.borrow(), vec![PromptEvent::Detached(a), PromptEvent::Attached(b)]);
    assert_eq!(app.prompt().thread(), Some(b));
}

#[test]
fn reopening_active_thread_reports_nothing() {
    let mut app = test_app();
    let a = app.active_id().unwrap();
    let log = record_prompt_events(&mut app);
    app.open_thread(a);
    assert!(log.borrow().is_empty());
}

#[test]
fn command_and_chat_submissions() {
    let mut app = test_app();
    app.submit("/foo");
    app.submit("hello");
    let messages = app.active_thread().unwrap().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].kind(), &MessageKind::System);
    assert_eq!(messages[0].body(), COMMAND_STUB_NOTICE);
    assert_eq!(messages[1].author(), Some(&User::new("tester")));
    assert_eq!(messages[1].body(), "hello");
}

#[test]
fn post_forces_follow_newest() {
    let mut app = test_app();
    let view = app.active_thread_mut().unwrap().view_mut();
    view.measure(1000.0, 300.0, 100.0);
    view.on_wheel(-400.0);
    assert!(!view.autoscroll_enabled());

    app.post_from_prompt(Message::chat(User::new("tester"), "look"));
    let view = app.active_thread_mut().unwrap().view_mut();
    assert!(view.autoscroll_enabled());
    view.on_content_resized(1040.0);
    assert_eq!(view.offset(), 740.0);
}

#[test]
fn removing_active_thread_blocks_sending_until_reopen() {
    let mut app = test_app();
    let a = app.active_id().unwrap();
    let b = app.create_thread(None);
    let log = record_prompt_events(&mut app);

    app.remove_thread(a);
    assert_eq!(app.active_id(), None);
    assert_eq!(app.submit("lost"), None);

    app.open_thread(b);
    assert!(app.submit("found").is_some());
    assert_eq!(*log.borrow(), vec![PromptEvent::Detached(a), PromptEvent::Attached(b)]);
}

#[test]
fn removing_twice_is_a_no_op() {
    let mut app = test_app();
    let b = app.create_thread(None);
    assert!(app.remove_thread(b).is_some());
    assert!(app.remove_thread(b).is_none());
    assert_eq!(app.threads().len(), 1);
}

#[test]
fn thread_moves_between_apps_with_its_messages() {
    let mut left = test_app();
    let mut right = test_app();
    left.submit("travelling");
    let id = left.active_id().unwrap();

    let thread = left.remove_thread(id).unwrap();
    right.open_new(thread);

    assert!(left.thread(id).is_none());
    let moved = right.thread(id).unwrap();
    assert_eq!(moved.messages()[0].body(), "travelling");
    assert_eq!(right.threads().last().map(hoth::app::Thread::id), Some(id));
    assert_eq!(right.prompt().thread(), Some(id));
}

#[test]
fn reply_goes_where_the_prompt_is() {
    let mut app = test_app();
    let a = app.active_id().unwrap();
    let b = app.create_thread(None);
    app.open_thread(b);
    app.reply(Message::system("pong"));
    assert!(app.thread(a).unwrap().messages().is_empty());
    assert_eq!(app.thread(b).unwrap().messages()[0].body(), "pong");
}
