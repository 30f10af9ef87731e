use hoth::app::{App, PromptEvent, ThreadId};
use hoth::scroll::{PointerCapture, ScrollableThreadView};
use std::cell::RefCell;
use std::rc::Rc;

/// Build a minimal `App` for integration testing.
/// No terminal -- just state.
pub fn test_app() -> App {
    App::test_default()
}

/// A detached view already told its sizes.
pub fn measured_view(content: f64, viewport: f64, track: f64) -> ScrollableThreadView {
    let mut view = ScrollableThreadView::new(ThreadId::new(), PointerCapture::new());
    view.measure(content, viewport, track);
    view
}

/// Record every prompt attach/detach the app reports.
pub fn record_prompt_events(app: &mut App) -> Rc<RefCell<Vec<PromptEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    app.set_prompt_observer(Box::new(move |e| sink.borrow_mut().push(e)));
    log
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-6, "expected {expected}, got {actual}");
}
