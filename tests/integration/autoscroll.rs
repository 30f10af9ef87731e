// =====
// TESTS: 8
// =====
//
// Follow-newest behavior of a thread view as content grows and the user
// scrolls.

use hoth::scroll::AUTOSCROLL_THRESHOLD;
use hoth::scroll::mapper::{self, ScrollGeometry};
use pretty_assertions::assert_eq;

use crate::helpers::{assert_close, measured_view};

#[test]
fn growth_while_following_jumps_to_newest() {
    let mut view = measured_view(1000.0, 300.0, 100.0);
    assert!(view.autoscroll_enabled());
    view.on_content_resized(1050.0);
    assert_eq!(view.offset(), 750.0);
    assert!(view.autoscroll_enabled());
}

#[test]
fn dragged_away_view_keeps_its_offset_on_growth() {
    let mut view = measured_view(1000.0, 300.0, 100.0);
    view.on_content_resized(1050.0);

    // Press on the track where the handle for offset 400 would start
    let track_top = 10.0;
    let target = mapper::handle(ScrollGeometry::new(1050.0, 300.0, 100.0), 400.0);
    view.on_drag_start(track_top + target.top, track_top, 100.0);
    view.on_drag_end();
    assert_close(view.offset(), 400.0);
    assert!(!view.autoscroll_enabled());

    view.on_content_resized(1100.0);
    assert_close(view.offset(), 400.0);
    assert!(!view.autoscroll_enabled());
}

#[test]
fn growth_while_following_tracks_every_size() {
    let mut view = measured_view(100.0, 40.0, 40.0);
    for content in [120.0, 121.0, 300.0, 30.0, 500.0] {
        view.on_content_resized(content);
        assert_eq!(view.offset(), f64::max(0.0, content - 40.0));
    }
}

#[test]
fn wheel_back_within_threshold_rearms() {
    let mut view = measured_view(1000.0, 300.0, 100.0);
    view.on_wheel(-100.0);
    assert!(!view.autoscroll_enabled());
    view.on_wheel(100.0 - (AUTOSCROLL_THRESHOLD - 1.0));
    assert!(view.autoscroll_enabled());
}

#[test]
fn exactly_threshold_away_stays_disarmed() {
    let mut view = measured_view(1000.0, 300.0, 100.0);
    view.on_wheel(-AUTOSCROLL_THRESHOLD);
    assert_eq!(view.offset(), 700.0 - AUTOSCROLL_THRESHOLD);
    assert!(!view.autoscroll_enabled());
}

#[test]
fn viewport_resize_while_following_stays_at_newest() {
    let mut view = measured_view(1000.0, 300.0, 100.0);
    view.on_viewport_resized(500.0);
    assert_eq!(view.offset(), 500.0);
    view.on_viewport_resized(2000.0);
    assert_eq!(view.offset(), 0.0);
}

#[test]
fn wheel_is_clamped_to_content() {
    let mut view = measured_view(1000.0, 300.0, 100.0);
    view.on_wheel(-5000.0);
    assert_eq!(view.offset(), 0.0);
    view.on_wheel(5000.0);
    assert_eq!(view.offset(), 700.0);
    assert!(view.autoscroll_enabled());
}

#[test]
fn terminal_resize_keeps_scrolled_back_offset() {
    // Taller viewport and longer (rewrapped) content reported in one frame
    let mut view = measured_view(1000.0, 300.0, 100.0);
    view.on_wheel(-50.0);
    assert_eq!(view.offset(), 650.0);
    assert!(!view.autoscroll_enabled());

    view.measure(1300.0, 400.0, 100.0);
    assert_eq!(view.offset(), 650.0);
    assert!(!view.autoscroll_enabled());
}
