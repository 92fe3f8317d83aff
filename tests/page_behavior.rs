//! Page behavior layer: reveal latching, nav highlight, flourish math.

#![cfg(not(target_arch = "wasm32"))]

use approx::assert_relative_eq;
use starfield_engine::page::{
    active_section, parallax_shift, ripple, shimmer_off_at, shimmer_on_at, stagger_delay_at,
    RevealTracker, SectionSpan, SECTION_THRESHOLD,
};

#[test]
fn reveal_triggers_once_past_the_threshold() {
    let mut tracker = RevealTracker::new(SECTION_THRESHOLD);
    let slot = tracker.track();

    // Below threshold: nothing
    assert!(!tracker.intersect(slot, 0.05));
    assert!(!tracker.is_revealed(slot));

    // First crossing reveals
    assert!(tracker.intersect(slot, 0.2));
    assert!(tracker.is_revealed(slot));

    // Re-intersection never re-triggers
    assert!(!tracker.intersect(slot, 0.9));
    assert!(!tracker.intersect(slot, 0.2));
    assert!(tracker.is_revealed(slot));
}

#[test]
fn reveal_slots_latch_independently() {
    let mut tracker = RevealTracker::new(0.1);
    let a = tracker.track();
    let b = tracker.track();

    assert!(tracker.intersect(b, 0.5));
    assert!(!tracker.is_revealed(a));
    assert!(tracker.is_revealed(b));
}

#[test]
fn reveal_ignores_unknown_slots() {
    let mut tracker = RevealTracker::new(0.1);
    assert!(!tracker.intersect(7, 1.0));
    assert!(!tracker.is_revealed(7));
}

#[test]
fn nav_picks_the_last_section_scrolled_past() {
    let sections = [
        SectionSpan { top: 0.0, height: 600.0 },
        SectionSpan { top: 600.0, height: 800.0 },
        SectionSpan { top: 1400.0, height: 700.0 },
    ];

    // The probe reaches 200px ahead of each section top
    assert_eq!(active_section(0.0, &sections), Some(0));
    assert_eq!(active_section(399.0, &sections), Some(0));
    assert_eq!(active_section(400.0, &sections), Some(1));
    assert_eq!(active_section(1250.0, &sections), Some(2));
    assert_eq!(active_section(5000.0, &sections), Some(2));
}

#[test]
fn nav_is_inactive_above_the_first_section() {
    let sections = [SectionSpan { top: 300.0, height: 600.0 }];
    assert_eq!(active_section(0.0, &sections), None);
    assert_eq!(active_section(99.0, &sections), None);
    assert_eq!(active_section(100.0, &sections), Some(0));
}

#[test]
fn nav_handles_an_empty_page() {
    assert_eq!(active_section(500.0, &[]), None);
}

#[test]
fn ripple_covers_the_button_and_centers_on_the_click() {
    let r = ripple(200.0, 50.0, 160.0, 40.0, 100.0, 20.0);
    assert_eq!(r.diameter, 200.0);
    // Circle center lands exactly under the click point
    assert_relative_eq!(r.left + r.diameter / 2.0, 160.0 - 100.0);
    assert_relative_eq!(r.top + r.diameter / 2.0, 40.0 - 20.0);
}

#[test]
fn ripple_diameter_is_the_larger_side() {
    assert_eq!(ripple(40.0, 90.0, 0.0, 0.0, 0.0, 0.0).diameter, 90.0);
    assert_eq!(ripple(90.0, 40.0, 0.0, 0.0, 0.0, 0.0).diameter, 90.0);
}

#[test]
fn shimmer_timeline_staggers_and_holds() {
    assert_eq!(shimmer_on_at(0), 500);
    assert_eq!(shimmer_on_at(3), 1100);
    assert_eq!(shimmer_off_at(0), 1500);
    assert_eq!(shimmer_off_at(3), 2100);
}

#[test]
fn hero_stagger_steps_per_child() {
    assert_eq!(stagger_delay_at(0), 300);
    assert_eq!(stagger_delay_at(1), 400);
    assert_eq!(stagger_delay_at(4), 700);
}

#[test]
fn parallax_shift_is_proportional_to_scroll() {
    assert_relative_eq!(parallax_shift(0.0), 0.0);
    assert_relative_eq!(parallax_shift(100.0), -5.0);
    assert_relative_eq!(parallax_shift(1000.0), -50.0);
}
