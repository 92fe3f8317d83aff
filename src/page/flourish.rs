// flourish.rs - Click ripples, shimmer timeline, load stagger, parallax

/// Expanding-circle geometry for a button click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub diameter: f32,
    pub left: f32,
    pub top: f32,
}

/// Circle sized to cover the button, centered under the click point.
/// Click coordinates are client-space; offsets are the button's.
pub fn ripple(
    width: f32,
    height: f32,
    client_x: f32,
    client_y: f32,
    offset_left: f32,
    offset_top: f32,
) -> Ripple {
    let diameter = width.max(height);
    let radius = diameter / 2.0;
    Ripple {
        diameter,
        left: client_x - offset_left - radius,
        top: client_y - offset_top - radius,
    }
}

// Shimmer: one staggered pass over the cards after load.
pub const SHIMMER_LEAD_MS: i32 = 500;
pub const SHIMMER_STEP_MS: i32 = 200;
pub const SHIMMER_HOLD_MS: i32 = 1000;

/// Delay before card `i` gains the shimmer class.
pub fn shimmer_on_at(i: usize) -> i32 {
    SHIMMER_LEAD_MS + SHIMMER_STEP_MS * i as i32
}

/// Delay before card `i` loses it again.
pub fn shimmer_off_at(i: usize) -> i32 {
    shimmer_on_at(i) + SHIMMER_HOLD_MS
}

// Hero content fade-in after the load event.
pub const STAGGER_LEAD_MS: i32 = 300;
pub const STAGGER_STEP_MS: i32 = 100;

/// Delay before hero child `i` fades in.
pub fn stagger_delay_at(i: usize) -> i32 {
    STAGGER_LEAD_MS + STAGGER_STEP_MS * i as i32
}

// Section parallax
const PARALLAX_SPEED: f32 = 0.5;
const PARALLAX_DAMP: f32 = 0.1;

/// Vertical shift applied to every section at the given scroll offset.
pub fn parallax_shift(scroll_y: f32) -> f32 {
    -(scroll_y * PARALLAX_SPEED) * PARALLAX_DAMP
}
