// page/ - Scroll and flourish state
//
// Pure state behind the in-page effects. The dom module feeds these
// from browser events; tests drive them directly.

mod flourish;
mod navbar;
mod reveal;

pub use flourish::{
    parallax_shift, ripple, shimmer_off_at, shimmer_on_at, stagger_delay_at, Ripple,
    SHIMMER_HOLD_MS, SHIMMER_LEAD_MS, SHIMMER_STEP_MS, STAGGER_LEAD_MS, STAGGER_STEP_MS,
};
pub use navbar::{active_section, SectionSpan, SCROLL_PROBE_OFFSET};
pub use reveal::{RevealTracker, CARD_ROOT_MARGIN, CARD_THRESHOLD, SECTION_THRESHOLD};
