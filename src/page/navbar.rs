// navbar.rs - Active-section tracking
//
// A section counts as reached once the scroll offset passes its top
// minus the probe offset. The last reached section in document order
// is the active one.

/// Pixels above a section's top at which it becomes active.
pub const SCROLL_PROBE_OFFSET: f32 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f32,
    pub height: f32,
}

/// Index of the currently active section, if any has been reached.
pub fn active_section(scroll_y: f32, sections: &[SectionSpan]) -> Option<usize> {
    let mut current = None;
    for (i, section) in sections.iter().enumerate() {
        if scroll_y >= section.top - SCROLL_PROBE_OFFSET {
            current = Some(i);
        }
    }
    current
}
