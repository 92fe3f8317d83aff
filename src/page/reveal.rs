// reveal.rs - One-shot visibility reveals
//
// A tracked slot latches the first time its intersection ratio reaches
// the threshold. Re-intersection never re-triggers.

/// Card reveal: shallow threshold with a bottom margin pulled in so the
/// animation starts before the card fully clears the fold.
pub const CARD_THRESHOLD: f32 = 0.1;
pub const CARD_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Section reveal threshold.
pub const SECTION_THRESHOLD: f32 = 0.15;

pub struct RevealTracker {
    threshold: f32,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed: Vec::new(),
        }
    }

    /// Register one more element, returning its slot index.
    pub fn track(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Feed an intersection ratio for a slot. True exactly once: when
    /// the slot first reaches the threshold.
    pub fn intersect(&mut self, slot: usize, ratio: f32) -> bool {
        match self.revealed.get_mut(slot) {
            Some(seen) if !*seen && ratio >= self.threshold => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, slot: usize) -> bool {
        self.revealed.get(slot).copied().unwrap_or(false)
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
