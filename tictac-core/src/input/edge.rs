//! Rising-edge detection for polled buttons

/// Press detector for one logical button
///
/// Holds the level seen on the previous poll. The previous level starts
/// low, so a button already held at power-on reports one press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { previous: false }
    }

    /// Feed the current level, returns true on a low to high transition
    ///
    /// Must be polled often enough that a full press and release never
    /// falls between two calls.
    pub fn detect_press(&mut self, level: bool) -> bool {
        let pressed = level && !self.previous;
        self.previous = level;
        pressed
    }
}
