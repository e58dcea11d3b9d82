//! Button inputs

use crate::debounce::ButtonId;

/// Raw, undebounced button reads
///
/// Implementations translate the board's wiring (active-high or
/// active-low) so that `true` always means pressed. Every call must
/// sample the pin afresh.
pub trait ButtonInputs {
    /// Whether `id` currently reads pressed
    fn is_pressed(&mut self, id: ButtonId) -> bool;
}
