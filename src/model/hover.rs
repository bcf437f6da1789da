use egui::Pos2;

use super::grid::GridGeometry;

/// Transient pointer state over the calendar surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverState {
    /// Index of the day under the pointer, if any.
    pub day: Option<usize>,
    /// Last pointer position in screen coordinates.
    pub pointer: Option<Pos2>,
}

impl HoverState {
    /// Record a pointer move. `local` is relative to the surface origin,
    /// `screen` is kept for tooltip placement.
    ///
    /// A miss clears the state exactly like leaving the surface.
    pub fn pointer_moved(
        &mut self,
        local: Pos2,
        screen: Pos2,
        geometry: &GridGeometry,
        day_count: usize,
    ) -> Option<usize> {
        match geometry.resolve_day_at(local.x, local.y, day_count) {
            Some(index) => {
                self.day = Some(index);
                self.pointer = Some(screen);
            }
            None => self.pointer_left(),
        }
        self.day
    }

    pub fn pointer_left(&mut self) {
        *self = Self::default();
    }
}
