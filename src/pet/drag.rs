use crate::pet::model::Footprint;
use crate::pet::state::Position;

/// Keeps the grab point stable under the cursor while the pet is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragHandler {
    offset: Option<(f64, f64)>,
}

impl DragHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.offset.is_some()
    }

    pub fn begin(&mut self, pointer: (f64, f64), origin: Position) {
        self.offset = Some((pointer.0 - origin.x, pointer.1 - origin.y));
    }

    /// Window origin that keeps the recorded offset, or `None` when no drag
    /// is in progress.
    pub fn origin_for(&self, pointer: (f64, f64)) -> Option<Position> {
        let (dx, dy) = self.offset?;
        Some(Position::new(pointer.0 - dx, pointer.1 - dy))
    }

    /// Ends the drag. Returns false when there was nothing to end.
    pub fn end(&mut self) -> bool {
        self.offset.take().is_some()
    }

    pub fn offset(&self) -> Option<(f64, f64)> {
        self.offset
    }
}

/// Whether a screen-space pointer lands on the sprite drawn at `origin`.
pub fn hit_test(footprint: Footprint, origin: Position, pointer: (f64, f64)) -> bool {
    footprint.contains((pointer.0 - origin.x, pointer.1 - origin.y))
}
