use price_chart_shared::{PhysicalPosition, PointerEvent};

/// Tracks the pointer over the chart canvas.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CanvasController {
    position: Option<PhysicalPosition>,
}

impl CanvasController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the tracked position changed.
    pub fn handle_cursor_event(&mut self, event: PointerEvent) -> bool {
        let next = match event {
            PointerEvent::CursorMoved { position } => Some(position),
            PointerEvent::CursorLeft => None,
        };
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    pub fn position(&self) -> Option<PhysicalPosition> {
        self.position
    }
}
