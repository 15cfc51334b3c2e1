//! Pointer events forwarded from the DOM to the chart

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalPosition {
    pub x: f64,
    pub y: f64,
}

impl PhysicalPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Positions are relative to the top-left corner of the chart container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    CursorMoved { position: PhysicalPosition },
    CursorLeft,
}
