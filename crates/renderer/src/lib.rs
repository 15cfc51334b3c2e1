//! Canvas renderer for the price chart widget
//!
//! Draws the price line, volume bars, time labels, crosshair and the
//! current-price badge onto any [`ChartSurface`].

pub mod canvas;
pub mod drawables;
pub mod frame;
pub mod hover;
pub mod layout;
pub mod renderer;
pub mod scales;
pub mod spline;
pub mod surface;
pub mod time_axis;

pub use canvas::CanvasSurface;
pub use drawables::Drawable;
pub use frame::Frame;
pub use hover::HoverPoint;
pub use layout::{ChartArea, ChartLayout};
pub use renderer::{ChartRenderer, RenderSummary};
pub use surface::{ChartSurface, DrawCommand, Paint, RecordingSurface, TextStyle};
