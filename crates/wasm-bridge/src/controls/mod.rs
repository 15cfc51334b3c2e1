pub mod canvas_controller;

pub use canvas_controller::CanvasController;
