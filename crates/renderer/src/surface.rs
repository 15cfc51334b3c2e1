//! Drawing surface abstraction
//!
//! Drawables only talk to [`ChartSurface`]. The browser build draws through
//! [`crate::canvas::CanvasSurface`]; tests and benches use
//! [`RecordingSurface`], which keeps every call as a [`DrawCommand`].

/// How a filled path is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(String),
    /// Linear gradient along the y axis, `from` at `top` and `to` at `bottom`.
    VerticalGradient {
        top: f64,
        bottom: f64,
        from: String,
        to: String,
    },
}

impl Paint {
    pub fn solid(color: impl Into<String>) -> Self {
        Paint::Solid(color.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

impl TextBaseline {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub color: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    pub fn centered(font: &str, color: &str) -> Self {
        Self {
            font: font.to_string(),
            color: color.to_string(),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        }
    }
}

/// The subset of the Canvas2D API the chart needs.
pub trait ChartSurface {
    /// Logical (CSS pixel) size of the surface.
    fn size(&self) -> (f64, f64);

    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);

    fn set_stroke(&mut self, color: &str, width: f64);
    fn set_fill(&mut self, paint: &Paint);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1: (f64, f64), cp2: (f64, f64), to: (f64, f64));
    fn close_path(&mut self);
    /// Append a closed rounded rectangle sub-path.
    fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64);

    fn stroke(&mut self);
    fn fill(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    SetStroke { color: String, width: f64 },
    SetFill(Paint),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    BezierCurveTo { cp1: (f64, f64), cp2: (f64, f64), to: (f64, f64) },
    ClosePath,
    RoundedRect { x: f64, y: f64, width: f64, height: f64, radius: f64 },
    Stroke,
    Fill,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    FillText { text: String, x: f64, y: f64, style: TextStyle },
}

/// In-memory surface that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Every string drawn with `fill_text`, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rounded_rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::RoundedRect {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl ChartSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn set_stroke(&mut self, color: &str, width: f64) {
        self.commands.push(DrawCommand::SetStroke {
            color: color.to_string(),
            width,
        });
    }

    fn set_fill(&mut self, paint: &Paint) {
        self.commands.push(DrawCommand::SetFill(paint.clone()));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn bezier_curve_to(&mut self, cp1: (f64, f64), cp2: (f64, f64), to: (f64, f64)) {
        self.commands
            .push(DrawCommand::BezierCurveTo { cp1, cp2, to });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) {
        self.commands.push(DrawCommand::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }
}
