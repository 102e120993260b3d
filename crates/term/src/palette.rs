//! Shape colors and the fixed styles of the play field.

use crossterm::style::Color;

use crate::fb::CellStyle;
use crate::types::ShapeId;

/// Terminal color of a shape.
pub fn shape_color(shape: ShapeId) -> Color {
    match shape {
        ShapeId::I => Color::Cyan,
        ShapeId::J => Color::Blue,
        ShapeId::L => Color::Yellow,
        ShapeId::O => Color::Magenta,
        ShapeId::S => Color::Green,
        ShapeId::T => Color::Red,
        ShapeId::Z => Color::White,
    }
}

/// Style of a filled board cell: the glyph and its background share the color.
pub fn block_style(shape: ShapeId) -> CellStyle {
    let color = shape_color(shape);
    CellStyle::new(color, color)
}

pub const BORDER: CellStyle = CellStyle::new(Color::Grey, Color::Reset);
pub const EMPTY: CellStyle = CellStyle::new(Color::DarkGrey, Color::Reset);
pub const LABEL: CellStyle = CellStyle::new(Color::White, Color::Reset).bold();
pub const VALUE: CellStyle = CellStyle::new(Color::Grey, Color::Reset);
pub const OVERLAY: CellStyle = CellStyle::new(Color::White, Color::Black).bold();
