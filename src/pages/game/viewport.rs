use ratatui::layout::Rect;

use super::world::Bounds;

/// Projection of the world onto a block of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    world_width: f32,
    world_height: f32,
}

impl Viewport {
    pub fn new(area: Rect, world_width: f32, world_height: f32) -> Self {
        Self { area, world_width, world_height }
    }

    /// Cells per world unit, horizontally and vertically.
    pub fn scale(&self) -> (f32, f32) {
        (self.area.width as f32 / self.world_width, self.area.height as f32 / self.world_height)
    }

    /// Absolute cell of a world point. May lie outside the area.
    pub fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        let (sx, sy) = self.scale();
        (self.area.x as i32 + (x * sx).floor() as i32, self.area.y as i32 + (y * sy).floor() as i32)
    }

    /// Cells covered by a world rectangle, clipped to the area.
    pub fn project(&self, bounds: &Bounds) -> Option<Rect> {
        let (sx, sy) = self.scale();
        let clip = |start: f32, end: f32, len: u16| {
            let start = start.round().clamp(0.0, len as f32) as u16;
            let end = end.round().clamp(0.0, len as f32) as u16;
            (end > start).then_some((start, end - start))
        };

        let (x, width) = clip(bounds.x * sx, (bounds.x + bounds.width) * sx, self.area.width)?;
        let (y, height) = clip(bounds.y * sy, (bounds.y + bounds.height) * sy, self.area.height)?;
        Some(Rect { x: self.area.x + x, y: self.area.y + y, width, height })
    }

    /// World point at the centre of an absolute cell, if the cell is on the canvas.
    pub fn to_world(&self, column: u16, row: u16) -> Option<(f32, f32)> {
        let area = self.area;
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }
        let (sx, sy) = self.scale();
        Some((((column - area.x) as f32 + 0.5) / sx, ((row - area.y) as f32 + 0.5) / sy))
    }
}
