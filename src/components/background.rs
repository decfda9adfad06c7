use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Widget},
};

use crate::constants::background;

/// One repeating layer of scenery, sampled onto the canvas like a scaled
/// texture. Spaces are transparent.
#[derive(Debug, Clone)]
pub struct Layer {
    rows: Vec<Vec<char>>,
    color: Color,
}

impl Layer {
    pub fn new(art: &str, color: Color) -> Self {
        let rows = art.lines().filter(|line| !line.is_empty()).map(|line| line.chars().collect()).collect();
        Self { rows, color }
    }

    fn columns(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Character of the artwork at a normalised horizontal position `u` in
    /// `[0, 1)` and canvas row.
    fn sample(&self, u: f32, row: u16, height: u16) -> Option<char> {
        let columns = self.columns();
        if columns == 0 || height == 0 {
            return None;
        }
        let art_row = (row as usize * self.rows.len()) / height as usize;
        let art_column = ((u * columns as f32) as usize).min(columns - 1);
        self.rows.get(art_row)?.get(art_column).copied().filter(|c| !c.is_whitespace())
    }
}

/// The moon backdrop: a clear colour and three layers scrolling at their own speed.
#[derive(Debug, Clone)]
pub struct Moonscape {
    layers: Vec<Layer>,
    offsets: [f32; 3],
    periods: [f32; 3],
    units_per_cell: f32,
}

impl Moonscape {
    /// `offsets` and `periods` are in world units, `units_per_cell` converts
    /// a canvas column into world units.
    pub fn new(offsets: [f32; 3], periods: [f32; 3], units_per_cell: f32) -> Self {
        let layers = background::LAYERS
            .iter()
            .zip(background::LAYER_COLORS)
            .map(|(art, color)| Layer::new(art, color))
            .collect();
        Self { layers, offsets, periods, units_per_cell }
    }
}

impl Widget for Moonscape {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let area = area.intersection(buf.area);
        Block::default().style(Style::default().bg(background::CLEAR_COLOR)).render(area, buf);

        for ((layer, offset), period) in self.layers.iter().zip(self.offsets).zip(self.periods) {
            if period <= 0.0 {
                continue;
            }
            for column in 0..area.width {
                let world_x = (column as f32 + 0.5) * self.units_per_cell - offset;
                let u = world_x.rem_euclid(period) / period;
                for row in 0..area.height {
                    if let Some(c) = layer.sample(u, row, area.height) {
                        if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                            cell.set_char(c).set_fg(layer.color);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_layer_sampling() {
        let layer = Layer::new("ab\ncd", Color::White);

        assert_eq!(layer.sample(0.0, 0, 4), Some('a'));
        assert_eq!(layer.sample(0.75, 1, 4), Some('b'));
        assert_eq!(layer.sample(0.25, 3, 4), Some('c'));
        assert_eq!(layer.sample(0.999, 2, 4), Some('d'));
    }

    #[test]
    fn test_whitespace_is_transparent() {
        let layer = Layer::new("a ", Color::White);
        assert_eq!(layer.sample(0.6, 0, 1), None);
    }

    #[test]
    fn test_scroll_shifts_layers() {
        let area = Rect::new(0, 0, 48, 12);
        let mut still = Buffer::empty(area);
        let mut moved = Buffer::empty(area);

        Moonscape::new([0.0; 3], [480.0; 3], 10.0).render(area, &mut still);
        Moonscape::new([-30.0; 3], [480.0; 3], 10.0).render(area, &mut moved);

        // Every layer moved three columns to the left.
        for row in 0..area.height {
            for column in 0..area.width - 3 {
                assert_eq!(moved[(column, row)].symbol(), still[(column + 3, row)].symbol());
            }
        }
        assert_eq!(still[(0, 0)].bg, background::CLEAR_COLOR);
    }
}
