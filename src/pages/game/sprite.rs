use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Multi-layer ASCII artwork. Later layers are drawn over earlier ones and
/// whitespace never overwrites what is underneath.
#[derive(Debug, Clone)]
pub struct Sprite {
    width: u16,
    height: u16,
    layers: Vec<Vec<String>>,
}

impl Sprite {
    pub fn new(layers: &[&str]) -> Self {
        let layers: Vec<Vec<String>> = layers
            .iter()
            .map(|layer| layer.lines().filter(|line| !line.is_empty()).map(|line| line.to_string()).collect())
            .collect();

        let height = layers.iter().map(|layer| layer.len()).max().unwrap_or(0) as u16;
        let width = layers
            .iter()
            .map(|layer| layer.iter().map(|line| line.chars().count()).max().unwrap_or(0))
            .max()
            .unwrap_or(0) as u16;
        Sprite { width, height, layers }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Draw with the top-left corner at an absolute cell, clipped to `clip`.
    pub fn render_at(&self, origin: (i32, i32), clip: Rect, buf: &mut Buffer, styles: &[Style]) {
        let clip = clip.intersection(buf.area);
        for (layer, style) in self.layers.iter().zip(styles) {
            for (row, line) in layer.iter().enumerate() {
                let y = origin.1 + row as i32;
                if y < clip.top() as i32 || y >= clip.bottom() as i32 {
                    continue;
                }
                for (column, c) in line.chars().enumerate() {
                    let x = origin.0 + column as i32;
                    if c.is_whitespace() || x < clip.left() as i32 || x >= clip.right() as i32 {
                        continue;
                    }
                    if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                        cell.set_char(c).set_style(*style);
                    }
                }
            }
        }
    }

    /// Draw centred on an absolute cell.
    pub fn render_centered(&self, center: (i32, i32), clip: Rect, buf: &mut Buffer, styles: &[Style]) {
        let origin = (center.0 - self.width as i32 / 2, center.1 - self.height as i32 / 2);
        self.render_at(origin, clip, buf, styles);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use super::*;
    use crate::constants::game;

    #[test]
    fn test_bird_size() {
        let sprite = Sprite::new(&game::BIRD_TEXTS);
        assert_eq!(sprite.size(), (6, 3));
    }

    #[test]
    fn test_render_clips_and_keeps_background() {
        let sprite = Sprite::new(&["ab\n c"]);
        let mut buf = Buffer::with_lines(["....", "...."]);
        let style = Style::default().fg(Color::Red);

        sprite.render_at((-1, 0), buf.area, &mut buf, &[style]);

        assert_eq!(buf[(0, 0)].symbol(), "b");
        assert_eq!(buf[(0, 1)].symbol(), "c");
        assert_eq!(buf[(1, 0)].symbol(), ".");
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }

    #[test]
    fn test_upper_layer_draws_over_lower() {
        let sprite = Sprite::new(&["xxx", " o "]);
        let mut buf = Buffer::with_lines(["   "]);

        sprite.render_centered((1, 0), buf.area, &mut buf, &[Style::default(), Style::default()]);

        assert_eq!(buf, Buffer::with_lines(["xox"]));
    }
}
