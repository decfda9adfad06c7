use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Span, Text},
    widgets::Widget,
};

#[derive(Default)]
pub struct SetStyle(Style);
#[derive(Default)]
pub struct NoStyle;

#[derive(Default)]
pub struct LineMode;
#[derive(Default)]
pub struct PixelMode;

/// Block of text rendered line by line (or cell by cell in pixel mode),
/// optionally leaving whitespace untouched.
#[derive(Debug, Default)]
pub struct MultiLine<U, M, T: ToString> {
    lines: Vec<T>,
    line_padding: u16,
    ignore_whitespace: bool,
    style: U,
    mode: M,
}

impl<T> MultiLine<NoStyle, LineMode, T>
where
    T: ToString,
{
    pub fn new(lines: Vec<T>) -> MultiLine<NoStyle, LineMode, T> {
        MultiLine { lines, line_padding: 0, ignore_whitespace: false, style: NoStyle, mode: LineMode }
    }
}

impl<U, M, T> MultiLine<U, M, T>
where
    T: ToString,
{
    pub fn line_padding(self, line_padding: u16) -> MultiLine<U, M, T> {
        Self { line_padding, ..self }
    }

    pub fn ignore_whitespace(self, ignore_whitespace: bool) -> MultiLine<U, M, T> {
        Self { ignore_whitespace, ..self }
    }

    pub fn height(&self) -> u16 {
        let lines = self.lines.len() as u16;
        lines + lines.saturating_sub(1) * self.line_padding
    }

    pub fn width(&self) -> u16 {
        self.lines.iter().map(|line| line.to_string().chars().count()).max().unwrap_or(0) as u16
    }
}

impl<M, T> MultiLine<NoStyle, M, T>
where
    T: ToString,
{
    pub fn style(self, style: Style) -> MultiLine<SetStyle, M, T> {
        MultiLine {
            lines: self.lines,
            line_padding: self.line_padding,
            ignore_whitespace: self.ignore_whitespace,
            mode: self.mode,
            style: SetStyle(style),
        }
    }
}

impl<U, T> MultiLine<U, LineMode, T>
where
    T: ToString,
{
    pub fn pixel_mode(self) -> MultiLine<U, PixelMode, T> {
        MultiLine {
            lines: self.lines,
            line_padding: self.line_padding,
            ignore_whitespace: self.ignore_whitespace,
            mode: PixelMode,
            style: self.style,
        }
    }
}

fn preprocess_lines<T: ToString>(
    lines: Vec<T>,
    line_padding: u16,
    ignore_whitespace: bool,
    area: Rect,
) -> (Vec<String>, Vec<Rect>) {
    let lines: Vec<String> = lines.into_iter().map(|s| s.to_string()).collect();
    let prefix_lens = if ignore_whitespace {
        lines.iter().map(|s| s.chars().take_while(|c| c.is_whitespace()).count()).collect::<Vec<_>>()
    } else {
        std::iter::repeat_n(0_usize, lines.len()).collect::<Vec<_>>()
    };

    let lines = if ignore_whitespace {
        lines.into_iter().map(|line| line.trim().to_string()).collect::<Vec<_>>()
    } else {
        lines
    };

    let x = area.x;
    let y = area.y;
    let y_offset = |index: u16| index * (1 + line_padding);
    let areas = lines
        .iter()
        .zip(prefix_lens)
        .enumerate()
        .map(|(index, (s, p))| {
            Rect { x: x + (p as u16), y: y + y_offset(index as u16), width: s.chars().count() as u16, height: 1 }
                .intersection(area)
        })
        .collect::<Vec<Rect>>();

    (lines, areas)
}

fn preprocess_pixels<T: ToString>(
    lines: Vec<T>,
    line_padding: u16,
    ignore_whitespace: bool,
    area: Rect,
) -> (Vec<String>, Vec<Rect>) {
    let y_offset = |index: u16| index * (1 + line_padding);
    let pixels_and_pos: Vec<(String, u16, u16)> = lines
        .into_iter()
        .enumerate()
        .flat_map(|(r, line)| {
            line.to_string().chars().enumerate().map(move |(c, pixel)| (String::from(pixel), r as u16, c as u16)).collect::<Vec<_>>()
        })
        .filter(|(pixel, _, _)| !ignore_whitespace || !pixel.chars().all(char::is_whitespace))
        .collect();

    let areas = pixels_and_pos
        .iter()
        .map(|(_, r, c)| Rect { x: area.x + c, y: area.y + y_offset(*r), width: 1, height: 1 }.intersection(area))
        .collect();

    let pixels = pixels_and_pos.into_iter().map(|(pixel, _, _)| pixel).collect();

    (pixels, areas)
}

impl<T: ToString> Widget for MultiLine<SetStyle, LineMode, T> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (lines, areas) = preprocess_lines(self.lines, self.line_padding, self.ignore_whitespace, area);
        lines
            .into_iter()
            .zip(areas)
            .filter(|(_, area)| !area.is_empty())
            .for_each(|(line, area)| Text::from(line).style(self.style.0).render(area, buf));
    }
}

impl<T: ToString> Widget for MultiLine<NoStyle, LineMode, T> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (lines, areas) = preprocess_lines(self.lines, self.line_padding, self.ignore_whitespace, area);
        lines
            .into_iter()
            .zip(areas)
            .filter(|(_, area)| !area.is_empty())
            .for_each(|(line, area)| Text::from(line).render(area, buf));
    }
}

impl<T: ToString> Widget for MultiLine<SetStyle, PixelMode, T> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (pixels, areas) = preprocess_pixels(self.lines, self.line_padding, self.ignore_whitespace, area);
        pixels
            .into_iter()
            .zip(areas)
            .filter(|(_, area)| !area.is_empty())
            .for_each(|(pixel, area)| Span::from(pixel).style(self.style.0).render(area, buf));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_line_padding() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 3));
        MultiLine::new(vec!["ab", "cd"]).line_padding(1).render(buf.area, &mut buf);

        assert_eq!(buf, Buffer::with_lines(["ab ", "   ", "cd "]));
    }

    #[test]
    fn test_pixel_mode_keeps_background() {
        let mut buf = Buffer::with_lines(["....."]);
        MultiLine::new(vec!["a b"])
            .ignore_whitespace(true)
            .pixel_mode()
            .style(Style::default())
            .render(buf.area, &mut buf);

        assert_eq!(buf, Buffer::with_lines(["a.b.."]));
    }

    #[test]
    fn test_clipped_to_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        MultiLine::new(vec!["abcdef", "ghi"]).render(buf.area, &mut buf);

        assert_eq!(buf, Buffer::with_lines(["ab"]));
    }

    #[test]
    fn test_size() {
        let text = MultiLine::new(vec!["abc", "d", "ef"]).line_padding(1);
        assert_eq!((text.width(), text.height()), (3, 5));
    }
}
