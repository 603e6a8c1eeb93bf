//! Horizontal fill bar for shares of a total

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Single-line bar filled to `ratio` of its width
pub struct FillBar {
    ratio: f64,
    gradient: (Color, Color),
    track: Style,
}

impl FillBar {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: clamp_ratio(ratio),
            gradient: (Color::Rgb(0x66, 0x7e, 0xea), Color::Rgb(0x76, 0x4b, 0xa2)),
            track: Style::default().fg(Color::DarkGray),
        }
    }

    /// Fill colors at the left and right end of the bar
    pub fn gradient(mut self, start: Color, end: Color) -> Self {
        self.gradient = (start, end);
        self
    }
}

impl Widget for FillBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let filled = filled_cells(self.ratio, width);

        for i in 0..width {
            let x = area.x + i as u16;
            let cell = buf.get_mut(x, area.y);
            if i < filled {
                let t = if width > 1 {
                    i as f64 / (width - 1) as f64
                } else {
                    0.0
                };
                let color = lerp_color(self.gradient.0, self.gradient.1, t);
                cell.set_char(FILLED).set_style(Style::default().fg(color));
            } else {
                cell.set_char(EMPTY).set_style(self.track);
            }
        }
    }
}

/// Bar as plain text (for table cells)
pub fn fill_bar_text(ratio: f64, width: usize) -> String {
    let filled = filled_cells(clamp_ratio(ratio), width);
    let mut text = String::with_capacity(width * 3);
    text.extend(std::iter::repeat(FILLED).take(filled));
    text.extend(std::iter::repeat(EMPTY).take(width - filled));
    text
}

fn filled_cells(ratio: f64, width: usize) -> usize {
    ((ratio * width as f64).round() as usize).min(width)
}

fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Linear blend between two RGB colors; other colors pick the nearer end
pub fn lerp_color(start: Color, end: Color, t: f64) -> Color {
    match (start, end) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => start,
        _ => end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_bar_text() {
        assert_eq!(fill_bar_text(0.5, 4), "██░░");
        assert_eq!(fill_bar_text(0.0, 3), "░░░");
        assert_eq!(fill_bar_text(1.0, 3), "███");
    }

    #[test]
    fn test_fill_bar_text_out_of_range() {
        assert_eq!(fill_bar_text(2.0, 2), "██");
        assert_eq!(fill_bar_text(f64::NAN, 2), "░░");
    }

    #[test]
    fn test_render_into_buffer() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        FillBar::new(0.3).render(area, &mut buf);
        let line: String = (0..10).map(|x| buf.get(x, 0).symbol().to_string()).collect();
        assert_eq!(line, "███░░░░░░░");
    }

    #[test]
    fn test_lerp_color_ends() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color::Rgb(100, 50, 25));
    }
}
