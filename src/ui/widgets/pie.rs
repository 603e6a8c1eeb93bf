//! Character-cell pie chart

use std::f64::consts::TAU;

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const SLICE_CHAR: char = '█';

/// Pie of weighted slices, drawn clockwise from 12 o'clock.
///
/// Terminal cells are roughly twice as tall as wide, so the horizontal
/// radius is doubled to keep the disc round.
pub struct Pie<'a> {
    slices: &'a [(f64, Color)],
}

impl<'a> Pie<'a> {
    pub fn new(slices: &'a [(f64, Color)]) -> Self {
        Self { slices }
    }
}

impl<'a> Widget for Pie<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total: f64 = self.slices.iter().map(|(value, _)| value.max(0.0)).sum();
        if area.width == 0 || area.height == 0 || total <= 0.0 {
            return;
        }

        let ry = (area.height as f64 / 2.0).min(area.width as f64 / 4.0);
        if ry <= 0.0 {
            return;
        }
        let rx = ry * 2.0;
        let cx = area.width as f64 / 2.0;
        let cy = area.height as f64 / 2.0;

        for row in 0..area.height {
            for col in 0..area.width {
                let dx = (col as f64 + 0.5 - cx) / rx;
                let dy = (row as f64 + 0.5 - cy) / ry;
                if dx * dx + dy * dy > 1.0 {
                    continue;
                }
                let fraction = clockwise_fraction(dx, dy);
                if let Some(color) = slice_at(self.slices, total, fraction) {
                    buf.get_mut(area.x + col, area.y + row)
                        .set_char(SLICE_CHAR)
                        .set_fg(color);
                }
            }
        }
    }
}

/// Position around the circle in 0.0..1.0, starting at 12 o'clock
fn clockwise_fraction(dx: f64, dy: f64) -> f64 {
    let angle = dx.atan2(-dy);
    let angle = if angle < 0.0 { angle + TAU } else { angle };
    angle / TAU
}

fn slice_at(slices: &[(f64, Color)], total: f64, fraction: f64) -> Option<Color> {
    let mut acc = 0.0;
    for (value, color) in slices {
        acc += value.max(0.0) / total;
        if fraction < acc {
            return Some(*color);
        }
    }
    slices.iter().rev().find(|(value, _)| *value > 0.0).map(|(_, color)| *color)
}
