use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub summary: Rect,
    pub main: Rect,
    pub status_line: Rect,
    pub hints: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[3]);

    UiAreas {
        size,
        header: vertical[0],
        summary: vertical[1],
        main: vertical[2],
        status_line: footer_chunks[0],
        hints: footer_chunks[1],
    }
}

/// Centered rectangle of fixed size, clipped to `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas_stack() {
        let a = areas(Rect::new(0, 0, 100, 40));
        assert_eq!(a.header.height, 3);
        assert_eq!(a.summary.y, 3);
        assert_eq!(a.main.y, 8);
        assert_eq!(a.main.height, 30);
        assert_eq!(a.hints.y, 39);
    }

    #[test]
    fn test_centered_clips() {
        let r = centered(Rect::new(0, 0, 20, 10), 40, 4);
        assert_eq!(r, Rect::new(0, 3, 20, 4));
    }
}
