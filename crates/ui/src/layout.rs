use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width-based layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow terminal: the sidebar collapses
    Compact,
    /// Room for the two-pane study grid
    Full,
}

impl From<u16> for LayoutMode {
    fn from(width: u16) -> Self {
        if width < 100 { LayoutMode::Compact } else { LayoutMode::Full }
    }
}

/// Rects for the study view: header, transcript pane, optional
/// clarification sidebar, footer.
#[derive(Debug, Clone, Copy)]
pub struct StudyLayout {
    pub header: Rect,
    pub transcript: Rect,
    pub sidebar: Option<Rect>,
    pub footer: Rect,
}

impl StudyLayout {
    pub fn calculate(area: Rect, sidebar_visible: bool) -> Self {
        let mode = LayoutMode::from(area.width);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let (transcript, sidebar) = if sidebar_visible && mode == LayoutMode::Full {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
                .split(rows[1]);
            (columns[0], Some(columns[1]))
        } else {
            (rows[1], None)
        };

        Self { header: rows[0], transcript, sidebar, footer: rows[2] }
    }
}

/// Rects for the landing view: header, centered hero card, footer.
#[derive(Debug, Clone, Copy)]
pub struct LandingLayout {
    pub header: Rect,
    pub hero: Rect,
    pub footer: Rect,
}

impl LandingLayout {
    pub fn calculate(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let body = rows[1];
        let card_width = 60.min(body.width.saturating_sub(4));
        let card_height = 12.min(body.height.saturating_sub(2));
        let hero = Rect {
            x: body.x + (body.width.saturating_sub(card_width)) / 2,
            y: body.y + (body.height.saturating_sub(card_height)) / 2,
            width: card_width,
            height: card_height,
        };

        Self { header: rows[0], hero, footer: rows[2] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_from_width() {
        assert_eq!(LayoutMode::from(80), LayoutMode::Compact);
        assert_eq!(LayoutMode::from(99), LayoutMode::Compact);
        assert_eq!(LayoutMode::from(100), LayoutMode::Full);
        assert_eq!(LayoutMode::from(160), LayoutMode::Full);
    }

    #[test]
    fn test_study_layout_with_sidebar() {
        let layout = StudyLayout::calculate(Rect::new(0, 0, 120, 40), true);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.height, 1);

        let sidebar = layout.sidebar.expect("sidebar expected at full width");
        assert!(layout.transcript.width > sidebar.width);
        assert_eq!(layout.transcript.width + sidebar.width, 120);
        assert_eq!(layout.transcript.height, 38);
    }

    #[test]
    fn test_study_layout_sidebar_hidden() {
        let layout = StudyLayout::calculate(Rect::new(0, 0, 120, 40), false);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.transcript.width, 120);
    }

    #[test]
    fn test_study_layout_compact_collapses_sidebar() {
        let layout = StudyLayout::calculate(Rect::new(0, 0, 80, 24), true);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.transcript.width, 80);
    }

    #[test]
    fn test_landing_layout_centers_hero() {
        let layout = LandingLayout::calculate(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.hero.width, 60);
        assert_eq!(layout.hero.height, 12);
        assert_eq!(layout.hero.x, 30);
    }

    #[test]
    fn test_landing_layout_small_terminal() {
        let layout = LandingLayout::calculate(Rect::new(0, 0, 40, 10));
        assert!(layout.hero.width <= 36);
        assert!(layout.hero.height <= 8);
    }
}
