use crate::transcript::EntryStatus;
use ratatui::style::{Color, Style};

/// Color theme for the askara TUI
///
/// Bluish dark palette derived from iceberg.vim, chosen for long study
/// sessions. Accent colors are semantic: blue for questions, green for
/// answers, cyan for clarifications.
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Primary background: deep blue-black
    pub const BG: Color = Color::Rgb(22, 24, 33);

    /// Foreground: light blue-gray (primary text)
    pub const FG: Color = Color::Rgb(198, 200, 209);

    /// Secondary background: panels, cards, input
    pub const PANEL_BG: Color = Color::Rgb(30, 33, 50);

    /// Hover/active states: input focus
    pub const ACTIVE: Color = Color::Rgb(39, 44, 66);

    /// Question accent
    pub const BLUE: Color = Color::Rgb(132, 160, 198);

    /// Clarification accent
    pub const CYAN: Color = Color::Rgb(137, 184, 194);

    /// Headings
    pub const PURPLE: Color = Color::Rgb(160, 147, 199);

    /// Answer accent
    pub const GREEN: Color = Color::Rgb(180, 190, 130);

    /// Pending (in-flight) markers
    pub const YELLOW: Color = Color::Rgb(226, 164, 120);

    /// Failed markers
    pub const RED: Color = Color::Rgb(226, 120, 120);

    /// Muted text: hints, separators
    pub const MUTED: Color = Color::Rgb(107, 112, 137);

    /// Border color
    pub const BORDER: Color = Color::Rgb(60, 65, 90);

    /// Base style for all text
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Panel style (cards, sidebar)
    pub fn panel() -> Style {
        Style::default().fg(Self::FG).bg(Self::PANEL_BG)
    }

    /// Muted style (hints, secondary text)
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::BG)
    }

    /// Border style
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Marker style for a clarification entry's delivery status
    pub fn status_color(status: EntryStatus) -> Color {
        match status {
            EntryStatus::Confirmed => Self::MUTED,
            EntryStatus::Pending => Self::YELLOW,
            EntryStatus::Failed => Self::RED,
        }
    }

    /// Marker text for a clarification entry's delivery status
    pub fn status_marker(status: EntryStatus) -> &'static str {
        match status {
            EntryStatus::Confirmed => "",
            EntryStatus::Pending => "…",
            EntryStatus::Failed => "✗ failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_values() {
        assert!(matches!(Theme::BG, Color::Rgb(_, _, _)));
        assert!(matches!(Theme::FG, Color::Rgb(_, _, _)));
        assert!(matches!(Theme::PANEL_BG, Color::Rgb(_, _, _)));
    }

    #[test]
    fn test_status_markers() {
        assert_eq!(Theme::status_marker(EntryStatus::Confirmed), "");
        assert_eq!(Theme::status_marker(EntryStatus::Pending), "…");
        assert_eq!(Theme::status_marker(EntryStatus::Failed), "✗ failed");
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(Theme::status_color(EntryStatus::Pending), Theme::YELLOW);
        assert_eq!(Theme::status_color(EntryStatus::Failed), Theme::RED);
        assert_eq!(Theme::status_color(EntryStatus::Confirmed), Theme::MUTED);
    }

    #[test]
    fn test_styles() {
        let base = Theme::base();
        assert_eq!(base.fg, Some(Theme::FG));
        assert_eq!(base.bg, Some(Theme::BG));

        let panel = Theme::panel();
        assert_eq!(panel.bg, Some(Theme::PANEL_BG));
    }
}
