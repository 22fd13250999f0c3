//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line
    pub header: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the dashboard
pub struct DashboardLayout {
    /// Main, daily and savings panels, left to right
    pub balances: [Rect; 3],
    pub gauge: Rect,
    pub transactions: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Balance panels
                Constraint::Length(3), // Progress gauge
                Constraint::Min(3),    // Recent transactions
            ])
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[0]);

        Self {
            balances: [panels[0], panels[1], panels[2]],
            gauge: chunks[1],
            transactions: chunks[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_fixed(40, 10, area), Rect::new(20, 7, 40, 10));

        // Clamped to the available space
        let small = Rect::new(0, 0, 30, 5);
        assert_eq!(centered_rect_fixed(40, 10, small), Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn test_dashboard_layout_splits_area() {
        let layout = DashboardLayout::new(Rect::new(0, 0, 90, 20));
        assert_eq!(layout.balances[0].height, 4);
        assert_eq!(layout.gauge.y, 4);
        assert_eq!(layout.transactions.y, 7);
        let total: u16 = layout.balances.iter().map(|r| r.width).sum();
        assert_eq!(total, 90);
    }
}
