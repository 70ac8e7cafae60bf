use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split-pane layout configuration
pub struct AppLayout {
    pub input_area: Rect,
    pub history_area: Rect,
    pub result_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the layout:
    /// - Input line: 3 rows (bordered) at the top
    /// - History pane: 30% width (left)
    /// - Result pane: 70% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input line
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // History pane
                Constraint::Percentage(70), // Result pane
            ])
            .split(vertical_chunks[1]);

        Self {
            input_area: vertical_chunks[0],
            history_area: horizontal_chunks[0],
            result_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
