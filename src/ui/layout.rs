use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the screen into title, listing and status rows.
pub fn split_main(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}
