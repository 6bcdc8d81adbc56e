use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::app::App;
use crate::core::{clip, display_width, extname};

use super::theme::Palette;

pub fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    // The last column stays unused, like a terminal that must not scroll.
    let area = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };
    let (extension, position) = build_bottom_bar(app, usize::from(area.width));
    frame.render_widget(Paragraph::new(extension).style(palette.status), area);
    frame.render_widget(Paragraph::new(position).alignment(Alignment::Right), area);
}

// Extension on the left, `n/total` flush right; the position wins when they overlap.
fn build_bottom_bar(app: &App, width: usize) -> (String, String) {
    let label = match app.selected_entry() {
        Some(entry) if !entry.is_dir => entry.label(),
        _ => Default::default(),
    };
    let position = format!("{}/{}", app.cursor + 1, app.entries.len());
    let position = clip(&position, width).to_string();
    let extension = clip(extname(&label), width - display_width(&position)).to_string();
    (extension, position)
}
