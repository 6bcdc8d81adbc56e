use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::core::{Entry, basename, clip};

use super::theme::Palette;

/// First visible index: the listing scrolls a whole page of `height` rows at a time.
pub fn page_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    (cursor / height) * height
}

/// Directories keep their full name; files drop everything from the last `.`.
pub fn display_name(entry: &Entry) -> Cow<'_, str> {
    let label = entry.label();
    if entry.is_dir {
        return label;
    }
    Cow::Owned(basename(&label).to_string())
}

pub fn render_entry_list(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let height = usize::from(area.height);
    let width = usize::from(area.width);
    let offset = page_offset(app.cursor, height);
    let lines: Vec<Line> = app
        .entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(index, entry)| {
            let style = palette.entry(entry.is_dir, index == app.cursor);
            let name = display_name(entry);
            Line::from(Span::styled(clip(&name, width).to_string(), style))
        })
        .collect();
    let list = Paragraph::new(lines).style(palette.file);
    frame.render_widget(list, area);
}
