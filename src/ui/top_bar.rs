use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::app::App;
use crate::core::clip;

use super::theme::Palette;

pub fn render_top_bar(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let title = app.relative_dir();
    let bar = Paragraph::new(clip(&title, usize::from(area.width))).style(palette.title);
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entry;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::{Terminal, layout::Rect};
    use std::path::PathBuf;

    fn app_in(root: &str, current: &str) -> App {
        let mut app = App::new(
            PathBuf::from(root),
            vec![Entry {
                name: "a.txt".into(),
                is_dir: false,
            }],
        );
        app.current_dir = PathBuf::from(current);
        app.history.push(0);
        app
    }

    #[test]
    fn render_top_bar_shows_path_relative_to_root() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = app_in("/srv/media", "/srv/media/music/jazz");

        let area = Rect::new(0, 0, 30, 1);
        terminal
            .draw(|frame| render_top_bar(frame, area, &app, &Palette::classic()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let line = buffer_line(buffer, 0, 30);

        assert_eq!(line.trim_end(), "/music/jazz");
        assert!(!line.contains("srv"));
    }

    #[test]
    fn render_top_bar_clips_to_width() {
        let backend = TestBackend::new(6, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = app_in("/srv", "/srv/music/jazz");

        let area = Rect::new(0, 0, 6, 1);
        terminal
            .draw(|frame| render_top_bar(frame, area, &app, &Palette::classic()))
            .unwrap();

        let buffer = terminal.backend().buffer();

        assert_eq!(buffer_line(buffer, 0, 6), "/music");
    }

    #[test]
    fn render_top_bar_uses_title_style() {
        let backend = TestBackend::new(10, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = app_in("/srv", "/srv/a");
        let palette = Palette::classic();

        let area = Rect::new(0, 0, 10, 1);
        terminal
            .draw(|frame| render_top_bar(frame, area, &app, &palette))
            .unwrap();

        let cell = &terminal.backend().buffer()[(9, 0)];
        assert_eq!(Some(cell.bg), palette.title.bg);
    }

    fn buffer_line(buffer: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }
}
