use ratatui::style::{Color, Style};

pub struct Palette {
    pub title: Style,
    pub file: Style,
    pub dir: Style,
    pub selected_file: Style,
    pub selected_dir: Style,
    pub status: Style,
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            title: pair(Color::Magenta, Color::Yellow),
            file: pair(Color::White, Color::Black),
            dir: pair(Color::Cyan, Color::Black),
            selected_file: pair(Color::White, Color::Blue),
            selected_dir: pair(Color::Cyan, Color::Blue),
            status: pair(Color::Red, Color::Green),
        }
    }

    pub fn entry(&self, is_dir: bool, selected: bool) -> Style {
        match (is_dir, selected) {
            (true, true) => self.selected_dir,
            (true, false) => self.dir,
            (false, true) => self.selected_file,
            (false, false) => self.file,
        }
    }
}

fn pair(fg: Color, bg: Color) -> Style {
    Style::default().fg(fg).bg(bg)
}
