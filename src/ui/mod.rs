mod bottom_bar;
mod event;
mod layout;
mod main_pane;
mod theme;
mod top_bar;

use std::io::{self, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    event::{self as crossterm_event, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

use crate::{
    app::{App, Flow},
    error::AppResult,
    launcher::{LaunchContext, Launcher, Screen, Spawner},
};

use bottom_bar::render_bottom_bar;
use event::command_for;
use layout::split_main;
use main_pane::render_entry_list;
use theme::Palette;
use top_bar::render_top_bar;

pub fn run<S: Spawner>(mut app: App, launcher: &Launcher<S>) -> AppResult<()> {
    let mut guard = TerminalGuard::new()?;
    let palette = Palette::classic();

    loop {
        guard
            .terminal_mut()
            .draw(|frame| draw(frame, &app, &palette))?;

        // Resizes and unmapped keys fall through to a redraw.
        let Event::Key(key) = crossterm_event::read()? else {
            continue;
        };
        let Some(command) = command_for(key) else {
            continue;
        };
        let mut context = LaunchContext {
            launcher,
            screen: &mut guard,
        };
        if app.apply(command, &mut context)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App, palette: &Palette) {
    let area = frame.area();
    let (top, main, bottom) = split_main(area);
    render_top_bar(frame, top, app, palette);
    render_entry_list(frame, main, app, palette);
    render_bottom_bar(frame, bottom, app, palette);
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> AppResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error.into());
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error.into())
            }
        }
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Screen for TerminalGuard {
    fn release(&mut self) -> AppResult<()> {
        restore_terminal()?;
        Ok(())
    }

    fn acquire(&mut self) -> AppResult<()> {
        enable_raw_mode()?;
        execute!(self.terminal.backend_mut(), EnterAlternateScreen, Hide)?;
        // Forget the previous frame so the next draw repaints every cell.
        self.terminal.clear()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> std::io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, Show)?;
    Ok(())
}
