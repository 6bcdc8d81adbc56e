use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Command;

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press
        || key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char('j') => Some(Command::Down),
        KeyCode::Char('k') => Some(Command::Up),
        KeyCode::Char('l') => Some(Command::Open),
        KeyCode::Char('h') => Some(Command::Parent),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn command_for_maps_navigation_keys() {
        assert_eq!(command_for(press(KeyCode::Char('j'))), Some(Command::Down));
        assert_eq!(command_for(press(KeyCode::Char('k'))), Some(Command::Up));
        assert_eq!(command_for(press(KeyCode::Char('l'))), Some(Command::Open));
        assert_eq!(command_for(press(KeyCode::Char('h'))), Some(Command::Parent));
        assert_eq!(command_for(press(KeyCode::Char('q'))), Some(Command::Quit));
    }

    #[test]
    fn command_for_ignores_other_keys() {
        assert_eq!(command_for(press(KeyCode::Char('x'))), None);
        assert_eq!(command_for(press(KeyCode::Char('J'))), None);
        assert_eq!(command_for(press(KeyCode::Enter)), None);
        assert_eq!(command_for(press(KeyCode::Down)), None);
    }

    #[test]
    fn command_for_ignores_control_chords() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);

        assert_eq!(command_for(key), None);
    }

    #[test]
    fn command_for_ignores_release_events() {
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('j'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );

        assert_eq!(command_for(key), None);
    }
}
