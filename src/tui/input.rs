use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Slider step for PageUp/PageDown.
const PAGE_STEP: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleUpper,
    ToggleNumbers,
    ToggleSymbols,
    StepLength(isize),
    MinLength,
    MaxLength,
    Generate,
    Copy,
    Quit,
}

/// Map a key press to a shell action. Releases and repeats of non-slider keys are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    let repeat_ok = matches!(
        key.code,
        KeyCode::Left | KeyCode::Right | KeyCode::PageUp | KeyCode::PageDown
    );
    match key.kind {
        KeyEventKind::Press => {}
        KeyEventKind::Repeat if repeat_ok => {}
        _ => return None,
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('u') | KeyCode::Char('U') => Action::ToggleUpper,
        KeyCode::Char('n') | KeyCode::Char('N') => Action::ToggleNumbers,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::ToggleSymbols,
        KeyCode::Left | KeyCode::Char('-') => Action::StepLength(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Action::StepLength(1),
        KeyCode::PageDown => Action::StepLength(-PAGE_STEP),
        KeyCode::PageUp => Action::StepLength(PAGE_STEP),
        KeyCode::Home => Action::MinLength,
        KeyCode::End => Action::MaxLength,
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char('G') => Action::Generate,
        KeyCode::Char('c') | KeyCode::Char('C') => Action::Copy,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn toggles_and_actions() {
        assert_eq!(action_for(press(KeyCode::Char('u'))), Some(Action::ToggleUpper));
        assert_eq!(action_for(press(KeyCode::Char('n'))), Some(Action::ToggleNumbers));
        assert_eq!(action_for(press(KeyCode::Char('s'))), Some(Action::ToggleSymbols));
        assert_eq!(action_for(press(KeyCode::Enter)), Some(Action::Generate));
        assert_eq!(action_for(press(KeyCode::Char('g'))), Some(Action::Generate));
        assert_eq!(action_for(press(KeyCode::Char('c'))), Some(Action::Copy));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn slider_keys() {
        assert_eq!(action_for(press(KeyCode::Left)), Some(Action::StepLength(-1)));
        assert_eq!(action_for(press(KeyCode::Right)), Some(Action::StepLength(1)));
        assert_eq!(action_for(press(KeyCode::PageUp)), Some(Action::StepLength(10)));
        assert_eq!(action_for(press(KeyCode::PageDown)), Some(Action::StepLength(-10)));
        assert_eq!(action_for(press(KeyCode::Home)), Some(Action::MinLength));
        assert_eq!(action_for(press(KeyCode::End)), Some(Action::MaxLength));
    }

    #[test]
    fn ctrl_c_quits_instead_of_copying() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key), Some(Action::Quit));
    }

    #[test]
    fn releases_are_ignored() {
        assert_eq!(action_for(with_kind(KeyCode::Char('g'), KeyEventKind::Release)), None);
    }

    #[test]
    fn only_slider_keys_repeat() {
        assert_eq!(
            action_for(with_kind(KeyCode::Right, KeyEventKind::Repeat)),
            Some(Action::StepLength(1))
        );
        assert_eq!(action_for(with_kind(KeyCode::Char('u'), KeyEventKind::Repeat)), None);
    }

    #[test]
    fn unknown_keys_do_nothing() {
        assert_eq!(action_for(press(KeyCode::Char('z'))), None);
        assert_eq!(action_for(press(KeyCode::Tab)), None);
        assert_eq!(action_for(press(KeyCode::Char('w'))), None);
    }
}
