//! Interactive terminal interface.

mod input;
mod text;

use std::io;

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{Event, read};
use crossterm::execute;
use crossterm::terminal::SetTitle;

pub use input::{Action, action_for};
pub use text::{WINDOW_TITLE, screen};

use crate::clipboard::{self, ClipboardError};
use crate::pass::{MAX_LENGTH, MIN_LENGTH};
use crate::shell::{Controls, CopyOutcome, Shell};
use crate::terminal::{RED, RESET, RawModeGuard, clear, reset_terminal};

/// One-line status shown under the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

enum Flow {
    Continue,
    Quit,
}

/// Run TUI interactive mode. Returns the process exit code.
pub fn run() -> i32 {
    match event_loop(Shell::new(Controls::default())) {
        Ok(()) => 0,
        Err(e) => {
            reset_terminal();
            eprintln!("{RED}Terminal error: {e}{RESET}");
            1
        }
    }
}

fn event_loop(mut shell: Shell) -> io::Result<()> {
    let _ = execute!(io::stdout(), SetTitle(WINDOW_TITLE));
    let mut raw_guard = RawModeGuard::new()?;

    // Opened on first copy so a missing display doesn't block generation.
    let mut board: Option<ClipboardContext> = None;
    let mut notice: Option<Notice> = None;

    loop {
        clear();
        screen(&shell, notice.as_ref()).print();

        let Event::Key(key) = read()? else {
            continue;
        };
        let Some(action) = action_for(key) else {
            continue;
        };

        notice = None;
        let flow = apply(action, &mut shell, &mut board, clipboard::open, &mut notice);
        if let Flow::Quit = flow {
            break;
        }
    }

    raw_guard.disable();
    clear();
    Ok(())
}

fn apply<C, F>(
    action: Action,
    shell: &mut Shell,
    clipboard: &mut Option<C>,
    open_clipboard: F,
    notice: &mut Option<Notice>,
) -> Flow
where
    C: ClipboardProvider,
    F: FnOnce() -> Result<C, ClipboardError>,
{
    match action {
        Action::ToggleUpper => shell.controls_mut().toggle_upper(),
        Action::ToggleNumbers => shell.controls_mut().toggle_numbers(),
        Action::ToggleSymbols => shell.controls_mut().toggle_symbols(),
        Action::StepLength(delta) => shell.controls_mut().step_length(delta),
        Action::MinLength => shell.controls_mut().set_length(MIN_LENGTH),
        Action::MaxLength => shell.controls_mut().set_length(MAX_LENGTH),
        Action::Generate => {
            shell.generate();
        }
        Action::Copy => *notice = copy(shell, clipboard, open_clipboard),
        Action::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn copy<C, F>(shell: &Shell, clipboard: &mut Option<C>, open_clipboard: F) -> Option<Notice>
where
    C: ClipboardProvider,
    F: FnOnce() -> Result<C, ClipboardError>,
{
    if shell.is_idle() {
        return None;
    }

    if clipboard.is_none() {
        match open_clipboard() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => return Some(Notice::Error(e.to_string())),
        }
    }
    let ctx = clipboard.as_mut()?;

    match shell.copy(ctx) {
        Ok(CopyOutcome::Copied(n)) => Some(Notice::Info(format!(
            "*** -COPIED TO CLIPBOARD- *** ({n} characters)"
        ))),
        Ok(CopyOutcome::NothingToCopy) => None,
        Err(e) => Some(Notice::Error(e.to_string())),
    }
}
