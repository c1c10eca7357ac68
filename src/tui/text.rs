use crate::pass::{MAX_LENGTH, MIN_LENGTH};
use crate::shell::{Controls, Shell};
use crate::terminal::{BOLD, CYAN, DIM, Frame, GREEN, RED, RESET};

use super::Notice;

pub const WINDOW_TITLE: &str = "Password Generator";

const SLIDER_WIDTH: usize = 40;

fn checkbox(label: &str, on: bool, key: char) -> String {
    let mark = if on {
        format!("{GREEN}x{RESET}")
    } else {
        " ".to_string()
    };
    format!("  [{mark}] {label:<14}{DIM}({key}){RESET}")
}

fn slider(controls: &Controls) -> String {
    let span = MAX_LENGTH - MIN_LENGTH;
    let filled = (controls.length() - MIN_LENGTH) * SLIDER_WIDTH / span;
    format!(
        "  Length  ◀ {CYAN}{}{RESET}{} ▶ {:>2}  {DIM}(←/→){RESET}",
        "█".repeat(filled),
        "░".repeat(SLIDER_WIDTH - filled),
        controls.length()
    )
}

/// Build the full interactive screen.
pub fn screen(shell: &Shell, notice: Option<&Notice>) -> Frame {
    let controls = shell.controls();
    let mut frame = Frame::new();

    frame.top(WINDOW_TITLE).line("");
    frame
        .line(&checkbox("Upper Case", controls.include_upper, 'u'))
        .line(&checkbox("Numbers", controls.include_numbers, 'n'))
        .line(&checkbox("Symbols", controls.include_symbols, 's'))
        .line("")
        .line(&slider(controls))
        .line("")
        .line(&format!(
            "  {BOLD}[ Generate Password ]{RESET} {DIM}(Enter/g){RESET}    {BOLD}[ Copy ]{RESET} {DIM}(c){RESET}"
        ))
        .rule();

    match shell.displayed() {
        Some(password) => frame.line_center(password.as_str()),
        None => frame.line_center(&format!("{DIM}(nothing generated yet){RESET}")),
    };

    frame
        .rule()
        .line(&format!(
            "  Pool: {} characters",
            controls.request().pool().len()
        ))
        .line_center(&format!("{DIM}u/n/s toggle  |  PgUp/PgDn/Home/End  |  q) quit{RESET}"))
        .bottom();

    match notice {
        Some(Notice::Info(msg)) => frame.push(format!("{GREEN}{msg}{RESET}")),
        Some(Notice::Error(msg)) => frame.push(format!("{RED}{msg}{RESET}")),
        None => frame.push(""),
    };

    frame
}
