use std::process;

mod clipboard;
mod exits;
mod pass;
mod platform;
mod shell;
mod terminal;
mod tui;

fn main() {
    platform::init();
    process::exit(tui::run());
}
