//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, screen control.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const CYAN: &str = "\x1b[38;5;14m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// A block of boxed lines, rendered with `\r\n` so it draws correctly in raw mode.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Raw line outside the box.
    pub fn push(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Box top with optional title: ┌─ Title ───────────────────────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        let line = if title.is_empty() {
            format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
            format!("┌{}{}┐", title_part, "─".repeat(remaining))
        };
        self.push(line)
    }

    /// Box content line: │ content                                        │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let padding = INNER_WIDTH.saturating_sub(console_width(content));
        self.push(format!("│ {}{} │", content, " ".repeat(padding)))
    }

    /// Centered box content line: │          content          │
    pub fn line_center(&mut self, content: &str) -> &mut Self {
        let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ))
    }

    /// Horizontal rule inside the box.
    pub fn rule(&mut self) -> &mut Self {
        self.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)))
    }

    /// Box bottom: └───────────────────────────────────────────────────────┘
    pub fn bottom(&mut self) -> &mut Self {
        self.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)))
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\r\n")?;
        }
        out.flush()
    }

    /// Render to stdout, ignoring write errors (broken pipe etc).
    pub fn print(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = self.render(&mut out);
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
