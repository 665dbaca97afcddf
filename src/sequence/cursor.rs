//! Cursor movement and erase sequences
//!
//! Plain VT100/ANSI sequences. Positions are 1-based as the terminal expects.

/// Save cursor position
pub const SAVE: &str = "\x1b[s";
/// Restore cursor position
pub const RESTORE: &str = "\x1b[u";

pub const UP: &str = "\x1b[A";
pub const DOWN: &str = "\x1b[B";
pub const RIGHT: &str = "\x1b[C";
pub const LEFT: &str = "\x1b[D";

/// Start of line (moves left far enough to hit column 1)
pub const LINE_START: &str = "\x1b[999D";
/// End of line
pub const LINE_END: &str = "\x1b[999C";

/// Top-left corner
pub const HOME: &str = "\x1b[1;1H";

pub const CLEAR_RIGHT: &str = "\x1b[0K";
pub const CLEAR_LEFT: &str = "\x1b[1K";
pub const CLEAR_LINE: &str = "\x1b[2K";
pub const CLEAR_SCREEN: &str = "\x1b[2J";
/// `ED 0`, cursor to end of screen
pub const CLEAR_UP: &str = "\x1b[0J";
/// `ED 1`, start of screen to cursor
pub const CLEAR_DOWN: &str = "\x1b[1J";

pub fn up(n: usize) -> String {
    format!("\x1b[{}A", n)
}

pub fn down(n: usize) -> String {
    format!("\x1b[{}B", n)
}

pub fn right(n: usize) -> String {
    format!("\x1b[{}C", n)
}

pub fn left(n: usize) -> String {
    format!("\x1b[{}D", n)
}

/// Absolute position; note the sequence takes row first
pub fn position(x: usize, y: usize) -> String {
    format!("\x1b[{};{}H", y, x)
}

/// Absolute column
pub fn horizontal(x: usize) -> String {
    format!("\x1b[{}G", x)
}

pub fn scroll_up(n: usize) -> String {
    format!("\x1b[{}S", n)
}

pub fn scroll_down(n: usize) -> String {
    format!("\x1b[{}T", n)
}

/// Emit `n` newlines between a cursor save and restore, which makes the
/// terminal scroll room below the cursor without moving it.
pub fn newline_pad(n: usize) -> String {
    let mut out = String::with_capacity(SAVE.len() + n + RESTORE.len());
    out.push_str(SAVE);
    out.extend(std::iter::repeat('\n').take(n));
    out.push_str(RESTORE);
    out
}
