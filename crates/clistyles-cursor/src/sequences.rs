//! Cursor, erase, and scroll escape sequences.
//!
//! These builders do no validation; [`Cursor`](crate::Cursor) rejects zero
//! counts before calling them.

pub const SAVE_POSITION: &str = "\x1b[s";
pub const RESTORE_POSITION: &str = "\x1b[u";
pub const ERASE_WINDOW: &str = "\x1b[2J";
pub const ERASE_LINE: &str = "\x1b[2K";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Moves up `n` lines, keeping the column (CSI A).
pub fn up(n: u16) -> String {
    format!("\x1b[{}A", n)
}

/// Moves down `n` lines, keeping the column (CSI B).
pub fn down(n: u16) -> String {
    format!("\x1b[{}B", n)
}

/// Moves right `n` columns (CSI C).
pub fn right(n: u16) -> String {
    format!("\x1b[{}C", n)
}

/// Moves left `n` columns (CSI D).
pub fn left(n: u16) -> String {
    format!("\x1b[{}D", n)
}

/// Moves up `n` lines to the first column (CSI F).
pub fn up_to_line_start(n: u16) -> String {
    format!("\x1b[{}F", n)
}

/// Moves down `n` lines to the first column (CSI E).
pub fn down_to_line_start(n: u16) -> String {
    format!("\x1b[{}E", n)
}

/// Moves to 1-based column `col` on the current line (CSI G).
pub fn column(col: u16) -> String {
    format!("\x1b[{}G", col)
}

/// Moves to 1-based line `line`, keeping the column (CSI d).
pub fn line(line: u16) -> String {
    format!("\x1b[{}d", line)
}

/// Moves to 1-based `line` and `col` (CSI H).
pub fn position(line: u16, col: u16) -> String {
    format!("\x1b[{};{}H", line, col)
}

/// Inserts `n` blank lines at the top; lines pushed past the bottom are lost (CSI T).
pub fn scroll_up(n: u16) -> String {
    format!("\x1b[{}T", n)
}

/// Inserts `n` blank lines at the bottom; lines pushed past the top are lost (CSI S).
pub fn scroll_down(n: u16) -> String {
    format!("\x1b[{}S", n)
}
