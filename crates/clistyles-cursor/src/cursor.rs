//! Cursor writer.

use std::io::Write;

use tracing::debug;

use crate::error::CursorError;
use crate::sequences;

/// Writes cursor control sequences to an output stream.
///
/// All counts and positions are 1-based; zero is rejected with
/// [`CursorError::NotPositive`] before anything is written.
///
/// The terminal keeps a single saved position, so each
/// [`save_position`](Self::save_position) overwrites the previous one.
#[derive(Debug)]
pub struct Cursor<W: Write> {
    out: W,
    saved: bool,
}

impl Cursor<console::Term> {
    /// Creates a cursor writing to standard output.
    pub fn stdout() -> Self {
        Self::new(console::Term::stdout())
    }
}

impl<W: Write> Cursor<W> {
    pub fn new(out: W) -> Self {
        Self { out, saved: false }
    }

    /// Returns `true` once a position has been saved.
    pub fn has_saved_position(&self) -> bool {
        self.saved
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn save_position(&mut self) -> Result<&mut Self, CursorError> {
        self.emit(sequences::SAVE_POSITION)?;
        self.saved = true;
        Ok(self)
    }

    /// Restores the saved position.
    ///
    /// The sequence is written even if nothing was saved; what the terminal
    /// does then is up to the terminal.
    pub fn restore_position(&mut self) -> Result<&mut Self, CursorError> {
        if !self.saved {
            debug!("restoring cursor position without a saved position");
        }
        self.emit(sequences::RESTORE_POSITION)?;
        Ok(self)
    }

    pub fn move_up(&mut self, lines: u16) -> Result<&mut Self, CursorError> {
        positive("line count", lines)?;
        self.emit(&sequences::up(lines))?;
        Ok(self)
    }

    pub fn move_down(&mut self, lines: u16) -> Result<&mut Self, CursorError> {
        positive("line count", lines)?;
        self.emit(&sequences::down(lines))?;
        Ok(self)
    }

    pub fn move_left(&mut self, cols: u16) -> Result<&mut Self, CursorError> {
        positive("column count", cols)?;
        self.emit(&sequences::left(cols))?;
        Ok(self)
    }

    pub fn move_right(&mut self, cols: u16) -> Result<&mut Self, CursorError> {
        positive("column count", cols)?;
        self.emit(&sequences::right(cols))?;
        Ok(self)
    }

    /// Moves up and to the start of the line.
    pub fn move_up_lines(&mut self, lines: u16) -> Result<&mut Self, CursorError> {
        positive("line count", lines)?;
        self.emit(&sequences::up_to_line_start(lines))?;
        Ok(self)
    }

    /// Moves down and to the start of the line.
    pub fn move_down_lines(&mut self, lines: u16) -> Result<&mut Self, CursorError> {
        positive("line count", lines)?;
        self.emit(&sequences::down_to_line_start(lines))?;
        Ok(self)
    }

    pub fn set_column(&mut self, col: u16) -> Result<&mut Self, CursorError> {
        positive("column", col)?;
        self.emit(&sequences::column(col))?;
        Ok(self)
    }

    pub fn set_line(&mut self, line: u16) -> Result<&mut Self, CursorError> {
        positive("line", line)?;
        self.emit(&sequences::line(line))?;
        Ok(self)
    }

    pub fn set_position(&mut self, line: u16, col: u16) -> Result<&mut Self, CursorError> {
        positive("line", line)?;
        positive("column", col)?;
        self.emit(&sequences::position(line, col))?;
        Ok(self)
    }

    /// Clears the screen and moves to the top-left corner.
    pub fn erase_window(&mut self) -> Result<&mut Self, CursorError> {
        self.emit(sequences::ERASE_WINDOW)?;
        self.set_position(1, 1)
    }

    /// Clears the current line and moves to its first column.
    pub fn erase_line(&mut self) -> Result<&mut Self, CursorError> {
        self.emit(sequences::ERASE_LINE)?;
        self.set_column(1)
    }

    /// Adds `lines` blank lines at the top; the bottom lines are lost.
    pub fn scroll_up(&mut self, lines: u16) -> Result<&mut Self, CursorError> {
        positive("scroll height", lines)?;
        self.emit(&sequences::scroll_up(lines))?;
        Ok(self)
    }

    /// Adds `lines` blank lines at the bottom; the top lines are lost.
    pub fn scroll_down(&mut self, lines: u16) -> Result<&mut Self, CursorError> {
        positive("scroll height", lines)?;
        self.emit(&sequences::scroll_down(lines))?;
        Ok(self)
    }

    pub fn hide(&mut self) -> Result<&mut Self, CursorError> {
        self.emit(sequences::HIDE_CURSOR)?;
        Ok(self)
    }

    pub fn show(&mut self) -> Result<&mut Self, CursorError> {
        self.emit(sequences::SHOW_CURSOR)?;
        Ok(self)
    }

    fn emit(&mut self, sequence: &str) -> Result<(), CursorError> {
        self.out.write_all(sequence.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

fn positive(what: &'static str, value: u16) -> Result<(), CursorError> {
    if value == 0 {
        return Err(CursorError::NotPositive { what });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(cursor: Cursor<Vec<u8>>) -> String {
        String::from_utf8(cursor.into_inner()).unwrap()
    }

    #[test]
    fn test_moves() {
        let mut cursor = Cursor::new(Vec::new());
        cursor
            .move_up(2)
            .unwrap()
            .move_down(3)
            .unwrap()
            .move_left(4)
            .unwrap()
            .move_right(5)
            .unwrap();
        assert_eq!(written(cursor), "\x1b[2A\x1b[3B\x1b[4D\x1b[5C");
    }

    #[test]
    fn test_line_start_moves() {
        let mut cursor = Cursor::new(Vec::new());
        cursor.move_up_lines(1).unwrap().move_down_lines(2).unwrap();
        assert_eq!(written(cursor), "\x1b[1F\x1b[2E");
    }

    #[test]
    fn test_zero_is_rejected_without_output() {
        let mut cursor = Cursor::new(Vec::new());
        assert!(matches!(
            cursor.move_up(0),
            Err(CursorError::NotPositive { what: "line count" })
        ));
        assert!(matches!(
            cursor.set_position(1, 0),
            Err(CursorError::NotPositive { what: "column" })
        ));
        assert!(cursor.scroll_down(0).is_err());
        assert!(written(cursor).is_empty());
    }

    #[test]
    fn test_erase_window_homes_cursor() {
        let mut cursor = Cursor::new(Vec::new());
        cursor.erase_window().unwrap();
        assert_eq!(written(cursor), "\x1b[2J\x1b[1;1H");
    }

    #[test]
    fn test_save_restore() {
        let mut cursor = Cursor::new(Vec::new());
        assert!(!cursor.has_saved_position());
        cursor.save_position().unwrap().restore_position().unwrap();
        assert!(cursor.has_saved_position());
        assert_eq!(written(cursor), "\x1b[s\x1b[u");
    }

    #[test]
    fn test_restore_without_save_still_writes() {
        let mut cursor = Cursor::new(Vec::new());
        cursor.restore_position().unwrap();
        assert_eq!(written(cursor), "\x1b[u");
    }

    #[test]
    fn test_visibility_and_scroll() {
        let mut cursor = Cursor::new(Vec::new());
        cursor
            .hide()
            .unwrap()
            .scroll_up(1)
            .unwrap()
            .show()
            .unwrap();
        assert_eq!(written(cursor), "\x1b[?25l\x1b[1T\x1b[?25h");
    }

    #[test]
    fn test_get_ref_sees_written_bytes() {
        let mut cursor = Cursor::new(Vec::new());
        assert!(cursor.get_ref().is_empty());
        cursor.hide().unwrap();
        assert_eq!(cursor.get_ref().as_slice(), b"\x1b[?25l");
    }

    #[test]
    fn test_stdout_starts_without_saved_position() {
        let cursor = Cursor::stdout();
        assert!(!cursor.has_saved_position());
    }

    #[test]
    fn test_set_line_and_column() {
        let mut cursor = Cursor::new(Vec::new());
        cursor.set_line(3).unwrap().set_column(9).unwrap();
        assert_eq!(written(cursor), "\x1b[3d\x1b[9G");
    }
}
