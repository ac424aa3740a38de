//! Cursor control and terminal geometry.
//!
//! - [`sequences`]: pure builders for cursor, erase, and scroll escape codes
//! - [`Cursor`]: writes those codes to any [`std::io::Write`]
//! - [`TerminalSize`]: width/height queries, backed by `tput` ([`Tput`]) or
//!   the terminal ioctl ([`Ioctl`])
//!
//! ```rust
//! use clistyles_cursor::Cursor;
//!
//! let mut cursor = Cursor::new(Vec::new());
//! cursor.save_position()?.set_position(1, 1)?.erase_line()?.restore_position()?;
//! assert_eq!(cursor.into_inner(), b"\x1b[s\x1b[1;1H\x1b[2K\x1b[1G\x1b[u");
//! # Ok::<(), clistyles_cursor::CursorError>(())
//! ```

mod cursor;
mod error;
pub mod sequences;
mod size;

pub use cursor::Cursor;
pub use error::{CursorError, SizeError};
pub use size::{parse_size_output, Ioctl, TerminalSize, Tput};
