//! Terminal size queries.

use std::process::Command;

use tracing::debug;

use crate::error::SizeError;

/// Reports the terminal's width in columns and height in lines.
pub trait TerminalSize {
    fn width(&self) -> Result<u16, SizeError>;
    fn height(&self) -> Result<u16, SizeError>;
}

/// Queries size by running `tput`.
///
/// Tries the terminfo capability (`cols`, `lines`) first and falls back to
/// the termcap name (`co`, `li`) used on BSD systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tput;

impl Tput {
    fn query(&self, capability: &str, bsd_capability: &str) -> Result<u16, SizeError> {
        run_tput(capability).or_else(|err| {
            debug!(error = %err, capability, "tput failed, trying BSD capability");
            run_tput(bsd_capability)
        })
    }
}

impl TerminalSize for Tput {
    fn width(&self) -> Result<u16, SizeError> {
        self.query("cols", "co")
    }

    fn height(&self) -> Result<u16, SizeError> {
        self.query("lines", "li")
    }
}

fn run_tput(capability: &str) -> Result<u16, SizeError> {
    let command = format!("tput {}", capability);
    let output = Command::new("tput")
        .arg(capability)
        .output()
        .map_err(|source| SizeError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(SizeError::Failed {
            command,
            status: output.status.to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let size = parse_size_output(&command, &stdout)?;
    debug!(command = %command, size, "queried terminal size");
    Ok(size)
}

/// Parses the single numeric line a size command prints.
pub fn parse_size_output(command: &str, output: &str) -> Result<u16, SizeError> {
    let line = output.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Err(SizeError::Empty {
            command: command.to_string(),
        });
    }
    line.parse().map_err(|_| SizeError::NotNumeric {
        command: command.to_string(),
        output: line.to_string(),
    })
}

/// Queries size from the terminal attached to stdout, without a subprocess.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ioctl;

impl Ioctl {
    fn size(&self) -> Result<(u16, u16), SizeError> {
        terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), terminal_size::Height(h))| (w, h))
            .ok_or(SizeError::Unavailable)
    }
}

impl TerminalSize for Ioctl {
    fn width(&self) -> Result<u16, SizeError> {
        self.size().map(|(w, _)| w)
    }

    fn height(&self) -> Result<u16, SizeError> {
        self.size().map(|(_, h)| h)
    }
}
